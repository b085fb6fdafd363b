// src/config.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};

/// Knobs for one analysis run. Every key is optional in YAML; missing keys
/// fall back to the `Full` profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fraction of sampled cells that must coerce to a number for a column to count as numeric.
    pub numeric_threshold: f64,
    /// Rows sampled per column during classification.
    pub sample_rows: usize,
    /// Length of the ranked `topCategories` list.
    pub top_n: usize,
    /// Generate insights, trends and recommendations.
    pub narrate: bool,
    pub metric_keywords: Vec<String>,
    pub dimension_keywords: Vec<String>,
    /// Dimension key used for rows with an empty dimension cell.
    pub unknown_label: String,
}

/// The two shipped configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Multi-metric analysis with the narrator.
    #[default]
    Full,
    /// Single-metric summary: looser threshold, shorter top list, no narrative.
    Simple,
}

impl FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Profile::Full),
            "simple" => Ok(Profile::Simple),
            other => bail!("unknown profile `{}` (expected `full` or `simple`)", other),
        }
    }
}

const METRIC_KEYWORDS: &[&str] = &[
    "revenue", "sales", "profit", "amount", "income", "total", "value", "price", "cost",
    "spend", "orders", "quantity", "qty", "units",
];

const DIMENSION_KEYWORDS: &[&str] = &[
    "region", "category", "product", "month", "country", "city", "state", "segment",
    "channel", "department", "team", "type", "year", "quarter", "store",
];

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::for_profile(Profile::Full)
    }
}

impl AnalysisConfig {
    pub fn for_profile(profile: Profile) -> Self {
        let (numeric_threshold, sample_rows, top_n, narrate) = match profile {
            Profile::Full => (0.7, 100, 8, true),
            Profile::Simple => (0.6, 50, 5, false),
        };
        Self {
            numeric_threshold,
            sample_rows,
            top_n,
            narrate,
            metric_keywords: words(METRIC_KEYWORDS),
            dimension_keywords: words(DIMENSION_KEYWORDS),
            unknown_label: "Unknown".into(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: AnalysisConfig =
            serde_yaml::from_str(yaml).context("parsing analysis config YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.numeric_threshold > 0.0 && self.numeric_threshold <= 1.0) {
            bail!(
                "numeric_threshold must be in (0, 1], got {}",
                self.numeric_threshold
            );
        }
        if self.sample_rows == 0 {
            bail!("sample_rows must be at least 1");
        }
        if self.top_n == 0 {
            bail!("top_n must be at least 1");
        }
        Ok(())
    }
}
