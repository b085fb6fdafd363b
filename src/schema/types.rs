// src/schema/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// What the classifier saw for a single column.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    /// Numeric cells / sampled cells.
    pub numeric_ratio: f64,
    /// Sum of every coercible cell across all rows.
    pub total: f64,
}

/// Headers split into numeric and categorical.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColumnClassification {
    /// Ranked by descending column total; ties keep header order.
    pub numeric_headers: Vec<String>,
    /// Every other distinct header, in header order.
    pub categorical_headers: Vec<String>,
    /// One entry per distinct header, in header order.
    pub profiles: Vec<ColumnProfile>,
}

/// Which rule picked a column.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum MatchTier {
    /// Whole header name appears in the prompt.
    ExactName,
    /// A token of the header name appears in the prompt.
    PromptToken,
    /// A token of the header name is a known domain keyword.
    Keyword,
    /// Nothing matched; first ranked candidate.
    Fallback,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ColumnChoice {
    pub metric: String,
    pub metric_tier: MatchTier,
    pub dimension: String,
    pub dimension_tier: MatchTier,
}
