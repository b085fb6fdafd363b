use serde::{Deserialize, Serialize};

use super::aggregate::ChartPoint;
use super::benchmark::Benchmark;
use super::rank::TopCategory;
use crate::process::format_number;

/// The one value handed to the presentation layer. Built once per run and
/// never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub row_count: usize,
    pub column_count: usize,
    pub delimiter: char,
    pub metric_column: String,
    pub dimension_column: String,
    /// Every positive group, largest first.
    pub chart_data: Vec<ChartPoint>,
    pub total_metric: f64,
    /// First `top_n` ranks of `chart_data`.
    pub top_categories: Vec<TopCategory>,
    pub benchmark: Benchmark,
    pub summary: String,
    pub insights: Vec<String>,
    pub trends: Vec<String>,
    pub recommendations: Vec<String>,
}

/// One-sentence prose summary of the leading group.
pub fn summarize(
    row_count: usize,
    column_count: usize,
    metric: &str,
    dimension: &str,
    leader: Option<&TopCategory>,
) -> String {
    match leader {
        Some(top) => format!(
            "From {} rows across {} columns, {} = \"{}\" has the highest total {} of {} ({:.1}% of total).",
            format_number(row_count as f64),
            column_count,
            dimension,
            top.category,
            metric,
            format_number(top.value),
            top.share
        ),
        None => format!(
            "Analyzed {} rows across {} columns.",
            format_number(row_count as f64),
            column_count
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_the_leader() {
        let top = TopCategory {
            category: "North".into(),
            value: 397000.0,
            share: 32.434,
            rank: 1,
        };
        assert_eq!(
            summarize(12, 6, "Revenue", "Region", Some(&top)),
            "From 12 rows across 6 columns, Region = \"North\" has the highest total Revenue of 397,000 (32.4% of total)."
        );
        assert_eq!(
            summarize(1500, 2, "x", "y", None),
            "Analyzed 1,500 rows across 2 columns."
        );
    }
}
