use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::error::AnalysisError;
use crate::process::{coerce_number, RawTable};

/// One aggregated group: the metric summed over every row sharing `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Strictly positive groups, largest first; ties keep first-seen order.
    pub points: Vec<ChartPoint>,
    /// Sum of `points[..].value`.
    pub total: f64,
}

/// Group rows by `dimension` and sum `metric`.
///
/// - empty dimension cells group under `unknown_label`
/// - metric cells that don't coerce contribute 0
/// - groups summing to zero or less are dropped
///
/// Errors with `AnalysisError::EmptyAggregate` when the grand total is zero
/// or not finite.
pub fn aggregate(
    table: &RawTable,
    metric: &str,
    dimension: &str,
    unknown_label: &str,
) -> Result<Aggregate, AnalysisError> {
    let metric_idx = table.column_index(metric);
    let dim_idx = table.column_index(dimension);

    // insertion-ordered sums
    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for row in &table.rows {
        let key = dim_idx
            .and_then(|i| row.get(i))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(unknown_label);
        let value = metric_idx
            .and_then(|i| row.get(i))
            .and_then(|s| coerce_number(s))
            .unwrap_or(0.0);

        match slots.get(key) {
            Some(&slot) => groups[slot].1 += value,
            None => {
                slots.insert(key.to_string(), groups.len());
                groups.push((key.to_string(), value));
            }
        }
    }

    let group_count = groups.len();
    let mut points: Vec<ChartPoint> = groups
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(category, value)| ChartPoint { category, value })
        .collect();
    if points.len() < group_count {
        debug!(
            suppressed = group_count - points.len(),
            "dropped groups with a non-positive total"
        );
    }

    // stable: equal values keep first-seen order
    points.sort_by(|a, b| b.value.total_cmp(&a.value));

    let total: f64 = points.iter().map(|p| p.value).sum();
    if !total.is_finite() || total == 0.0 {
        return Err(AnalysisError::EmptyAggregate {
            metric: metric.to_string(),
        });
    }

    Ok(Aggregate { points, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::load_table;
    use anyhow::Result;

    #[test]
    fn sums_per_group_and_sorts_descending() -> Result<()> {
        let t = load_table("Shop,Sales\nA,10\nB,30\nA,25\nC,5\nB,1")?;
        let agg = aggregate(&t, "Sales", "Shop", "Unknown")?;
        let cats: Vec<_> = agg.points.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(cats, vec!["A", "B", "C"]);
        assert_eq!(agg.points[0].value, 35.0);
        assert_eq!(agg.total, 71.0);
        assert_eq!(agg.total, agg.points.iter().map(|p| p.value).sum::<f64>());
        Ok(())
    }

    #[test]
    fn blank_keys_and_bad_metrics_degrade_quietly() -> Result<()> {
        let t = load_table("Shop;Sales\n;4\nA;n/a\nA;\"$1,000\"\n  ;6")?;
        let agg = aggregate(&t, "Sales", "Shop", "Unknown")?;
        assert_eq!(
            agg.points,
            vec![
                ChartPoint {
                    category: "A".into(),
                    value: 1000.0
                },
                ChartPoint {
                    category: "Unknown".into(),
                    value: 10.0
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn non_positive_groups_are_dropped() -> Result<()> {
        let t = load_table("k,v\na,5\nb,-3\nc,0\nd,2\nd,-2")?;
        let agg = aggregate(&t, "v", "k", "Unknown")?;
        assert_eq!(agg.points.len(), 1);
        assert_eq!(agg.points[0].category, "a");
        assert_eq!(agg.total, 5.0);
        Ok(())
    }

    #[test]
    fn ties_keep_first_seen_order() -> Result<()> {
        let t = load_table("k,v\nz,3\ny,3\nx,3")?;
        let agg = aggregate(&t, "v", "k", "Unknown")?;
        let cats: Vec<_> = agg.points.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(cats, vec!["z", "y", "x"]);
        Ok(())
    }

    #[test]
    fn all_zero_metric_is_an_empty_aggregate() -> Result<()> {
        let t = load_table("k,v\na,0\nb,0.0\nc,-1")?;
        assert_eq!(
            aggregate(&t, "v", "k", "Unknown"),
            Err(AnalysisError::EmptyAggregate { metric: "v".into() })
        );
        Ok(())
    }

    #[test]
    fn overflowing_total_is_an_empty_aggregate() -> Result<()> {
        let t = load_table("k,v\na,1e308\nb,1e308")?;
        assert!(matches!(
            aggregate(&t, "v", "k", "Unknown"),
            Err(AnalysisError::EmptyAggregate { .. })
        ));
        Ok(())
    }
}
