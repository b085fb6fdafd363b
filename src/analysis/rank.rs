use serde::{Deserialize, Serialize};

use super::aggregate::ChartPoint;

/// A `ChartPoint` with its position and percentage of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: String,
    pub value: f64,
    /// 0..=100
    pub share: f64,
    /// 1-based, following the (already descending) point order.
    pub rank: usize,
}

/// Attach rank and share to every point. `points` must already be sorted
/// descending, which `aggregate` guarantees.
pub fn rank_categories(points: &[ChartPoint], total: f64) -> Vec<TopCategory> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| TopCategory {
            category: p.category.clone(),
            value: p.value,
            share: if total > 0.0 {
                p.value * 100.0 / total
            } else {
                0.0
            },
            rank: i + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(category: &str, value: f64) -> ChartPoint {
        ChartPoint {
            category: category.into(),
            value,
        }
    }

    #[test]
    fn ranks_follow_descending_values_and_shares_sum_to_100() {
        let points = vec![point("a", 6.0), point("b", 3.0), point("c", 1.0), point("d", 1.0)];
        let ranked = rank_categories(&points, 11.0);

        let ranks: Vec<_> = ranked.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(ranked.windows(2).all(|w| w[0].value >= w[1].value));

        let share_sum: f64 = ranked.iter().map(|t| t.share).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
        assert_eq!(ranked[2].category, "c");
    }
}
