//! Display-side state kept out of the engine. A view is passed by value and
//! projects an `AnalysisResult` into what a chart or table shows; the result
//! itself is never touched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::analysis::{AnalysisResult, ChartPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    pub chart_type: ChartType,
    pub top_n: usize,
    /// Case-insensitive substring; blank keeps everything.
    pub category_filter: String,
    pub sort: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            top_n: 8,
            category_filter: String::new(),
            sort: SortDirection::Desc,
        }
    }
}

/// Chart data for `view`: positive points → category filter → value sort →
/// first `top_n`.
pub fn project(result: &AnalysisResult, view: ViewState) -> Vec<ChartPoint> {
    let needle = view.category_filter.trim().to_lowercase();
    let mut points: Vec<ChartPoint> = result
        .chart_data
        .iter()
        .filter(|p| p.value > 0.0)
        .filter(|p| needle.is_empty() || p.category.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    points.sort_by(|a, b| view.sort.apply(a.value.total_cmp(&b.value)));
    points.truncate(view.top_n);
    points
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableColumn {
    Category,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSort {
    pub by: TableColumn,
    pub direction: SortDirection,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            by: TableColumn::Value,
            direction: SortDirection::Desc,
        }
    }
}

impl TableSort {
    /// Clicking a column header: the same column flips asc → desc, anything
    /// else starts ascending.
    pub fn toggle(self, column: TableColumn) -> Self {
        let direction = if self.by == column && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self {
            by: column,
            direction,
        }
    }
}

/// Rows for the aggregated table. Categories compare case-insensitively,
/// then by raw text.
pub fn sort_table(points: &[ChartPoint], sort: TableSort) -> Vec<ChartPoint> {
    let mut rows = points.to_vec();
    rows.sort_by(|a, b| {
        let ord = match sort.by {
            TableColumn::Category => a
                .category
                .to_lowercase()
                .cmp(&b.category.to_lowercase())
                .then_with(|| a.category.cmp(&b.category)),
            TableColumn::Value => a.value.total_cmp(&b.value),
        };
        sort.direction.apply(ord)
    });
    rows
}
