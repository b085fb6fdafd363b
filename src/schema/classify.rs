use tracing::debug;

use super::types::{ColumnClassification, ColumnKind, ColumnProfile};
use crate::error::AnalysisError;
use crate::process::{coerce_number, RawTable};

/// For each distinct header, look at up to `sample_rows` rows:
///  - count the cells that coerce to a finite number (empty cells count against)
///  - numeric when numeric/sampled >= `threshold`
///  - rank numeric columns by the sum over *all* rows, largest first
///
/// Errors with `AnalysisError::Schema` when nothing is numeric.
pub fn classify_columns(
    table: &RawTable,
    threshold: f64,
    sample_rows: usize,
) -> Result<ColumnClassification, AnalysisError> {
    let mut profiles = Vec::with_capacity(table.column_count());

    for name in table.unique_headers() {
        let mut sampled = 0usize;
        let mut numeric = 0usize;
        for cell in table.column(name).take(sample_rows) {
            sampled += 1;
            if coerce_number(cell).is_some() {
                numeric += 1;
            }
        }
        let numeric_ratio = numeric as f64 / sampled.max(1) as f64;
        let total: f64 = table.column(name).filter_map(coerce_number).sum();

        let kind = if numeric_ratio >= threshold {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        };
        debug!(column = name, numeric_ratio, total, ?kind, "classified column");

        profiles.push(ColumnProfile {
            name: name.to_string(),
            kind,
            numeric_ratio,
            total,
        });
    }

    let mut ranked: Vec<&ColumnProfile> = profiles
        .iter()
        .filter(|p| p.kind == ColumnKind::Numeric)
        .collect();
    if ranked.is_empty() {
        return Err(AnalysisError::Schema);
    }
    // stable: equal totals keep header order
    ranked.sort_by(|a, b| b.total.total_cmp(&a.total));

    let numeric_headers = ranked.iter().map(|p| p.name.clone()).collect();
    let categorical_headers = profiles
        .iter()
        .filter(|p| p.kind == ColumnKind::Categorical)
        .map(|p| p.name.clone())
        .collect();

    Ok(ColumnClassification {
        numeric_headers,
        categorical_headers,
        profiles,
    })
}
