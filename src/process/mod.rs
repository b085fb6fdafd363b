// src/process/mod.rs
pub mod delimiter;
pub mod normalize;
pub mod parse;
pub mod raw_table;
pub mod utils;

use tracing::debug;

use crate::error::AnalysisError;

pub use delimiter::detect_delimiter;
pub use normalize::normalize_text;
pub use parse::parse_table;
pub use raw_table::RawTable;
pub use utils::{clean_str, coerce_number, format_number, is_numeric};

/// Normalize raw input, sniff the delimiter off the header line and parse
/// the whole thing into a `RawTable`.
#[tracing::instrument(level = "debug", skip(raw), fields(bytes = raw.len()))]
pub fn load_table(raw: &str) -> Result<RawTable, AnalysisError> {
    let text = normalize_text(raw);
    let header_line =
        delimiter::first_non_empty_line(text).ok_or_else(AnalysisError::too_few_lines)?;
    let delimiter = detect_delimiter(header_line);
    let table = parse_table(text, delimiter)?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "parsed table"
    );
    Ok(table)
}
