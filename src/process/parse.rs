use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use crate::error::AnalysisError;
use crate::process::raw_table::RawTable;
use crate::process::utils::clean_str;

/// A physical line with anything besides whitespace on it. A line of bare
/// delimiters counts; its cells are still blank.
fn has_content(rec: &StringRecord) -> bool {
    rec.len() > 1 || rec.iter().any(|f| !f.trim().is_empty())
}

/// Split normalized text into a header row and data rows.
///
/// - Accepts `\n` and `\r\n` endings; blank lines are skipped.
/// - Needs a header plus at least one data line, otherwise `AnalysisError::Format`.
/// - Each cell, header cells included, is trimmed and loses one layer of
///   matching quotes. Quotes never protect a delimiter.
/// - Short rows are padded with empty cells, extra cells are ignored.
/// - Rows made only of blank cells are dropped.
pub fn parse_table(text: &str, delimiter: char) -> Result<RawTable, AnalysisError> {
    let delim = u8::try_from(delimiter)
        .map_err(|_| AnalysisError::Format(format!("unsupported delimiter {delimiter:?}")))?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| AnalysisError::Format(e.to_string()))?;
        if has_content(&rec) {
            records.push(rec);
        }
    }
    if records.len() < 2 {
        return Err(AnalysisError::too_few_lines());
    }

    let headers: Vec<String> = records[0].iter().map(clean_str).collect();
    let width = headers.len();

    let mut rows = Vec::with_capacity(records.len() - 1);
    let mut ragged = 0usize;
    for (idx, rec) in records[1..].iter().enumerate() {
        if rec.iter().all(|f| f.trim().is_empty()) {
            trace!(record = idx + 2, "dropping blank row");
            continue;
        }
        if rec.len() != width {
            ragged += 1;
        }
        let row: Vec<String> = (0..width)
            .map(|i| rec.get(i).map(clean_str).unwrap_or_default())
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(AnalysisError::no_data_rows());
    }
    if ragged > 0 {
        debug!(ragged, width, "rows with a different field count were padded or truncated");
    }

    Ok(RawTable {
        headers,
        rows,
        delimiter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() -> Result<(), AnalysisError> {
        let t = parse_table("Region, Revenue\r\nNorth, 10\r\n\r\n\"South\",'20'\n", ',')?;
        assert_eq!(t.headers, vec!["Region", "Revenue"]);
        assert_eq!(
            t.rows,
            vec![vec!["North", "10"], vec!["South", "20"]]
        );
        assert_eq!(t.delimiter, ',');
        Ok(())
    }

    #[test]
    fn pads_short_rows_and_ignores_extra_cells() -> Result<(), AnalysisError> {
        let t = parse_table("a;b;c\n1\n1;2;3;4", ';')?;
        assert_eq!(t.rows[0], vec!["1", "", ""]);
        assert_eq!(t.rows[1], vec!["1", "2", "3"]);
        Ok(())
    }

    #[test]
    fn drops_all_blank_rows() -> Result<(), AnalysisError> {
        let t = parse_table("a,b\n , \n1,2\n,,", ',')?;
        assert_eq!(t.row_count(), 1);
        Ok(())
    }

    #[test]
    fn leading_empty_tab_cell_keeps_alignment() -> Result<(), AnalysisError> {
        let t = parse_table("name\tvalue\n\t5", '\t')?;
        assert_eq!(t.rows[0], vec!["", "5"]);
        Ok(())
    }

    #[test]
    fn blank_lines_between_crlf_rows_are_skipped() -> Result<(), AnalysisError> {
        let t = parse_table("city;pop\r\nOslo;7\r\n\r\n   \r\nBergen;3\r\n", ';')?;
        assert_eq!(t.rows, vec![vec!["Oslo", "7"], vec!["Bergen", "3"]]);
        Ok(())
    }

    #[test]
    fn quotes_are_stripped_from_headers_but_never_group_fields() -> Result<(), AnalysisError> {
        let t = parse_table(" \"City\" ,'Score'\n\"Paris, FR\",1.5", ',')?;
        assert_eq!(t.headers, vec!["City", "Score"]);
        assert_eq!(t.rows[0], vec!["\"Paris", "FR\""]);
        Ok(())
    }

    #[test]
    fn header_only_or_empty_is_a_format_error() {
        assert!(matches!(parse_table("", ','), Err(AnalysisError::Format(_))));
        assert!(matches!(parse_table("a,b", ','), Err(AnalysisError::Format(_))));
        assert!(matches!(parse_table("a,b\n\n  \n", ','), Err(AnalysisError::Format(_))));
    }

    #[test]
    fn only_blank_data_rows_is_a_format_error() {
        assert_eq!(
            parse_table("a,b\n,\n ,  ", ','),
            Err(AnalysisError::no_data_rows())
        );
    }
}
