use tracing::debug;

/// Candidate separators in tie-break priority order.
pub const CANDIDATES: [char; 3] = [',', ';', '\t'];

/// Pick the candidate that splits the header line into the most fields.
/// Ties keep the earlier candidate, so a single-column header falls back to comma.
pub fn detect_delimiter(header_line: &str) -> char {
    let mut best = CANDIDATES[0];
    let mut best_fields = 0;
    for delim in CANDIDATES {
        let fields = header_line.split(delim).count();
        if fields > best_fields {
            best_fields = fields;
            best = delim;
        }
    }
    debug!(delimiter = ?best, fields = best_fields, "detected delimiter");
    best
}

/// First line with any non-whitespace content.
pub fn first_non_empty_line(text: &str) -> Option<&str> {
    text.lines().find(|l| !l.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_beats_semicolon_on_field_count() {
        assert_eq!(detect_delimiter("a,b;c,d,e"), ',');
    }

    #[test]
    fn picks_densest_candidate() {
        assert_eq!(detect_delimiter("a;b;c"), ';');
        assert_eq!(detect_delimiter("a\tb\tc;d"), '\t');
    }

    #[test]
    fn ties_and_single_column_fall_back_to_comma() {
        assert_eq!(detect_delimiter("Revenue"), ',');
        assert_eq!(detect_delimiter("a,b;c"), ',');
        assert_eq!(detect_delimiter("a;b\tc"), ';');
    }

    #[test]
    fn skips_blank_leading_lines() {
        assert_eq!(first_non_empty_line("\n  \nx;y\nz"), Some("x;y"));
        assert_eq!(first_non_empty_line(" \n "), None);
    }
}
