const BOM: char = '\u{feff}';

/// Drop a single leading byte-order mark and surrounding whitespace.
pub fn normalize_text(raw: &str) -> &str {
    raw.strip_prefix(BOM).unwrap_or(raw).trim()
}
