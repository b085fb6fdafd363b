use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTable {
    /// Column names from the header line, trimmed, in file order.
    /// Duplicates are kept here; lookups resolve to the last column with the name.
    pub headers: Vec<String>,
    /// Each data row, padded or truncated to exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
    /// Field separator the header line was split on.
    pub delimiter: char,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of `header`, using the last occurrence so later columns
    /// overwrite earlier ones with the same name.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == header)
    }

    /// Distinct header names in first-seen order.
    pub fn unique_headers(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.headers.len());
        for h in &self.headers {
            if !out.contains(&h.as_str()) {
                out.push(h);
            }
        }
        out
    }

    /// Every cell of `header` top to bottom; empty when the header is unknown.
    pub fn column<'a>(&'a self, header: &str) -> impl Iterator<Item = &'a str> + 'a {
        let idx = self.column_index(header);
        self.rows
            .iter()
            .filter_map(move |row| idx.and_then(|i| row.get(i)).map(String::as_str))
    }
}
