/// A table as read from an external source: named string columns in
/// arbitrary order, before any schema is recognized. The normalizer is the
/// only consumer; once a normalized table exists the raw table is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column with exactly this name.
    pub fn find_exact(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of the first column whose name matches case-insensitively.
    pub fn find_ci(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Index of the first column whose lowercased name contains any of the
    /// given needles (needles must be lowercase).
    pub fn find_containing_ci(&self, needles: &[&str]) -> Option<usize> {
        self.columns.iter().position(|c| {
            let lower = c.to_ascii_lowercase();
            needles.iter().any(|n| lower.contains(n))
        })
    }

    /// Cell value at (row, col). Rows shorter than the header (flexible CSV)
    /// read as the empty string.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}
