use serde::{Deserialize, Serialize};

/// Ordered rows of raw cell strings under a named header.
///
/// An empty string is the only representation of "no value". Row order
/// determines the reported line numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// Build a record set, padding or truncating each row to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Build a record set from named columns of equal length.
    pub fn from_columns(columns: &[(&str, &[&str])]) -> Self {
        let headers = columns.iter().map(|(name, _)| (*name).to_string()).collect();
        let height = columns
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0);
        let rows = (0..height)
            .map(|idx| {
                columns
                    .iter()
                    .map(|(_, values)| values.get(idx).copied().unwrap_or("").to_string())
                    .collect()
            })
            .collect();
        Self::new(headers, rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Borrow a column by exact header name.
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        let index = self.column_index(name)?;
        Some(Column {
            records: self,
            index,
        })
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// A borrowed view of one column of a [`RecordSet`].
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    records: &'a RecordSet,
    index: usize,
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        &self.records.headers[self.index]
    }

    pub fn len(&self) -> usize {
        self.records.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.rows.is_empty()
    }

    /// Cells in row order.
    pub fn cells(&self) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.index;
        self.records
            .rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_rows() {
        let records = RecordSet::new(
            vec!["Title".to_string(), "License".to_string()],
            vec![vec!["Intro".to_string()]],
        );
        let license = records.column("License").expect("license column");
        assert_eq!(license.cells().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        let records = RecordSet::from_columns(&[("Title", &["A"])]);
        assert!(records.column("Title").is_some());
        assert!(records.column("title").is_none());
    }
}
