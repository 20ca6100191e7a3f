#![deny(unsafe_code)]

use crate::error::{Result, TableError};

/// An in-memory table: one header row plus data rows in arrival order.
///
/// All cells are strings; no per-column typing is applied beyond what CSV
/// parsing implies. The table is owned exclusively by the caller once a load
/// returns it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in source order.
    pub fn column_names(&self) -> &[String] {
        &self.headers
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn extend_rows(&mut self, rows: impl IntoIterator<Item = Vec<String>>) {
        self.rows.extend(rows);
    }

    /// A copy of the first `n` rows, for previews.
    #[must_use]
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Project the table onto `columns`, in the requested order.
    ///
    /// Fails closed on a column name the table does not have, so a typo in a
    /// selection surfaces instead of silently narrowing the output.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<Table> {
        let mut indices = Vec::with_capacity(columns.len());
        for column in columns {
            let name = column.as_ref();
            let index = self
                .headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TableError::UnknownColumn {
                    name: name.to_string(),
                })?;
            indices.push(index);
        }
        let headers = indices.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Ok(Table { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        table.push_row(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
        table.push_row(vec!["4".to_string(), "5".to_string(), "6".to_string()]);
        table
    }

    #[test]
    fn counts_and_names() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column_names(), ["a", "b", "c"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn head_is_bounded() {
        let table = sample();
        assert_eq!(table.head(1).rows, vec![vec!["1", "2", "3"]]);
        assert_eq!(table.head(10).row_count(), 2);
    }

    #[test]
    fn select_honors_requested_order() {
        let table = sample();
        let projected = table.select(&["c", "a"]).expect("select");
        assert_eq!(projected.headers, vec!["c", "a"]);
        assert_eq!(projected.rows[0], vec!["3", "1"]);
        assert_eq!(projected.rows[1], vec!["6", "4"]);
    }

    #[test]
    fn select_unknown_column_fails_closed() {
        let table = sample();
        let err = table.select(&["a", "nope"]).unwrap_err();
        assert!(matches!(err, TableError::UnknownColumn { ref name } if name == "nope"));
        assert_eq!(err.to_string(), "unknown column: nope");
    }
}
