//! Cleaned-CSV serialization.
//!
//! Regenerates the in-memory table as comma-separated UTF-8 text with a
//! header row. The buffer is rebuilt on every request; nothing is cached
//! between downloads.

use csv::Writer;
use thiserror::Error;

use rcsv_model::Table;

/// File name offered to the presentation layer for the download.
pub const CLEANED_CSV_FILE_NAME: &str = "cleaned_data.csv";

/// MIME type of the download.
pub const CLEANED_CSV_CONTENT_TYPE: &str = "text/csv";

/// Errors raised while serializing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize table to CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    Flush(String),
}

/// A named byte buffer ready to hand to a download action.
#[derive(Debug, Clone)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Serializes the table as CSV bytes, header row first.
pub fn table_to_csv_bytes(table: &Table) -> Result<Vec<u8>, OutputError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|err| OutputError::Flush(err.to_string()))
}

/// Builds the `cleaned_data.csv` download artifact for a table.
pub fn cleaned_csv_artifact(table: &Table) -> Result<DownloadArtifact, OutputError> {
    Ok(DownloadArtifact {
        file_name: CLEANED_CSV_FILE_NAME.to_string(),
        content_type: CLEANED_CSV_CONTENT_TYPE.to_string(),
        bytes: table_to_csv_bytes(table)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec!["1".to_string(), "2".to_string()]);
        table.push_row(vec!["4".to_string(), "5".to_string()]);
        table
    }

    #[test]
    fn serializes_header_row_first() {
        let bytes = table_to_csv_bytes(&sample()).expect("serialize");
        assert_eq!(String::from_utf8(bytes).unwrap(), "a,b\n1,2\n4,5\n");
    }

    #[test]
    fn quotes_cells_containing_separators() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec!["x,y".to_string(), "2".to_string()]);
        let bytes = table_to_csv_bytes(&table).expect("serialize");
        assert_eq!(String::from_utf8(bytes).unwrap(), "a,b\n\"x,y\",2\n");
    }

    #[test]
    fn artifact_carries_fixed_name_and_type() {
        let artifact = cleaned_csv_artifact(&sample()).expect("artifact");
        assert_eq!(artifact.file_name, "cleaned_data.csv");
        assert_eq!(artifact.content_type, "text/csv");
        assert!(!artifact.bytes.is_empty());
    }
}
