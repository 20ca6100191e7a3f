pub mod csv_export;

pub use csv_export::{
    CLEANED_CSV_CONTENT_TYPE, CLEANED_CSV_FILE_NAME, DownloadArtifact, OutputError,
    cleaned_csv_artifact, table_to_csv_bytes,
};
