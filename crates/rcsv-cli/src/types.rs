use std::path::PathBuf;

use rcsv_ingest::LoadReport;
use rcsv_model::Table;

/// Result of one `fetch` invocation, handed to the summary renderer.
pub struct FetchOutcome {
    /// The loaded table, narrowed to the selected columns when `--columns`
    /// was given.
    pub table: Table,
    /// Shape report for the load (counts refer to the full source table).
    pub report: LoadReport,
    /// Path the cleaned CSV was written to, if requested.
    pub written: Option<PathBuf>,
}
