//! Load pipeline: resolve the link, stream chunks, assemble the table.

use std::io::Read;
use std::time::Duration;

use rcsv_model::Table;
use reqwest::blocking::Response;

use crate::chunk::ChunkReader;
use crate::error::{LoadError, Result};
use crate::fetch::{DEFAULT_FETCH_TIMEOUT, open_stream};
use crate::link::resolve_direct_link;

/// Default maximum number of rows per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Options for a single load operation.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Maximum rows per chunk.
    pub chunk_size: usize,
    /// Timeout for the fetch, covering the full body read.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl LoadOptions {
    /// Set the maximum rows per chunk.
    #[must_use]
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the fetch timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shape summary of one completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadReport {
    /// Rows that survived parsing.
    pub rows: usize,
    /// Columns implied by the source header row.
    pub columns: usize,
    /// Chunks the stream produced.
    pub chunks: usize,
    /// Rows the parser dropped.
    pub dropped_rows: usize,
}

/// Opens the remote stream and returns the lazy chunk sequence.
///
/// A fresh call re-fetches from the start; the stream itself is not
/// restartable.
pub fn stream_chunks(direct_url: &str, options: &LoadOptions) -> Result<ChunkReader<Response>> {
    let response = open_stream(direct_url, options.timeout)?;
    ChunkReader::new(response, options.chunk_size)
}

/// Drains a chunk sequence into a table, concatenating in arrival order.
pub fn drain_chunks<R: Read>(chunks: ChunkReader<R>) -> Result<(Table, LoadReport)> {
    let mut table = Table::new(chunks.headers().to_vec());
    let mut chunk_count = 0usize;
    let mut dropped_rows = 0usize;
    for chunk in chunks {
        let chunk = chunk?;
        chunk_count += 1;
        dropped_rows += chunk.dropped;
        tracing::debug!(rows = chunk.len(), dropped = chunk.dropped, "ingested chunk");
        table.extend_rows(chunk.rows);
    }
    if dropped_rows > 0 {
        tracing::warn!(dropped_rows, "skipped rows that failed structural parsing");
    }
    let report = LoadReport {
        rows: table.row_count(),
        columns: table.column_count(),
        chunks: chunk_count,
        dropped_rows,
    };
    Ok((table, report))
}

/// Loads a table from an already-resolved direct link.
pub fn load_direct(direct_url: &str, options: &LoadOptions) -> Result<(Table, LoadReport)> {
    let chunks = stream_chunks(direct_url, options)?;
    let (table, report) = drain_chunks(chunks)?;
    if table.is_empty() {
        return Err(LoadError::EmptyTable {
            url: direct_url.to_string(),
        });
    }
    tracing::info!(
        rows = report.rows,
        columns = report.columns,
        chunks = report.chunks,
        dropped_rows = report.dropped_rows,
        "loaded table"
    );
    Ok((table, report))
}

/// Loads a table from a share link.
///
/// Resolves the link, drains the chunk stream fully into memory, and returns
/// the concatenated table. Fatal failures (link, connection, HTTP status,
/// mid-stream transport, zero surviving rows) surface with the cause
/// attached; row-level failures are dropped and counted.
pub fn load_table(share_url: &str, options: &LoadOptions) -> Result<Table> {
    load_table_with_report(share_url, options).map(|(table, _)| table)
}

/// [`load_table`], additionally returning the shape report.
pub fn load_table_with_report(share_url: &str, options: &LoadOptions) -> Result<(Table, LoadReport)> {
    let direct_url = resolve_direct_link(share_url)?;
    tracing::debug!(url = %direct_url, "resolved share link");
    load_direct(&direct_url, options)
}
