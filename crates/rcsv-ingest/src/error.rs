//! Error types for remote CSV ingestion.

use thiserror::Error;

/// Errors raised while resolving a share link to a direct-download link.
///
/// Resolution fails closed: every malformed input is rejected before any
/// network traffic happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The link has no `/d/` file segment.
    #[error("share link has no '/d/' file segment: {url}")]
    MissingFileSegment { url: String },

    /// The link has no `/view` suffix after the file segment.
    #[error("share link has no '/view' suffix after the file id: {url}")]
    MissingViewSuffix { url: String },

    /// The markers are present but enclose an empty file id.
    #[error("share link has an empty file id: {url}")]
    EmptyFileId { url: String },
}

/// Errors that abort a load.
///
/// Row-level parse failures are never represented here; they are dropped
/// (and counted) by the chunk reader. Everything in this enum is fatal to
/// the call that produced it.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The share link could not be resolved.
    #[error(transparent)]
    Link(#[from] LinkError),

    /// The fetch could not begin or the connection failed.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status.
    #[error("remote returned HTTP {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The header row could not be read or decoded.
    #[error("failed to read the CSV header row: {source}")]
    Header {
        #[source]
        source: csv::Error,
    },

    /// Transport failed mid-stream while reading records.
    #[error("transport failed while reading records: {source}")]
    Read {
        #[source]
        source: csv::Error,
    },

    /// The fetch succeeded but no data row survived parsing.
    #[error("no rows survived parsing from {url}")]
    EmptyTable { url: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, LoadError>;
