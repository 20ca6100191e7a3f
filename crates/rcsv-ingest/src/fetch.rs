//! Blocking HTTP fetch of the resolved direct link.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::error::LoadError;

/// Default timeout covering the request and the full body read.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Opens the byte stream behind a direct-download link.
///
/// One network fetch, no writes. The returned response implements
/// [`std::io::Read`] and is consumed serially on the calling thread.
pub fn open_stream(direct_url: &str, timeout: Duration) -> Result<Response, LoadError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| LoadError::Fetch {
            url: direct_url.to_string(),
            source,
        })?;
    let response = client
        .get(direct_url)
        .send()
        .map_err(|source| LoadError::Fetch {
            url: direct_url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: direct_url.to_string(),
            status,
        });
    }
    tracing::debug!(url = %direct_url, %status, "opened remote stream");
    Ok(response)
}
