use log::error;
use serde::de::DeserializeOwned;

use super::error::{Result, TranscriptionError};

/// Read the whole response and decode it into `T`.
///
/// Any 2xx status is parsed as JSON. Every other status becomes
/// [`TranscriptionError::Api`] carrying the body exactly as received.
pub(crate) fn decode_response<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        error!("API error response ({}): {}", status, body);
        return Err(TranscriptionError::Api { status, body });
    }

    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to parse response: {}", e);
        TranscriptionError::Decode(e)
    })
}
