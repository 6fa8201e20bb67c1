//! Response decoding
//!
//! A straight structural mapping from JSON to the typed tree. Unknown fields
//! are ignored, missing ones become `None`; anything that is not JSON or does
//! not fit the shape is a [`BingError::Decode`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{BingError, BingResult};

const MAX_ERROR_BODY: usize = 200;

/// Decode a success payload into the requested result shape
pub fn decode<R: DeserializeOwned>(body: &[u8]) -> BingResult<R> {
    let parsed = serde_json::from_slice(body)?;
    Ok(parsed)
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Turn a non-success response into [`BingError::Api`]
///
/// Uses the first message of a Bing `ErrorResponse` body when there is one,
/// otherwise the start of the raw body.
pub fn api_error(status: u16, body: &[u8]) -> BingError {
    let detail = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.errors.into_iter().next());

    let message = match detail {
        Some(ErrorDetail {
            code: Some(code),
            message: Some(message),
        }) => format!("{}: {}", code, message),
        Some(ErrorDetail {
            message: Some(message),
            ..
        }) => message,
        _ => {
            let text = String::from_utf8_lossy(body);
            text.chars().take(MAX_ERROR_BODY).collect()
        }
    };

    BingError::Api { status, message }
}
