//
//  bit
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error type for Bitbucket API requests.
//!
//! Every way a request can fail (the connection, the HTTP status, or the body)
//! surfaces as one [`HttpError`], so callers only have a single kind to
//! report.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed request to the Bitbucket API.
///
/// # Example
///
/// ```rust
/// use bit_cli::api::HttpError;
///
/// fn report(err: &HttpError) -> String {
///     match err {
///         HttpError::Status { status, .. } if status.as_u16() == 401 => {
///             "check your app password".to_string()
///         }
///         other => other.to_string(),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside 2xx.
    #[error("HTTP {status}: {message}")]
    Status {
        /// Response status
        status: StatusCode,
        /// Message extracted from the error body
        message: String,
    },

    /// The body was not the JSON document that was expected.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Extracts a readable message from a Bitbucket error body.
///
/// Bitbucket Cloud returns errors in the format:
/// ```json
/// {"type": "error", "error": {"message": "Human readable message"}}
/// ```
///
/// Falls back to `error.detail`, then a top-level `message`, then the raw
/// body.
pub fn api_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let error = json.get("error");

        if let Some(message) = error
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(detail) = error
            .and_then(|e| e.get("detail"))
            .and_then(|d| d.as_str())
        {
            return detail.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        "empty response body".to_string()
    } else {
        body.to_string()
    }
}
