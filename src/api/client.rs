//
//  bit
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for Bitbucket API
//!
//! This module provides the HTTP client used to talk to the Bitbucket Cloud
//! REST API. It adds authentication and a User-Agent to every request and
//! turns responses into typed values.
//!
//! ## Features
//!
//! - Configurable base URL (for tests and proxies)
//! - Basic authentication with an app password
//! - JSON deserialization with a single error type, [`HttpError`]
//!
//! ## Notes
//!
//! - No retries and no timeout beyond the `reqwest` defaults
//! - The body is read in full before decoding so that decode failures carry
//!   the JSON error rather than a transport error

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{api_error_message, HttpError};
use crate::auth::Credentials;
use crate::config::DEFAULT_API_URL;

/// The HTTP client for the Bitbucket Cloud API.
///
/// # Example
///
/// ```rust,no_run
/// use bit_cli::api::BitbucketClient;
/// use bit_cli::auth::Credentials;
///
/// # async fn example() -> Result<(), bit_cli::api::HttpError> {
/// let client = BitbucketClient::cloud()?
///     .with_auth(Credentials::new("myusername", "app-password"));
///
/// for pr in client.get_pull_requests("myworkspace/my-repo").await? {
///     println!("#{} {}", pr.id, pr.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BitbucketClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL every request path is appended to
    base_url: String,
    /// Optional authentication credentials
    auth: Option<Credentials>,
}

impl BitbucketClient {
    /// Creates a client for Bitbucket Cloud at `https://api.bitbucket.org/2.0`.
    pub fn cloud() -> Result<Self, HttpError> {
        Self::new(DEFAULT_API_URL)
    }

    /// Creates a client that sends requests to `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client (TLS backend) could
    /// not be initialised.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: None,
        })
    }

    /// Sets the credentials sent with every request.
    pub fn with_auth(mut self, auth: Credentials) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an HTTP GET request to the specified path.
    ///
    /// The path, including any query string, is appended to the base URL.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`] if the request fails or the body cannot be read
    /// - [`HttpError::Status`] if the response status is not 2xx
    /// - [`HttpError::Decode`] if the body cannot be deserialized to `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, bytes = text.len(), "response");

        if !status.is_success() {
            return Err(HttpError::Status {
                status,
                message: api_error_message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
