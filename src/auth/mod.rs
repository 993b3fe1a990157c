//
//  bit
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Bitbucket Cloud accepts a username together with an app password over
//! HTTP Basic authentication. This module holds that pair and the store that
//! keeps it on disk between runs.
//!
//! ## Module Structure
//!
//! - [`Credentials`]: Username and app password, applied to API requests
//! - [`store`]: The credential file at `~/.config/bit`
//!
//! ## Example
//!
//! ```rust
//! use bit_cli::auth::Credentials;
//!
//! let credentials = Credentials::new("u", "p");
//! assert_eq!(credentials.authorization_header(), "Basic dTpw");
//! ```

mod store;

pub use store::*;

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// A Bitbucket username and app password.
///
/// The `Debug` output never shows the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Bitbucket username
    pub username: String,
    /// App password issued by Bitbucket
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the value of the `Authorization` header for these credentials.
    ///
    /// The value is `Basic ` followed by the base64 encoding of
    /// `username:password`.
    pub fn authorization_header(&self) -> String {
        basic_auth(&self.username, &self.password)
    }

    /// Adds the `Authorization` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.authorization_header())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Builds an HTTP Basic authorization value.
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
