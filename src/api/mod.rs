//
//  bit
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! A minimal client for the Bitbucket Cloud REST API v2.0.
//!
//! ## Architecture
//!
//! - [`client`]: HTTP client with authentication and JSON decoding
//! - [`pullrequests`]: The pull request listing endpoint
//! - [`error`]: [`HttpError`], the one error every request can fail with
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bit_cli::api::BitbucketClient;
//! use bit_cli::auth::Credentials;
//!
//! let client = BitbucketClient::cloud()
//!     .expect("Failed to create client")
//!     .with_auth(Credentials::new("myusername", "app-password"));
//! ```

pub mod client;
pub mod error;
pub mod pullrequests;

pub use client::BitbucketClient;
pub use error::{api_error_message, HttpError};
pub use pullrequests::PullRequest;
