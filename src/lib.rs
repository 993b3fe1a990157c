//
//  bit
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # bit
//!
//! A small command-line helper for Bitbucket Cloud that works from inside a
//! git working tree.
//!
//! ## Overview
//!
//! `bit` looks at the remotes of the current working tree to find the
//! Bitbucket repository it belongs to, then either opens the repository page
//! in a browser or lists the repository's open pull requests.
//!
//! ```text
//! $ bit pr list
//!      #12  Fix login redirect
//!     #103  Bump dependencies
//!
//! $ bit browse --url
//! https://bitbucket.org/myworkspace/my-repo
//! ```
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: HTTP client for the Bitbucket Cloud API
//! - [`auth`]: Credentials and the credential file
//! - [`config`]: Runtime settings and file helpers
//! - [`context`]: Git remote listing and repository resolution
//! - [`output`]: Output formatting
//! - [`interactive`]: Terminal prompts
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bit_cli::context::{work_tree, GitRemoteLister, RepositoryResolver};
//!
//! let resolver = RepositoryResolver::default();
//! let ctx = resolver
//!     .resolve_path(&GitRemoteLister, &work_tree()?)?
//!     .expect("not a Bitbucket repository");
//! println!("Current repo: {}", ctx.full_name());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Command-line interface definitions.
///
/// `bit pr list` and `bit browse`, defined with the clap derive API.
pub mod cli;

/// API client for Bitbucket Cloud.
///
/// Handles authentication, request building, JSON decoding and errors.
pub mod api;

/// Credentials and their storage.
///
/// The username and app password live in `~/.config/bit`, readable by the
/// owner only, and are asked for interactively the first time.
pub mod auth;

/// Runtime settings.
///
/// Base URLs, preferred remote names and the credential path, with
/// environment overrides.
pub mod config;

/// Git repository context detection.
///
/// Lists the remotes of a working tree and works out which Bitbucket
/// repository they point at.
pub mod context;

/// Output formatting for pull requests and errors.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the repository context struct.
pub use context::RepoContext;

/// Application name constant.
///
/// The name of the CLI binary, used in the User-Agent and the credential
/// file name.
pub const APP_NAME: &str = "bit";

/// Application version constant, taken from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use bit_cli::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// The command failed; the reason was printed to stderr as `error: ...`.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments; the usage message was printed to stderr.
    pub const USAGE: i32 = 2;
}
