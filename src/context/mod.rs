//
//  bit
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Repository Context Module
//!
//! This module works out which Bitbucket repository a git working tree belongs
//! to. It reads the configured remotes of the working tree and matches their
//! URLs against the address shapes Bitbucket Cloud hands out.
//!
//! ## Architecture
//!
//! - [`GitRemoteLister`]: Lists the remotes of a working tree via libgit2
//! - [`RepositoryResolver`]: Picks a remote and parses its URL
//! - [`RepoContext`]: The resolved `workspace/repo-slug` pair
//!
//! ## Example
//!
//! ```rust,no_run
//! use bit_cli::context::{GitRemoteLister, RepositoryResolver, work_tree};
//!
//! let resolver = RepositoryResolver::default();
//! let path = work_tree()?;
//!
//! match resolver.resolve_path(&GitRemoteLister, &path)? {
//!     Some(ctx) => println!("Repository: {}", ctx.full_name()),
//!     None => eprintln!("not a Bitbucket repository"),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod git;
mod resolver;

pub use git::*;
pub use resolver::*;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// A Bitbucket repository identified by its workspace and slug.
///
/// The pair renders as the repository identifier `workspace/repo-slug`, which
/// is the form the Bitbucket REST API and web UI use in their paths.
///
/// # Example
///
/// ```rust
/// use bit_cli::context::RepoContext;
///
/// let ctx: RepoContext = "teamsinspace/documentation-tests".parse()?;
///
/// assert_eq!(ctx.workspace, "teamsinspace");
/// assert_eq!(ctx.full_name(), "teamsinspace/documentation-tests");
/// assert_eq!(
///     ctx.web_url("https://bitbucket.org"),
///     "https://bitbucket.org/teamsinspace/documentation-tests"
/// );
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Notes
///
/// - Neither part is ever empty and neither contains a `/`
/// - Values are derived from remotes or the command line, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Workspace that owns the repository
    pub workspace: String,
    /// Repository slug
    pub repo_slug: String,
}

impl RepoContext {
    /// Returns the repository identifier in the format "workspace/repo".
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.workspace, self.repo_slug)
    }

    /// Returns the web page of the repository under `base`.
    ///
    /// A trailing slash on `base` is ignored, so both
    /// `https://bitbucket.org` and `https://bitbucket.org/` give the same URL.
    pub fn web_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.full_name())
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workspace, self.repo_slug)
    }
}

impl FromStr for RepoContext {
    type Err = anyhow::Error;

    /// Parses a repository argument in "workspace/repo" format.
    fn from_str(repo: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = repo.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|part| part.is_empty()) {
            bail!("Invalid repository format. Expected WORKSPACE/REPO");
        }

        Ok(Self {
            workspace: parts[0].to_string(),
            repo_slug: parts[1].to_string(),
        })
    }
}

/// Direction a remote URL is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteDirection {
    /// URL used by `git fetch`
    Fetch,
    /// URL used by `git push`
    Push,
}

/// A named remote configured for a working tree.
///
/// One value is produced per remote and direction, in the same order
/// `git remote --verbose` prints them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name (e.g., "origin", "upstream")
    pub name: String,
    /// Remote URL in any git-supported form
    pub url: String,
    /// Whether this URL is the fetch or the push URL
    pub direction: RemoteDirection,
}

impl Remote {
    /// Creates a remote entry.
    pub fn new(name: impl Into<String>, url: impl Into<String>, direction: RemoteDirection) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            direction,
        }
    }
}
