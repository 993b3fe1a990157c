//
//  bit
//  context/git.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Git Remote Listing
//!
//! This module reads the remotes configured for a working tree using the
//! `git2` library. It is the only place that touches the repository on disk.
//!
//! ## Overview
//!
//! - [`RemoteLister`]: The seam the resolver lists remotes through
//! - [`GitRemoteLister`]: The libgit2 implementation
//! - [`work_tree`]: The working tree path to resolve from
//!
//! ## Notes
//!
//! - Discovery walks up from the given path, so subdirectories work
//! - Every remote yields a fetch entry and a push entry, like `git remote -v`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::Repository;
use tracing::debug;

use super::{Remote, RemoteDirection};

/// Environment variable that overrides the working tree path.
pub const WORK_TREE_ENV: &str = "GIT_WORK_TREE";

/// Lists the remotes configured for a working tree.
///
/// The resolver only depends on this trait, so tests can feed it a fixed
/// list of remotes without a repository on disk.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use bit_cli::context::{Remote, RemoteDirection, RemoteLister};
///
/// struct Fixed(Vec<Remote>);
///
/// impl RemoteLister for Fixed {
///     fn remotes(&self, _path: &Path) -> anyhow::Result<Vec<Remote>> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let lister = Fixed(vec![Remote::new(
///     "origin",
///     "git@bitbucket.org:workspace/repo.git",
///     RemoteDirection::Fetch,
/// )]);
/// assert_eq!(lister.remotes(Path::new(".")).unwrap().len(), 1);
/// ```
pub trait RemoteLister {
    /// Returns the remotes of the working tree containing `path`, in the
    /// order they are configured.
    fn remotes(&self, path: &Path) -> Result<Vec<Remote>>;
}

/// Lists remotes through libgit2.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use bit_cli::context::{GitRemoteLister, RemoteLister};
///
/// for remote in GitRemoteLister.remotes(Path::new("."))? {
///     println!("{}\t{} ({:?})", remote.name, remote.url, remote.direction);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Notes
///
/// - Remotes without a URL, or with a URL that is not valid UTF-8, are skipped
/// - When no push URL is configured the fetch URL is reported for both
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRemoteLister;

impl RemoteLister for GitRemoteLister {
    fn remotes(&self, path: &Path) -> Result<Vec<Remote>> {
        let repo = Repository::discover(path)
            .with_context(|| format!("Not a git repository: {}", path.display()))?;

        let names = repo.remotes()?;
        let mut remotes = Vec::new();

        for name in names.iter().flatten() {
            let remote = repo.find_remote(name)?;
            let Some(url) = remote.url() else {
                debug!(remote = name, "skipping remote without a usable URL");
                continue;
            };
            let push_url = remote.pushurl().unwrap_or(url);

            remotes.push(Remote::new(name, url, RemoteDirection::Fetch));
            remotes.push(Remote::new(name, push_url, RemoteDirection::Push));
        }

        debug!(path = %path.display(), count = remotes.len(), "listed git remotes");
        Ok(remotes)
    }
}

/// Returns the working tree to resolve the repository from.
///
/// Uses `GIT_WORK_TREE` when it is set, otherwise the current directory.
pub fn work_tree() -> Result<PathBuf> {
    work_tree_from(std::env::var_os(WORK_TREE_ENV))
}

fn work_tree_from(override_path: Option<OsString>) -> Result<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => std::env::current_dir().context("Could not determine the current directory"),
    }
}
