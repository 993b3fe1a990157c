//
//  bit
//  context/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Repository Resolver
//!
//! This module turns the remotes of a working tree into a Bitbucket
//! repository identifier.
//!
//! ## Supported URL Formats
//!
//! Patterns are tried in this order and the first match wins:
//! - SSH: `git@bitbucket.org:workspace/repo.git`
//! - HTTPS: `https://bitbucket.org/workspace/repo.git`
//! - HTTPS with user: `https://user@bitbucket.org/workspace/repo.git`
//!
//! The repository part stops at the first `.`, so a remote such as
//! `git@bitbucket.org:workspace/repo.name.git` resolves to `workspace/repo`.
//!
//! ## Resolution Priority
//!
//! 1. Preferred remote names, in order (`upstream`, `bitbucket`, `origin`)
//! 2. Any remote, in the order they are listed
//!
//! A preferred remote whose URL does not parse is skipped in favour of the
//! next preferred name before the fallback scan starts.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{Remote, RemoteLister, RepoContext};

/// Remote names checked before any other remote, most preferred first.
pub const PREFERRED_REMOTE_NAMES: [&str; 3] = ["upstream", "bitbucket", "origin"];

/// SSH shorthand: `user@bitbucket.org:workspace/repo.git`
///
/// # Capture Groups
/// 1. Workspace
/// 2. Repository slug, up to the first `.`
static SSH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@bitbucket\.org:([^/.]+)/([^/.]+)[^/]*\.git/?$").unwrap()
});

/// Plain HTTPS: `https://bitbucket.org/workspace/repo.git`
static HTTPS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://bitbucket\.org/([^/.]+)/([^/.]+)[^/]*\.git/?$").unwrap()
});

/// HTTPS with an embedded username: `https://user@bitbucket.org/workspace/repo.git`
///
/// # Notes
/// - The user part may carry a password (`user:secret@`); it is never captured
static HTTPS_USER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://[^@/\s]+@bitbucket\.org/([^/.]+)/([^/.]+)[^/]*\.git/?$").unwrap()
});

/// Remote URL patterns in the order they are tried.
static REMOTE_URL_PATTERNS: Lazy<[&'static Regex; 3]> =
    Lazy::new(|| [&*SSH_PATTERN, &*HTTPS_PATTERN, &*HTTPS_USER_PATTERN]);

/// Resolves the Bitbucket repository of a working tree from its remotes.
///
/// # Example
///
/// ```rust
/// use bit_cli::context::{Remote, RemoteDirection, RepositoryResolver};
///
/// let resolver = RepositoryResolver::default();
/// let remotes = vec![
///     Remote::new("origin", "git@bitbucket.org:me/fork.git", RemoteDirection::Fetch),
///     Remote::new("upstream", "git@bitbucket.org:team/project.git", RemoteDirection::Fetch),
/// ];
///
/// let ctx = resolver.resolve(&remotes).unwrap();
/// assert_eq!(ctx.full_name(), "team/project");
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryResolver {
    /// Remote names tried before the fallback scan, most preferred first
    preferred_remotes: Vec<String>,
}

impl Default for RepositoryResolver {
    fn default() -> Self {
        Self::new(PREFERRED_REMOTE_NAMES.iter().map(|name| name.to_string()).collect())
    }
}

impl RepositoryResolver {
    /// Creates a resolver that prefers the given remote names, in order.
    pub fn new(preferred_remotes: Vec<String>) -> Self {
        Self { preferred_remotes }
    }

    /// Lists the remotes of the working tree at `path` and resolves them.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(RepoContext))` if a remote points at Bitbucket
    /// - `Ok(None)` if none of the remotes match
    /// - `Err` if the remotes could not be listed
    pub fn resolve_path(
        &self,
        lister: &dyn RemoteLister,
        path: &Path,
    ) -> Result<Option<RepoContext>> {
        let remotes = lister.remotes(path)?;
        Ok(self.resolve(&remotes))
    }

    /// Picks a repository from a list of remotes.
    ///
    /// Preferred names are tried first. If none of them yields a repository,
    /// every remote is tried in list order.
    pub fn resolve(&self, remotes: &[Remote]) -> Option<RepoContext> {
        self.preferred_repository(remotes)
            .or_else(|| Self::any_repository(remotes))
    }

    fn preferred_repository(&self, remotes: &[Remote]) -> Option<RepoContext> {
        // Later entries overwrite earlier ones, so the last URL of a name wins.
        let remote_urls: HashMap<&str, &str> = remotes
            .iter()
            .map(|remote| (remote.name.as_str(), remote.url.as_str()))
            .collect();

        self.preferred_remotes.iter().find_map(|name| {
            let url = remote_urls.get(name.as_str())?;
            let ctx = parse_remote_url(url);
            if ctx.is_some() {
                debug!(remote = %name, url, "resolved repository from preferred remote");
            }
            ctx
        })
    }

    fn any_repository(remotes: &[Remote]) -> Option<RepoContext> {
        remotes.iter().find_map(|remote| {
            let ctx = parse_remote_url(&remote.url);
            if ctx.is_some() {
                debug!(remote = %remote.name, url = %remote.url, "resolved repository from remote");
            }
            ctx
        })
    }
}

/// Parses a git remote URL into a Bitbucket repository.
///
/// # Returns
///
/// - `Some(RepoContext)` if the URL matches one of the supported patterns
/// - `None` otherwise
///
/// # Example
///
/// ```rust
/// use bit_cli::context::parse_remote_url;
///
/// let ctx = parse_remote_url("https://bitbucket.org/workspace/repo.git").unwrap();
/// assert_eq!(ctx.full_name(), "workspace/repo");
///
/// assert!(parse_remote_url("git@github.com:owner/repo.git").is_none());
/// ```
pub fn parse_remote_url(url: &str) -> Option<RepoContext> {
    REMOTE_URL_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(url)?;
        Some(RepoContext {
            workspace: caps[1].to_string(),
            repo_slug: caps[2].to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RemoteDirection;

    const SSH_URL: &str = "git@bitbucket.org:teamsinspace/documentation-tests.git";

    fn fetch(name: &str, url: &str) -> Remote {
        Remote::new(name, url, RemoteDirection::Fetch)
    }

    fn full_name(remotes: &[Remote]) -> Option<String> {
        RepositoryResolver::default()
            .resolve(remotes)
            .map(|ctx| ctx.full_name())
    }

    #[test]
    fn test_parse_ssh() {
        let ctx = parse_remote_url(SSH_URL).unwrap();
        assert_eq!(ctx.workspace, "teamsinspace");
        assert_eq!(ctx.repo_slug, "documentation-tests");
    }

    #[test]
    fn test_parse_https() {
        let ctx = parse_remote_url("https://bitbucket.org/teamsinspace/documentation-tests.git").unwrap();
        assert_eq!(ctx.full_name(), "teamsinspace/documentation-tests");
    }

    #[test]
    fn test_parse_https_with_user() {
        let ctx = parse_remote_url("https://evil@bitbucket.org/teamsinspace/documentation-tests.git")
            .unwrap();
        assert_eq!(ctx.full_name(), "teamsinspace/documentation-tests");
    }

    #[test]
    fn test_parse_truncates_at_first_dot() {
        let ctx = parse_remote_url("git@bitbucket.org:workspace/repo.name.git").unwrap();
        assert_eq!(ctx.full_name(), "workspace/repo");
    }

    #[test]
    fn test_parse_rejects_other_urls() {
        for url in [
            "git@github.com:owner/repo.git",
            "https://github.com/owner/repo.git",
            "https://bitbucket.org/workspace/repo",
            "https://bitbucket.org/workspace/group/repo.git",
            "https://bitbucket.org/repo.git",
            "ssh://git@bitbucket.company.com:7999/PROJ/repo.git",
            "/srv/git/repo.git",
        ] {
            assert!(parse_remote_url(url).is_none(), "parsed {url}");
        }
    }

    #[test]
    fn test_upstream_wins_regardless_of_position() {
        let remotes = vec![
            fetch("origin", "git@bitbucket.org:me/fork.git"),
            fetch("bitbucket", "git@bitbucket.org:mirror/repo.git"),
            fetch("upstream", "https://bitbucket.org/team/project.git"),
        ];
        assert_eq!(full_name(&remotes).as_deref(), Some("team/project"));
    }

    #[test]
    fn test_unparseable_preferred_falls_through_to_next_preferred() {
        let remotes = vec![
            fetch("fork", "git@bitbucket.org:someone/else.git"),
            fetch("upstream", "git@github.com:team/project.git"),
            fetch("origin", "git@bitbucket.org:me/fork.git"),
        ];
        assert_eq!(full_name(&remotes).as_deref(), Some("me/fork"));
    }

    #[test]
    fn test_falls_back_to_first_match_in_list_order() {
        let remotes = vec![
            fetch("github", "git@github.com:owner/repo.git"),
            fetch("mirror", "https://user@bitbucket.org/first/match.git"),
            fetch("other", "git@bitbucket.org:second/match.git"),
        ];
        assert_eq!(full_name(&remotes).as_deref(), Some("first/match"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let remotes = vec![
            fetch("origin", "git@github.com:owner/repo.git"),
            fetch("upstream", "https://gitlab.com/owner/repo.git"),
        ];
        assert_eq!(full_name(&remotes), None);
        assert_eq!(full_name(&[]), None);
    }

    #[test]
    fn test_last_url_for_a_name_wins() {
        let remotes = vec![
            fetch("origin", "git@bitbucket.org:fetch/repo.git"),
            Remote::new("origin", "git@bitbucket.org:push/repo.git", RemoteDirection::Push),
        ];
        assert_eq!(full_name(&remotes).as_deref(), Some("push/repo"));
    }

    #[test]
    fn test_custom_preferred_names() {
        let resolver = RepositoryResolver::new(vec!["mine".to_string()]);
        let remotes = vec![
            fetch("upstream", "git@bitbucket.org:team/project.git"),
            fetch("mine", "git@bitbucket.org:me/project.git"),
        ];
        assert_eq!(resolver.resolve(&remotes).unwrap().full_name(), "me/project");
    }

    #[test]
    fn test_resolve_path_uses_lister() {
        struct Fixed;

        impl RemoteLister for Fixed {
            fn remotes(&self, _path: &Path) -> Result<Vec<Remote>> {
                Ok(vec![fetch("origin", SSH_URL)])
            }
        }

        let ctx = RepositoryResolver::default()
            .resolve_path(&Fixed, Path::new("."))
            .unwrap()
            .unwrap();
        assert_eq!(ctx.full_name(), "teamsinspace/documentation-tests");
    }
}
