//
//  bit
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod browse;
mod pr;

pub use browse::BrowseCommand;
pub use pr::{PrCommand, PrSubcommand};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::AppConfig;
use crate::context::{work_tree, GitRemoteLister, RepoContext, RepositoryResolver};

/// Message reported when no remote points at Bitbucket.
pub const NOT_A_BITBUCKET_REPOSITORY: &str = "not a Bitbucket repository";

/// bit - Bitbucket from inside a git working tree
#[derive(Parser, Debug)]
#[command(
    name = "bit",
    version,
    about = "Work with the Bitbucket repository of the current git working tree",
    after_help = "Use 'bit <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a Bitbucket page in the default browser
    Browse(BrowseCommand),

    /// List Bitbucket pull requests
    Pr(PrCommand),
}

/// Resolves the repository of the current working tree.
///
/// The working tree is `GIT_WORK_TREE` when set, otherwise the current
/// directory. Any failure, including not being inside a git repository at
/// all, is reported as "not a Bitbucket repository".
pub(crate) fn current_repository(config: &AppConfig) -> Result<RepoContext> {
    let path = work_tree()?;
    let resolver = RepositoryResolver::new(config.preferred_remotes.clone());

    match resolver.resolve_path(&GitRemoteLister, &path) {
        Ok(Some(ctx)) => Ok(ctx),
        Ok(None) => bail!(NOT_A_BITBUCKET_REPOSITORY),
        Err(e) => {
            debug!(error = %format!("{e:#}"), "could not list remotes");
            bail!(NOT_A_BITBUCKET_REPOSITORY)
        }
    }
}
