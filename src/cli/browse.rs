//
//  bit
//  cli/browse.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Browse command - open the repository page in a browser
//!
//! The repository comes from the command line or, when omitted, from the
//! remotes of the current working tree. If no browser can be opened the URL
//! is printed instead.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::current_repository;
use crate::config::AppConfig;
use crate::context::RepoContext;

/// Open repository in browser
#[derive(Args, Debug)]
pub struct BrowseCommand {
    /// Repository to open instead of the current one
    #[arg(value_name = "WORKSPACE/REPO")]
    pub repository: Option<RepoContext>,

    /// Print URL instead of opening browser
    #[arg(long, short = 'u')]
    pub url: bool,
}

impl BrowseCommand {
    pub async fn run(&self, config: &AppConfig) -> Result<()> {
        let ctx = match &self.repository {
            Some(ctx) => ctx.clone(),
            None => current_repository(config)?,
        };
        let url = ctx.web_url(&config.web_base_url);

        if self.url {
            println!("{}", url);
        } else if let Err(e) = webbrowser::open(&url) {
            debug!(error = %e, "could not open browser");
            println!("{}", url);
        }

        Ok(())
    }
}
