//
//  bit
//  cli/pr.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::io;

use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::debug;

use super::current_repository;
use crate::api::BitbucketClient;
use crate::auth::CredentialStore;
use crate::config::AppConfig;
use crate::interactive::TerminalPrompt;
use crate::output::write_pull_requests;

/// Manage pull requests
#[derive(Args, Debug)]
pub struct PrCommand {
    #[command(subcommand)]
    pub command: PrSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PrSubcommand {
    /// List pull requests
    List,
}

impl PrCommand {
    pub async fn run(&self, config: &AppConfig) -> Result<()> {
        match &self.command {
            PrSubcommand::List => self.list(config).await,
        }
    }

    /// List pull requests
    async fn list(&self, config: &AppConfig) -> Result<()> {
        let repository = current_repository(config)?;
        debug!(repository = %repository, "listing pull requests");

        let store = CredentialStore::new(&config.credentials_path, TerminalPrompt);
        let credentials = store.load()?;

        let client = BitbucketClient::new(&config.api_base_url)?.with_auth(credentials);
        let pull_requests = client.get_pull_requests(&repository.full_name()).await?;

        write_pull_requests(&mut io::stdout().lock(), pull_requests)?;
        Ok(())
    }
}
