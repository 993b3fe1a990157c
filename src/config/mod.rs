//
//  bit
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings the CLI runs with. Every value has a built-in default and can be
//! overridden from the environment, which is how tests point the CLI at a
//! local server and a temporary credential file.
//!
//! | Setting | Default | Environment |
//! |---------|---------|-------------|
//! | API base URL | `https://api.bitbucket.org/2.0` | `BIT_API_URL` |
//! | Web base URL | `https://bitbucket.org` | `BIT_WEB_URL` |
//! | Credential file | `~/.config/bit` | `BIT_CONFIG` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bit_cli::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Credentials: {}", config.credentials_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Credential file I/O with owner-only permissions

mod file;

pub use file::*;

use std::path::PathBuf;

use anyhow::Result;
use directories::BaseDirs;

use crate::context::PREFERRED_REMOTE_NAMES;

/// Default Bitbucket Cloud REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.bitbucket.org/2.0";

/// Default Bitbucket Cloud web base URL.
pub const DEFAULT_WEB_URL: &str = "https://bitbucket.org";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "BIT_API_URL";

/// Environment variable overriding the web base URL.
pub const WEB_URL_ENV: &str = "BIT_WEB_URL";

/// Environment variable overriding the credential file path.
pub const CONFIG_PATH_ENV: &str = "BIT_CONFIG";

/// Runtime settings for the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// Base URL of the web UI, without a trailing slash
    pub web_base_url: String,
    /// Remote names the resolver tries first, most preferred first
    pub preferred_remotes: Vec<String>,
    /// Location of the credential file
    pub credentials_path: PathBuf,
}

impl AppConfig {
    /// Builds the configuration from defaults and the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from defaults and the variables `lookup`
    /// returns. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let credentials_path = match var(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::default_credentials_path()?,
        };

        Ok(Self {
            api_base_url: base_url(var(API_URL_ENV), DEFAULT_API_URL),
            web_base_url: base_url(var(WEB_URL_ENV), DEFAULT_WEB_URL),
            preferred_remotes: PREFERRED_REMOTE_NAMES.iter().map(|s| s.to_string()).collect(),
            credentials_path,
        })
    }

    /// Returns `~/.config/bit`.
    pub fn default_credentials_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(dirs.home_dir().join(".config").join(crate::APP_NAME))
    }
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .as_deref()
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}
