//
//  bit
//  auth/store.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Credential Store
//!
//! Keeps the Bitbucket username and app password in a small INI file,
//! `~/.config/bit` by default:
//!
//! ```ini
//! [default]
//! username = myusername
//! password = app-password
//! ```
//!
//! Values are taken verbatim: no quoting and no escape sequences, which is
//! the layout Python's `configparser` reads and writes.
//!
//! The first time credentials are needed and no file exists, the user is
//! asked for them and the answers are saved. The file is readable and
//! writable by its owner only.

use std::path::{Path, PathBuf};

use ini::{EscapePolicy, Ini, ParseOption, WriteOption};
use thiserror::Error;
use tracing::debug;

use super::Credentials;
use crate::config::{config_exists, read_config_file, write_private_file};

/// Section holding the credentials.
const SECTION: &str = "default";

const USERNAME_KEY: &str = "username";
const PASSWORD_KEY: &str = "password";

/// A credential file that could not be read, parsed or written.
///
/// Displays as `<path>: <reason>`, on a single line.
#[derive(Error, Debug)]
#[error("{}: {reason}", .path.display())]
pub struct ConfigError {
    /// The credential file
    pub path: PathBuf,
    /// What went wrong, in words
    pub reason: String,
}

impl ConfigError {
    fn new(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Asks the user for credentials when none are stored yet.
///
/// The terminal implementation lives in
/// [`interactive::TerminalPrompt`](crate::interactive::TerminalPrompt); tests
/// supply fixed answers instead.
pub trait CredentialPrompt {
    /// Reads a username (visible) and an app password (masked).
    fn prompt(&self) -> anyhow::Result<Credentials>;
}

/// Loads credentials from, and saves them to, a file.
///
/// # Example
///
/// ```rust,no_run
/// use bit_cli::auth::CredentialStore;
/// use bit_cli::interactive::TerminalPrompt;
///
/// let store = CredentialStore::new("/home/me/.config/bit", TerminalPrompt);
/// let credentials = store.load()?;
/// println!("Signed in as {}", credentials.username);
/// # Ok::<(), bit_cli::auth::ConfigError>(())
/// ```
pub struct CredentialStore<P> {
    path: PathBuf,
    prompt: P,
}

impl<P: CredentialPrompt> CredentialStore<P> {
    /// Creates a store for the file at `path`, asking `prompt` when it is
    /// missing.
    pub fn new(path: impl Into<PathBuf>, prompt: P) -> Self {
        Self {
            path: path.into(),
            prompt,
        }
    }

    /// The credential file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored credentials, prompting for and saving them first
    /// if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file exists but cannot be read or
    /// parsed, if prompting fails, or if the new file cannot be written.
    pub fn load(&self) -> Result<Credentials, ConfigError> {
        if config_exists(&self.path) {
            return self.read();
        }

        debug!(path = %self.path.display(), "no credential file, prompting");
        let credentials = self
            .prompt
            .prompt()
            .map_err(|e| ConfigError::new(&self.path, format!("could not read credentials: {e}")))?;
        self.save(&credentials)?;
        Ok(credentials)
    }

    /// Reads and parses the credential file.
    pub fn read(&self) -> Result<Credentials, ConfigError> {
        let content =
            read_config_file(&self.path).map_err(|e| ConfigError::new(&self.path, e.to_string()))?;
        let file = Ini::load_from_str_opt(&content, parse_option()).map_err(|e| {
            debug!(path = %self.path.display(), error = %e, "could not parse credential file");
            ConfigError::new(&self.path, "invalid file format")
        })?;

        let section = file
            .section(Some(SECTION))
            .ok_or_else(|| ConfigError::new(&self.path, format!("no section: '{SECTION}'")))?;
        let value = |key: &str| {
            section.get(key).map(str::to_string).ok_or_else(|| {
                ConfigError::new(&self.path, format!("no option '{key}' in section: '{SECTION}'"))
            })
        };
        let credentials = Credentials::new(value(USERNAME_KEY)?, value(PASSWORD_KEY)?);

        debug!(path = %self.path.display(), username = %credentials.username, "loaded credentials");
        Ok(credentials)
    }

    /// Writes the credentials to the file, readable by its owner only.
    pub fn save(&self, credentials: &Credentials) -> Result<(), ConfigError> {
        let mut file = Ini::new();
        file.with_section(Some(SECTION))
            .set(USERNAME_KEY, credentials.username.as_str())
            .set(PASSWORD_KEY, credentials.password.as_str());

        let mut buffer = Vec::new();
        file.write_to_opt(&mut buffer, write_option())
            .map_err(|e| ConfigError::new(&self.path, e.to_string()))?;
        let content =
            String::from_utf8(buffer).map_err(|e| ConfigError::new(&self.path, e.to_string()))?;

        write_private_file(&self.path, &content)
            .map_err(|e| ConfigError::new(&self.path, e.to_string()))?;

        debug!(path = %self.path.display(), "saved credentials");
        Ok(())
    }
}

/// Values are read verbatim, quotes and backslashes included.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    }
}

fn write_option() -> WriteOption {
    WriteOption {
        escape_policy: EscapePolicy::Nothing,
        kv_separator: " = ",
        ..Default::default()
    }
}
