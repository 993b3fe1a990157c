//
//  bit
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! This module wraps the `dialoguer` crate to ask for a username and an app
//! password the first time `bit` needs to talk to the API.
//!
//! # Example
//!
//! ```no_run
//! use bit_cli::interactive::prompt::{prompt_input, prompt_password};
//!
//! let username = prompt_input("Username").unwrap();
//! let password = prompt_password("App password").unwrap();
//! ```

use anyhow::Result;
use dialoguer::{Input, Password};

use crate::auth::{CredentialPrompt, Credentials};

/// Asks for a line of visible text.
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input)
}

/// Asks for a secret; the typed characters are not echoed.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Reads credentials from the terminal.
///
/// Fails when stdin is not a terminal, which the credential store reports as
/// a configuration error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl CredentialPrompt for TerminalPrompt {
    fn prompt(&self) -> Result<Credentials> {
        let username = prompt_input("Username")?;
        let password = prompt_password("App password")?;
        Ok(Credentials::new(username, password))
    }
}
