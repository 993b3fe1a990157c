//
//  bit
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal input.
//!
//! - [`prompt`]: Text and masked password prompts built on `dialoguer`
//! - [`TerminalPrompt`]: Asks for Bitbucket credentials on first use

pub mod prompt;

pub use prompt::TerminalPrompt;
