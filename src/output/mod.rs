//
//  bit
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Formatting for what `bit` prints: pull request lines on stdout and
//! `error:` messages on stderr.
//!
//! ## Pull Request Lines
//!
//! Each pull request is printed as its `#id` right-aligned in eight columns,
//! two spaces, then the title:
//!
//! ```text
//!      #12  Fix login redirect
//!     #103  Bump dependencies
//! ```

use std::io::{self, Write};

use console::style;

use crate::api::PullRequest;

/// Width of the right-aligned `#id` column.
const ID_WIDTH: usize = 8;

/// Formats one pull request as a single line, without a newline.
///
/// # Example
///
/// ```rust
/// use bit_cli::api::PullRequest;
/// use bit_cli::output::format_pull_request;
///
/// let pr = PullRequest { id: 42, title: "Add README".to_string() };
/// assert_eq!(format_pull_request(&pr), "     #42  Add README");
/// ```
pub fn format_pull_request(pull_request: &PullRequest) -> String {
    let identifier = format!("#{}", pull_request.id);
    format!("{:>width$}  {}", identifier, pull_request.title, width = ID_WIDTH)
}

/// Sorts pull requests by id and writes one line per pull request.
///
/// Nothing is written until the whole list has been sorted.
pub fn write_pull_requests<W: Write>(out: &mut W, mut pull_requests: Vec<PullRequest>) -> io::Result<()> {
    pull_requests.sort_by_key(|pr| pr.id);

    for pull_request in &pull_requests {
        writeln!(out, "{}", format_pull_request(pull_request))?;
    }
    out.flush()
}

/// Writes an error message to stderr, prefixed with `error:`.
///
/// The prefix is red and bold when stderr is a terminal that supports color.
pub fn write_error(msg: &str) {
    eprintln!("{} {}", style("error:").red().bold().for_stderr(), msg);
}
