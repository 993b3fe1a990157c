//
//  bit
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations for the credential file. Writes create parent
//! directories and leave the file readable by its owner only.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Reads the contents of a configuration file.
pub fn read_config_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Writes `content` to `path` so that only the owner can read or write it.
///
/// Parent directories are created as needed. On Unix the file is created
/// with mode `0600`, and the mode is set again once the content is written so
/// that a pre-existing file with wider permissions is tightened too.
///
/// # Errors
///
/// Returns the underlying I/O error if a directory cannot be created, the
/// file cannot be written, or its permissions cannot be changed. The file
/// handle is closed on every path.
pub fn write_private_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    {
        let mut file = options.open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    restrict_to_owner(path)
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> io::Result<()> {
    // Files under the user profile are private to the owner by default.
    Ok(())
}

/// Checks if a configuration file exists.
pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
