//! Reading saved profile pages from local files and stdin.
//!
//! Profiles are processed from pages the user already saved; nothing here
//! touches the network.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::{Result, SieveError};

/// Reads HTML content from a local file.
///
/// Returns [`SieveError::FileNotFound`] when the path does not exist so the
/// caller can tell a typo apart from a permissions problem.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(SieveError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(SieveError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
