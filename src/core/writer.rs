//! Credential config file writing.

use crate::constants;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the admin credential blob to `path`, creating the file or
/// truncating an existing one.
///
/// A single attempt is made: the parent directory is not created and a
/// failure is reported to the caller, never retried.
pub fn write_credentials(path: &Path) -> Result<()> {
    fs::write(path, constants::ADMIN_CREDENTIAL)
        .with_context(|| format!("write credential file {}", path.display()))
}
