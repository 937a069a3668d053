//! Config path resolution against the working directory.

use crate::constants;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Absolute path of the credential config file, resolved against the
/// current working directory.
pub fn config_path() -> Result<PathBuf> {
    let cwd = env::current_dir().context("resolve current directory")?;
    Ok(cwd
        .join(constants::SAMPLE_DIR)
        .join(constants::CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_path_is_absolute() {
        let path = config_path().unwrap();
        assert!(path.is_absolute());
    }

    #[test]
    fn test_config_path_ends_with_sample_file() {
        let path = config_path().unwrap();
        assert!(path.ends_with(Path::new("src/samples/credentials.config")));
    }
}
