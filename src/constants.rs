//! Centralized constants for file locations and demo inputs.

/// Directory holding generated sample config files, relative to the
/// working directory.
pub const SAMPLE_DIR: &str = "src/samples";

/// File name of the generated credential config.
pub const CONFIG_FILE_NAME: &str = "credentials.config";

/// Credential blob written to the config file: three `key=value` lines,
/// no trailing newline.
pub const ADMIN_CREDENTIAL: &str = "username=admin\npassword=admin\nuserport=3241";

/// Demo input for normalization, with a doubled separator and a trailing
/// parent segment.
pub const DEMO_RAW_PATH: &str = "/etc//ssh/example_file/..";

/// Demo segments for the join transform.
pub const DEMO_JOIN_SEGMENTS: &[&str] = &["/foo", "bar", "baz/asdf", "quux", ".."];
