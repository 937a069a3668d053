//! Console demonstration of the path transforms.

use crate::constants;
use crate::util::path;
use std::path::{Path, PathBuf};

/// Print the demo path before and after normalization, then return the
/// join of the demo segments. The joined path is computed but not printed.
pub fn run() -> PathBuf {
    println!("{}", constants::DEMO_RAW_PATH);
    println!(
        "{}",
        path::normalize(Path::new(constants::DEMO_RAW_PATH)).display()
    );

    path::join(constants::DEMO_JOIN_SEGMENTS)
}
