//! Sample credential config writer and path-normalization demo.
//!
//! Writes a fixed admin credential blob to `src/samples/credentials.config`
//! under the current working directory, then prints a demonstration path
//! before and after normalization.
//!
//! ## Modules
//! - `core` — config path resolution and the credential writer
//! - `demo` — console demonstration of the path transforms
//! - `util` — filesystem-free path transforms

pub mod constants;
pub mod core;
pub mod demo;
pub mod util;

use anyhow::Result;

/// Run the credential write followed by the path demo.
///
/// A failed write is logged to stderr and swallowed; the demo still runs
/// and the process exits successfully either way.
pub fn run() -> Result<()> {
    let config_path = core::paths::config_path()?;
    if let Err(e) = core::writer::write_credentials(&config_path) {
        eprintln!("warning: credential write failed: {:#}", e);
    }

    demo::run();
    Ok(())
}
