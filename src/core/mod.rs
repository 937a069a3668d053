//! Config path resolution and the credential writer.

pub mod paths;
pub mod writer;
