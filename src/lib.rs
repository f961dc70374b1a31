//! Open a SQLite database, ask it for its version and log the answer.
//!
//! The binary in `main.rs` is a thin wrapper around [`run`] with the
//! default [`ProbeConfig`].

pub mod config;
pub mod error;
pub mod probe;
pub mod version;

pub use config::{ConnectionSpec, ProbeConfig};
pub use error::{ErrorKind, ProbeError};
pub use probe::{report, run, DatabaseProbe};
pub use version::VersionString;
