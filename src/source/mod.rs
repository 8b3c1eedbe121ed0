//! # Table Sources
//!
//! Where root tables come from. A [`TableSource`] loads a [`Table`]
//! asynchronously; the run loop spawns the load fire-and-forget and receives
//! the outcome back on its action channel, so all state mutation stays on
//! the UI loop.

mod file;
mod remote;

use std::fmt;

use async_trait::async_trait;

use crate::model::{DecodeError, Table};

pub use file::FileSource;
pub use remote::RemoteSource;

/// Errors loading a table from a source.
#[derive(Debug)]
pub enum SourceError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Http { status: u16 },
    /// The payload arrived but is not a valid table document.
    Decode(DecodeError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "read error: {e}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Http { status } => write!(f, "HTTP {status}"),
            SourceError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            SourceError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// An async provider of a root table.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Short human-readable label for the status bar ("menu.json", a URL).
    fn name(&self) -> &str;

    /// Fetch and decode the table.
    async fn load(&self) -> Result<Table, SourceError>;
}
