//! Error types for the device lister.
//!
//! Two failure kinds cover the whole surface:
//! - `Usage`: an invalid option combination, detected before any device
//!   interaction.
//! - `Enumeration`: the device collaborator failed to produce a list.
//!
//! Enumeration is attempted exactly once per invocation; there are no
//! retries and no partial results.

use thiserror::Error;

/// Result type alias for device lister operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the device lister.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid option combination, rejected before any device call.
    #[error("usage error: {0}")]
    Usage(String),

    /// The device collaborator failed to enumerate. Displays the
    /// collaborator's reason verbatim; callers supply the operation
    /// context when reporting.
    #[error("{0}")]
    Enumeration(String),
}

impl Error {
    /// True for errors that terminate the command with an enumeration
    /// failure status.
    pub fn is_enumeration(&self) -> bool {
        matches!(self, Error::Enumeration(_))
    }
}
