//! Device lister common types, IDs, and errors.
//!
//! This crate provides foundational types shared across dps modules:
//! - Process identity types
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod id;
pub mod output;

pub use error::{Error, Result};
pub use id::Pid;
pub use output::OutputFormat;
