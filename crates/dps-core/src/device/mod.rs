//! The device collaborator seam and its backends.
//!
//! A `Device` produces immutable process/application snapshots; everything
//! about how it obtains them stays behind the trait. The listing pipeline
//! only ever sees the snapshots.

pub mod local;
pub mod types;

// Re-export test utilities for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use local::LocalDevice;
pub use types::{Application, Process};

use dps_common::Result;

/// A device that can enumerate its processes and installed applications.
///
/// Enumeration is a single blocking call; this layer does not retry or
/// time it out. Failures surface as `Error::Enumeration` carrying the
/// collaborator's reason.
pub trait Device {
    /// Snapshot the running processes on the device.
    fn enumerate_processes(&self) -> Result<Vec<Process>>;

    /// Snapshot the installed applications on the device.
    fn enumerate_applications(&self) -> Result<Vec<Application>>;
}
