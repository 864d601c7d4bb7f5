//! Listing pipeline: filter and order device snapshots.
//!
//! Ordering rules:
//! - Processes sort ascending by name, case-sensitive, stable.
//! - Applications sort running-first, then ascending by name, stable.
//!
//! Name comparisons are plain `str::cmp`, which orders by code point for
//! UTF-8 and keeps uppercase ahead of lowercase in ASCII.

pub mod render;

use crate::device::{Application, Device, Process};
use dps_common::{Error, OutputFormat, Result};
use std::cmp::Ordering;

/// Options for one listing invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// List applications instead of processes.
    pub applications: bool,

    /// Include applications that are not currently running.
    pub include_all: bool,

    /// Payload format on stdout.
    pub format: OutputFormat,
}

impl ListOptions {
    /// Reject invalid combinations before any device interaction.
    pub fn validate(&self) -> Result<()> {
        if self.include_all && !self.applications {
            return Err(Error::Usage(
                "--installed cannot be used without --applications".to_string(),
            ));
        }
        Ok(())
    }
}

/// Order processes by name, case-sensitive.
pub fn compare_processes(a: &Process, b: &Process) -> Ordering {
    a.name.cmp(&b.name)
}

/// Order applications running-first, then by name, case-sensitive.
///
/// A not-running application sorts after every running one, whatever the
/// names.
pub fn compare_applications(a: &Application, b: &Application) -> Ordering {
    b.is_running()
        .cmp(&a.is_running())
        .then_with(|| a.name.cmp(&b.name))
}

/// Enumerate and sort the device's processes.
pub fn list_processes(device: &dyn Device) -> Result<Vec<Process>> {
    let mut processes = device.enumerate_processes()?;
    processes.sort_by(compare_processes);
    Ok(processes)
}

/// Enumerate, filter, and sort the device's applications.
///
/// Unless `include_all`, applications that are not running are dropped
/// before sorting.
pub fn list_applications(device: &dyn Device, include_all: bool) -> Result<Vec<Application>> {
    let mut applications = device.enumerate_applications()?;
    if !include_all {
        applications.retain(Application::is_running);
    }
    applications.sort_by(compare_applications);
    Ok(applications)
}
