//! Mock device for testing.
//!
//! Preset process/application snapshots, or a preset failure reason, so
//! both success and failure paths can be exercised without a real device.
//!
//! # Example
//!
//! ```ignore
//! use dps_core::device::mock::MockDevice;
//!
//! let device = MockDevice::new()
//!     .with_process(42, "httpd")
//!     .with_application(0, "Zeta", "org.example.Zeta");
//! ```

use crate::device::types::{Application, Process};
use crate::device::Device;
use dps_common::{Error, Result};

/// In-memory device with preset enumeration results.
#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    processes: Vec<Process>,
    applications: Vec<Application>,
    failure: Option<String>,
}

impl MockDevice {
    /// Empty device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a process to the snapshot.
    pub fn with_process(mut self, pid: u32, name: &str) -> Self {
        self.processes.push(Process::new(pid, name));
        self
    }

    /// Add an application to the snapshot.
    pub fn with_application(mut self, pid: u32, name: &str, identifier: &str) -> Self {
        self.applications.push(Application::new(pid, name, identifier));
        self
    }

    /// Device whose enumerations fail with the given reason.
    pub fn failing(reason: &str) -> Self {
        MockDevice {
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }
}

impl Device for MockDevice {
    fn enumerate_processes(&self) -> Result<Vec<Process>> {
        match &self.failure {
            Some(reason) => Err(Error::Enumeration(reason.clone())),
            None => Ok(self.processes.clone()),
        }
    }

    fn enumerate_applications(&self) -> Result<Vec<Application>> {
        match &self.failure {
            Some(reason) => Err(Error::Enumeration(reason.clone())),
            None => Ok(self.applications.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_presets() {
        let device = MockDevice::new().with_process(1, "init");
        let processes = device.enumerate_processes().unwrap();
        assert_eq!(processes, vec![Process::new(1, "init")]);
        assert!(device.enumerate_applications().unwrap().is_empty());
    }

    #[test]
    fn test_mock_failure() {
        let device = MockDevice::failing("device is gone");
        let err = device.enumerate_processes().unwrap_err();
        assert_eq!(err.to_string(), "device is gone");
        assert!(device.enumerate_applications().is_err());
    }
}
