//! Record types for device enumeration.
//!
//! Both types are immutable snapshots of device state at query time and
//! exist only for the duration of one invocation. Duplicates are
//! preserved as reported by the device.

use dps_common::Pid;
use serde::{Deserialize, Serialize};

/// A running process on the target device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process ID.
    pub pid: Pid,

    /// Process name.
    pub name: String,
}

impl Process {
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Process {
            pid: Pid(pid),
            name: name.into(),
        }
    }
}

/// An installed (and possibly running) application on the target device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Process ID, `Pid::NOT_RUNNING` (0) when not currently running.
    pub pid: Pid,

    /// Human-readable application name.
    pub name: String,

    /// Bundle or package identifier.
    pub identifier: String,
}

impl Application {
    pub fn new(pid: u32, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Application {
            pid: Pid(pid),
            name: name.into(),
            identifier: identifier.into(),
        }
    }

    /// Whether the application is currently running.
    pub fn is_running(&self) -> bool {
        self.pid.is_running()
    }
}
