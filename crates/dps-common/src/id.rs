//! Process identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process ID wrapper with display formatting.
///
/// Application records use pid 0 to mean "not currently running"; the
/// helpers here keep that convention in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(pub u32);

impl Pid {
    /// The sentinel pid of an installed-but-not-running application.
    pub const NOT_RUNNING: Pid = Pid(0);

    /// Whether this pid denotes a running process.
    pub fn is_running(self) -> bool {
        self.0 != 0
    }

    /// The pid as a plain integer, or `None` for the not-running sentinel.
    pub fn running(self) -> Option<u32> {
        if self.is_running() {
            Some(self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Pid {
    fn from(pid: u32) -> Self {
        Pid(pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_running() {
        assert!(Pid(1).is_running());
        assert!(!Pid::NOT_RUNNING.is_running());
    }

    #[test]
    fn test_running_option() {
        assert_eq!(Pid(42).running(), Some(42));
        assert_eq!(Pid(0).running(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pid(1234).to_string(), "1234");
    }

    #[test]
    fn test_serde_transparent() {
        assert_eq!(serde_json::to_string(&Pid(5)).unwrap(), "5");
        let pid: Pid = serde_json::from_str("5").unwrap();
        assert_eq!(pid, Pid(5));
    }
}
