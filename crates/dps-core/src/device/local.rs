//! Local device backed by procfs and XDG desktop entries.
//!
//! Processes come from the numeric entries of the procfs root; the name
//! is the kernel comm value. Applications come from `.desktop` files in
//! the XDG data directories, with the pid resolved by matching the
//! entry's Exec basename against the process snapshot.

use crate::device::types::{Application, Process};
use crate::device::Device;
use dps_common::{Error, Pid, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Kernel limit on comm length (TASK_COMM_LEN minus the terminator).
const COMM_MAX: usize = 15;

/// The machine dps itself runs on.
///
/// Both roots are overridable so tests (and unusual mounts) can point the
/// device at fabricated trees.
#[derive(Debug, Clone)]
pub struct LocalDevice {
    proc_root: PathBuf,
    app_dirs: Vec<PathBuf>,
}

impl LocalDevice {
    /// Device with the standard procfs root and XDG application dirs.
    pub fn new() -> Self {
        Self::with_paths(PathBuf::from("/proc"), default_app_dirs())
    }

    /// Device with an explicit procfs root and the default XDG dirs.
    pub fn with_proc_root(proc_root: PathBuf) -> Self {
        Self::with_paths(proc_root, default_app_dirs())
    }

    /// Device with explicit roots.
    pub fn with_paths(proc_root: PathBuf, app_dirs: Vec<PathBuf>) -> Self {
        LocalDevice {
            proc_root,
            app_dirs,
        }
    }
}

impl Default for LocalDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for LocalDevice {
    fn enumerate_processes(&self) -> Result<Vec<Process>> {
        let entries = fs::read_dir(&self.proc_root).map_err(|e| {
            Error::Enumeration(format!(
                "cannot read {}: {}",
                self.proc_root.display(),
                e
            ))
        })?;

        let mut processes = Vec::new();
        for entry in entries.flatten() {
            let pid: u32 = match entry.file_name().to_str().and_then(|n| n.parse().ok()) {
                Some(pid) => pid,
                None => continue,
            };
            // The process may exit between readdir and the comm read.
            match fs::read_to_string(entry.path().join("comm")) {
                Ok(comm) => processes.push(Process::new(pid, comm.trim_end_matches('\n'))),
                Err(e) => debug!("skipping pid {}: {}", pid, e),
            }
        }
        Ok(processes)
    }

    fn enumerate_applications(&self) -> Result<Vec<Application>> {
        let processes = self.enumerate_processes()?;

        let mut seen = HashSet::new();
        let mut applications = Vec::new();
        for dir in &self.app_dirs {
            let entries = match fs::read_dir(dir) {
                // XDG dirs are optional; absent ones are not an error.
                Ok(entries) => entries,
                Err(_) => continue,
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("desktop") {
                    continue;
                }
                let Some(identifier) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                // Earlier dirs shadow later ones, even for hidden entries.
                if !seen.insert(identifier.to_string()) {
                    continue;
                }
                let source = match fs::read_to_string(&path) {
                    Ok(source) => source,
                    Err(e) => {
                        debug!("skipping {}: {}", path.display(), e);
                        continue;
                    }
                };
                let Some(desktop_entry) = parse_desktop_entry(&source) else {
                    debug!("skipping {}: not a listable desktop entry", path.display());
                    continue;
                };
                let pid = match desktop_entry.exec_base() {
                    Some(base) => match_comm(&processes, &base),
                    None => Pid::NOT_RUNNING,
                };
                applications.push(Application {
                    pid,
                    name: desktop_entry.name,
                    identifier: identifier.to_string(),
                });
            }
        }
        Ok(applications)
    }
}

/// XDG data directories that may hold desktop entries.
///
/// `$XDG_DATA_HOME/applications` first, then each `<dir>/applications`
/// from `$XDG_DATA_DIRS`, with the standard fallbacks for both.
fn default_app_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    let data_home = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local/share")));
    if let Some(data_home) = data_home {
        dirs.push(data_home.join("applications"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
    for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
        dirs.push(Path::new(dir).join("applications"));
    }
    dirs
}

/// A `[Desktop Entry]` group, reduced to the fields dps needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Human-readable application name (`Name` key).
    pub name: String,
    /// Launch command (`Exec` key), if any.
    pub exec: Option<String>,
}

impl DesktopEntry {
    /// Basename of the Exec command, with quoting dropped.
    fn exec_base(&self) -> Option<String> {
        let exec = self.exec.as_deref()?;
        let first = exec.split_whitespace().next()?.trim_matches('"');
        let base = Path::new(first).file_name()?.to_str()?;
        if base.is_empty() {
            None
        } else {
            Some(base.to_string())
        }
    }
}

/// Parse a desktop file's `[Desktop Entry]` group.
///
/// Returns `None` for entries that are not listable applications: wrong
/// `Type`, missing `Name`, or hidden via `NoDisplay`/`Hidden`. Keys in
/// other groups (actions, localized variants) are ignored. Never panics,
/// whatever the input.
pub fn parse_desktop_entry(source: &str) -> Option<DesktopEntry> {
    let mut in_entry = false;
    let mut type_ok = false;
    let mut name = None;
    let mut exec = None;

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            in_entry = line == "[Desktop Entry]";
            continue;
        }
        if !in_entry {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        match key {
            "Type" => type_ok = value == "Application",
            "Name" => name = Some(value.to_string()),
            "Exec" => exec = Some(value.to_string()),
            "NoDisplay" | "Hidden" if value == "true" => return None,
            _ => {}
        }
    }

    if !type_ok {
        return None;
    }
    Some(DesktopEntry { name: name?, exec })
}

/// Find a process whose comm matches the given executable basename,
/// honoring the kernel's comm truncation.
fn match_comm(processes: &[Process], base: &str) -> Pid {
    processes
        .iter()
        .find(|p| p.name == base || (p.name.len() == COMM_MAX && base.starts_with(p.name.as_str())))
        .map(|p| p.pid)
        .unwrap_or(Pid::NOT_RUNNING)
}
