//! Text-table and JSON rendering for listings.
//!
//! Column widths are computed from the data only; header labels are
//! printed as-is even when wider than the column. JSON rows are dedicated
//! structs so the key order is fixed by declaration and a not-running
//! application pid serializes as `null`.

use crate::device::{Application, Process};
use serde::Serialize;
use std::fmt::Write;

/// JSON row for a process listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRow {
    pub pid: u32,
    pub name: String,
}

/// JSON row for an application listing.
///
/// `pid` is `None` (JSON `null`) when the application is not running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRow {
    pub pid: Option<u32>,
    pub name: String,
    pub identifier: String,
}

/// Rows for the process JSON payload, in listing order.
pub fn process_rows(processes: &[Process]) -> Vec<ProcessRow> {
    processes
        .iter()
        .map(|p| ProcessRow {
            pid: p.pid.0,
            name: p.name.clone(),
        })
        .collect()
}

/// Rows for the application JSON payload, in listing order.
pub fn application_rows(applications: &[Application]) -> Vec<ApplicationRow> {
    applications
        .iter()
        .map(|a| ApplicationRow {
            pid: a.pid.running(),
            name: a.name.clone(),
            identifier: a.identifier.clone(),
        })
        .collect()
}

/// Width of a column as its widest cell, in chars.
fn column_width<T>(rows: &[T], cell: impl Fn(&T) -> usize) -> usize {
    rows.iter().map(cell).max().unwrap_or(0)
}

/// Render the two-column process table.
///
/// The PID column is right-aligned to the widest decimal pid; the name
/// column is unpadded.
pub fn process_table(processes: &[Process]) -> String {
    let pid_width = column_width(processes, |p| p.pid.to_string().len());
    let name_width = column_width(processes, |p| p.name.chars().count());

    let mut out = String::new();
    let _ = writeln!(out, "{:>pid_width$}  {}", "PID", "Name");
    let _ = writeln!(out, "{}  {}", "-".repeat(pid_width), "-".repeat(name_width));
    for process in processes {
        // Format the raw integer: width flags don't reach through the
        // Pid newtype's Display.
        let _ = writeln!(out, "{:>pid_width$}  {}", process.pid.0, process.name);
    }
    out
}

/// Render the three-column application table.
///
/// The PID cell shows `-` for a not-running application; Name and
/// Identifier are left-aligned and padded to their column widths.
pub fn application_table(applications: &[Application]) -> String {
    let pid_cells: Vec<String> = applications.iter().map(pid_cell).collect();
    let pid_width = column_width(&pid_cells, |c| c.chars().count());
    let name_width = column_width(applications, |a| a.name.chars().count());
    let identifier_width = column_width(applications, |a| a.identifier.chars().count());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>pid_width$}  {:<name_width$}  {:<identifier_width$}",
        "PID", "Name", "Identifier"
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(pid_width),
        "-".repeat(name_width),
        "-".repeat(identifier_width)
    );
    for (application, cell) in applications.iter().zip(&pid_cells) {
        let _ = writeln!(
            out,
            "{:>pid_width$}  {:<name_width$}  {:<identifier_width$}",
            cell, application.name, application.identifier
        );
    }
    out
}

fn pid_cell(application: &Application) -> String {
    match application.pid.running() {
        Some(pid) => pid.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_table_alignment() {
        let processes = vec![
            Process::new(500, "Beta"),
            Process::new(12345, "alpha"),
            Process::new(7, "gamma"),
        ];
        let expected = "\
  PID  Name
-----  -----
  500  Beta
12345  alpha
    7  gamma
";
        assert_eq!(process_table(&processes), expected);
    }

    #[test]
    fn test_process_table_pid_width_is_widest_pid() {
        let processes = vec![Process::new(9, "a"), Process::new(12345, "b")];
        let table = process_table(&processes);
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(rows, vec!["    9  a", "12345  b"]);
    }

    #[test]
    fn test_application_table_exact() {
        let applications = vec![
            Application::new(5, "Alpha", "alpha"),
            Application::new(0, "Zeta", "zeta"),
        ];
        let expected = "\
PID  Name   Identifier
-  -----  -----
5  Alpha  alpha
-  Zeta   zeta \n";
        assert_eq!(application_table(&applications), expected);
    }

    #[test]
    fn test_json_rows_preserve_order_and_null_pid() {
        let applications = vec![
            Application::new(5, "Alpha", "org.example.alpha"),
            Application::new(0, "Zeta", "org.example.zeta"),
        ];
        let rows = application_rows(&applications);
        assert_eq!(rows[0].pid, Some(5));
        assert_eq!(rows[1].pid, None);

        let json = serde_json::to_string_pretty(&rows).unwrap();
        assert!(json.contains("\"pid\": null"));
        // Key order follows struct declaration: pid, name, identifier.
        let pid_at = json.find("\"pid\"").unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let identifier_at = json.find("\"identifier\"").unwrap();
        assert!(pid_at < name_at && name_at < identifier_at);
    }

    #[test]
    fn test_process_rows_json_shape() {
        let processes = vec![Process::new(1, "init")];
        let json = serde_json::to_string_pretty(&process_rows(&processes)).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"pid\": 1,\n    \"name\": \"init\"\n  }\n]"
        );
    }

    #[test]
    fn test_empty_rows_serialize_to_empty_array() {
        let json = serde_json::to_string_pretty(&process_rows(&[])).unwrap();
        assert_eq!(json, "[]");
    }
}
