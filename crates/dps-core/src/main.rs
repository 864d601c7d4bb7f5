//! dps - list processes and applications on the target device.
//!
//! stdout carries the listing payload (text table or JSON); status and
//! error lines go to stderr through the logging channel. Exactly one of
//! the two listing operations runs per invocation.

use clap::Parser;
use dps_common::OutputFormat;
use dps_core::device::{Device, LocalDevice};
use dps_core::exit_codes::ExitCode;
use dps_core::list::{self, render, ListOptions};
use dps_core::logging::{init_logging, LogConfig, LogLevel};
use std::path::PathBuf;
use tracing::error;

/// List processes or installed applications on the target device
#[derive(Parser)]
#[command(name = "dps")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List only applications
    #[arg(short = 'a', long)]
    applications: bool,

    /// Include all installed applications, not just running ones
    #[arg(short = 'i', long, requires = "applications")]
    installed: bool,

    /// Output results as JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// procfs root of the local device
    #[arg(long, value_name = "DIR", env = "DPS_PROC_ROOT", default_value = "/proc")]
    proc_root: PathBuf,

    /// Desktop-entry directories of the local device (colon-separated)
    #[arg(long, value_name = "DIRS", env = "DPS_APP_DIRS", value_delimiter = ':')]
    app_dirs: Option<Vec<PathBuf>>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let cli_level = if cli.quiet {
        Some(LogLevel::Error)
    } else {
        match cli.verbose {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    };
    init_logging(&LogConfig::from_env(cli_level));

    let opts = ListOptions {
        applications: cli.applications,
        include_all: cli.installed,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };
    // clap's `requires` already enforces this for the CLI; validating here
    // keeps the check ahead of any device work for every caller.
    if let Err(e) = opts.validate() {
        error!("{}", e);
        std::process::exit(ExitCode::ArgsError.as_i32());
    }

    let device = match cli.app_dirs {
        Some(app_dirs) => LocalDevice::with_paths(cli.proc_root, app_dirs),
        None => LocalDevice::with_proc_root(cli.proc_root),
    };

    let code = if opts.applications {
        run_applications(&device, &opts)
    } else {
        run_processes(&device, &opts)
    };
    std::process::exit(code.as_i32());
}

fn run_processes(device: &dyn Device, opts: &ListOptions) -> ExitCode {
    let processes = match list::list_processes(device) {
        Ok(processes) => processes,
        Err(e) => {
            error!("Failed to enumerate processes: {}", e);
            return ExitCode::EnumerationFail;
        }
    };

    match opts.format {
        OutputFormat::Text => {
            if processes.is_empty() {
                error!("No running processes.");
            } else {
                print!("{}", render::process_table(&processes));
            }
        }
        OutputFormat::Json => {
            let rows = render::process_rows(&processes);
            println!("{}", serde_json::to_string_pretty(&rows).unwrap());
        }
    }
    ExitCode::Clean
}

fn run_applications(device: &dyn Device, opts: &ListOptions) -> ExitCode {
    let applications = match list::list_applications(device, opts.include_all) {
        Ok(applications) => applications,
        Err(e) => {
            error!("Failed to enumerate applications: {}", e);
            return ExitCode::EnumerationFail;
        }
    };

    match opts.format {
        OutputFormat::Text => {
            if !applications.is_empty() {
                print!("{}", render::application_table(&applications));
            } else if opts.include_all {
                error!("No installed applications.");
            } else {
                error!("No running applications.");
            }
        }
        OutputFormat::Json => {
            let rows = render::application_rows(&applications);
            println!("{}", serde_json::to_string_pretty(&rows).unwrap());
        }
    }
    ExitCode::Clean
}
