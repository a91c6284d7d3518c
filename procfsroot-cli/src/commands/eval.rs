//! Command to resolve a path inside a root directory or process wormhole.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{ArgGroup, Args, ValueEnum};
use procfsroot::{Config, Evaluation, Wormhole};
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a root directory or a process's `/proc/<PID>/root`.
#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["root", "pid"])))]
pub struct EvalCommand {
    /// Path to resolve, as seen from inside the root
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Root directory to confine resolution to
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Resolve inside the root filesystem of this process
    #[arg(long, value_name = "PID")]
    pub pid: Option<u32>,

    /// Leave the final path component unresolved
    #[arg(long, conflicts_with = "full_path")]
    pub except_last: bool,

    /// Resolve every path component, overriding an except_last setting
    #[arg(long)]
    pub full_path: bool,

    /// Print the path prefixed with the root, ready to be opened
    #[arg(long)]
    pub host: bool,

    /// Maximum number of symbolic links to follow
    #[arg(long, value_name = "N")]
    pub max_jumps: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for the eval command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The resolved path only
    Text,
    /// The full evaluation as JSON
    Json,
}

impl EvalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let except_last = if self.full_path {
            Some(false)
        } else {
            self.except_last.then_some(true)
        };
        let overrides = Config {
            max_jumps: self.max_jumps,
            procfs: None,
            except_last,
        };
        let config = load_configuration(global, overrides)?;

        let wormhole = match (self.root, self.pid) {
            (Some(root), _) => {
                Wormhole::new(root)?.with_max_jumps(config.max_jumps_or_default())
            }
            (None, Some(pid)) => Wormhole::for_pid_with_config(&config, pid)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "either --root or --pid is required".to_string(),
                ))
            }
        };

        let handling = config.path_handling();
        global.logger.info(&format!(
            "Evaluating {} inside {} ({handling})",
            Path::new(&self.path).display(),
            wormhole.root().display()
        ));

        let evaluation = wormhole.evaluate(&self.path, handling)?;
        global.logger.debug(&format!(
            "Followed {} symbolic link(s)",
            evaluation.jumps()
        ));

        print_evaluation(&evaluation, self.format, self.host)
    }
}

fn print_evaluation(
    evaluation: &Evaluation,
    format: OutputFormat,
    host: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text if host => write_raw(evaluation.host_path().as_os_str())?,
        OutputFormat::Text => write_raw(evaluation.path())?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(evaluation).map_err(io::Error::from)?;
            println!("{json}");
        }
    }
    Ok(())
}

// Paths go out byte for byte so names that are not UTF-8 survive.
fn write_raw(path: &OsStr) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(path.as_bytes())?;
    stdout.write_all(b"\n")
}
