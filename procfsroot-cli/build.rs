//! Build script for procfsroot-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, ArgGroup, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("procfsroot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths inside /proc/[PID]/root wormholes")
        .long_about(
            "Resolve symbolic links in a path as if a given directory, such as \
             /proc/[PID]/root, were the filesystem root. Absolute links are \
             interpreted relative to that root and no path may climb out of it.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of the user configuration")
                .value_name("FILE")
                .global(true)
                .env("PROCFSROOT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("eval")
                .about("Resolve a path relative to a root directory or process")
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(Arg::new("root").long("root").value_name("DIR"))
                .arg(Arg::new("pid").long("pid").value_name("PID"))
                .group(ArgGroup::new("target").required(true).args(["root", "pid"]))
                .arg(
                    Arg::new("except-last")
                        .long("except-last")
                        .help("Leave the final path component unresolved")
                        .conflicts_with("full-path")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("full-path")
                        .long("full-path")
                        .help("Resolve every path component, overriding an except_last setting")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("Print the path prefixed with the root")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-jumps")
                        .long("max-jumps")
                        .value_name("N")
                        .help("Maximum number of symbolic links to follow"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["text", "json"])
                        .default_value("text")
                        .help("Output format"),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let man_dir = PathBuf::from(out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("procfsroot.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
