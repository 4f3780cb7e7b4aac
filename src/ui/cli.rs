//! Command-line interface definition.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Test a YARA rule file against a set of files, or a file
#[derive(Parser, Debug)]
#[command(name = "yara-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File of YARA rules to process
    #[arg(short, long)]
    pub yara: Option<PathBuf>,

    /// Path of file or directory to check for matches (directories are
    /// not recursed)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Print usage help, as shown for missing required arguments.
    pub fn print_usage() {
        let _ = Self::command().print_help();
    }
}
