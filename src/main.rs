//! yara-check: test a YARA rule file against a set of files, or a file.
//!
//! This is the main entry point for the CLI application.

use std::process::ExitCode;

use yara_check::core::config::CheckConfig;
use yara_check::core::error::Result;
use yara_check::detection::CompiledRules;
use yara_check::scanner::{CheckReport, RuleChecker};
use yara_check::ui::cli::Cli;
use yara_check::utils::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(LogConfig::from_verbosity(cli.verbose));

    match run(&cli) {
        Ok(report) => {
            log::debug!(
                "Checked {} file(s), {} matched",
                report.files_checked,
                report.files_matched
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            if e.is_usage() {
                Cli::print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<CheckReport> {
    let config = CheckConfig::from_cli(cli)?;
    let rules = CompiledRules::from_file(&config.rules_path)?;
    let checker = RuleChecker::new(rules);
    checker.check_path(&config.input_path)
}
