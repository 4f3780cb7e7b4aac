//! Run configuration assembled from command-line arguments.

use crate::core::error::{Error, Result};
use crate::ui::cli::Cli;
use std::path::PathBuf;

/// Validated configuration for a single checking run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Path to the YARA rule file to compile.
    pub rules_path: PathBuf,
    /// Path to the file or directory to check.
    pub input_path: PathBuf,
    /// Show debug-level output.
    pub verbose: bool,
}

impl CheckConfig {
    /// Build and validate a configuration from parsed arguments.
    ///
    /// All argument validation happens here, once: both paths must be
    /// present, and the rules path must name an existing regular file.
    /// The input path is only resolved later, at check time.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let rules_path = cli
            .yara
            .clone()
            .ok_or(Error::MissingArgument { name: "--yara" })?;
        let input_path = cli
            .input
            .clone()
            .ok_or(Error::MissingArgument { name: "--input" })?;

        if !rules_path.is_file() {
            return Err(Error::RulesNotAFile(rules_path));
        }

        Ok(Self {
            rules_path,
            input_path,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(yara: Option<&str>, input: Option<&str>) -> Cli {
        Cli {
            yara: yara.map(PathBuf::from),
            input: input.map(PathBuf::from),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let rules = tempfile::NamedTempFile::new().unwrap();
        let rules_path = rules.path().to_string_lossy().into_owned();

        let config = CheckConfig::from_cli(&cli(Some(&rules_path), Some("/target"))).unwrap();
        assert_eq!(config.rules_path, rules.path());
        assert_eq!(config.input_path, PathBuf::from("/target"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_missing_yara_argument() {
        let err = CheckConfig::from_cli(&cli(None, Some("/target"))).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { name: "--yara" }));
    }

    #[test]
    fn test_missing_input_argument() {
        let err = CheckConfig::from_cli(&cli(Some("/rules.yar"), None)).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { name: "--input" }));
    }

    #[test]
    fn test_rules_path_must_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_string_lossy().into_owned();

        let err = CheckConfig::from_cli(&cli(Some(&dir_path), Some("/target"))).unwrap_err();
        assert!(matches!(err, Error::RulesNotAFile(_)));
    }
}
