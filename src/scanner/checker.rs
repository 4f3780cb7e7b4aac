//! Match-checking of files against a compiled rule set.

use crate::core::error::{Error, Result};
use crate::detection::CompiledRules;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of a single match-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// One or more rules matched; carries the matched rule identifiers.
    Matched(Vec<String>),
    /// No rule matched.
    Clean,
}

impl CheckOutcome {
    /// Whether at least one rule matched.
    pub fn is_match(&self) -> bool {
        matches!(self, CheckOutcome::Matched(_))
    }
}

/// Counters accumulated over a completed checking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of files checked.
    pub files_checked: u64,
    /// Number of files with at least one matching rule.
    pub files_matched: u64,
}

impl CheckReport {
    fn record(&mut self, outcome: &CheckOutcome) {
        self.files_checked += 1;
        if outcome.is_match() {
            self.files_matched += 1;
        }
    }
}

/// Applies a compiled rule set to files and logs each outcome.
pub struct RuleChecker {
    rules: CompiledRules,
}

impl RuleChecker {
    /// Create a checker over a compiled rule set.
    pub fn new(rules: CompiledRules) -> Self {
        Self { rules }
    }

    /// Run a single match-check against one file.
    ///
    /// Matches are logged at info level with the file's base name and
    /// the matched rule identifiers; a clean file is logged at debug
    /// level only.
    pub fn check_file(&self, path: &Path) -> Result<CheckOutcome> {
        let matched = self.rules.scan_file(path)?;
        let name = display_name(path);

        if matched.is_empty() {
            log::debug!("No match for [{}]", name);
            Ok(CheckOutcome::Clean)
        } else {
            log::info!("Matched [{}] to [{}]", name, matched.join(", "));
            Ok(CheckOutcome::Matched(matched))
        }
    }

    /// Check a target path: a single file, or every regular file
    /// directly inside a directory.
    ///
    /// Subdirectories are not entered; directory entries that are not
    /// regular files are silently skipped. Enumeration order is
    /// whatever the filesystem returns. A path that is neither a file
    /// nor a directory is an error.
    pub fn check_path(&self, path: &Path) -> Result<CheckReport> {
        let mut report = CheckReport::default();

        if path.is_file() {
            report.record(&self.check_file(path)?);
        } else if path.is_dir() {
            for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
                let entry = entry.map_err(|e| Error::directory_access(path, e.into()))?;
                if entry.file_type().is_file() {
                    report.record(&self.check_file(entry.path())?);
                }
            }
        } else {
            return Err(Error::InvalidInput(path.to_path_buf()));
        }

        Ok(report)
    }
}

/// Base name of a path for log output, falling back to the full path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
