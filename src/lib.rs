//! yara-check: test a YARA rule file against a set of files, or a file.
//!
//! This crate compiles a YARA rule file with the yara-x engine and
//! applies it to one file or every regular file directly inside a
//! directory, logging matched rule identifiers.

pub mod core;
pub mod detection;
pub mod scanner;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::config::CheckConfig;
pub use crate::core::error::{Error, Result};
pub use crate::detection::CompiledRules;
pub use crate::scanner::{CheckOutcome, CheckReport, RuleChecker};
