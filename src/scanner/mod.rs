//! File checking against a compiled rule set.

pub mod checker;

pub use checker::{CheckOutcome, CheckReport, RuleChecker};
