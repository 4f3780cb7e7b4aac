//! Rule compilation and evaluation via the yara-x engine.

pub mod engine;

pub use engine::CompiledRules;
