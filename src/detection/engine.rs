//! Compiled YARA rule set evaluation.
//!
//! Thin wrapper around the yara-x engine: compile a rule file once,
//! evaluate the compiled set against raw bytes, report the identifiers
//! of matched rules.

use crate::core::error::{Error, Result};
use std::fs;
use std::path::Path;
use yara_x::{Rules, Scanner};

/// A compiled, immutable YARA rule set.
///
/// Compiled exactly once per invocation and never mutated afterwards.
#[derive(Debug)]
pub struct CompiledRules {
    rules: Rules,
}

impl CompiledRules {
    /// Compile a rule set from YARA source text.
    pub fn from_source(source: &str) -> Result<Self> {
        let rules = yara_x::compile(source).map_err(|e| Error::YaraCompilation(e.to_string()))?;
        Ok(Self { rules })
    }

    /// Compile a rule set from a YARA rule file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        let compiled = Self::from_source(&source)?;
        log::debug!("Compiled rules from {}", path.display());
        Ok(compiled)
    }

    /// Evaluate the rule set against a byte buffer.
    ///
    /// Returns the identifiers of every matched rule, empty if none.
    pub fn scan_data(&self, data: &[u8]) -> Result<Vec<String>> {
        let mut scanner = Scanner::new(&self.rules);
        let results = scanner
            .scan(data)
            .map_err(|e| Error::YaraScan(e.to_string()))?;

        Ok(results
            .matching_rules()
            .map(|rule| rule.identifier().to_string())
            .collect())
    }

    /// Evaluate the rule set against a file's contents.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<String>> {
        let data = fs::read(path).map_err(|e| Error::file_read(path, e))?;
        self.scan_data(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HELLO_RULE: &str = r#"
        rule hello_world {
            strings:
                $greeting = "hello world"
            condition:
                $greeting
        }
    "#;

    const TWO_RULES: &str = r#"
        rule has_mz {
            strings:
                $mz = { 4D 5A }
            condition:
                $mz at 0
        }

        rule mentions_bitcoin {
            strings:
                $btc = "bitcoin" nocase
            condition:
                $btc
        }
    "#;

    #[test]
    fn test_scan_data_match() {
        let rules = CompiledRules::from_source(HELLO_RULE).unwrap();

        let matched = rules.scan_data(b"This contains hello world text").unwrap();
        assert_eq!(matched, vec!["hello_world".to_string()]);
    }

    #[test]
    fn test_scan_data_no_match() {
        let rules = CompiledRules::from_source(HELLO_RULE).unwrap();

        let matched = rules.scan_data(b"nothing of interest").unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_multiple_rules_matched() {
        let rules = CompiledRules::from_source(TWO_RULES).unwrap();

        let mut data = vec![0x4D, 0x5A, 0x90, 0x00];
        data.extend(b"pay Bitcoin to restore your files");

        let mut matched = rules.scan_data(&data).unwrap();
        matched.sort();
        assert_eq!(matched, vec!["has_mz", "mentions_bitcoin"]);
    }

    #[test]
    fn test_invalid_source_fails_to_compile() {
        let err = CompiledRules::from_source("rule broken {").unwrap_err();
        assert!(matches!(err, Error::YaraCompilation(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HELLO_RULE.as_bytes()).unwrap();

        let rules = CompiledRules::from_file(file.path()).unwrap();
        let matched = rules.scan_data(b"hello world").unwrap();
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_from_file_missing() {
        let err = CompiledRules::from_file(Path::new("/no/such/rules.yar")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_scan_file() {
        let rules = CompiledRules::from_source(HELLO_RULE).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"say hello world to the file").unwrap();

        let matched = rules.scan_file(file.path()).unwrap();
        assert_eq!(matched, vec!["hello_world".to_string()]);
    }

    #[test]
    fn test_scan_file_missing() {
        let rules = CompiledRules::from_source(HELLO_RULE).unwrap();

        let err = rules.scan_file(Path::new("/no/such/file")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
