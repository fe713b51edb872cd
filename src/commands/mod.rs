//! Command handlers. Each submodule owns one command family and prints its
//! result to stdout; errors bubble up to main for a single exit path.

pub mod cve;
pub mod form;
pub mod generate;
pub mod golden;
pub mod hosts;
pub mod profile;
pub mod tools;

use crate::api::GeneratorClient;
use crate::error::{ClientError, Result};
use crate::store::{FormStore, ResultCache, StateDir};

/// Handler context shared by every command
pub struct App {
    pub client: GeneratorClient,
    pub dir: StateDir,
    pub forms: FormStore,
    pub cache: ResultCache,
}

impl App {
    pub fn new(client: GeneratorClient, dir: StateDir) -> Self {
        Self {
            forms: FormStore::new(dir.clone()),
            cache: ResultCache::new(dir.clone()),
            client,
            dir,
        }
    }
}

/// Split a "key=value" argument. The value may be empty (clears the field).
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ClientError::validation(format!(
            "expected key=value, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_on_first_equals() {
        let (k, v) = parse_assignment("custom_banner=a=b").unwrap();
        assert_eq!(k, "custom_banner");
        assert_eq!(v, "a=b");
    }

    #[test]
    fn assignment_without_key_is_rejected() {
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("novalue").is_err());
    }
}
