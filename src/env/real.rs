//! Production environment implementation
//!
//! Follows the GitHub Actions runner conventions: inputs arrive as
//! `INPUT_<NAME>` environment variables (name uppercased, dashes mapped to
//! underscores), outputs are appended to the file named by `GITHUB_OUTPUT`.
//! When no `GITHUB_OUTPUT` is set (a plain local invocation) outputs are
//! printed as `name=value` lines on stdout instead.

use super::traits::ActionEnv;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::env::VarError;
use std::fs::OpenOptions;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct RealActionEnv {
    overrides: HashMap<String, String>,
}

impl RealActionEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit input values that take precedence over `INPUT_*` variables
    ///
    /// Used to wire command-line flags into the action without mutating the
    /// process environment.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    fn input_var(name: &str) -> String {
        format!("INPUT_{}", name.to_uppercase().replace('-', "_"))
    }
}

impl ActionEnv for RealActionEnv {
    fn input(&self, name: &str) -> Result<Option<String>> {
        if let Some(value) = self.overrides.get(name) {
            return Ok(Some(value.clone()));
        }
        match std::env::var(Self::input_var(name)) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::Config(format!(
                "input '{name}' is not valid unicode"
            ))),
        }
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match std::env::var("GITHUB_OUTPUT") {
            Ok(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{name}={value}")?;
            }
            Err(_) => {
                println!("{name}={value}");
            }
        }
        Ok(())
    }
}
