//! Mock environment implementation for testing
//!
//! Inputs live in an in-memory map and outputs are recorded instead of
//! published, so action logic can be exercised without process environment
//! or files. A configurable read failure simulates a host that cannot
//! supply its declared inputs.

use super::traits::ActionEnv;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory action environment
///
/// # Examples
///
/// ```
/// use actions_lab::env::{ActionEnv, MockActionEnv};
///
/// let env = MockActionEnv::new();
/// env.add_input("greeting-style", "formal");
/// env.set_output("greeting", "hi").unwrap();
///
/// assert_eq!(env.outputs().get("greeting").map(String::as_str), Some("hi"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockActionEnv {
    inputs: Arc<Mutex<HashMap<String, String>>>,
    outputs: Arc<Mutex<HashMap<String, String>>>,
    read_failure: Arc<Mutex<Option<String>>>,
}

impl MockActionEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an input value by name
    pub fn add_input(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.lock().unwrap().insert(name.into(), value.into());
    }

    /// Make every subsequent input read fail with the given message
    pub fn fail_reads(&self, message: impl Into<String>) {
        *self.read_failure.lock().unwrap() = Some(message.into());
    }

    /// Snapshot of all outputs published so far
    pub fn outputs(&self) -> HashMap<String, String> {
        self.outputs.lock().unwrap().clone()
    }
}

impl ActionEnv for MockActionEnv {
    fn input(&self, name: &str) -> Result<Option<String>> {
        if let Some(message) = self.read_failure.lock().unwrap().clone() {
            return Err(Error::Config(message));
        }
        Ok(self.inputs.lock().unwrap().get(name).cloned())
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
