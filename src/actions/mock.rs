use std::collections::HashMap;
use std::sync::Mutex;

use crate::actions::ActionsKit;
use crate::error::{Result, SemverBuildError};

/// Mock pipeline kit for testing without a runner environment
pub struct MockKit {
    inputs: HashMap<String, String>,
    sha: Option<String>,
    outputs: Mutex<Vec<(String, String)>>,
}

impl MockKit {
    /// Create an empty mock kit with no inputs and no revision
    pub fn new() -> Self {
        MockKit {
            inputs: HashMap::new(),
            sha: None,
            outputs: Mutex::new(Vec::new()),
        }
    }

    /// Preset a named input
    pub fn set_input(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(name.into(), value.into());
    }

    /// Preset the abbreviated revision identifier
    pub fn set_sha(&mut self, sha: impl Into<String>) {
        self.sha = Some(sha.into());
    }

    /// Outputs recorded so far, in call order
    pub fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().expect("outputs lock poisoned").clone()
    }
}

impl Default for MockKit {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionsKit for MockKit {
    fn get_input(&self, name: &str) -> Option<String> {
        self.inputs.get(name).cloned().filter(|v| !v.is_empty())
    }

    fn abbreviated_sha(&self) -> Result<String> {
        self.sha
            .clone()
            .ok_or(SemverBuildError::MissingArgument("sha"))
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs
            .lock()
            .expect("outputs lock poisoned")
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn debug(&self, _message: &str) {}
}
