use std::collections::HashMap;
use std::sync::Mutex;

use crate::command::domain::command_runner::{CommandError, CommandRunner};

/// Returns canned output per command line and records every call.
///
/// Commands without a canned entry fail as if the program were missing.
#[derive(Default)]
pub struct CannedRunner {
    outputs: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl CannedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for CannedRunner {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        self.calls.lock().unwrap().push(command.to_string());
        self.outputs
            .get(command)
            .cloned()
            .ok_or_else(|| CommandError::Spawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not canned"),
            })
    }
}
