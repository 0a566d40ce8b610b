//! Test doubles for [`CommandRunner`].

use crate::process::{CommandRunner, ProcessError, ToolCommand};
use std::cell::RefCell;
use std::collections::HashSet;

/// Records every command instead of spawning it.
///
/// Commands whose program or any argument matches a registered failure
/// return [`ProcessError::ExitStatus`] with code 1.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<ToolCommand>>,
    failing: HashSet<String>,
}

impl RecordingRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fail_on(mut self, needle: impl Into<String>) -> Self {
        self.failing.insert(needle.into());
        self
    }

    #[must_use]
    pub fn commands(&self) -> Vec<ToolCommand> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ToolCommand) -> Result<(), ProcessError> {
        self.commands.borrow_mut().push(command.clone());

        let fails = self.failing.contains(command.program())
            || command.args_lossy().iter().any(|arg| self.failing.contains(arg));

        if fails {
            return Err(ProcessError::ExitStatus { command: command.to_string(), code: Some(1) });
        }
        Ok(())
    }
}
