//! Fake command runner shared by the unit tests.

use std::cell::RefCell;
use std::io;

use zkup_core::command::{CommandRunner, ToolCommand};
use zkup_core::error::{Result, ZkupError};

/// Records every command instead of running it; optionally fails the n-th call.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<ToolCommand>>,
    fail_at: Option<usize>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    pub fn calls(&self) -> Vec<ToolCommand> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ToolCommand) -> Result<()> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(command.clone());
        if self.fail_at == Some(index) {
            return Err(ZkupError::CommandSpawn {
                command: command.to_string(),
                source: io::Error::other("simulated failure"),
            });
        }
        Ok(())
    }
}
