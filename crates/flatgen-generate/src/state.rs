use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::errors::GenerationError;

/// Lifecycle of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Init,
    SchemasComputed,
    HeaderWritten,
    BodyWritten,
    TrailerWritten,
    Done,
    Failed,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Init => "init",
            RunState::SchemasComputed => "schemas_computed",
            RunState::HeaderWritten => "header_written",
            RunState::BodyWritten => "body_written",
            RunState::TrailerWritten => "trailer_written",
            RunState::Done => "done",
            RunState::Failed => "failed",
        }
    }

    fn successor(self) -> Option<RunState> {
        match self {
            RunState::Init => Some(RunState::SchemasComputed),
            RunState::SchemasComputed => Some(RunState::HeaderWritten),
            RunState::HeaderWritten => Some(RunState::BodyWritten),
            RunState::BodyWritten => Some(RunState::TrailerWritten),
            RunState::TrailerWritten => Some(RunState::Done),
            RunState::Done | RunState::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forward-only state tracker; a header is never written after the body.
#[derive(Debug)]
pub struct RunStateMachine {
    state: RunState,
}

impl Default for RunStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStateMachine {
    pub fn new() -> Self {
        Self {
            state: RunState::Init,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Move to `to`, which must be the direct successor of the current state.
    pub fn advance(&mut self, to: RunState) -> Result<(), GenerationError> {
        if self.state.successor() != Some(to) {
            return Err(GenerationError::IllegalTransition {
                from: self.state,
                to,
            });
        }
        debug!(from = %self.state, to = %to, "run state advanced");
        self.state = to;
        Ok(())
    }

    /// Any non-terminal state may fail.
    pub fn fail(&mut self) {
        if !self.state.is_terminal() {
            debug!(from = %self.state, "run failed");
            self.state = RunState::Failed;
        }
    }
}
