use crate::shell::{run_piped, ShellError};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),
    #[error("Command `{0}` produced no output")]
    EmptyOutput(String),
}

/// A target that transforms piped bytes into new bytes.
pub trait PipeTarget {
    /// Pipe the input to the target and return what it wrote to stdout.
    fn pipe(&self, input: &[u8]) -> Result<Vec<u8>, PipeError>;
}

/// An external program fed through stdin, with its stdout captured.
#[derive(Debug, Clone)]
pub struct CommandPipe {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
    allow_empty: bool,
}

impl CommandPipe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
            allow_empty: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Kill the program if it has not finished within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Accept a successful run that wrote nothing to stdout.
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl PipeTarget for CommandPipe {
    fn pipe(&self, input: &[u8]) -> Result<Vec<u8>, PipeError> {
        let output = run_piped(&self.program, &self.args, input, self.timeout)?;
        if output.is_empty() && !self.allow_empty {
            return Err(PipeError::EmptyOutput(self.program.clone()));
        }
        Ok(output)
    }
}
