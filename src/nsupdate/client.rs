use super::invocation::Invocation;
use crate::error::UpdateError;
use async_trait::async_trait;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One line of output from the update tool, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub stream: Stream,
    pub text: String,
}

/// Where relayed tool output ends up.
pub trait Console: Send {
    fn emit(&mut self, line: &OutputLine) -> io::Result<()>;
}

/// Writes stdout lines to our stdout and stderr lines to our stderr.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn emit(&mut self, line: &OutputLine) -> io::Result<()> {
        match line.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line.text),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line.text),
        }
    }
}

/// How the update tool finished. `code` is `None` when it was killed by a
/// signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    pub code: Option<i32>,
}

impl ToolExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[async_trait]
pub trait UpdateTool {
    /// Runs `invocation`, feeds it `payload` on stdin and relays its output
    /// to `console` until it exits.
    async fn submit(
        &self,
        invocation: &Invocation,
        payload: &str,
        console: &mut dyn Console,
    ) -> Result<ToolExit, UpdateError>;
}
