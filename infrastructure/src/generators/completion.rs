//! Text-completion boundary
//!
//! The narrowest possible transport interface: system prompt + user prompt
//! in, text out. Everything vendor-specific lives behind it.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Errors from a completion backend
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Failed to spawn completion command: {0}")]
    Spawn(String),

    #[error("Completion command exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command produced no output")]
    Empty,
}

/// Minimal async text-completion capability
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Produce a completion for the given prompts
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
    -> Result<String, CompletionError>;
}

/// Completion backend that shells out to an external command
///
/// The command receives any configured arguments, then the system prompt as
/// the final argument; the user prompt is written to stdin and the response
/// read from stdout. Non-zero exit is a failure regardless of output.
pub struct CommandCompletion {
    program: String,
    args: Vec<String>,
}

impl CommandCompletion {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

#[async_trait]
impl TextCompletion for CommandCompletion {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        debug!(program = %self.program, "spawning completion command");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(system_prompt)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CompletionError::Spawn(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(user_prompt.as_bytes()).await?;
            // close stdin so the command sees EOF
            drop(stdin);
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(CompletionError::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if stdout.trim().is_empty() {
            return Err(CompletionError::Empty);
        }
        Ok(stdout)
    }
}
