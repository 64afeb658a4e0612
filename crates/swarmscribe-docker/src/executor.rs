//! External command execution

use crate::error::{DockerError, Result};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;

/// A program plus its arguments
///
/// Arguments are passed to the program as-is; no shell is involved, so
/// format strings such as `{{.Name}} {{.Mode}}` need no quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
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
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs a command to completion and returns its stdout
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Fails with [`DockerError::CommandFailed`] on a nonzero exit,
    /// carrying the captured stderr.
    async fn run(&self, command: &CommandLine) -> Result<String>;
}

/// Executes commands as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, command: &CommandLine) -> Result<String> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: {}", command);

        let output = cmd.output().await.map_err(|source| DockerError::Spawn {
            command: command.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DockerError::CommandFailed {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandLine {
        CommandLine::new("sh").arg("-c").arg(script)
    }

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let command = CommandLine::new("sudo")
            .args(["docker", "service", "ls", "--format"])
            .arg("{{.Name}} {{.Mode}}");
        assert_eq!(
            command.to_string(),
            "sudo docker service ls --format '{{.Name}} {{.Mode}}'"
        );
    }

    #[tokio::test]
    async fn test_run_returns_stdout() {
        let output = ProcessExecutor
            .run(&sh("echo web_api replicated; echo ignored >&2"))
            .await
            .unwrap();
        assert_eq!(output, "web_api replicated\n");
    }

    #[tokio::test]
    async fn test_run_nonzero_exit_carries_stderr() {
        let err = ProcessExecutor
            .run(&sh("echo 'Error: no such service: web_api' >&2; exit 3"))
            .await
            .unwrap_err();

        match &err {
            DockerError::CommandFailed { stderr, status, .. } => {
                assert_eq!(stderr, "Error: no such service: web_api");
                assert!(status.contains('3'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("no such service"));
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let err = ProcessExecutor
            .run(&CommandLine::new("swarmscribe-definitely-not-installed"))
            .await
            .unwrap_err();
        assert!(matches!(err, DockerError::Spawn { .. }));
    }
}
