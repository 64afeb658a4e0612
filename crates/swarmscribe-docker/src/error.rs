//! docker CLI error types

use swarmscribe_core::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockerError {
    #[error("Docker command failed: `{command}` ({status})\n{stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run `{command}`: {source}\nHint: is the docker CLI installed and on PATH?")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, DockerError>;
