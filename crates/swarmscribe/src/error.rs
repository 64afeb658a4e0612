use std::path::PathBuf;
use swarmscribe_core::EmitError;
use swarmscribe_docker::DockerError;
use thiserror::Error;

/// Errors that end a run
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Docker(#[from] DockerError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("No inspect result for service '{0}'")]
    MissingInspect(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RunError>;
