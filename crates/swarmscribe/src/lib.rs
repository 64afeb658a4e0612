//! swarmscribe
//!
//! Rebuilds one docker-compose file per stack from the services running on
//! a Docker Swarm. [`run`] drives a whole pass; the binary is a thin launcher
//! around it.

pub mod error;
pub mod run;
pub mod writer;

pub use error::{Result, RunError};
pub use run::{RunOptions, RunReport, StackOutcome, StackReport, run};
