//! docker CLI wrapper for swarmscribe
//!
//! Runs the three read-only queries the rebuild needs:
//!
//! - `docker service ls --format '{{.Name}} {{.Mode}}'`
//! - `docker service inspect <service>`
//! - `docker network ls --format '{{.ID}} {{.Name}}'`
//!
//! Commands go through a [`CommandExecutor`], so the swarm client can be
//! driven by scripted output in tests.
//!
//! # Example
//!
//! ```ignore
//! use swarmscribe_docker::{DockerInvocation, ProcessExecutor, SwarmClient};
//!
//! let client = SwarmClient::new(ProcessExecutor, DockerInvocation::default());
//! let services = client.list_services().await?;
//! let networks = client.resolve_networks().await?;
//! ```

pub mod error;
pub mod executor;
pub mod swarm;

pub use error::{DockerError, Result};
pub use executor::{CommandExecutor, CommandLine, ProcessExecutor};
pub use swarm::{DockerInvocation, SwarmClient};
