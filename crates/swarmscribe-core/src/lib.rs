//! swarmscribe core
//!
//! Data model and pure transformations for rebuilding Compose files from a
//! running Docker Swarm:
//!
//! - [`parser`] turns `docker service ls`, `docker network ls` and
//!   `docker service inspect` output into typed values
//! - [`translator`] maps one inspected service onto a Compose service
//! - [`emitter`] renders a [`ComposeDocument`] as YAML and validates it
//!
//! Nothing in this crate runs commands or touches the filesystem.

pub mod emitter;
pub mod error;
pub mod model;
pub mod parser;
pub mod translator;

pub use emitter::{serialize, validate};
pub use error::{EmitError, ParseError, Result};
pub use model::*;
pub use parser::{parse_inspect, parse_network_list, parse_service_list};
pub use translator::{StackDocumentBuilder, TranslatedService, translate};
