//! Data model
//!
//! Swarm-side types (what docker reports) and Compose-side types (what gets
//! written) live in separate modules.

mod compose;
mod identity;
mod inspect;
mod network;

pub use compose::*;
pub use identity::*;
pub use inspect::*;
pub use network::*;
