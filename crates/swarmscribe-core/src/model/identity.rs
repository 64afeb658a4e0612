//! Service identity

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// A swarm service as listed by `docker service ls`
///
/// `stack` and `service` are derived from `full_name` by splitting on its
/// last underscore, so `format!("{stack}_{service}") == full_name` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    pub full_name: String,
    pub stack: String,
    pub service: String,
    /// Mode column as reported ("replicated", "global", ...)
    pub mode: String,
}

impl ServiceIdentity {
    pub fn new(full_name: impl Into<String>, mode: impl Into<String>) -> Result<Self> {
        let full_name = full_name.into();
        let (stack, service) = split_full_name(&full_name)
            .ok_or_else(|| ParseError::InvalidServiceName(full_name.clone()))?;

        Ok(Self {
            stack: stack.to_string(),
            service: service.to_string(),
            full_name,
            mode: mode.into(),
        })
    }
}

/// Split `stack_service` on the last underscore
///
/// The stack part may contain underscores itself. Both parts must be non-empty.
pub fn split_full_name(full_name: &str) -> Option<(&str, &str)> {
    match full_name.rsplit_once('_') {
        Some((stack, service)) if !stack.is_empty() && !service.is_empty() => {
            Some((stack, service))
        }
        _ => None,
    }
}
