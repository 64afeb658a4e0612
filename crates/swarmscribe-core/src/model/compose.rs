//! Compose file model
//!
//! Optional fields are skipped on output when absent, so a service only
//! carries the keys its swarm definition actually set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default value of the top-level `version` key
pub const DEFAULT_COMPOSE_VERSION: &str = "3.8";

/// One Compose file, built per stack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub services: BTreeMap<String, ComposeService>,
    #[serde(default)]
    pub networks: BTreeMap<String, ExternalNetwork>,
    /// Always empty; kept so the emitted file has the usual top-level layout
    #[serde(default)]
    pub volumes: BTreeMap<String, serde_yaml::Value>,
}

impl ComposeDocument {
    pub fn new(version: Option<String>) -> Self {
        Self {
            version,
            ..Default::default()
        }
    }

    /// Declare a pre-existing network
    pub fn register_network(&mut self, name: impl Into<String>) {
        self.networks
            .entry(name.into())
            .or_insert_with(ExternalNetwork::default);
    }
}

/// `networks.<name>` entry for a network the document does not manage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalNetwork {
    pub external: bool,
}

impl Default for ExternalNetwork {
    fn default() -> Self {
        Self { external: true }
    }
}

/// `services.<name>` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeService {
    pub image: String,
    pub deploy: DeployConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<String>>,
    /// `published:target/protocol`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
    /// `source:target`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_grace_period: Option<String>,
}

/// `deploy` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u64>,
    pub update_config: UpdatePolicy,
    pub rollback_config: UpdatePolicy,
}

/// `deploy.update_config` / `deploy.rollback_config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePolicy {
    pub parallelism: u64,
    pub failure_action: String,
    /// Whole seconds, e.g. `"5s"`
    pub monitor: String,
    pub max_failure_ratio: f64,
    pub order: String,
}
