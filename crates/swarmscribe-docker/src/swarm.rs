//! Swarm queries

use crate::error::Result;
use crate::executor::{CommandExecutor, CommandLine};
use std::collections::BTreeMap;
use swarmscribe_core::{
    InspectRecord, NetworkMap, ServiceIdentity, parse_inspect, parse_network_list,
    parse_service_list,
};

const SERVICE_LS_FORMAT: &str = "{{.Name}} {{.Mode}}";
const NETWORK_LS_FORMAT: &str = "{{.ID}} {{.Name}}";

/// How the docker CLI is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerInvocation {
    pub program: String,
    pub sudo: bool,
}

impl Default for DockerInvocation {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
            sudo: true,
        }
    }
}

impl DockerInvocation {
    /// Build `[sudo] docker <args...>`
    pub fn command<I, S>(&self, args: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = if self.sudo {
            CommandLine::new("sudo").arg(&self.program)
        } else {
            CommandLine::new(&self.program)
        };
        base.args(args)
    }
}

/// Read-only view of a swarm through the docker CLI
pub struct SwarmClient<E> {
    executor: E,
    docker: DockerInvocation,
}

impl<E: CommandExecutor> SwarmClient<E> {
    pub fn new(executor: E, docker: DockerInvocation) -> Self {
        Self { executor, docker }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// All services, keyed by full name
    pub async fn list_services(&self) -> Result<BTreeMap<String, ServiceIdentity>> {
        let command = self
            .docker
            .command(["service", "ls", "--format", SERVICE_LS_FORMAT]);
        let output = self.executor.run(&command).await?;
        Ok(parse_service_list(&output)?)
    }

    /// Short network id → network name
    pub async fn resolve_networks(&self) -> Result<NetworkMap> {
        let command = self
            .docker
            .command(["network", "ls", "--format", NETWORK_LS_FORMAT]);
        let output = self.executor.run(&command).await?;
        Ok(parse_network_list(&output)?)
    }

    /// Inspect each service in turn
    ///
    /// Stops at the first failure; no partial result is returned.
    pub async fn inspect<I, S>(&self, names: I) -> Result<BTreeMap<String, InspectRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let command = self.docker.command(["service", "inspect", name]);
            let output = self.executor.run(&command).await?;
            records.insert(name.to_string(), parse_inspect(name, &output)?);
        }
        tracing::debug!("Inspected {} services", records.len());
        Ok(records)
    }
}
