//! Swarm service → Compose service translation

use crate::model::{
    ComposeDocument, ComposeService, DeployConfig, InspectRecord, Mount, NetworkMap, PortConfig,
    ServiceIdentity, UpdatePolicy, UpdatePolicySpec,
};
use std::collections::BTreeSet;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// A translated service plus the networks it references
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedService {
    pub service: ComposeService,
    pub networks: BTreeSet<String>,
}

/// Map one inspected swarm service onto a Compose service
pub fn translate(
    record: &InspectRecord,
    identity: &ServiceIdentity,
    networks: &NetworkMap,
) -> TranslatedService {
    let spec = &record.spec;
    let container = &spec.task_template.container_spec;

    let mut referenced = BTreeSet::new();
    let service_networks = spec.task_template.networks.as_ref().map(|attachments| {
        attachments
            .iter()
            .map(|attachment| {
                let name = networks.resolve(&attachment.target);
                referenced.insert(name.clone());
                name
            })
            .collect()
    });

    let ports = spec
        .endpoint_spec
        .as_ref()
        .and_then(|endpoint| endpoint.ports.as_ref())
        .map(|ports| ports.iter().map(format_port).collect());

    let service = ComposeService {
        image: strip_digest(&container.image).to_string(),
        deploy: DeployConfig {
            mode: identity.mode.clone(),
            replicas: spec.mode.replicas(),
            update_config: translate_policy(&spec.update_config),
            rollback_config: translate_policy(&spec.rollback_config),
        },
        command: container.args.clone(),
        environment: container.env.clone(),
        ports,
        volumes: container
            .mounts
            .as_ref()
            .map(|mounts| mounts.iter().map(format_mount).collect()),
        networks: service_networks,
        labels: container.labels.clone(),
        hostname: container.hostname.clone(),
        stop_grace_period: container.stop_grace_period.map(format_seconds),
    };

    TranslatedService {
        service,
        networks: referenced,
    }
}

/// Drop a `@sha256:...` digest, keeping `repository:tag`
pub fn strip_digest(image: &str) -> &str {
    image.split_once('@').map_or(image, |(reference, _)| reference)
}

/// Nanoseconds → `"<N>s"`, truncating
pub fn format_seconds(nanos: u64) -> String {
    format!("{}s", nanos / NANOS_PER_SECOND)
}

fn translate_policy(policy: &UpdatePolicySpec) -> UpdatePolicy {
    UpdatePolicy {
        parallelism: policy.parallelism,
        failure_action: policy.failure_action.clone(),
        monitor: format_seconds(policy.monitor),
        max_failure_ratio: policy.max_failure_ratio,
        order: policy.order.clone(),
    }
}

fn format_port(port: &PortConfig) -> String {
    match port.published_port {
        Some(published) => format!("{}:{}/{}", published, port.target_port, port.protocol),
        None => format!("{}/{}", port.target_port, port.protocol),
    }
}

fn format_mount(mount: &Mount) -> String {
    match &mount.source {
        Some(source) => format!("{}:{}", source, mount.target),
        None => mount.target.clone(),
    }
}

/// Accumulates the services of one stack into a single document
pub struct StackDocumentBuilder<'a> {
    networks: &'a NetworkMap,
    document: ComposeDocument,
}

impl<'a> StackDocumentBuilder<'a> {
    pub fn new(version: Option<String>, networks: &'a NetworkMap) -> Self {
        Self {
            networks,
            document: ComposeDocument::new(version),
        }
    }

    /// Translate a service and add it under its intra-stack name
    pub fn add(&mut self, identity: &ServiceIdentity, record: &InspectRecord) -> &mut Self {
        let translated = translate(record, identity, self.networks);
        for name in translated.networks {
            self.document.register_network(name);
        }
        self.document
            .services
            .insert(identity.service.clone(), translated.service);
        self
    }

    pub fn build(self) -> ComposeDocument {
        self.document
    }
}
