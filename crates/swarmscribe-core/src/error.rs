use thiserror::Error;

/// Malformed output from one of the docker queries
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("service list line {line} has no mode column: {content:?}")]
    MissingMode { line: usize, content: String },

    #[error(
        "service name '{0}' cannot be split into stack and service\nHint: swarm stack services are named <stack>_<service>"
    )]
    InvalidServiceName(String),

    #[error("network list line {line} must have exactly two columns (id, name): {content:?}")]
    MalformedNetworkLine { line: usize, content: String },

    #[error("inspect output for service '{service}' is not valid JSON: {source}")]
    InspectPayload {
        service: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("inspect output for service '{0}' is empty")]
    EmptyInspect(String),
}

/// Failure to render a Compose document
#[derive(Error, Debug)]
#[error("Compose YAML serialization failed: {0}")]
pub struct EmitError(#[from] pub serde_yaml::Error);

pub type Result<T> = std::result::Result<T, ParseError>;
