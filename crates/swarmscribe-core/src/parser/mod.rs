//! Docker CLI output parsers
//!
//! Each parser reports malformed input as a [`ParseError`] naming the
//! offending line instead of dropping it.

use crate::error::{ParseError, Result};
use crate::model::{InspectRecord, NetworkMap, ServiceIdentity};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Parse `docker service ls --format '{{.Name}} {{.Mode}}'`
///
/// Only the first whitespace run separates the name from the mode; the rest
/// of the line is kept as the mode verbatim. Blank lines are ignored.
pub fn parse_service_list(output: &str) -> Result<BTreeMap<String, ServiceIdentity>> {
    let mut services = BTreeMap::new();

    for (idx, raw) in output.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (full_name, mode) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim_start()))
            .filter(|(_, mode)| !mode.is_empty())
            .ok_or_else(|| ParseError::MissingMode {
                line: idx + 1,
                content: raw.to_string(),
            })?;

        let identity = ServiceIdentity::new(full_name, mode)?;
        services.insert(identity.full_name.clone(), identity);
    }

    tracing::debug!("Parsed {} services", services.len());
    Ok(services)
}

/// Parse `docker network ls --format '{{.ID}} {{.Name}}'`
pub fn parse_network_list(output: &str) -> Result<NetworkMap> {
    let mut networks = NetworkMap::new();

    for (idx, raw) in output.lines().enumerate() {
        let columns: Vec<&str> = raw.split_whitespace().collect();
        match columns.as_slice() {
            [] => continue,
            [id, name] => networks.insert(id, *name),
            _ => {
                return Err(ParseError::MalformedNetworkLine {
                    line: idx + 1,
                    content: raw.to_string(),
                });
            }
        }
    }

    tracing::debug!("Parsed {} networks", networks.len());
    Ok(networks)
}

/// Parse `docker service inspect <service>` and keep the first element
pub fn parse_inspect(service: &str, output: &str) -> Result<InspectRecord> {
    let records: Vec<InspectRecord> =
        serde_json::from_str(output).map_err(|source| ParseError::InspectPayload {
            service: service.to_string(),
            source,
        })?;

    records
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::EmptyInspect(service.to_string()))
}
