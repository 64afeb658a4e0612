//! Compose YAML output

use crate::error::EmitError;
use crate::model::ComposeDocument;

/// Render a document as block-style YAML
pub fn serialize(document: &ComposeDocument) -> Result<String, EmitError> {
    Ok(serde_yaml::to_string(document)?)
}

/// Check that emitted text parses back as YAML
///
/// Returns `false` instead of an error; an invalid document is reported per
/// stack rather than aborting the run.
pub fn validate(text: &str) -> bool {
    serde_yaml::from_str::<serde_yaml::Value>(text).is_ok()
}
