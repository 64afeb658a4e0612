//! Network id → name lookup

use std::collections::HashMap;

/// Length of a docker short id
pub const SHORT_ID_LEN: usize = 12;

/// Truncate a docker object id to its short form
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Replace every character outside `[A-Za-z0-9_-]` with `_`
pub fn sanitize_network_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Snapshot of `docker network ls`, keyed by short id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkMap {
    names: HashMap<String, String>,
}

impl NetworkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a network; the id is truncated to its short form
    pub fn insert(&mut self, id: &str, name: impl Into<String>) {
        self.names.insert(short_id(id).to_string(), name.into());
    }

    /// Look up a network name by full or short id
    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(short_id(id)).map(String::as_str)
    }

    /// Compose-safe name for an attachment target
    ///
    /// Falls back to the raw target id when the network is unknown.
    pub fn resolve(&self, target: &str) -> String {
        sanitize_network_name(self.get(target).unwrap_or(target))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for NetworkMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, name) in iter {
            map.insert(id.as_ref(), name);
        }
        map
    }
}
