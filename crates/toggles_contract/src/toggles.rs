use std::collections::BTreeMap;

pub const DEFAULT_TOGGLES_NAMESPACE: &str = "/toggles/";
pub const NAMESPACE_SEPARATOR: char = '/';

/// Fully-qualified parameter name to raw string value.
pub type ToggleMap = BTreeMap<String, String>;

/// True when `name` sits directly under `namespace`, with no nested path segment.
pub fn is_direct_child(namespace: &str, name: &str) -> bool {
    match name.strip_prefix(namespace) {
        Some(leaf) => !leaf.is_empty() && !leaf.contains(NAMESPACE_SEPARATOR),
        None => false,
    }
}

pub fn toggles_to_json(toggles: &ToggleMap) -> Result<String, serde_json::Error> {
    serde_json::to_string(toggles)
}
