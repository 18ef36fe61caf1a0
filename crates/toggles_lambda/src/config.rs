use toggles_contract::toggles::DEFAULT_TOGGLES_NAMESPACE;

/// Handler settings. The namespace is fixed to `/toggles/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleHandlerConfig {
    namespace: String,
}

impl Default for ToggleHandlerConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_TOGGLES_NAMESPACE.to_string(),
        }
    }
}

impl ToggleHandlerConfig {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
