use thiserror::Error;
use toggles_contract::events::{HttpRequestEvent, HttpResponseEvent};
use toggles_contract::toggles::{is_direct_child, toggles_to_json, ToggleMap};
use tracing::{debug, info, warn};

use crate::adapters::parameter_store::{ParameterPages, ParameterStore, ParameterStoreError};
use crate::config::ToggleHandlerConfig;

pub const UPSTREAM_FAILURE_STATUS: u16 = 500;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error(transparent)]
    Store(#[from] ParameterStoreError),

    #[error("failed to serialize toggles: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Drains every page under the toggles namespace into a fresh toggle map.
///
/// Entries that are not direct children of the namespace are dropped. A name
/// seen again on a later page replaces the earlier value.
pub fn collect_toggles(
    store: &dyn ParameterStore,
    config: &ToggleHandlerConfig,
) -> Result<ToggleMap, ToggleError> {
    let mut toggles = ToggleMap::new();

    for page in ParameterPages::new(store, config.namespace()) {
        let parameters = page?;
        debug!(entries = parameters.len(), "fetched parameter page");

        for parameter in parameters {
            if !is_direct_child(config.namespace(), &parameter.name) {
                debug!(name = %parameter.name, "skipping parameter outside namespace");
                continue;
            }
            toggles.insert(parameter.name, parameter.value);
        }
    }

    Ok(toggles)
}

/// Serves the full toggle snapshot, or a bare 500 if the store fails at any point.
///
/// The request is not inspected.
pub fn get_toggles(
    _request: &HttpRequestEvent,
    store: &dyn ParameterStore,
    config: &ToggleHandlerConfig,
) -> HttpResponseEvent {
    let body = collect_toggles(store, config).and_then(|toggles| {
        info!(
            toggles = toggles.len(),
            namespace = %config.namespace(),
            "collected toggles"
        );
        toggles_to_json(&toggles).map_err(ToggleError::from)
    });

    match body {
        Ok(body) => HttpResponseEvent::with_body(body),
        Err(error) => {
            warn!(%error, namespace = %config.namespace(), "failed to load toggles");
            HttpResponseEvent::with_status(UPSTREAM_FAILURE_STATUS)
        }
    }
}
