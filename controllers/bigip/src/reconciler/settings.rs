//! Objects that always exist: unnamed singletons and keyed objects

use super::Reconciler;
use crate::error::ControllerError;
use crate::reconcile_helpers::{current_values, diff};
use crate::result::ModuleResult;
use bigip_client::{BigIpError, ResourcePath};
use bigip_modules::ModuleDefinition;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

impl Reconciler {
    /// Modify the attributes of an always-present object that differ
    pub(crate) async fn update_settings(
        &self,
        definition: &ModuleDefinition,
        path: &ResourcePath,
        desired: Map<String, Value>,
    ) -> Result<ModuleResult, ControllerError> {
        if desired.is_empty() {
            debug!("No attributes requested for {}", path);
            return Ok(ModuleResult::ok());
        }

        let current = self.client.load(path).await.map_err(|e| {
            if let BigIpError::NotFound(_) = e {
                // Keyed objects cannot be created; a missing one is a bad name
                warn!("{} does not exist on the device", path);
            }
            ControllerError::from(e)
        })?;

        let changes = diff(definition, &desired, &current);
        if changes.is_empty() {
            debug!("{} is up to date", path);
            return Ok(ModuleResult::ok());
        }

        let attributes: Vec<&str> = changes.keys().map(String::as_str).collect();
        info!("{} differs in {}, updating", path, attributes.join(", "));
        if self.context.check_mode {
            info!("Check mode: not modifying {}", path);
        } else {
            self.client.modify(path, &Value::Object(changes.clone())).await?;
            info!("Updated {}", path);
        }

        let before = current_values(&changes, &current);
        Ok(self.changed_result(definition, &changes, before))
    }
}
