//! Objects with a create/delete lifecycle

use super::Reconciler;
use crate::error::ControllerError;
use crate::reconcile_helpers::{check_create_only, current_values, diff};
use crate::result::{Diff, ModuleResult};
use bigip_client::{BigIpError, ResourcePath};
use bigip_modules::ModuleDefinition;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

impl Reconciler {
    /// Create the object when missing, otherwise modify the attributes that differ
    pub(crate) async fn ensure_present(
        &self,
        definition: &ModuleDefinition,
        path: &ResourcePath,
        desired: Map<String, Value>,
    ) -> Result<ModuleResult, ControllerError> {
        let current = match self.client.load(path).await {
            Ok(current) => current,
            Err(BigIpError::NotFound(_)) => return self.create(definition, path, desired).await,
            Err(e) => {
                error!("Failed to load {}: {}", path, e);
                return Err(e.into());
            }
        };

        let changes = diff(definition, &desired, &current);
        if changes.is_empty() {
            debug!("{} is up to date", path);
            return Ok(ModuleResult::ok());
        }
        check_create_only(definition, path, &changes, &current)?;

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

    async fn create(
        &self,
        definition: &ModuleDefinition,
        path: &ResourcePath,
        desired: Map<String, Value>,
    ) -> Result<ModuleResult, ControllerError> {
        info!("{} does not exist, creating", path);
        if self.context.check_mode {
            info!("Check mode: not creating {}", path);
        } else {
            self.client.create(path, &Value::Object(desired.clone())).await?;
            info!("Created {}", path);
        }
        Ok(self.changed_result(definition, &desired, Map::new()))
    }

    /// Delete the object when it exists
    pub(crate) async fn ensure_absent(&self, path: &ResourcePath) -> Result<ModuleResult, ControllerError> {
        if !self.client.exists(path).await? {
            debug!("{} already absent", path);
            return Ok(ModuleResult::ok());
        }

        let before = if self.context.diff_mode {
            self.client.load(path).await?.properties
        } else {
            Map::new()
        };

        info!("Deleting {}", path);
        if self.context.check_mode {
            info!("Check mode: not deleting {}", path);
        } else {
            self.client.delete(path).await?;
            info!("Deleted {}", path);
        }

        let result = ModuleResult::changed();
        Ok(if self.context.diff_mode {
            result.with_diff(Diff {
                before,
                after: Map::new(),
            })
        } else {
            result
        })
    }
}
