//! Reconciliation of BIG-IP objects against validated module parameters.
//!
//! This module is organized by object kind:
//! - `named`: objects that can be created and deleted (including children such as pool members)
//! - `settings`: unnamed singletons and keyed objects that can only be modified

pub mod named;
pub mod settings;


use crate::error::ControllerError;
use crate::invocation::ModuleContext;
use crate::reconcile_helpers::{desired_state, reportable_changes, resource_path};
use crate::result::{Diff, ModuleResult};
use bigip_client::BigIpClientTrait;
use bigip_modules::{ModuleDefinition, ModuleParams, ObjectKind};
use serde_json::{Map, Value};
use tracing::debug;

/// Drives one module run against a device.
pub struct Reconciler {
    pub(crate) client: Box<dyn BigIpClientTrait>,
    pub(crate) context: ModuleContext,
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("base_url", &self.client.base_url())
            .field("context", &self.context)
            .finish()
    }
}

impl Reconciler {
    pub fn new(client: Box<dyn BigIpClientTrait>, context: ModuleContext) -> Self {
        Self { client, context }
    }

    /// Bring the object described by `params` to the requested state
    pub async fn reconcile(
        &self,
        definition: &ModuleDefinition,
        params: &ModuleParams,
    ) -> Result<ModuleResult, ControllerError> {
        let path = resource_path(definition, params)?;
        let desired = desired_state(definition, params);
        debug!(
            "Reconciling {} at {} ({} attributes, check_mode={})",
            definition.name,
            path,
            desired.len(),
            self.context.check_mode
        );

        match definition.kind {
            ObjectKind::Named { .. } | ObjectKind::Child { .. } => {
                if params.get_str("state") == Some("absent") {
                    self.ensure_absent(&path).await
                } else {
                    self.ensure_present(definition, &path, desired).await
                }
            }
            ObjectKind::Unnamed | ObjectKind::Keyed => self.update_settings(definition, &path, desired).await,
        }
    }

    /// Result for a run that changed `changes`, with a diff when asked for
    pub(crate) fn changed_result(
        &self,
        definition: &ModuleDefinition,
        changes: &Map<String, Value>,
        before: Map<String, Value>,
    ) -> ModuleResult {
        let result = ModuleResult::changed().with_changes(reportable_changes(definition, changes));
        if self.context.diff_mode {
            result.with_diff(Diff {
                before,
                after: changes.clone(),
            })
        } else {
            result
        }
    }
}
