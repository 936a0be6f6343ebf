//! Module result reporting
//!
//! The executable prints exactly one JSON document on stdout. Ansible reads
//! `changed`, `failed`, `msg`, `diff` and `invocation` from it; any other key
//! is returned to the playbook as part of the registered result.

use serde::Serialize;
use serde_json::{Map, Value};

/// Before/after values of the attributes a run touched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diff {
    pub before: Map<String, Value>,
    pub after: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationReport {
    pub module_args: Value,
}

/// Successful module run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation: Option<InvocationReport>,
    /// Changed parameters by module parameter name
    #[serde(flatten)]
    pub changes: Map<String, Value>,
}

impl ModuleResult {
    /// Nothing changed
    pub fn ok() -> Self {
        Self {
            changed: false,
            diff: None,
            invocation: None,
            changes: Map::new(),
        }
    }

    /// Configuration was (or in check mode would be) changed
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::ok()
        }
    }

    pub fn with_diff(mut self, diff: Diff) -> Self {
        self.diff = Some(diff);
        self
    }

    pub fn with_changes(mut self, changes: Map<String, Value>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_invocation(mut self, module_args: Value) -> Self {
        self.invocation = Some(InvocationReport { module_args });
        self
    }
}

/// Failed module run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleFailure {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
}

impl ModuleFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            changed: false,
            msg: msg.into(),
        }
    }
}
