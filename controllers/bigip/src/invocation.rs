//! Ansible binary-module invocation
//!
//! Ansible runs a binary module with one argument: the path of a JSON file
//! holding the module arguments, either bare or wrapped in
//! `ANSIBLE_MODULE_ARGS`. Internal `_ansible_*` keys carry check and diff mode.

use crate::error::ControllerError;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const WRAPPER_KEY: &str = "ANSIBLE_MODULE_ARGS";
const CHECK_MODE_KEY: &str = "_ansible_check_mode";
const DIFF_MODE_KEY: &str = "_ansible_diff";
const INTERNAL_PREFIX: &str = "_ansible_";

/// How the module was asked to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleContext {
    /// Compute decisions without writing to the device
    pub check_mode: bool,
    /// Report before/after values of touched attributes
    pub diff_mode: bool,
}

/// Module arguments with Ansible internals split off
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub args: Map<String, Value>,
    pub context: ModuleContext,
}

impl Invocation {
    /// Parse the contents of an arguments file
    pub fn parse(text: &str) -> Result<Self, ControllerError> {
        let mut args = match serde_json::from_str::<Value>(text)? {
            Value::Object(mut object) => match object.remove(WRAPPER_KEY) {
                Some(Value::Object(inner)) => inner,
                Some(_) => {
                    return Err(ControllerError::InvalidConfig(format!(
                        "{} must be a JSON object",
                        WRAPPER_KEY
                    )));
                }
                None => object,
            },
            _ => {
                return Err(ControllerError::InvalidConfig(
                    "module arguments must be a JSON object".to_string(),
                ));
            }
        };

        let context = ModuleContext {
            check_mode: args.get(CHECK_MODE_KEY).is_some_and(is_truthy),
            diff_mode: args.get(DIFF_MODE_KEY).is_some_and(is_truthy),
        };
        args.retain(|key, _| !key.starts_with(INTERNAL_PREFIX));

        debug!(
            "Parsed {} module arguments (check_mode={}, diff_mode={})",
            args.len(),
            context.check_mode,
            context.diff_mode
        );
        Ok(Self { args, context })
    }

    /// Read arguments from `path`, or from stdin when no path is given
    pub fn read(path: Option<&Path>) -> Result<Self, ControllerError> {
        let text = match path {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        Self::parse(&text)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "true" | "yes" | "on" | "1"),
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}

/// Module to run: `--module` when given, else the executable's file name
///
/// The binary is installed once and symlinked under each module name.
pub fn module_name(explicit: Option<&str>, argv0: &str) -> Option<String> {
    explicit.map(str::to_string).or_else(|| {
        Path::new(argv0)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
    })
}
