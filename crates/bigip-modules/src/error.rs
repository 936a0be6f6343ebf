//! Parameter validation errors
//!
//! Messages follow the wording Ansible uses for `argument_spec` failures so
//! playbook authors see familiar errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Unsupported parameters for ({module}) module: {}", .names.join(", "))]
    Unsupported { module: String, names: Vec<String> },

    #[error("missing required arguments: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("value of {name} must be one of: {}, got: {value}", .choices.join(", "))]
    InvalidChoice {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("argument {name} is of type {found} and we were unable to convert to {expected}")]
    InvalidType {
        name: String,
        found: String,
        expected: String,
    },

    #[error("parameters are mutually exclusive: {}", .0.join("|"))]
    MutuallyExclusive(Vec<String>),

    #[error("{param} is {value} but all of the following are missing: {}", .missing.join(", "))]
    RequiredIf {
        param: String,
        value: String,
        missing: Vec<String>,
    },
}
