//! Controller-specific error types.
//!
//! Every variant ends up as the `msg` of a failed module result.

use bigip_client::BigIpError;
use bigip_modules::ParamError;
use thiserror::Error;

/// Errors that can occur while running a module.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// iControl REST error
    #[error("{0}")]
    BigIp(#[from] BigIpError),

    /// Parameter validation failed
    #[error("{0}")]
    Params(#[from] ParamError),

    /// Invalid module arguments or invocation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A create-only attribute differs on an existing object
    #[error("{attribute} of {object} cannot be changed once created (have {current}, want {desired})")]
    ImmutableAttribute {
        object: String,
        attribute: String,
        current: String,
        desired: String,
    },

    /// Reading the arguments file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Arguments are not valid JSON
    #[error("Failed to parse module arguments: {0}")]
    Json(#[from] serde_json::Error),
}
