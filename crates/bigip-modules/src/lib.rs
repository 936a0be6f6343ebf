//! BIG-IP module catalog
//!
//! Every supported Ansible module is a static [`ModuleDefinition`]: the
//! iControl REST collection it manages, the kind of object found there and the
//! argument spec its parameters are validated against. The catalog is grouped
//! by area:
//! - `ltm`: pools, nodes, virtual servers, SNATs, iRules, monitors, profiles
//! - `gtm`: data centers, servers, pools, wide IPs, listeners, monitors
//! - `sys`: device settings, db variables, provisioning, folders
//! - `net`: VLANs, self IPs, routes, route domains, trunks, interfaces
//! - `vcmp`: guests
//!
//! # Example
//!
//! ```
//! use bigip_modules::{registry, validate};
//! use serde_json::json;
//!
//! let definition = registry::find("bigip_ltm_pool").unwrap();
//! let raw = json!({
//!     "f5_hostname": "bigip.example.com",
//!     "f5_username": "admin",
//!     "f5_password": "secret",
//!     "name": "web",
//!     "load_balancing_mode": "round-robin",
//! });
//! let params = validate::validate(definition, raw.as_object().unwrap()).unwrap();
//! assert_eq!(params.get_str("partition"), Some("Common"));
//! ```

pub mod common;
pub mod error;
pub mod gtm;
pub mod ltm;
pub mod net;
pub mod registry;
pub mod spec;
pub mod sys;
pub mod validate;
pub mod vcmp;

#[cfg(test)]
mod validate_test;

pub use error::ParamError;
pub use spec::{DefaultValue, ModuleDefinition, ObjectKind, ParamSpec, ParamType, RequiredIf, ValueKind};
pub use validate::{ModuleParams, NO_LOG_PLACEHOLDER};
