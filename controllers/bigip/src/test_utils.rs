//! Test utilities for unit testing the reconciler
//!
//! This module provides helpers for creating test data and setting up test scenarios.

#[cfg(test)]
use bigip_client::{MockBigIpClient, RemoteObject, ResourcePath};
#[cfg(test)]
use bigip_modules::validate::validate_with_env;
#[cfg(test)]
use bigip_modules::{ModuleDefinition, ModuleParams};
#[cfg(test)]
use serde_json::{Map, Value};

/// Base URL used by every mock client
#[cfg(test)]
pub const TEST_BASE_URL: &str = "https://bigip.test:443";

/// Raw module arguments with provider arguments filled in
#[cfg(test)]
pub fn module_args(args: Value) -> Map<String, Value> {
    let mut raw = Map::new();
    raw.insert("f5_hostname".to_string(), Value::from("bigip.test"));
    raw.insert("f5_username".to_string(), Value::from("admin"));
    raw.insert("f5_password".to_string(), Value::from("secret"));
    if let Value::Object(args) = args {
        raw.extend(args);
    }
    raw
}

/// Validated parameters for `definition`, ignoring the process environment
#[cfg(test)]
pub fn params(definition: &ModuleDefinition, args: Value) -> ModuleParams {
    validate_with_env(definition, &module_args(args), |_| None)
        .unwrap_or_else(|e| panic!("invalid test parameters for {}: {}", definition.name, e))
}

/// What the device would return for `path` holding `attributes`
#[cfg(test)]
pub fn remote_object(path: &ResourcePath, attributes: Value) -> RemoteObject {
    let mock = MockBigIpClient::new(TEST_BASE_URL);
    mock.add_object(path, attributes);
    mock.object(path)
        .unwrap_or_else(|| panic!("mock lost object {}", path))
}

/// Fresh mock client
#[cfg(test)]
pub fn mock_client() -> MockBigIpClient {
    MockBigIpClient::new(TEST_BASE_URL)
}
