//! BigIpClient trait for mocking
//!
//! This trait abstracts the BigIpClient to enable mocking in unit tests.
//! The concrete BigIpClient implements this trait, and tests can use `MockBigIpClient`.

use crate::error::BigIpError;
use crate::models::{RemoteObject, ResourcePath};

/// CRUD operations against iControl REST resources
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait BigIpClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Check connectivity and credentials
    async fn validate_credentials(&self) -> Result<(), BigIpError>;

    /// Whether the object at `path` exists
    async fn exists(&self, path: &ResourcePath) -> Result<bool, BigIpError>;

    /// Load the object at `path`
    async fn load(&self, path: &ResourcePath) -> Result<RemoteObject, BigIpError>;

    /// Create the named object at `path` with the given attributes
    async fn create(&self, path: &ResourcePath, attributes: &serde_json::Value) -> Result<RemoteObject, BigIpError>;

    /// Modify only the given attributes of the object at `path`
    async fn modify(&self, path: &ResourcePath, attributes: &serde_json::Value) -> Result<RemoteObject, BigIpError>;

    /// Delete the object at `path`
    async fn delete(&self, path: &ResourcePath) -> Result<(), BigIpError>;
}

/// Request body for creating the object at `path`: its identity plus `attributes`.
pub fn create_body(path: &ResourcePath, attributes: &serde_json::Value) -> Result<serde_json::Value, BigIpError> {
    let name = path.name().ok_or_else(|| {
        BigIpError::InvalidRequest(format!("cannot create unnamed resource {}", path))
    })?;

    let mut body = serde_json::Map::new();
    // `app/vs` is created as `vs` in folder `app`
    let (sub_path, leaf) = name.sub_path();
    body.insert("name".to_string(), serde_json::Value::from(leaf));
    if let Some(sub_path) = sub_path {
        body.insert("subPath".to_string(), serde_json::Value::from(sub_path));
    }
    if let Some(partition) = &name.partition {
        body.insert("partition".to_string(), serde_json::Value::String(partition.clone()));
    }
    if let Some(attributes) = attributes.as_object() {
        for (key, value) in attributes {
            body.insert(key.clone(), value.clone());
        }
    }
    Ok(serde_json::Value::Object(body))
}
