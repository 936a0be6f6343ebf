//! Mock BigIpClient for unit testing
//!
//! This module provides an in-memory implementation of `BigIpClientTrait` that can be
//! used in unit tests without a BIG-IP device. Objects are stored by URI and every
//! call is recorded so tests can assert which writes a reconciliation issued.

mod helpers;

use crate::bigip_trait::{create_body, BigIpClientTrait};
use crate::error::BigIpError;
use crate::models::{RemoteObject, ResourcePath};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A single request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub method: &'static str,
    pub uri: String,
    pub body: Option<serde_json::Value>,
}

impl MockCall {
    /// Whether the call would have changed device configuration
    pub fn is_write(&self) -> bool {
        matches!(self.method, "POST" | "PATCH" | "DELETE")
    }
}

/// Mock BigIpClient for testing
#[derive(Debug, Clone)]
pub struct MockBigIpClient {
    pub(crate) base_url: String,
    pub(crate) objects: Arc<Mutex<HashMap<String, RemoteObject>>>,
    pub(crate) calls: Arc<Mutex<Vec<MockCall>>>,
    pub(crate) failure: Arc<Mutex<Option<String>>>,
}

impl MockBigIpClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Seed an object (for test setup)
    ///
    /// `attributes` may be given in the shape a device reports, e.g. with a
    /// `profilesReference` sub-collection link instead of `profiles`.
    pub fn add_object(&self, path: &ResourcePath, attributes: serde_json::Value) {
        let object = helpers::build_object(path, &attributes, 1);
        lock(&self.objects).insert(path.uri(), object);
    }

    /// Current state of the object at `path`, as an expanded read reports it
    pub fn object(&self, path: &ResourcePath) -> Option<RemoteObject> {
        lock(&self.objects)
            .get(&path.uri())
            .cloned()
            .map(RemoteObject::expand_subcollections)
    }

    /// Number of stored objects
    pub fn object_count(&self) -> usize {
        lock(&self.objects).len()
    }

    /// Every call made so far
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Calls that would have changed configuration
    pub fn write_calls(&self) -> Vec<MockCall> {
        self.calls().into_iter().filter(MockCall::is_write).collect()
    }

    /// Forget recorded calls, keep stored objects
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Make every subsequent request fail with an API error carrying `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *lock(&self.failure) = Some(message.into());
    }

    fn record(&self, method: &'static str, uri: String, body: Option<&serde_json::Value>) -> Result<(), BigIpError> {
        lock(&self.calls).push(MockCall {
            method,
            uri,
            body: body.cloned(),
        });
        match lock(&self.failure).as_ref() {
            Some(message) => Err(BigIpError::Api(message.clone())),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl BigIpClientTrait for MockBigIpClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_credentials(&self) -> Result<(), BigIpError> {
        self.record("GET", "/mgmt/tm/sys/version".to_string(), None)
    }

    async fn exists(&self, path: &ResourcePath) -> Result<bool, BigIpError> {
        self.record("GET", path.uri(), None)?;
        Ok(lock(&self.objects).contains_key(&path.uri()))
    }

    async fn load(&self, path: &ResourcePath) -> Result<RemoteObject, BigIpError> {
        self.record("GET", path.uri(), None)?;
        lock(&self.objects)
            .get(&path.uri())
            .cloned()
            .map(RemoteObject::expand_subcollections)
            .ok_or_else(|| BigIpError::NotFound(format!("{} - The requested object was not found.", path.uri())))
    }

    async fn create(&self, path: &ResourcePath, attributes: &serde_json::Value) -> Result<RemoteObject, BigIpError> {
        let body = create_body(path, attributes)?;
        self.record("POST", path.collection_uri(), Some(&body))?;

        let mut objects = lock(&self.objects);
        if objects.contains_key(&path.uri()) {
            return Err(BigIpError::Api(format!(
                "POST {} failed: 409 Conflict - The requested object ({}) already exists.",
                path.collection_uri(),
                path.uri()
            )));
        }
        let object = helpers::build_object(path, attributes, 1);
        objects.insert(path.uri(), object.clone());
        Ok(object)
    }

    async fn modify(&self, path: &ResourcePath, attributes: &serde_json::Value) -> Result<RemoteObject, BigIpError> {
        self.record("PATCH", path.uri(), Some(attributes))?;

        let mut objects = lock(&self.objects);
        let object = objects
            .get_mut(&path.uri())
            .ok_or_else(|| BigIpError::NotFound(format!("{} - The requested object was not found.", path.uri())))?;
        helpers::merge_attributes(object, path, attributes);
        object.generation = Some(object.generation.unwrap_or(0) + 1);
        Ok(object.clone())
    }

    async fn delete(&self, path: &ResourcePath) -> Result<(), BigIpError> {
        self.record("DELETE", path.uri(), None)?;
        lock(&self.objects)
            .remove(&path.uri())
            .map(|_| ())
            .ok_or_else(|| BigIpError::NotFound(format!("{} - The requested object was not found.", path.uri())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectName;
    use serde_json::json;

    fn pool() -> ResourcePath {
        ResourcePath::named("ltm/pool", ObjectName::partitioned("web", "Common"))
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let mock = MockBigIpClient::new("https://bigip");
        let created = mock.create(&pool(), &json!({"loadBalancingMode": "round-robin"})).await.unwrap();
        assert_eq!(created.full_path.as_deref(), Some("/Common/web"));

        let loaded = mock.load(&pool()).await.unwrap();
        assert_eq!(loaded.get("loadBalancingMode"), Some(&json!("round-robin")));
        assert_eq!(mock.write_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let mock = MockBigIpClient::new("https://bigip");
        mock.add_object(&pool(), json!({}));
        let err = mock.create(&pool(), &json!({})).await.unwrap_err();
        assert!(matches!(err, BigIpError::Api(_)));
    }

    #[tokio::test]
    async fn test_modify_merges_and_bumps_generation() {
        let mock = MockBigIpClient::new("https://bigip");
        mock.add_object(&pool(), json!({"loadBalancingMode": "round-robin", "description": "x"}));
        let modified = mock.modify(&pool(), &json!({"description": "y"})).await.unwrap();
        assert_eq!(modified.get("description"), Some(&json!("y")));
        assert_eq!(modified.get("loadBalancingMode"), Some(&json!("round-robin")));
        assert_eq!(modified.generation, Some(2));
    }

    #[tokio::test]
    async fn test_missing_object() {
        let mock = MockBigIpClient::new("https://bigip");
        assert!(!mock.exists(&pool()).await.unwrap());
        assert!(matches!(mock.load(&pool()).await, Err(BigIpError::NotFound(_))));
        assert!(matches!(mock.delete(&pool()).await, Err(BigIpError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fail_with() {
        let mock = MockBigIpClient::new("https://bigip");
        mock.fail_with("device busy");
        let err = mock.exists(&pool()).await.unwrap_err();
        assert_eq!(err.to_string(), "iControl REST error: device busy");
    }
}
