//! iControl REST resource addressing and payload types
//!
//! Every configuration object lives below `/mgmt/tm/<collection>`. Partitioned
//! objects are addressed as `~Partition~name`, child objects (pool members)
//! through a sub-collection of their parent, and unnamed objects such as
//! `sys/ntp` by the collection path itself.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Root of all configuration collections
pub const TM_ROOT: &str = "/mgmt/tm";

/// Name of a BIG-IP object, optionally scoped to a partition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName {
    pub name: String,
    pub partition: Option<String>,
}

impl ObjectName {
    /// Object scoped to a partition, e.g. `/Common/web`
    pub fn partitioned(name: impl Into<String>, partition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition: Some(partition.into()),
        }
    }

    /// Object without a partition, e.g. an interface `1.1` or a db key
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition: None,
        }
    }

    /// Fully-qualified name as reported in `fullPath`
    pub fn full_path(&self) -> String {
        match &self.partition {
            Some(partition) => format!("/{}/{}", partition, self.name.trim_start_matches('/')),
            None => self.name.clone(),
        }
    }

    /// Folder and leaf name: `app/vs` -> (`Some("app")`, `"vs"`)
    pub fn sub_path(&self) -> (Option<&str>, &str) {
        match self.name.trim_start_matches('/').rsplit_once('/') {
            Some((folder, leaf)) => (Some(folder), leaf),
            None => (None, self.name.trim_start_matches('/')),
        }
    }

    /// URI segment: `~Common~folder~name`, each piece percent-encoded
    pub fn uri_segment(&self) -> String {
        let pieces = self.name.trim_start_matches('/').split('/');
        match &self.partition {
            Some(partition) => std::iter::once(partition.as_str())
                .chain(pieces)
                .map(|p| format!("~{}", urlencoding::encode(p)))
                .collect(),
            None => pieces
                .map(|p| urlencoding::encode(p).into_owned())
                .collect::<Vec<_>>()
                .join("~"),
        }
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

/// Location of a resource in the iControl REST tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    collection: String,
    parent: Option<(ObjectName, String)>,
    name: Option<ObjectName>,
}

impl ResourcePath {
    /// Unnamed singleton such as `sys/ntp`
    pub fn unnamed(collection: impl Into<String>) -> Self {
        Self {
            collection: normalize_collection(collection.into()),
            parent: None,
            name: None,
        }
    }

    /// Named object in a top-level collection
    pub fn named(collection: impl Into<String>, name: ObjectName) -> Self {
        Self {
            collection: normalize_collection(collection.into()),
            parent: None,
            name: Some(name),
        }
    }

    /// Named object in a sub-collection of `parent`, e.g. members of a pool
    pub fn child(
        collection: impl Into<String>,
        parent: ObjectName,
        sub_collection: impl Into<String>,
        name: ObjectName,
    ) -> Self {
        Self {
            collection: normalize_collection(collection.into()),
            parent: Some((parent, normalize_collection(sub_collection.into()))),
            name: Some(name),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn name(&self) -> Option<&ObjectName> {
        self.name.as_ref()
    }

    pub fn parent(&self) -> Option<&ObjectName> {
        self.parent.as_ref().map(|(parent, _)| parent)
    }

    /// URI objects are created in (POST target)
    pub fn collection_uri(&self) -> String {
        match &self.parent {
            Some((parent, sub)) => format!(
                "{}/{}/{}/{}",
                TM_ROOT,
                self.collection,
                parent.uri_segment(),
                sub
            ),
            None => format!("{}/{}", TM_ROOT, self.collection),
        }
    }

    /// URI of the object itself (GET/PATCH/DELETE target)
    pub fn uri(&self) -> String {
        match &self.name {
            Some(name) => format!("{}/{}", self.collection_uri(), name.uri_segment()),
            None => self.collection_uri(),
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

fn normalize_collection(collection: String) -> String {
    collection.trim_matches('/').to_string()
}

/// Fully qualify an object reference with `partition`.
///
/// Values that are already absolute (`/Common/http`), empty, or the literal
/// `none` are returned unchanged.
pub fn fq_name(partition: &str, value: &str) -> String {
    if value.is_empty() || value.starts_with('/') || value == "none" {
        value.to_string()
    } else {
        format!("/{}/{}", partition, value)
    }
}

/// A configuration object as returned by iControl REST
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(rename = "fullPath", default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    #[serde(rename = "selfLink", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Every other attribute of the object
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl RemoteObject {
    /// Look up an attribute by its REST name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Fold expanded sub-collections back into their attribute.
    ///
    /// Attributes such as a virtual server's `profiles` are stored as
    /// sub-collections and reported as `profilesReference`. With
    /// `expandSubcollections=true` the reference carries the members in
    /// `items`; they become `profiles`. A sub-collection reported without
    /// `items` is empty.
    pub fn expand_subcollections(mut self) -> Self {
        let expanded: Vec<(String, Value)> = self
            .properties
            .iter()
            .filter_map(|(key, value)| {
                let attribute = key.strip_suffix(SUBCOLLECTION_SUFFIX)?;
                let reference = value.as_object()?;
                if reference.get("isSubcollection") != Some(&Value::Bool(true)) {
                    return None;
                }
                let items = reference.get("items").cloned().unwrap_or_else(|| Value::Array(Vec::new()));
                Some((attribute.to_string(), items))
            })
            .collect();
        for (attribute, items) in expanded {
            self.properties.entry(attribute).or_insert(items);
        }
        self
    }
}

/// Suffix of the link attribute standing in for a sub-collection
pub const SUBCOLLECTION_SUFFIX: &str = "Reference";

/// Query asking iControl REST to inline sub-collection members
pub const EXPAND_SUBCOLLECTIONS: &str = "expandSubcollections=true";

/// Error body returned by iControl REST, e.g.
/// `{"code":404,"message":"01020036:3: The requested Pool (/Common/x) was not found.","errorStack":[]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    #[serde(rename = "errorStack", default)]
    pub error_stack: Vec<String>,
}

/// Response of `/mgmt/shared/authn/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: AuthToken,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub token: String,
    #[serde(default)]
    pub timeout: Option<u64>,
}
