//! Helper functions for building mock iControl objects

use crate::models::{RemoteObject, ResourcePath, SUBCOLLECTION_SUFFIX};
use serde_json::{json, Map, Value};

/// Attributes BIG-IP stores as sub-collections of objects in a collection
const SUBCOLLECTIONS: &[(&str, &str)] = &[
    ("ltm/virtual", "profiles"),
    ("ltm/virtual", "policies"),
    ("gtm/listener", "profiles"),
    ("net/vlan", "interfaces"),
];

/// Build the object BIG-IP would store after creating `path` with `attributes`
pub fn build_object(path: &ResourcePath, attributes: &Value, generation: u64) -> RemoteObject {
    let mut object = RemoteObject {
        kind: Some(kind_for(path)),
        generation: Some(generation),
        self_link: Some(format!("https://localhost{}?ver=13.1.0", path.uri())),
        ..Default::default()
    };
    if let Some(name) = path.name() {
        let (sub_path, leaf) = name.sub_path();
        object.name = Some(leaf.to_string());
        object.partition = name.partition.clone();
        object.full_path = Some(name.full_path());
        if let Some(sub_path) = sub_path {
            object.properties.insert("subPath".to_string(), Value::from(sub_path));
        }
    }
    merge_attributes(&mut object, path, attributes);
    object
}

/// Overlay `attributes` on the stored properties of `object`
///
/// Sub-collection attributes are stored the way the device reports them: as a
/// `<attribute>Reference` link whose `items` only show up in expanded reads.
pub fn merge_attributes(object: &mut RemoteObject, path: &ResourcePath, attributes: &Value) {
    let Some(attributes) = attributes.as_object() else {
        return;
    };
    for (key, value) in attributes {
        if matches!(key.as_str(), "name" | "partition" | "subPath") {
            continue;
        }
        match (is_subcollection(path, key), value) {
            (true, Value::Array(members)) => {
                object.properties.remove(key);
                object
                    .properties
                    .insert(format!("{}{}", key, SUBCOLLECTION_SUFFIX), subcollection(path, key, members));
            }
            _ => {
                object.properties.insert(key.clone(), value.clone());
            }
        }
    }
}

fn is_subcollection(path: &ResourcePath, attribute: &str) -> bool {
    SUBCOLLECTIONS
        .iter()
        .any(|(collection, name)| *collection == path.collection() && *name == attribute)
}

fn subcollection(path: &ResourcePath, attribute: &str, members: &[Value]) -> Value {
    let mut reference = Map::new();
    reference.insert(
        "link".to_string(),
        Value::from(format!("https://localhost{}/{}?ver=13.1.0", path.uri(), attribute)),
    );
    reference.insert("isSubcollection".to_string(), Value::Bool(true));
    if !members.is_empty() {
        reference.insert("items".to_string(), Value::Array(members.iter().map(member_item).collect()));
    }
    Value::Object(reference)
}

/// `/Common/http` -> `{"name": "http", "partition": "Common", "fullPath": "/Common/http"}`
fn member_item(member: &Value) -> Value {
    match member {
        Value::String(full_path) => {
            match full_path.strip_prefix('/').and_then(|rest| rest.split_once('/')) {
                Some((partition, name)) => json!({
                    "name": name,
                    "partition": partition,
                    "fullPath": full_path,
                }),
                None => json!({"name": full_path, "fullPath": full_path}),
            }
        }
        other => other.clone(),
    }
}

/// `tm:ltm:pool:poolstate` style kind string
fn kind_for(path: &ResourcePath) -> String {
    let collection = path.collection().replace('/', ":");
    let last = path
        .collection()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .replace('-', "");
    format!("tm:{}:{}state", collection, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectName;

    #[test]
    fn test_profiles_stored_as_subcollection() {
        let path = ResourcePath::named("ltm/virtual", ObjectName::partitioned("vs", "Common"));
        let object = build_object(&path, &json!({"profiles": ["/Common/http"], "pool": "/Common/web"}), 1);

        assert!(object.get("profiles").is_none());
        let reference = object.get("profilesReference").unwrap();
        assert_eq!(reference["isSubcollection"], json!(true));
        assert_eq!(reference["items"][0]["fullPath"], json!("/Common/http"));
        assert_eq!(object.get("pool"), Some(&json!("/Common/web")));

        let expanded = object.expand_subcollections();
        assert_eq!(expanded.get("profiles").unwrap()[0]["name"], json!("http"));
    }

    #[test]
    fn test_empty_subcollection_has_no_items() {
        let path = ResourcePath::named("net/vlan", ObjectName::partitioned("internal", "Common"));
        let object = build_object(&path, &json!({"interfaces": []}), 1);
        assert!(object.get("interfacesReference").unwrap().get("items").is_none());
        assert_eq!(object.expand_subcollections().get("interfaces"), Some(&json!([])));
    }

    #[test]
    fn test_folder_name() {
        let path = ResourcePath::named("ltm/virtual", ObjectName::partitioned("app/vs", "Common"));
        let object = build_object(&path, &json!({}), 1);
        assert_eq!(object.name.as_deref(), Some("vs"));
        assert_eq!(object.full_path.as_deref(), Some("/Common/app/vs"));
        assert_eq!(object.get("subPath"), Some(&json!("app")));
    }
}
