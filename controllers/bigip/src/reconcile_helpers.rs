//! Helper functions for the reconciliation engine
//!
//! Mapping validated module parameters onto iControl REST attributes and
//! comparing them with what the device reports.

use crate::error::ControllerError;
use bigip_client::{fq_name, ObjectName, RemoteObject, ResourcePath};
use bigip_modules::common::DEFAULT_PARTITION;
use bigip_modules::{ModuleDefinition, ModuleParams, ObjectKind, ParamSpec, ValueKind};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Partition object references are qualified with
pub fn partition<'a>(params: &'a ModuleParams) -> &'a str {
    params.get_str("partition").unwrap_or(DEFAULT_PARTITION)
}

/// Parse `name` or `/Partition/name` into an object name scoped to `partition`
pub fn object_name(value: &str, partition: &str) -> ObjectName {
    match value.strip_prefix('/').and_then(|rest| rest.split_once('/')) {
        Some((explicit, name)) => ObjectName::partitioned(name, explicit),
        None => ObjectName::partitioned(value.trim_start_matches('/'), partition),
    }
}

/// Location of the object the module manages
pub fn resource_path(definition: &ModuleDefinition, params: &ModuleParams) -> Result<ResourcePath, ControllerError> {
    let name = || {
        params
            .get_str("name")
            .ok_or_else(|| ControllerError::InvalidConfig(format!("{} requires a name", definition.name)))
    };

    let path = match definition.kind {
        ObjectKind::Unnamed => ResourcePath::unnamed(definition.collection),
        ObjectKind::Keyed | ObjectKind::Named { partitioned: false } => {
            ResourcePath::named(definition.collection, ObjectName::bare(name()?))
        }
        ObjectKind::Named { partitioned: true } => {
            ResourcePath::named(definition.collection, object_name(name()?, partition(params)))
        }
        ObjectKind::Child {
            parent_param,
            sub_collection,
        } => {
            let parent = params.get_str(parent_param).ok_or_else(|| {
                ControllerError::InvalidConfig(format!("{} requires {}", definition.name, parent_param))
            })?;
            ResourcePath::child(
                definition.collection,
                object_name(parent, partition(params)),
                sub_collection,
                object_name(name()?, partition(params)),
            )
        }
    };
    Ok(path)
}

/// Remote attributes the parameters ask for
///
/// Provider arguments, `name`, `partition`, `state` and a child's parent
/// parameter are not attributes and never appear here.
pub fn desired_state(definition: &ModuleDefinition, params: &ModuleParams) -> Map<String, Value> {
    let partition = partition(params);
    let mut desired = Map::new();

    for param in definition.attribute_params() {
        let Some(value) = params.get(param.name) else { continue };
        let remote = param.remote_name().into_owned();

        match param.value_kind {
            ValueKind::Plain => {
                desired.insert(remote, value.clone());
            }
            ValueKind::Reference => {
                desired.insert(remote, qualify(partition, value));
            }
            ValueKind::MonitorRule => {
                desired.insert(remote, qualify_monitor_rule(partition, value));
            }
            ValueKind::ReferenceList => {
                let items = match value {
                    Value::Array(items) => items.iter().map(|item| qualify(partition, item)).collect(),
                    other => vec![qualify(partition, other)],
                };
                desired.insert(remote, Value::Array(items));
            }
            ValueKind::Flag { counterpart } => {
                let on = value.as_bool().unwrap_or(false);
                match (on, counterpart) {
                    (true, _) => {
                        desired.insert(remote, Value::Bool(true));
                    }
                    (false, Some(counterpart)) => {
                        desired.insert(counterpart.to_string(), Value::Bool(true));
                    }
                    (false, None) => {
                        desired.insert(remote, Value::Bool(false));
                    }
                }
            }
        }
    }
    desired
}

fn qualify(partition: &str, value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(fq_name(partition, s)),
        other => other.clone(),
    }
}

/// Words of a monitor rule that are not monitor names
const MONITOR_RULE_KEYWORDS: &[&str] = &["and", "min", "of", "{", "}", "none", "default"];

/// Qualify the monitor names of a rule: `http and tcp` -> `/Common/http and /Common/tcp`
pub fn qualify_monitor_rule(partition: &str, value: &Value) -> Value {
    let Value::String(rule) = value else {
        return value.clone();
    };
    let words: Vec<String> = rule
        .split_whitespace()
        .map(|word| {
            if MONITOR_RULE_KEYWORDS.contains(&word) || word.parse::<u32>().is_ok() {
                word.to_string()
            } else {
                fq_name(partition, word)
            }
        })
        .collect();
    Value::String(words.join(" "))
}

/// How the remote attribute `attribute` is compared
pub fn value_kind_of(definition: &ModuleDefinition, attribute: &str) -> ValueKind {
    definition
        .attribute_params()
        .find(|p| p.remote_name() == attribute)
        .or_else(|| definition.attribute_params().find(|p| is_counterpart_of(p, attribute)))
        .map(|p| p.value_kind)
        .unwrap_or(ValueKind::Plain)
}

fn is_counterpart_of(param: &ParamSpec, attribute: &str) -> bool {
    matches!(param.value_kind, ValueKind::Flag { counterpart: Some(c) } if c == attribute)
}

/// Desired attributes whose value differs from the device
pub fn diff(definition: &ModuleDefinition, desired: &Map<String, Value>, current: &RemoteObject) -> Map<String, Value> {
    desired
        .iter()
        .filter(|(attribute, value)| {
            !values_match(value, current.get(attribute), value_kind_of(definition, attribute))
        })
        .map(|(attribute, value)| (attribute.clone(), value.clone()))
        .collect()
}

/// Whether a desired value is already satisfied by the current one
pub fn values_match(desired: &Value, current: Option<&Value>, kind: ValueKind) -> bool {
    let current = match current {
        None | Some(Value::Null) => return is_empty(desired),
        Some(current) => current,
    };

    match (kind, desired, current) {
        (ValueKind::ReferenceList, Value::Array(want), Value::Array(have)) => {
            reference_set(want) == reference_set(have)
        }
        // The device pads rules with spaces (`/Common/http `)
        (ValueKind::MonitorRule, Value::String(want), Value::String(have)) => {
            want.split_whitespace().eq(have.split_whitespace())
        }
        _ => loose_eq(desired, current),
    }
}

fn reference_set(items: &[Value]) -> BTreeSet<String> {
    items
        .iter()
        .map(|item| match item {
            // Expanded references come back as objects carrying `fullPath` or `name`
            Value::Object(object) => object
                .get("fullPath")
                .or_else(|| object.get("name"))
                .map(scalar_string)
                .unwrap_or_default(),
            other => scalar_string(other),
        })
        .collect()
}

fn loose_eq(desired: &Value, current: &Value) -> bool {
    match (desired, current) {
        (Value::Object(want), Value::Object(have)) => want
            .iter()
            .all(|(key, value)| match have.get(key) {
                Some(other) if !other.is_null() => loose_eq(value, other),
                _ => is_empty(value),
            }),
        (Value::Array(want), Value::Array(have)) => {
            want.len() == have.len() && want.iter().zip(have).all(|(w, h)| loose_eq(w, h))
        }
        (Value::Array(want), _) if want.is_empty() => is_empty(current),
        (Value::Object(_) | Value::Array(_), _) | (_, Value::Object(_) | Value::Array(_)) => false,
        _ => scalar_string(desired) == scalar_string(current),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty() || s == "none",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) | Value::Bool(true) => false,
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fail when a create-only attribute would have to change on an existing object
pub fn check_create_only(
    definition: &ModuleDefinition,
    path: &ResourcePath,
    changes: &Map<String, Value>,
    current: &RemoteObject,
) -> Result<(), ControllerError> {
    for param in definition.attribute_params().filter(|p| p.create_only) {
        let attribute = param.remote_name();
        if let Some(desired) = changes.get(&*attribute) {
            return Err(ControllerError::ImmutableAttribute {
                object: path.name().map(ObjectName::full_path).unwrap_or_else(|| path.uri()),
                attribute: param.name.to_string(),
                current: current.get(&attribute).map(scalar_string).unwrap_or_default(),
                desired: scalar_string(desired),
            });
        }
    }
    Ok(())
}

/// Current values of `attributes`, missing ones as null
pub fn current_values(attributes: &Map<String, Value>, current: &RemoteObject) -> Map<String, Value> {
    attributes
        .keys()
        .map(|attribute| (attribute.clone(), current.get(attribute).cloned().unwrap_or(Value::Null)))
        .collect()
}

/// Report changed attributes under their module parameter names
pub fn reportable_changes(definition: &ModuleDefinition, changes: &Map<String, Value>) -> Map<String, Value> {
    changes
        .iter()
        .filter_map(|(attribute, value)| {
            if let Some(param) = definition.attribute_params().find(|p| p.remote_name() == attribute.as_str()) {
                if param.no_log {
                    return None;
                }
                return Some((param.name.to_string(), value.clone()));
            }
            // Counterpart flag set: the parameter it stands for is false
            definition
                .attribute_params()
                .find(|p| is_counterpart_of(p, attribute))
                .map(|param| (param.name.to_string(), Value::Bool(false)))
        })
        .collect()
}
