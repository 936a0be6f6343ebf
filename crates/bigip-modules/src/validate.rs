//! Ansible-style parameter validation
//!
//! Mirrors what `AnsibleModule` does with an `argument_spec` before a module
//! runs: reject unknown keys, apply environment fallbacks and defaults, coerce
//! types, then check required, choices, mutually exclusive and required-if rules.

use crate::error::ParamError;
use crate::spec::{ModuleDefinition, ParamSpec, ParamType};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Validated module parameters; parameters without a value are absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleParams {
    values: BTreeMap<String, Value>,
}

impl ModuleParams {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(Value::as_bool)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Parameters as a JSON object, `no_log` values masked the way Ansible reports them
    pub fn to_masked_json(&self, definition: &ModuleDefinition) -> Value {
        let spec = definition.argument_spec();
        let masked = self
            .values
            .iter()
            .map(|(name, value)| {
                let hide = spec.iter().any(|p| p.name == name.as_str() && p.no_log);
                let value = if hide {
                    Value::from(NO_LOG_PLACEHOLDER)
                } else {
                    value.clone()
                };
                (name.clone(), value)
            })
            .collect::<Map<String, Value>>();
        Value::Object(masked)
    }
}

impl FromIterator<(String, Value)> for ModuleParams {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        }
    }
}

/// Replacement for `no_log` values in reported module arguments
pub const NO_LOG_PLACEHOLDER: &str = "VALUE_SPECIFIED_IN_NO_LOG_PARAMETER";

/// Validate `raw` against `definition`, reading environment fallbacks from the process environment
pub fn validate(definition: &ModuleDefinition, raw: &Map<String, Value>) -> Result<ModuleParams, ParamError> {
    validate_with_env(definition, raw, |var| std::env::var(var).ok())
}

/// Validate `raw` against `definition` with an explicit environment lookup
pub fn validate_with_env<F>(
    definition: &ModuleDefinition,
    raw: &Map<String, Value>,
    env: F,
) -> Result<ModuleParams, ParamError>
where
    F: Fn(&str) -> Option<String>,
{
    let spec = definition.argument_spec();

    let mut unsupported: Vec<String> = raw
        .keys()
        .filter(|key| !key.starts_with("_ansible_"))
        .filter(|key| !spec.iter().any(|p| p.name == key.as_str()))
        .cloned()
        .collect();
    if !unsupported.is_empty() {
        unsupported.sort();
        return Err(ParamError::Unsupported {
            module: definition.name.to_string(),
            names: unsupported,
        });
    }

    let mut values = BTreeMap::new();
    let mut missing = Vec::new();

    for param in &spec {
        let given = raw
            .get(param.name)
            .filter(|v| !v.is_null())
            .cloned()
            .or_else(|| {
                param.env_fallback
                    .and_then(&env)
                    .map(Value::String)
            });

        let value = match given {
            Some(value) => coerce(param, value)?,
            None => match param.default {
                Some(default) => default.to_value(),
                None => {
                    if param.required {
                        missing.push(param.name.to_string());
                    }
                    continue;
                }
            },
        };

        check_choices(param, &value)?;
        values.insert(param.name.to_string(), value);
    }

    if !missing.is_empty() {
        return Err(ParamError::Missing(missing));
    }

    for group in definition.mutually_exclusive {
        let present: Vec<String> = group
            .iter()
            .filter(|name| is_set(raw.get(**name)))
            .map(|name| name.to_string())
            .collect();
        if present.len() > 1 {
            return Err(ParamError::MutuallyExclusive(
                group.iter().map(|name| name.to_string()).collect(),
            ));
        }
    }

    for rule in definition.required_if {
        let matches = values
            .get(rule.param)
            .map(|v| scalar_to_string(v) == rule.value)
            .unwrap_or(false);
        if !matches {
            continue;
        }
        let missing: Vec<String> = rule
            .requirements
            .iter()
            .filter(|name| !values.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ParamError::RequiredIf {
                param: rule.param.to_string(),
                value: rule.value.to_string(),
                missing,
            });
        }
    }

    debug!("Validated {} parameters for {}", values.len(), definition.name);
    Ok(ModuleParams { values })
}

/// A parameter counts for mutual exclusion when the task gives it a non-null
/// value. `false`, `""` and `[]` are given values; defaults never count.
fn is_set(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

fn check_choices(param: &ParamSpec, value: &Value) -> Result<(), ParamError> {
    if param.choices.is_empty() {
        return Ok(());
    }
    let candidates: Vec<String> = match value {
        Value::Array(items) => items.iter().map(scalar_to_string).collect(),
        other => vec![scalar_to_string(other)],
    };
    for candidate in candidates {
        if !param.choices.contains(&candidate.as_str()) {
            return Err(ParamError::InvalidChoice {
                name: param.name.to_string(),
                value: candidate,
                choices: param.choices.iter().map(|c| c.to_string()).collect(),
            });
        }
    }
    Ok(())
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Convert `value` to the parameter's declared type
pub fn coerce(param: &ParamSpec, value: Value) -> Result<Value, ParamError> {
    let invalid = |value: &Value| ParamError::InvalidType {
        name: param.name.to_string(),
        found: type_name(value).to_string(),
        expected: param.param_type.as_str().to_string(),
    };

    match param.param_type {
        ParamType::Str => match value {
            Value::String(_) => Ok(value),
            Value::Bool(b) => Ok(Value::String(bool_as_choice(param, b))),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            other => Err(invalid(&other)),
        },
        ParamType::Int => match &value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Value::from)
                .ok_or_else(|| invalid(&value)),
            Value::String(s) => s.trim().parse::<i64>().map(Value::from).map_err(|_| invalid(&value)),
            _ => Err(invalid(&value)),
        },
        ParamType::Bool => match &value {
            Value::Bool(_) => Ok(value),
            Value::Number(n) => match n.as_i64() {
                Some(1) => Ok(Value::Bool(true)),
                Some(0) => Ok(Value::Bool(false)),
                _ => Err(invalid(&value)),
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "yes" | "on" | "1" | "true" | "y" | "t" => Ok(Value::Bool(true)),
                "no" | "off" | "0" | "false" | "n" | "f" => Ok(Value::Bool(false)),
                _ => Err(invalid(&value)),
            },
            _ => Err(invalid(&value)),
        },
        ParamType::List => match value {
            Value::Array(_) => Ok(value),
            Value::String(s) => Ok(Value::Array(
                s.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(Value::from)
                    .collect(),
            )),
            Value::Number(_) | Value::Bool(_) | Value::Object(_) => Ok(Value::Array(vec![value])),
            Value::Null => Err(invalid(&value)),
        },
        ParamType::Dict => match value {
            Value::Object(_) => Ok(value),
            Value::String(s) => parse_dict_string(&s).ok_or_else(|| invalid(&Value::String(s))),
            other => Err(invalid(&other)),
        },
    }
}

/// A YAML boolean given for a string choice means the matching word of the choice pair
fn bool_as_choice(param: &ParamSpec, value: bool) -> String {
    let pairs: [(&str, &str); 3] = [("yes", "no"), ("enabled", "disabled"), ("on", "off")];
    pairs
        .iter()
        .find(|(on, off)| param.choices.contains(on) && param.choices.contains(off))
        .map(|(on, off)| if value { *on } else { *off })
        .unwrap_or(if value { "true" } else { "false" })
        .to_string()
}

/// `{"a": 1}` as JSON or `a=1, b=2` as Ansible key=value pairs
fn parse_dict_string(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        return serde_json::from_str::<Value>(trimmed).ok().filter(Value::is_object);
    }
    let mut map = Map::new();
    for pair in trimmed.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=')?;
        map.insert(key.trim().to_string(), Value::from(value.trim()));
    }
    Some(Value::Object(map))
}
