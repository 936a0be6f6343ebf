//! Parameter schema types
//!
//! A module is described by a `ModuleDefinition`: the iControl collection it
//! manages, what kind of object lives there, and the `ParamSpec`s making up its
//! argument spec. Definitions are `const` tables so the whole catalog is static.

use heck::ToLowerCamelCase;
use serde::Serialize;
use std::borrow::Cow;

/// Type of a module parameter, as in an Ansible `argument_spec`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Str,
    Int,
    Bool,
    /// Comma separated strings and scalars are accepted
    List,
    Dict,
}

impl ParamType {
    /// Ansible spelling of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Str => "str",
            ParamType::Int => "int",
            ParamType::Bool => "bool",
            ParamType::List => "list",
            ParamType::Dict => "dict",
        }
    }
}

/// Default value of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl DefaultValue {
    /// The default as a JSON value
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            DefaultValue::Str(s) => serde_json::Value::from(*s),
            DefaultValue::Int(i) => serde_json::Value::from(*i),
            DefaultValue::Bool(b) => serde_json::Value::from(*b),
        }
    }
}

/// How a parameter value maps onto the remote attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Sent and compared as given
    Plain,
    /// Object name, fully qualified with the partition (`http` -> `/Common/http`)
    Reference,
    /// List of object names, fully qualified and compared as a set
    ReferenceList,
    /// Monitor rule such as `http and tcp` or `min 1 of { http tcp }`. Monitor
    /// names are qualified, keywords are kept, whitespace is not significant.
    MonitorRule,
    /// Presence flag such as `enabled: true`. When the desired value is false,
    /// the counterpart flag (`disabled: true`) is sent instead.
    Flag { counterpart: Option<&'static str> },
}

/// One entry of a module's argument spec
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Parameter name as written in a task
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    /// Filled in when the parameter is not given
    pub default: Option<DefaultValue>,
    /// Accepted values; empty means any
    pub choices: &'static [&'static str],
    /// Masked in the reported invocation
    pub no_log: bool,
    /// REST attribute name when it differs from the camelCase parameter name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<&'static str>,
    pub value_kind: ValueKind,
    /// Accepted on create only; BIG-IP rejects changes afterwards
    pub create_only: bool,
    /// Environment variable consulted when the parameter is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_fallback: Option<&'static str>,
}

impl ParamSpec {
    /// Optional plain parameter of `param_type`
    pub const fn new(name: &'static str, param_type: ParamType) -> Self {
        Self {
            name,
            param_type,
            required: false,
            default: None,
            choices: &[],
            no_log: false,
            remote: None,
            value_kind: ValueKind::Plain,
            create_only: false,
            env_fallback: None,
        }
    }

    /// String parameter
    pub const fn str(name: &'static str) -> Self {
        Self::new(name, ParamType::Str)
    }

    /// Integer parameter
    pub const fn int(name: &'static str) -> Self {
        Self::new(name, ParamType::Int)
    }

    /// Boolean parameter
    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, ParamType::Bool)
    }

    /// List parameter
    pub const fn list(name: &'static str) -> Self {
        Self::new(name, ParamType::List)
    }

    /// Dictionary parameter
    pub const fn dict(name: &'static str) -> Self {
        Self::new(name, ParamType::Dict)
    }

    /// String parameter restricted to `choices`
    pub const fn choice(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self::str(name).choices(choices)
    }

    /// Must be given (or found in the environment)
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Default used when the parameter is not given
    pub const fn default_str(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Str(value));
        self
    }

    /// Integer default
    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(DefaultValue::Int(value));
        self
    }

    /// Boolean default
    pub const fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(DefaultValue::Bool(value));
        self
    }

    /// Restrict values to `choices`
    pub const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }

    /// Mask the value when reporting
    pub const fn no_log(mut self) -> Self {
        self.no_log = true;
        self
    }

    /// Map onto REST attribute `attribute` instead of the camelCase name
    pub const fn remote(mut self, attribute: &'static str) -> Self {
        self.remote = Some(attribute);
        self
    }

    /// Object reference; a list parameter becomes a reference list
    pub const fn reference(mut self) -> Self {
        self.value_kind = match self.param_type {
            ParamType::List => ValueKind::ReferenceList,
            _ => ValueKind::Reference,
        };
        self
    }

    /// Monitor rule, see [`ValueKind::MonitorRule`]
    pub const fn monitor_rule(mut self) -> Self {
        self.value_kind = ValueKind::MonitorRule;
        self
    }

    /// Boolean presence flag without counterpart
    pub const fn flag(mut self) -> Self {
        self.param_type = ParamType::Bool;
        self.value_kind = ValueKind::Flag { counterpart: None };
        self
    }

    /// Boolean presence flag; `false` is expressed by setting `counterpart`
    pub const fn flag_with(mut self, counterpart: &'static str) -> Self {
        self.param_type = ParamType::Bool;
        self.value_kind = ValueKind::Flag { counterpart: Some(counterpart) };
        self
    }

    /// Only sent on create
    pub const fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    /// Fall back to environment variable `variable`
    pub const fn env(mut self, variable: &'static str) -> Self {
        self.env_fallback = Some(variable);
        self
    }

    /// Name of the REST attribute this parameter maps to
    pub fn remote_name(&self) -> Cow<'static, str> {
        match self.remote {
            Some(remote) => Cow::Borrowed(remote),
            // `load_balancing_mode` -> `loadBalancingMode`
            None => Cow::Owned(self.name.to_lower_camel_case()),
        }
    }
}

/// What kind of configuration object a module manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ObjectKind {
    /// Named object that can be created and deleted
    Named { partitioned: bool },
    /// Named object in a sub-collection of a parent object named by `parent_param`
    Child {
        parent_param: &'static str,
        sub_collection: &'static str,
    },
    /// Singleton without a name (`sys/ntp`); modify only
    Unnamed,
    /// Always-present object addressed by bare name (`sys/db`); modify only
    Keyed,
}

impl ObjectKind {
    /// Whether the module takes `state: present|absent`
    pub fn has_state(&self) -> bool {
        matches!(self, ObjectKind::Named { .. } | ObjectKind::Child { .. })
    }

    /// Whether the module takes `name`
    pub fn has_name(&self) -> bool {
        !matches!(self, ObjectKind::Unnamed)
    }

    /// Whether the module takes `partition`
    pub fn is_partitioned(&self) -> bool {
        matches!(
            self,
            ObjectKind::Named { partitioned: true } | ObjectKind::Child { .. }
        )
    }
}

/// `param == value` makes every parameter in `requirements` mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequiredIf {
    /// Parameter whose value triggers the rule
    pub param: &'static str,
    /// Triggering value, compared in its string form
    pub value: &'static str,
    /// Parameters that become mandatory
    pub requirements: &'static [&'static str],
}

/// Complete description of one module
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModuleDefinition {
    /// Module name, e.g. `bigip_ltm_pool`
    pub name: &'static str,
    /// One-line summary printed by `--list`
    pub description: &'static str,
    /// Collection below `/mgmt/tm/`, e.g. `ltm/pool`
    pub collection: &'static str,
    pub kind: ObjectKind,
    /// Module-specific parameters; common arguments are added per kind
    pub params: &'static [ParamSpec],
    /// Groups of parameters of which at most one may be given
    pub mutually_exclusive: &'static [&'static [&'static str]],
    pub required_if: &'static [RequiredIf],
}

impl ModuleDefinition {
    const fn base(
        name: &'static str,
        collection: &'static str,
        description: &'static str,
        kind: ObjectKind,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            collection,
            kind,
            params,
            mutually_exclusive: &[],
            required_if: &[],
        }
    }

    /// Partitioned object supporting create and delete
    pub const fn named(
        name: &'static str,
        collection: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self::base(name, collection, description, ObjectKind::Named { partitioned: true }, params)
    }

    /// Object below `parent_param`'s `sub_collection`
    pub const fn child(
        name: &'static str,
        collection: &'static str,
        parent_param: &'static str,
        sub_collection: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self::base(
            name,
            collection,
            description,
            ObjectKind::Child { parent_param, sub_collection },
            params,
        )
    }

    /// Singleton object without a name
    pub const fn unnamed(
        name: &'static str,
        collection: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self::base(name, collection, description, ObjectKind::Unnamed, params)
    }

    /// Always-present object addressed by bare name
    pub const fn keyed(
        name: &'static str,
        collection: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self::base(name, collection, description, ObjectKind::Keyed, params)
    }

    /// Named object addressed without a partition
    pub const fn unpartitioned(mut self) -> Self {
        if let ObjectKind::Named { .. } = self.kind {
            self.kind = ObjectKind::Named { partitioned: false };
        }
        self
    }

    /// Declare mutually exclusive parameter groups
    pub const fn mutually_exclusive(mut self, groups: &'static [&'static [&'static str]]) -> Self {
        self.mutually_exclusive = groups;
        self
    }

    /// Declare conditional requirements
    pub const fn required_if(mut self, rules: &'static [RequiredIf]) -> Self {
        self.required_if = rules;
        self
    }

    /// Parameter spec by name, including common arguments
    pub fn param(&self, name: &str) -> Option<ParamSpec> {
        self.argument_spec().into_iter().find(|p| p.name == name)
    }

    /// Full argument spec: provider arguments, identity arguments, then module parameters
    pub fn argument_spec(&self) -> Vec<ParamSpec> {
        let mut spec: Vec<ParamSpec> = crate::common::PROVIDER_ARGS.to_vec();
        if self.kind.has_name() {
            spec.push(crate::common::NAME_ARG);
        }
        if self.kind.is_partitioned() {
            spec.push(crate::common::PARTITION_ARG);
        }
        if self.kind.has_state() {
            spec.push(crate::common::STATE_ARG);
        }
        spec.extend_from_slice(self.params);
        spec
    }

    /// Module parameters that map onto remote attributes
    pub fn attribute_params(&self) -> impl Iterator<Item = &ParamSpec> {
        let parent = match self.kind {
            ObjectKind::Child { parent_param, .. } => Some(parent_param),
            _ => None,
        };
        self.params.iter().filter(move |p| Some(p.name) != parent)
    }
}
