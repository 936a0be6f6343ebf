//! LTM iRules and internal data groups

use crate::common::BOOL_STR_CHOICES;
use crate::spec::{ModuleDefinition, ParamSpec, RequiredIf};

const IRULE_PARAMS: &[ParamSpec] = &[
    // iRule source text
    ParamSpec::str("content").remote("apiAnonymous"),
    ParamSpec::str("description"),
    ParamSpec::choice("ignore_verification", BOOL_STR_CHOICES),
];

pub const IRULE: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_irule",
    "ltm/rule",
    "Manages LTM iRules",
    IRULE_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["content"],
}]);

const DATA_GROUP_INTERNAL_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("description"),
    // [{"name": "10.0.0.0/8", "data": "internal"}]
    ParamSpec::list("records"),
    ParamSpec::choice("type", &["integer", "ip", "string"]).create_only(),
];

pub const DATA_GROUP_INTERNAL: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_data_group_internal",
    "ltm/data-group/internal",
    "Manages LTM internal data groups",
    DATA_GROUP_INTERNAL_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["type"],
}]);
