//! Administrative folders and management routes

use crate::common::BOOL_STR_CHOICES;
use crate::spec::{ModuleDefinition, ParamSpec, RequiredIf};

const FOLDER_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("description"),
    ParamSpec::str("device_group"),
    ParamSpec::choice("inherited_device_group", BOOL_STR_CHOICES),
    ParamSpec::choice("inherited_traffic_group", BOOL_STR_CHOICES),
    ParamSpec::choice("no_ref_check", BOOL_STR_CHOICES),
    ParamSpec::str("traffic_group").reference(),
];

pub const FOLDER: ModuleDefinition = ModuleDefinition::named(
    "bigip_sys_folder",
    "sys/folder",
    "Manages administrative folders",
    FOLDER_PARAMS,
);

const MANAGEMENT_ROUTE_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("description"),
    ParamSpec::str("gateway"),
    ParamSpec::int("mtu"),
    ParamSpec::str("network").create_only(),
];

pub const MANAGEMENT_ROUTE: ModuleDefinition = ModuleDefinition::named(
    "bigip_sys_management_route",
    "sys/management-route",
    "Manages routes on the management interface",
    MANAGEMENT_ROUTE_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["gateway", "network"],
}]);
