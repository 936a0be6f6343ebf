//! vCMP guest provisioning

use crate::spec::{ModuleDefinition, ParamSpec};

const GUEST_PARAMS: &[ParamSpec] = &[
    ParamSpec::list("allowed_slots"),
    ParamSpec::int("cores_per_slot"),
    ParamSpec::str("hostname"),
    ParamSpec::str("initial_hotfix"),
    ParamSpec::str("initial_image"),
    // `10.1.1.20/24`
    ParamSpec::str("management_address").remote("managementIp"),
    ParamSpec::str("management_gw"),
    ParamSpec::choice("management_network", &["bridged", "host-only", "isolated"]),
    ParamSpec::int("min_slots"),
    ParamSpec::int("slots"),
    // `state` is taken by present/absent
    ParamSpec::choice("guest_state", &["configured", "provisioned", "deployed"]).remote("state"),
    ParamSpec::str("traffic_group").reference(),
    ParamSpec::list("vlans").reference(),
];

pub const GUEST: ModuleDefinition = ModuleDefinition::named(
    "bigip_vcmp_guest",
    "vcmp/guest",
    "Manages vCMP guests",
    GUEST_PARAMS,
)
.unpartitioned();

pub const MODULES: &[ModuleDefinition] = &[GUEST];
