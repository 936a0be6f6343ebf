//! LTM SNATs, SNAT pools, SNAT translation addresses and NATs

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec, RequiredIf};

const SNAT_PARAMS: &[ParamSpec] = &[
    ParamSpec::bool("automap").flag(),
    ParamSpec::str("description"),
    ParamSpec::choice("mirror", BOOL_STR_CHOICES),
    // Origins are objects: [{"name": "10.0.0.0/24"}]
    ParamSpec::list("origins"),
    ParamSpec::str("snatpool").reference(),
    ParamSpec::choice("source_port", &["change", "preserve", "preserve-strict"]),
    ParamSpec::str("translation").reference(),
    ParamSpec::list("vlans").reference(),
    ParamSpec::bool("vlans_enabled").flag_with("vlansDisabled"),
    ParamSpec::bool("vlans_disabled").flag_with("vlansEnabled"),
];

pub const SNAT: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_snat",
    "ltm/snat",
    "Manages LTM SNATs",
    SNAT_PARAMS,
)
.mutually_exclusive(&[
    &["automap", "snatpool", "translation"],
    &["vlans_enabled", "vlans_disabled"],
])
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["origins"],
}]);

const SNATPOOL_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("description"),
    ParamSpec::list("members").reference(),
];

pub const SNATPOOL: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_snatpool",
    "ltm/snatpool",
    "Manages LTM SNAT pools",
    SNATPOOL_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["members"],
}]);

const SNAT_TRANSLATION_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("address").create_only(),
    ParamSpec::choice("arp", ACTIVATION_CHOICES),
    ParamSpec::int("connection_limit"),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::str("ip_idle_timeout"),
    ParamSpec::str("tcp_idle_timeout"),
    ParamSpec::str("traffic_group").reference(),
    ParamSpec::str("udp_idle_timeout"),
];

pub const SNAT_TRANSLATION: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_snat_translation",
    "ltm/snat-translation",
    "Manages LTM SNAT translation addresses",
    SNAT_TRANSLATION_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]]);

const NAT_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("arp", ACTIVATION_CHOICES),
    ParamSpec::choice("auto_lasthop", &["default", "enabled", "disabled"]),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::choice("inherited_traffic_group", BOOL_STR_CHOICES),
    ParamSpec::str("originating_address").create_only(),
    ParamSpec::str("traffic_group").reference(),
    ParamSpec::str("translation_address").create_only(),
    ParamSpec::list("vlans").reference(),
    ParamSpec::bool("vlans_enabled").flag_with("vlansDisabled"),
    ParamSpec::bool("vlans_disabled").flag_with("vlansEnabled"),
];

pub const NAT: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_nat",
    "ltm/nat",
    "Manages LTM NATs",
    NAT_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"], &["vlans_enabled", "vlans_disabled"]])
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["originating_address", "translation_address"],
}]);
