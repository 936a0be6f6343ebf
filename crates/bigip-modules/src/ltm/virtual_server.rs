//! LTM virtual servers and virtual addresses

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec, RequiredIf};

const VIRTUAL_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("address_status", POLAR_CHOICES),
    ParamSpec::choice("auto_lasthop", &["default", "enabled", "disabled"]),
    ParamSpec::choice("cmp_enabled", POLAR_CHOICES),
    ParamSpec::int("connection_limit"),
    ParamSpec::str("description"),
    // Destination is `address:port`, qualified like any object name
    ParamSpec::str("destination").reference(),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::str("fallback_persistence").reference(),
    ParamSpec::choice("ip_protocol", &["any", "icmp", "sctp", "tcp", "udp"]),
    ParamSpec::str("mask"),
    ParamSpec::choice("mirror", ACTIVATION_CHOICES),
    ParamSpec::choice("nat64", ACTIVATION_CHOICES),
    ParamSpec::list("persist"),
    ParamSpec::list("policies").reference(),
    ParamSpec::str("pool").reference(),
    ParamSpec::list("profiles").reference(),
    ParamSpec::str("rate_limit"),
    ParamSpec::list("rules").reference(),
    ParamSpec::str("source"),
    ParamSpec::dict("source_address_translation"),
    ParamSpec::choice("source_port", &["change", "preserve", "preserve-strict"]),
    ParamSpec::choice("translate_address", ACTIVATION_CHOICES),
    ParamSpec::choice("translate_port", ACTIVATION_CHOICES),
    ParamSpec::list("vlans").reference(),
    ParamSpec::bool("vlans_enabled").flag_with("vlansDisabled"),
    ParamSpec::bool("vlans_disabled").flag_with("vlansEnabled"),
];

pub const VIRTUAL: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_virtual",
    "ltm/virtual",
    "Manages LTM virtual servers",
    VIRTUAL_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"], &["vlans_enabled", "vlans_disabled"]])
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["destination"],
}]);

const VIRTUAL_ADDRESS_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("address").create_only(),
    ParamSpec::choice("arp", ACTIVATION_CHOICES),
    ParamSpec::choice("auto_delete", BOOL_STR_CHOICES),
    ParamSpec::int("connection_limit"),
    ParamSpec::str("description"),
    ParamSpec::choice("enabled", POLAR_CHOICES),
    ParamSpec::choice("icmp_echo", &["enabled", "disabled", "selective"]),
    ParamSpec::str("mask"),
    ParamSpec::choice("route_advertisement", &["enabled", "disabled", "selective", "always", "any", "all"]),
    ParamSpec::choice("server_scope", &["all", "any", "none"]),
    ParamSpec::choice("spanning", ACTIVATION_CHOICES),
    ParamSpec::str("traffic_group").reference(),
];

pub const VIRTUAL_ADDRESS: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_virtual_address",
    "ltm/virtual-address",
    "Manages LTM virtual addresses",
    VIRTUAL_ADDRESS_PARAMS,
);
