//! GTM data centers, servers, listeners and topology regions

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec, RequiredIf};

const DATACENTER_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("contact"),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::str("location"),
    ParamSpec::str("prober_pool").reference(),
];

pub const DATACENTER: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_datacenter",
    "gtm/datacenter",
    "Manages GTM data centers",
    DATACENTER_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]]);

const SERVER_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("datacenter").reference(),
    ParamSpec::str("description"),
    // [{"name": "bigip1", "addresses": [{"name": "10.0.0.1"}]}]
    ParamSpec::list("devices").remote("addresses"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::choice("expose_route_domains", POLAR_CHOICES),
    ParamSpec::choice("iq_allow_path", POLAR_CHOICES),
    ParamSpec::choice("iq_allow_service_check", POLAR_CHOICES),
    ParamSpec::choice("iq_allow_snmp", POLAR_CHOICES),
    ParamSpec::choice("link_discovery", &["disabled", "enabled", "enabled-no-delete"]),
    ParamSpec::str("monitor").monitor_rule(),
    ParamSpec::choice("prober_fallback", &["any-available", "inherit", "inside-datacenter", "none", "outside-datacenter", "pool"]),
    ParamSpec::choice("prober_preference", &["inherit", "inside-datacenter", "outside-datacenter", "pool"]),
    ParamSpec::choice("product", &[
        "bigip", "generic-host", "alteon-ace-director", "cisco-css", "cisco-server-load-balancer",
        "extreme", "foundry-server-iron", "netapp", "radware-wsd", "windows-2000-server", "windows-nt-4.0",
    ]).create_only(),
    ParamSpec::choice("virtual_server_discovery", &["disabled", "enabled", "enabled-no-delete"]),
];

pub const SERVER: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_server",
    "gtm/server",
    "Manages GTM servers",
    SERVER_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]])
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["datacenter", "devices"],
}]);

const LISTENER_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("address").create_only(),
    ParamSpec::choice("advertise", BOOL_STR_CHOICES),
    ParamSpec::choice("auto_lasthop", &["default", "enabled", "disabled"]),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::choice("ip_protocol", &["tcp", "udp"]),
    ParamSpec::str("mask"),
    ParamSpec::int("port"),
    ParamSpec::list("profiles").reference(),
    ParamSpec::str("source_address_translation"),
    ParamSpec::choice("translate_address", ACTIVATION_CHOICES),
    ParamSpec::choice("translate_port", ACTIVATION_CHOICES),
    ParamSpec::list("vlans").reference(),
    ParamSpec::bool("vlans_enabled").flag_with("vlansDisabled"),
    ParamSpec::bool("vlans_disabled").flag_with("vlansEnabled"),
];

pub const LISTENER: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_listener",
    "gtm/listener",
    "Manages GTM DNS listeners",
    LISTENER_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"], &["vlans_enabled", "vlans_disabled"]])
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["address"],
}]);

const REGION_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("description"),
    // [{"name": "continent EU"}, {"name": "not subnet 10.0.0.0/8"}]
    ParamSpec::list("region_members"),
];

pub const REGION: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_region",
    "gtm/region",
    "Manages GTM topology regions",
    REGION_PARAMS,
);
