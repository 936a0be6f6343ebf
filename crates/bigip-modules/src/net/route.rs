//! Layer 3: self IPs, routes, route domains and static ARP entries

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec, RequiredIf};

const SELF_IP_PARAMS: &[ParamSpec] = &[
    // `10.0.0.1/24`, or `10.0.0.1%2/24` in a route domain
    ParamSpec::str("address"),
    // `default`, `none`, `all` or [`tcp:443`, ...]
    ParamSpec::list("allow_service"),
    ParamSpec::str("description"),
    ParamSpec::choice("floating", ACTIVATION_CHOICES),
    ParamSpec::choice("inherited_traffic_group", BOOL_STR_CHOICES),
    ParamSpec::str("traffic_group").reference(),
    ParamSpec::str("vlan").reference(),
];

pub const SELF_IP: ModuleDefinition = ModuleDefinition::named(
    "bigip_net_self_ip",
    "net/self",
    "Manages self IP addresses",
    SELF_IP_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["address", "vlan"],
}]);

const ROUTE_PARAMS: &[ParamSpec] = &[
    ParamSpec::bool("blackhole").flag(),
    ParamSpec::str("description"),
    ParamSpec::str("gw"),
    ParamSpec::int("mtu"),
    ParamSpec::str("network").create_only(),
    ParamSpec::str("pool").reference(),
    ParamSpec::str("tm_interface").reference(),
];

pub const ROUTE: ModuleDefinition = ModuleDefinition::named(
    "bigip_net_route",
    "net/route",
    "Manages static routes",
    ROUTE_PARAMS,
)
.mutually_exclusive(&[&["gw", "pool", "tm_interface", "blackhole"]])
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["network"],
}]);

const ROUTE_DOMAIN_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("bwc_policy").reference(),
    ParamSpec::int("connection_limit"),
    ParamSpec::str("description"),
    ParamSpec::str("flow_eviction_policy").reference(),
    ParamSpec::int("id").create_only(),
    ParamSpec::str("parent").reference(),
    ParamSpec::list("routing_protocol"),
    ParamSpec::str("service_policy").reference(),
    ParamSpec::choice("strict", ACTIVATION_CHOICES),
    ParamSpec::list("vlans").reference(),
];

pub const ROUTE_DOMAIN: ModuleDefinition = ModuleDefinition::named(
    "bigip_net_route_domain",
    "net/route-domain",
    "Manages route domains",
    ROUTE_DOMAIN_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["id"],
}]);

const ARP_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("ip_address").create_only(),
    ParamSpec::str("mac_address"),
];

pub const ARP: ModuleDefinition = ModuleDefinition::named(
    "bigip_net_arp",
    "net/arp",
    "Manages static ARP entries",
    ARP_PARAMS,
)
.required_if(&[RequiredIf {
    param: "state",
    value: "present",
    requirements: &["ip_address", "mac_address"],
}]);
