//! Layer 2: VLANs, trunks and physical interfaces

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const VLAN_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("auto_lasthop", &["default", "enabled", "disabled"]),
    ParamSpec::choice("cmp_hash", &["default", "dst-ip", "src-ip"]),
    ParamSpec::str("description"),
    ParamSpec::choice("fail_safe", ACTIVATION_CHOICES),
    ParamSpec::choice("fail_safe_action", &["failover", "failover-restart-tm", "reboot", "restart-all"]),
    ParamSpec::int("fail_safe_timeout"),
    // [{"name": "1.1", "tagged": true}]
    ParamSpec::list("interfaces"),
    ParamSpec::choice("learning", &["disable-drop", "disable-forward", "enable-forward"]),
    ParamSpec::int("mtu"),
    ParamSpec::int("sflow_poll_interval"),
    ParamSpec::int("sflow_sampling_rate"),
    ParamSpec::choice("source_check", ACTIVATION_CHOICES),
    ParamSpec::int("tag"),
];

pub const VLAN: ModuleDefinition = ModuleDefinition::named(
    "bigip_net_vlan",
    "net/vlan",
    "Manages VLANs",
    VLAN_PARAMS,
);

const TRUNK_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("description"),
    ParamSpec::choice("distribution_hash", &["dst-mac", "index", "src-dst-ipport", "src-dst-mac"]),
    ParamSpec::list("interfaces"),
    ParamSpec::choice("lacp", ACTIVATION_CHOICES),
    ParamSpec::choice("lacp_mode", &["active", "passive"]),
    ParamSpec::choice("lacp_timeout", &["long", "short"]),
    ParamSpec::choice("link_select_policy", &["auto", "maximum-bandwidth"]),
    ParamSpec::str("qinq_ethertype"),
];

pub const TRUNK: ModuleDefinition = ModuleDefinition::named(
    "bigip_net_trunk",
    "net/trunk",
    "Manages link aggregation trunks",
    TRUNK_PARAMS,
)
.unpartitioned();

const INTERFACE_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("bundle"),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::choice("flow_control", &["none", "rx", "tx", "tx-rx"]),
    ParamSpec::choice("forward_error_correction", &["auto", "cl108", "cl74", "cl91", "none"]),
    ParamSpec::choice("lldp_admin", &["disable", "rxonly", "txonly", "txrx"]),
    ParamSpec::str("media_fixed"),
    ParamSpec::choice("prefer_port", &["fixed", "sfp"]),
    ParamSpec::choice("stp", ACTIVATION_CHOICES),
];

/// Physical ports are addressed by number (`1.1`) and can only be modified
pub const INTERFACE: ModuleDefinition = ModuleDefinition::keyed(
    "bigip_net_interface",
    "net/interface",
    "Manages physical interface settings",
    INTERFACE_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]]);
