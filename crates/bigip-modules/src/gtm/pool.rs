//! GTM A-record pools, pool members and wide IPs

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const POOL_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("alternate_mode", GTM_LB_MODE_CHOICES),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::str("fallback_ip").remote("fallbackIp"),
    ParamSpec::choice("fallback_mode", GTM_LB_MODE_CHOICES),
    ParamSpec::choice("load_balancing_mode", GTM_LB_MODE_CHOICES),
    ParamSpec::int("max_answers_returned"),
    ParamSpec::str("monitor").monitor_rule(),
    ParamSpec::int("qos_hit_ratio"),
    ParamSpec::int("ttl"),
    ParamSpec::choice("verify_member_availability", ACTIVATION_CHOICES),
];

pub const POOL: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_pool",
    "gtm/pool/a",
    "Manages GTM A-record pools",
    POOL_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]]);

const POOL_MEMBER_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("pool").required(),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::int("limit_max_bps"),
    ParamSpec::choice("limit_max_bps_status", ACTIVATION_CHOICES),
    ParamSpec::int("limit_max_connections"),
    ParamSpec::choice("limit_max_connections_status", ACTIVATION_CHOICES),
    ParamSpec::int("member_order"),
    ParamSpec::str("monitor").monitor_rule(),
    ParamSpec::int("ratio"),
];

/// Members are named `<server>:<virtual server>`
pub const POOL_MEMBER: ModuleDefinition = ModuleDefinition::child(
    "bigip_gtm_pool_member",
    "gtm/pool/a",
    "pool",
    "members",
    "Manages GTM A-record pool members",
    POOL_MEMBER_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]]);

const WIDEIP_PARAMS: &[ParamSpec] = &[
    ParamSpec::list("aliases"),
    ParamSpec::str("description"),
    ParamSpec::bool("enabled").flag_with("disabled"),
    ParamSpec::bool("disabled").flag_with("enabled"),
    ParamSpec::str("last_resort_pool").reference(),
    ParamSpec::choice("persistence", ACTIVATION_CHOICES),
    ParamSpec::choice("pool_lb_mode", &["global-availability", "ratio", "round-robin", "topology"]),
    // [{"name": "/Common/web", "ratio": 1}]
    ParamSpec::list("pools"),
    ParamSpec::list("rules").reference(),
    ParamSpec::int("ttl_persistence"),
];

pub const WIDEIP: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_wideip",
    "gtm/wideip/a",
    "Manages GTM A-record wide IPs",
    WIDEIP_PARAMS,
)
.mutually_exclusive(&[&["enabled", "disabled"]]);
