//! LTM pools, pool members and nodes

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const POOL_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("allow_nat", POLAR_CHOICES),
    ParamSpec::choice("allow_snat", POLAR_CHOICES),
    ParamSpec::str("description"),
    ParamSpec::choice("ignore_persisted_weight", ACTIVATION_CHOICES),
    ParamSpec::choice("ip_tos_to_client", &["pass-through", "mimic"]),
    ParamSpec::choice("ip_tos_to_server", &["pass-through", "mimic"]),
    ParamSpec::choice("link_qos_to_client", &["pass-through"]),
    ParamSpec::choice("link_qos_to_server", &["pass-through"]),
    ParamSpec::choice("load_balancing_mode", LB_MODE_CHOICES),
    ParamSpec::int("min_active_members"),
    ParamSpec::int("min_up_members"),
    ParamSpec::choice("min_up_members_action", &["failover", "reboot", "restart-all"]),
    ParamSpec::choice("min_up_members_checking", ACTIVATION_CHOICES),
    ParamSpec::str("monitor").monitor_rule(),
    ParamSpec::list("profiles").reference(),
    ParamSpec::int("queue_depth_limit"),
    ParamSpec::choice("queue_on_connection_limit", ACTIVATION_CHOICES),
    ParamSpec::int("queue_time_limit"),
    ParamSpec::int("reselect_tries"),
    ParamSpec::choice("service_down_action", SERVICE_DOWN_CHOICES),
    ParamSpec::int("slow_ramp_time"),
];

pub const POOL: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_pool",
    "ltm/pool",
    "Manages LTM pools",
    POOL_PARAMS,
);

const POOL_MEMBER_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("pool").required(),
    ParamSpec::str("address").create_only(),
    ParamSpec::int("connection_limit"),
    ParamSpec::str("description"),
    ParamSpec::int("dynamic_ratio"),
    ParamSpec::choice("inherit_profile", ACTIVATION_CHOICES),
    ParamSpec::choice("logging", ACTIVATION_CHOICES),
    ParamSpec::str("monitor").monitor_rule(),
    ParamSpec::int("priority_group"),
    ParamSpec::str("rate_limit"),
    ParamSpec::int("ratio"),
    // `state` is taken by present/absent; BIG-IP's own attributes are renamed
    ParamSpec::choice("session_state", SESSION_CHOICES).remote("session"),
    ParamSpec::choice("member_state", MEMBER_STATE_CHOICES).remote("state"),
];

pub const POOL_MEMBER: ModuleDefinition = ModuleDefinition::child(
    "bigip_ltm_pool_member",
    "ltm/pool",
    "pool",
    "members",
    "Manages LTM pool members",
    POOL_MEMBER_PARAMS,
);

const NODE_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("address").create_only(),
    ParamSpec::int("connection_limit"),
    ParamSpec::str("description"),
    ParamSpec::int("dynamic_ratio"),
    ParamSpec::dict("fqdn").create_only(),
    ParamSpec::choice("logging", ACTIVATION_CHOICES),
    ParamSpec::str("monitor").monitor_rule(),
    ParamSpec::str("rate_limit"),
    ParamSpec::int("ratio"),
    ParamSpec::choice("session_state", SESSION_CHOICES).remote("session"),
    ParamSpec::choice("node_state", MEMBER_STATE_CHOICES).remote("state"),
];

pub const NODE: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_node",
    "ltm/node",
    "Manages LTM nodes",
    NODE_PARAMS,
)
.mutually_exclusive(&[&["address", "fqdn"]]);
