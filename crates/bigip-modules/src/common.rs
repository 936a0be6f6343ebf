//! Arguments and choice sets shared by every module

use crate::spec::ParamSpec;

/// Connection arguments accepted by every module
pub const PROVIDER_ARGS: &[ParamSpec] = &[
    ParamSpec::str("f5_hostname").required().env("F5_HOSTNAME"),
    ParamSpec::str("f5_username").required().env("F5_USERNAME"),
    ParamSpec::str("f5_password").required().no_log().env("F5_PASSWORD"),
    ParamSpec::int("f5_port").default_int(443).env("F5_PORT"),
    ParamSpec::bool("f5_validate_certs").default_bool(true).env("F5_VALIDATE_CERTS"),
    ParamSpec::str("f5_auth_provider").env("F5_AUTH_PROVIDER"),
];

pub const NAME_ARG: ParamSpec = ParamSpec::str("name").required();

pub const PARTITION_ARG: ParamSpec = ParamSpec::str("partition").default_str(DEFAULT_PARTITION);

pub const STATE_ARG: ParamSpec = ParamSpec::choice("state", STATE_CHOICES).default_str("present");

pub const DEFAULT_PARTITION: &str = "Common";

pub const STATE_CHOICES: &[&str] = &["absent", "present"];

pub const ACTIVATION_CHOICES: &[&str] = &["enabled", "disabled"];

pub const POLAR_CHOICES: &[&str] = &["yes", "no"];

pub const SWITCH_CHOICES: &[&str] = &["on", "off"];

pub const BOOL_STR_CHOICES: &[&str] = &["true", "false"];

pub const SEVERITY_CHOICES: &[&str] = &[
    "alert", "crit", "debug", "emerg", "err", "info", "notice", "warning",
];

pub const SESSION_CHOICES: &[&str] = &["user-enabled", "user-disabled"];

pub const MEMBER_STATE_CHOICES: &[&str] = &["user-up", "user-down"];

pub const LB_MODE_CHOICES: &[&str] = &[
    "dynamic-ratio-member",
    "dynamic-ratio-node",
    "fastest-app-response",
    "fastest-node",
    "least-connections-member",
    "least-connections-node",
    "least-sessions",
    "observed-member",
    "observed-node",
    "predictive-member",
    "predictive-node",
    "ratio-least-connections-member",
    "ratio-least-connections-node",
    "ratio-member",
    "ratio-node",
    "ratio-session",
    "round-robin",
    "weighted-least-connections-member",
    "weighted-least-connections-node",
];

pub const GTM_LB_MODE_CHOICES: &[&str] = &[
    "completion-rate",
    "cpu",
    "drop-packet",
    "fallback-ip",
    "fewest-hops",
    "global-availability",
    "kilobytes-per-second",
    "least-connections",
    "lowest-round-trip-time",
    "none",
    "packet-rate",
    "quality-of-service",
    "ratio",
    "return-to-dns",
    "round-robin",
    "static-persistence",
    "topology",
    "virtual-server-capacity",
    "virtual-server-score",
];

pub const SERVICE_DOWN_CHOICES: &[&str] = &["drop", "none", "reselect", "reset"];
