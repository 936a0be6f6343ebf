//! LTM persistence profiles

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const COOKIE_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("always_send", ACTIVATION_CHOICES),
    ParamSpec::choice("cookie_encryption", &["disabled", "preferred", "required"]),
    ParamSpec::str("cookie_encryption_passphrase").no_log(),
    ParamSpec::str("cookie_name"),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::choice("encrypt_cookie_poolname", ACTIVATION_CHOICES),
    ParamSpec::str("expiration"),
    ParamSpec::int("hash_length"),
    ParamSpec::int("hash_offset"),
    ParamSpec::choice("match_across_pools", ACTIVATION_CHOICES),
    ParamSpec::choice("match_across_services", ACTIVATION_CHOICES),
    ParamSpec::choice("match_across_virtuals", ACTIVATION_CHOICES),
    ParamSpec::choice("method", &["hash", "insert", "passive", "rewrite"]),
    ParamSpec::choice("mirror", ACTIVATION_CHOICES),
    ParamSpec::choice("override_connection_limit", ACTIVATION_CHOICES),
    ParamSpec::str("timeout"),
];

pub const COOKIE: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_persistence_cookie",
    "ltm/persistence/cookie",
    "Manages LTM cookie persistence profiles",
    COOKIE_PARAMS,
);

const SOURCE_ADDR_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::choice("hash_algorithm", &["default", "carp"]),
    ParamSpec::choice("map_proxies", ACTIVATION_CHOICES),
    ParamSpec::str("mask"),
    ParamSpec::choice("match_across_pools", ACTIVATION_CHOICES),
    ParamSpec::choice("match_across_services", ACTIVATION_CHOICES),
    ParamSpec::choice("match_across_virtuals", ACTIVATION_CHOICES),
    ParamSpec::choice("mirror", ACTIVATION_CHOICES),
    ParamSpec::choice("override_connection_limit", ACTIVATION_CHOICES),
    ParamSpec::str("timeout"),
];

pub const SOURCE_ADDR: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_persistence_source_addr",
    "ltm/persistence/source-addr",
    "Manages LTM source address persistence profiles",
    SOURCE_ADDR_PARAMS,
);
