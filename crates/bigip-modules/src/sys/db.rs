//! Keyed system objects: database variables and module provisioning

use crate::spec::{ModuleDefinition, ParamSpec};

const DB_PARAMS: &[ParamSpec] = &[ParamSpec::str("value").required()];

pub const DB: ModuleDefinition = ModuleDefinition::keyed(
    "bigip_sys_db",
    "sys/db",
    "Manages system database variables",
    DB_PARAMS,
);

const PROVISION_PARAMS: &[ParamSpec] = &[
    ParamSpec::int("cpu_ratio"),
    ParamSpec::int("disk_ratio"),
    ParamSpec::choice("level", &["custom", "dedicated", "minimum", "nominal", "none"]),
    ParamSpec::int("memory_ratio"),
];

/// Name is the module: `ltm`, `gtm`, `asm`, `avr`, ...
pub const PROVISION: ModuleDefinition = ModuleDefinition::keyed(
    "bigip_sys_provision",
    "sys/provision",
    "Manages module provisioning levels",
    PROVISION_PARAMS,
);
