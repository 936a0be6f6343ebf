//! System modules

pub mod db;
pub mod folder;
pub mod settings;

use crate::spec::ModuleDefinition;

pub const MODULES: &[ModuleDefinition] = &[
    settings::NTP,
    settings::DNS,
    settings::GLOBAL_SETTINGS,
    settings::HTTPD,
    settings::SSHD,
    settings::SNMP,
    settings::SYSLOG,
    db::DB,
    db::PROVISION,
    folder::FOLDER,
    folder::MANAGEMENT_ROUTE,
];
