//! Local Traffic Manager modules

pub mod irule;
pub mod monitor;
pub mod persistence;
pub mod pool;
pub mod profile;
pub mod snat;
pub mod virtual_server;

use crate::spec::ModuleDefinition;

pub const MODULES: &[ModuleDefinition] = &[
    pool::POOL,
    pool::POOL_MEMBER,
    pool::NODE,
    virtual_server::VIRTUAL,
    virtual_server::VIRTUAL_ADDRESS,
    snat::SNAT,
    snat::SNATPOOL,
    snat::SNAT_TRANSLATION,
    snat::NAT,
    irule::IRULE,
    irule::DATA_GROUP_INTERNAL,
    monitor::HTTP,
    monitor::HTTPS,
    monitor::TCP,
    monitor::UDP,
    monitor::ICMP,
    monitor::GATEWAY_ICMP,
    profile::HTTP,
    profile::TCP,
    profile::UDP,
    profile::FASTL4,
    profile::CLIENT_SSL,
    profile::SERVER_SSL,
    profile::ONE_CONNECT,
    persistence::COOKIE,
    persistence::SOURCE_ADDR,
];
