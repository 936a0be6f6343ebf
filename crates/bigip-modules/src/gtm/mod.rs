//! Global Traffic Manager (BIG-IP DNS) modules

pub mod monitor;
pub mod pool;
pub mod server;

use crate::spec::ModuleDefinition;

pub const MODULES: &[ModuleDefinition] = &[
    server::DATACENTER,
    server::SERVER,
    server::LISTENER,
    server::REGION,
    pool::POOL,
    pool::POOL_MEMBER,
    pool::WIDEIP,
    monitor::HTTP,
    monitor::TCP,
];
