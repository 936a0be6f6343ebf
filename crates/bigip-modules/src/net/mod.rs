//! Network modules

pub mod route;
pub mod vlan;

use crate::spec::ModuleDefinition;

pub const MODULES: &[ModuleDefinition] = &[
    vlan::VLAN,
    route::SELF_IP,
    route::ROUTE,
    route::ROUTE_DOMAIN,
    vlan::TRUNK,
    vlan::INTERFACE,
    route::ARP,
];
