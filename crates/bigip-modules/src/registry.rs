//! Lookup over the whole module catalog

use crate::error::ParamError;
use crate::spec::ModuleDefinition;
use crate::{gtm, ltm, net, sys, vcmp};

const AREAS: &[&[ModuleDefinition]] = &[
    ltm::MODULES,
    gtm::MODULES,
    sys::MODULES,
    net::MODULES,
    vcmp::MODULES,
];

/// Every module definition, grouped by area
pub fn all_modules() -> impl Iterator<Item = &'static ModuleDefinition> {
    AREAS.iter().flat_map(|area| area.iter())
}

/// Module definition by its Ansible name (`bigip_ltm_pool`)
pub fn find(name: &str) -> Result<&'static ModuleDefinition, ParamError> {
    all_modules()
        .find(|definition| definition.name == name)
        .ok_or_else(|| ParamError::UnknownModule(name.to_string()))
}
