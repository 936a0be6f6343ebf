use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const HTTP_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::choice("ignore_down_response", ACTIVATION_CHOICES),
    ParamSpec::int("interval"),
    ParamSpec::int("probe_timeout"),
    ParamSpec::str("receive").remote("recv"),
    ParamSpec::choice("reverse", ACTIVATION_CHOICES),
    ParamSpec::str("send"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
];

pub const HTTP: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_monitor_http",
    "gtm/monitor/http",
    "Manages GTM HTTP monitors",
    HTTP_PARAMS,
);

const TCP_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::choice("ignore_down_response", ACTIVATION_CHOICES),
    ParamSpec::int("interval"),
    ParamSpec::int("probe_timeout"),
    ParamSpec::str("receive").remote("recv"),
    ParamSpec::choice("reverse", ACTIVATION_CHOICES),
    ParamSpec::str("send"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
];

pub const TCP: ModuleDefinition = ModuleDefinition::named(
    "bigip_gtm_monitor_tcp",
    "gtm/monitor/tcp",
    "Manages GTM TCP monitors",
    TCP_PARAMS,
);
