//! LTM health monitors

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const HTTP_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("adaptive", ACTIVATION_CHOICES),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::int("interval"),
    ParamSpec::int("ip_dscp"),
    ParamSpec::choice("manual_resume", ACTIVATION_CHOICES),
    ParamSpec::str("password").no_log(),
    ParamSpec::str("receive").remote("recv"),
    ParamSpec::str("receive_disable").remote("recvDisable"),
    ParamSpec::choice("reverse", ACTIVATION_CHOICES),
    ParamSpec::str("send"),
    ParamSpec::int("time_until_up"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
    ParamSpec::int("up_interval"),
    ParamSpec::str("username"),
];

pub const HTTP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_monitor_http",
    "ltm/monitor/http",
    "Manages LTM HTTP monitors",
    HTTP_PARAMS,
);

const HTTPS_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("adaptive", ACTIVATION_CHOICES),
    ParamSpec::str("cert").reference(),
    ParamSpec::str("cipherlist"),
    ParamSpec::str("compatibility"),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::int("interval"),
    ParamSpec::int("ip_dscp"),
    ParamSpec::str("key").reference(),
    ParamSpec::choice("manual_resume", ACTIVATION_CHOICES),
    ParamSpec::str("password").no_log(),
    ParamSpec::str("receive").remote("recv"),
    ParamSpec::str("receive_disable").remote("recvDisable"),
    ParamSpec::choice("reverse", ACTIVATION_CHOICES),
    ParamSpec::str("send"),
    ParamSpec::int("time_until_up"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
    ParamSpec::int("up_interval"),
    ParamSpec::str("username"),
];

pub const HTTPS: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_monitor_https",
    "ltm/monitor/https",
    "Manages LTM HTTPS monitors",
    HTTPS_PARAMS,
);

const TCP_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("adaptive", ACTIVATION_CHOICES),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::int("interval"),
    ParamSpec::int("ip_dscp"),
    ParamSpec::choice("manual_resume", ACTIVATION_CHOICES),
    ParamSpec::str("receive").remote("recv"),
    ParamSpec::str("receive_disable").remote("recvDisable"),
    ParamSpec::choice("reverse", ACTIVATION_CHOICES),
    ParamSpec::str("send"),
    ParamSpec::int("time_until_up"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
    ParamSpec::int("up_interval"),
];

pub const TCP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_monitor_tcp",
    "ltm/monitor/tcp",
    "Manages LTM TCP monitors",
    TCP_PARAMS,
);

const UDP_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::int("interval"),
    ParamSpec::choice("manual_resume", ACTIVATION_CHOICES),
    ParamSpec::str("receive").remote("recv"),
    ParamSpec::str("receive_disable").remote("recvDisable"),
    ParamSpec::choice("reverse", ACTIVATION_CHOICES),
    ParamSpec::str("send"),
    ParamSpec::int("time_until_up"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
    ParamSpec::int("up_interval"),
];

pub const UDP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_monitor_udp",
    "ltm/monitor/udp",
    "Manages LTM UDP monitors",
    UDP_PARAMS,
);

const ICMP_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::int("interval"),
    ParamSpec::choice("manual_resume", ACTIVATION_CHOICES),
    ParamSpec::int("time_until_up"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
    ParamSpec::int("up_interval"),
];

pub const ICMP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_monitor_icmp",
    "ltm/monitor/icmp",
    "Manages LTM ICMP monitors",
    ICMP_PARAMS,
);

const GATEWAY_ICMP_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("adaptive", ACTIVATION_CHOICES),
    ParamSpec::int("adaptive_limit"),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("destination"),
    ParamSpec::int("interval"),
    ParamSpec::choice("manual_resume", ACTIVATION_CHOICES),
    ParamSpec::int("time_until_up"),
    ParamSpec::int("timeout"),
    ParamSpec::choice("transparent", ACTIVATION_CHOICES),
    ParamSpec::int("up_interval"),
];

pub const GATEWAY_ICMP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_monitor_gateway_icmp",
    "ltm/monitor/gateway-icmp",
    "Manages LTM gateway ICMP monitors",
    GATEWAY_ICMP_PARAMS,
);
