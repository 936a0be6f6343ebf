//! Device-wide singletons under `sys/`
//!
//! These objects always exist and have no name; the modules only read and
//! modify them.

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const NTP_PARAMS: &[ParamSpec] = &[
    ParamSpec::list("servers"),
    ParamSpec::list("restrict"),
    ParamSpec::str("timezone"),
];

pub const NTP: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_ntp",
    "sys/ntp",
    "Manages NTP servers and the device time zone",
    NTP_PARAMS,
);

const DNS_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("include"),
    ParamSpec::list("name_servers"),
    ParamSpec::list("search"),
];

pub const DNS: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_dns",
    "sys/dns",
    "Manages resolver settings",
    DNS_PARAMS,
);

const GLOBAL_SETTINGS_PARAMS: &[ParamSpec] = &[
    ParamSpec::int("console_inactivity_timeout"),
    ParamSpec::str("custom_addr"),
    ParamSpec::str("failsafe_action"),
    ParamSpec::choice("file_blacklist_path_prefix_check", ACTIVATION_CHOICES),
    ParamSpec::choice("gui_security_banner", ACTIVATION_CHOICES),
    ParamSpec::str("gui_security_banner_text"),
    ParamSpec::choice("gui_setup", ACTIVATION_CHOICES),
    ParamSpec::str("hostname"),
    ParamSpec::choice("lcd_display", ACTIVATION_CHOICES),
    ParamSpec::choice("mgmt_dhcp", ACTIVATION_CHOICES),
    ParamSpec::choice("net_reboot", ACTIVATION_CHOICES),
    ParamSpec::choice("quiet_boot", ACTIVATION_CHOICES),
    ParamSpec::choice("username_prompt", ACTIVATION_CHOICES),
];

pub const GLOBAL_SETTINGS: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_global_settings",
    "sys/global-settings",
    "Manages system global settings",
    GLOBAL_SETTINGS_PARAMS,
);

const HTTPD_PARAMS: &[ParamSpec] = &[
    ParamSpec::list("allow"),
    ParamSpec::choice("auth_name", &["BIG-IP"]),
    ParamSpec::int("auth_pam_dashboard_timeout_seconds").remote("authPamDashboardTimeout"),
    ParamSpec::int("auth_pam_idle_timeout"),
    ParamSpec::choice("auth_pam_validate_ip", SWITCH_CHOICES),
    ParamSpec::int("fastcgi_timeout"),
    ParamSpec::choice("hostname_lookup", SWITCH_CHOICES),
    ParamSpec::choice("log_level", SEVERITY_CHOICES),
    ParamSpec::int("max_clients"),
    ParamSpec::choice("redirect_http_to_https", ACTIVATION_CHOICES),
    ParamSpec::str("ssl_ciphersuite"),
    ParamSpec::int("ssl_port"),
    ParamSpec::str("ssl_protocol"),
];

pub const HTTPD: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_httpd",
    "sys/httpd",
    "Manages the management web server",
    HTTPD_PARAMS,
);

const SSHD_PARAMS: &[ParamSpec] = &[
    ParamSpec::list("allow"),
    ParamSpec::choice("banner", ACTIVATION_CHOICES),
    ParamSpec::str("banner_text"),
    ParamSpec::int("inactivity_timeout"),
    ParamSpec::choice("log_level", &[
        "debug", "debug1", "debug2", "debug3", "error", "fatal", "info", "quiet", "verbose",
    ]),
    ParamSpec::choice("login", ACTIVATION_CHOICES),
    ParamSpec::int("port"),
];

pub const SSHD: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_sshd",
    "sys/sshd",
    "Manages the SSH daemon",
    SSHD_PARAMS,
);

const SNMP_PARAMS: &[ParamSpec] = &[
    ParamSpec::list("agent_addresses"),
    ParamSpec::choice("agent_trap", ACTIVATION_CHOICES),
    ParamSpec::list("allowed_addresses"),
    ParamSpec::choice("auth_trap", ACTIVATION_CHOICES),
    ParamSpec::choice("bigip_traps", ACTIVATION_CHOICES),
    ParamSpec::str("sys_contact"),
    ParamSpec::str("sys_location"),
];

pub const SNMP: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_snmp",
    "sys/snmp",
    "Manages SNMP agent settings",
    SNMP_PARAMS,
);

const SYSLOG_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("auth_priv_from", SEVERITY_CHOICES),
    ParamSpec::choice("auth_priv_to", SEVERITY_CHOICES),
    ParamSpec::choice("console_log", ACTIVATION_CHOICES),
    ParamSpec::choice("cron_from", SEVERITY_CHOICES),
    ParamSpec::choice("cron_to", SEVERITY_CHOICES),
    ParamSpec::choice("daemon_from", SEVERITY_CHOICES),
    ParamSpec::choice("daemon_to", SEVERITY_CHOICES),
    ParamSpec::str("include"),
    ParamSpec::choice("iso_date", ACTIVATION_CHOICES),
    ParamSpec::choice("kern_from", SEVERITY_CHOICES),
    ParamSpec::choice("kern_to", SEVERITY_CHOICES),
    ParamSpec::choice("mail_from", SEVERITY_CHOICES),
    ParamSpec::choice("mail_to", SEVERITY_CHOICES),
    ParamSpec::choice("messages_from", SEVERITY_CHOICES),
    ParamSpec::choice("messages_to", SEVERITY_CHOICES),
    // [{"name": "siem", "host": "10.0.0.50", "remotePort": 514}]
    ParamSpec::list("remote_servers"),
    ParamSpec::choice("user_log_from", SEVERITY_CHOICES),
    ParamSpec::choice("user_log_to", SEVERITY_CHOICES),
];

pub const SYSLOG: ModuleDefinition = ModuleDefinition::unnamed(
    "bigip_sys_syslog",
    "sys/syslog",
    "Manages local and remote syslog settings",
    SYSLOG_PARAMS,
);
