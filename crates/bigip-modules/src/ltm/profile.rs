//! LTM protocol, SSL and connection pooling profiles

use crate::common::*;
use crate::spec::{ModuleDefinition, ParamSpec};

const HTTP_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("accept_xff", ACTIVATION_CHOICES),
    ParamSpec::str("basic_auth_realm"),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("fallback_host"),
    ParamSpec::list("fallback_status_codes"),
    ParamSpec::str("header_erase"),
    ParamSpec::str("header_insert"),
    ParamSpec::choice("insert_xforwarded_for", ACTIVATION_CHOICES),
    ParamSpec::int("lws_width"),
    ParamSpec::choice("oneconnect_transformations", ACTIVATION_CHOICES),
    ParamSpec::choice("proxy_type", &["reverse", "transparent", "explicit"]),
    ParamSpec::choice("redirect_rewrite", &["all", "matching", "nodes", "none"]),
    ParamSpec::choice("request_chunking", &["preserve", "selective", "rechunk"]),
    ParamSpec::choice("response_chunking", &["preserve", "selective", "rechunk", "unchunk"]),
    ParamSpec::str("server_agent_name"),
    ParamSpec::list("xff_alternative_names"),
];

pub const HTTP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_http",
    "ltm/profile/http",
    "Manages LTM HTTP profiles",
    HTTP_PARAMS,
);

const TCP_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("congestion_control", &[
        "cdg", "chd", "cubic", "high-speed", "illinois", "new-reno", "none", "reno", "scalable", "vegas", "westwood", "woodside",
    ]),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::choice("delayed_acks", ACTIVATION_CHOICES),
    ParamSpec::str("description"),
    ParamSpec::int("idle_timeout"),
    ParamSpec::int("keep_alive_interval"),
    ParamSpec::choice("nagle", &["enabled", "disabled", "auto"]),
    ParamSpec::int("proxy_buffer_high"),
    ParamSpec::int("proxy_buffer_low"),
    ParamSpec::int("receive_window_size"),
    ParamSpec::int("send_buffer_size"),
    ParamSpec::int("syn_max_retrans"),
    ParamSpec::choice("time_wait_recycle", ACTIVATION_CHOICES),
    ParamSpec::int("zero_window_timeout"),
];

pub const TCP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_tcp",
    "ltm/profile/tcp",
    "Manages LTM TCP profiles",
    TCP_PARAMS,
);

const UDP_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("allow_no_payload", ACTIVATION_CHOICES),
    ParamSpec::choice("datagram_load_balancing", ACTIVATION_CHOICES),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("idle_timeout"),
    ParamSpec::str("ip_tos_to_client"),
    ParamSpec::str("link_qos_to_client"),
    ParamSpec::choice("proxy_mss", ACTIVATION_CHOICES),
];

pub const UDP: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_udp",
    "ltm/profile/udp",
    "Manages LTM UDP profiles",
    UDP_PARAMS,
);

const FASTL4_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("idle_timeout"),
    ParamSpec::choice("loose_close", ACTIVATION_CHOICES),
    ParamSpec::choice("loose_initialization", ACTIVATION_CHOICES),
    ParamSpec::choice("pva_acceleration", &["full", "guaranteed", "none", "partial"]),
    ParamSpec::choice("reassemble_fragments", ACTIVATION_CHOICES),
    ParamSpec::choice("reset_on_timeout", ACTIVATION_CHOICES),
    ParamSpec::int("tcp_handshake_timeout"),
];

pub const FASTL4: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_fastl4",
    "ltm/profile/fastl4",
    "Manages LTM FastL4 profiles",
    FASTL4_PARAMS,
);

const CLIENT_SSL_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("cert").reference(),
    // [{"name": "default", "cert": "/Common/default.crt", "key": "/Common/default.key"}]
    ParamSpec::list("cert_key_chain"),
    ParamSpec::str("chain").reference(),
    ParamSpec::str("ciphers"),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("key").reference(),
    ParamSpec::list("options"),
    ParamSpec::str("passphrase").no_log(),
    ParamSpec::choice("renegotiation", ACTIVATION_CHOICES),
    ParamSpec::choice("secure_renegotiation", &["request", "require", "require-strict"]),
    ParamSpec::str("server_name"),
    ParamSpec::choice("sni_default", BOOL_STR_CHOICES),
    ParamSpec::choice("sni_require", BOOL_STR_CHOICES),
    ParamSpec::choice("strict_resume", ACTIVATION_CHOICES),
];

pub const CLIENT_SSL: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_client_ssl",
    "ltm/profile/client-ssl",
    "Manages LTM client SSL profiles",
    CLIENT_SSL_PARAMS,
);

const SERVER_SSL_PARAMS: &[ParamSpec] = &[
    ParamSpec::choice("authenticate", &["always", "once"]),
    ParamSpec::str("ca_file").reference(),
    ParamSpec::str("cert").reference(),
    ParamSpec::str("chain").reference(),
    ParamSpec::str("ciphers"),
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::str("key").reference(),
    ParamSpec::list("options"),
    ParamSpec::str("passphrase").no_log(),
    ParamSpec::choice("peer_cert_mode", &["ignore", "require"]),
    ParamSpec::str("server_name"),
    ParamSpec::choice("sni_default", BOOL_STR_CHOICES),
    ParamSpec::choice("sni_require", BOOL_STR_CHOICES),
];

pub const SERVER_SSL: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_server_ssl",
    "ltm/profile/server-ssl",
    "Manages LTM server SSL profiles",
    SERVER_SSL_PARAMS,
);

const ONE_CONNECT_PARAMS: &[ParamSpec] = &[
    ParamSpec::str("defaults_from").reference(),
    ParamSpec::str("description"),
    ParamSpec::choice("idle_timeout_override", ACTIVATION_CHOICES),
    ParamSpec::choice("limit_type", &["idle", "none", "strict"]),
    ParamSpec::int("max_age"),
    ParamSpec::int("max_reuse"),
    ParamSpec::int("max_size"),
    ParamSpec::choice("share_pools", ACTIVATION_CHOICES),
    ParamSpec::str("source_mask"),
];

pub const ONE_CONNECT: ModuleDefinition = ModuleDefinition::named(
    "bigip_ltm_profile_one_connect",
    "ltm/profile/one-connect",
    "Manages LTM OneConnect profiles",
    ONE_CONNECT_PARAMS,
);
