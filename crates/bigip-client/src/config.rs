//! Connection settings for a BIG-IP management endpoint

use std::time::Duration;

/// Default iControl REST port
pub const DEFAULT_PORT: u16 = 443;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach a BIG-IP management interface
#[derive(Clone)]
pub struct ConnectionConfig {
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Verify the device TLS certificate
    pub validate_certs: bool,
    /// Login provider for token authentication (e.g. `tmos`). Basic auth when `None`.
    pub auth_provider: Option<String>,
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Create settings with default port, certificate validation and basic auth
    pub fn new(hostname: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
            validate_certs: true,
            auth_provider: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Base URL of the management endpoint, e.g. `https://10.1.1.245:443`
    pub fn base_url(&self) -> String {
        let host = self.hostname.trim().trim_end_matches('/');
        let host = host
            .strip_prefix("https://")
            .unwrap_or(host);
        if host.contains(':') && !host.starts_with('[') {
            // Bare IPv6 literal
            format!("https://[{}]:{}", host, self.port)
        } else {
            format!("https://{}:{}", host, self.port)
        }
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("validate_certs", &self.validate_certs)
            .field("auth_provider", &self.auth_provider)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_hostname() {
        let config = ConnectionConfig::new("bigip.example.com", "admin", "admin");
        assert_eq!(config.base_url(), "https://bigip.example.com:443");
    }

    #[test]
    fn test_base_url_custom_port_and_scheme() {
        let mut config = ConnectionConfig::new("https://10.1.1.245/", "admin", "admin");
        config.port = 8443;
        assert_eq!(config.base_url(), "https://10.1.1.245:8443");
    }

    #[test]
    fn test_base_url_ipv6() {
        let config = ConnectionConfig::new("2001:db8::10", "admin", "admin");
        assert_eq!(config.base_url(), "https://[2001:db8::10]:443");
    }

    #[test]
    fn test_debug_masks_password() {
        let config = ConnectionConfig::new("bigip", "admin", "s3cr3t");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cr3t"));
    }
}
