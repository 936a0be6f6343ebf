//! Connection settings from the provider arguments

use crate::error::ControllerError;
use bigip_client::{BigIpClient, BigIpClientTrait, ConnectionConfig};
use bigip_modules::ModuleParams;
use tracing::{debug, info, warn};

/// Build connection settings from validated module parameters
pub fn connection_config(params: &ModuleParams) -> Result<ConnectionConfig, ControllerError> {
    let required = |name: &str| {
        params
            .get_str(name)
            .map(str::to_string)
            .ok_or_else(|| ControllerError::InvalidConfig(format!("{} is required", name)))
    };

    let mut config = ConnectionConfig::new(
        required("f5_hostname")?,
        required("f5_username")?,
        required("f5_password")?,
    );
    if let Some(port) = params.get_i64("f5_port") {
        config.port = u16::try_from(port)
            .map_err(|_| ControllerError::InvalidConfig(format!("f5_port {} is out of range", port)))?;
    }
    if let Some(validate_certs) = params.get_bool("f5_validate_certs") {
        config.validate_certs = validate_certs;
    }
    config.auth_provider = params
        .get_str("f5_auth_provider")
        .filter(|provider| !provider.is_empty())
        .map(str::to_string);

    debug!("Connection settings: {:?}", config);
    Ok(config)
}

/// Connect to the device described by `params`
pub async fn connect(params: &ModuleParams) -> Result<Box<dyn BigIpClientTrait>, ControllerError> {
    let config = connection_config(params)?;
    info!("Connecting to BIG-IP at {}", config.base_url());
    if !config.validate_certs {
        warn!("TLS certificate validation disabled for {}", config.hostname);
    }
    let client = BigIpClient::connect(&config).await?;
    verify(&client).await?;
    Ok(Box::new(client))
}

/// Fail fast when the device is unreachable or rejects the credentials
async fn verify(client: &dyn BigIpClientTrait) -> Result<(), ControllerError> {
    client.validate_credentials().await.map_err(|e| {
        warn!("BIG-IP at {} rejected the connection: {}", client.base_url(), e);
        ControllerError::from(e)
    })?;
    debug!("Credentials accepted by {}", client.base_url());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn params(value: Value) -> ModuleParams {
        value
            .as_object()
            .cloned()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_connection_config_from_params() {
        let config = connection_config(&params(json!({
            "f5_hostname": "10.1.1.4",
            "f5_username": "admin",
            "f5_password": "secret",
            "f5_port": 8443,
            "f5_validate_certs": false,
            "f5_auth_provider": "tmos",
        })))
        .unwrap();
        assert_eq!(config.base_url(), "https://10.1.1.4:8443");
        assert!(!config.validate_certs);
        assert_eq!(config.auth_provider.as_deref(), Some("tmos"));
    }

    #[test]
    fn test_empty_auth_provider_means_basic_auth() {
        let config = connection_config(&params(json!({
            "f5_hostname": "bigip",
            "f5_username": "admin",
            "f5_password": "secret",
            "f5_auth_provider": "",
        })))
        .unwrap();
        assert_eq!(config.auth_provider, None);
        assert!(config.validate_certs);
    }

    #[test]
    fn test_port_out_of_range() {
        let err = connection_config(&params(json!({
            "f5_hostname": "bigip",
            "f5_username": "admin",
            "f5_password": "secret",
            "f5_port": 70000,
        })))
        .unwrap_err();
        assert!(matches!(err, ControllerError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_verify_checks_credentials() {
        let mock = bigip_client::MockBigIpClient::new("https://bigip.test:443");
        verify(&mock).await.unwrap();
        assert_eq!(mock.calls()[0].uri, "/mgmt/tm/sys/version");

        mock.fail_with("Authorization failed");
        let err = verify(&mock).await.unwrap_err();
        assert_eq!(err.to_string(), "iControl REST error: Authorization failed");
    }

    #[test]
    fn test_missing_hostname() {
        let err = connection_config(&params(json!({"f5_username": "admin", "f5_password": "x"}))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: f5_hostname is required");
    }
}
