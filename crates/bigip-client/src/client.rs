//! BIG-IP iControl REST client
//!
//! Implements generic CRUD over `/mgmt/tm/...` resource paths.

use crate::bigip_trait::{create_body, BigIpClientTrait};
use crate::common::{Auth, HttpClient};
use crate::config::ConnectionConfig;
use crate::error::BigIpError;
use crate::models::{LoginResponse, RemoteObject, ResourcePath, EXPAND_SUBCOLLECTIONS};
use reqwest::Client;
use tracing::{debug, info};

/// Login endpoint used for token authentication
const LOGIN_PATH: &str = "/mgmt/shared/authn/login";

/// Lightweight authenticated endpoint used to validate credentials
const VERSION_PATH: &str = "/mgmt/tm/sys/version";

/// BIG-IP iControl REST client
#[derive(Debug)]
pub struct BigIpClient {
    http: HttpClient,
}

impl BigIpClient {
    /// Create a client using basic authentication
    ///
    /// # Arguments
    /// * `config` - Management endpoint, credentials and TLS settings
    pub fn new(config: &ConnectionConfig) -> Result<Self, BigIpError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.validate_certs)
            .build()?;

        Ok(Self::from_reqwest(
            config.base_url(),
            client,
            Auth::Basic {
                username: config.username.clone(),
                password: config.password.clone(),
            },
        ))
    }

    /// Wrap an existing reqwest client talking to `base_url`
    pub fn from_reqwest(base_url: impl Into<String>, client: Client, auth: Auth) -> Self {
        Self {
            http: HttpClient::new(client, base_url.into(), auth),
        }
    }

    /// Create a client and, when a login provider is configured, obtain an auth token
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, BigIpError> {
        let mut client = Self::new(config)?;
        if let Some(provider) = &config.auth_provider {
            client.login(&config.username, &config.password, provider).await?;
        }
        Ok(client)
    }

    /// Switch to token authentication with a token from `login_provider`
    pub async fn login(&mut self, username: &str, password: &str, login_provider: &str) -> Result<(), BigIpError> {
        let token = self.request_token(username, password, login_provider).await?;
        self.http.set_auth(Auth::Token(token));
        Ok(())
    }

    /// Exchange credentials for a token through `login_provider` (e.g. `tmos`)
    async fn request_token(&self, username: &str, password: &str, login_provider: &str) -> Result<String, BigIpError> {
        debug!("Requesting auth token from login provider {}", login_provider);
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "loginProviderName": login_provider,
        });

        let response: LoginResponse = self.http
            .post_unauthenticated(LOGIN_PATH, &body)
            .await
            .map_err(|e| match e {
                BigIpError::Api(msg) | BigIpError::Authentication(msg) => BigIpError::Authentication(msg),
                other => other,
            })?;

        info!("Obtained auth token from login provider {}", login_provider);
        Ok(response.token.token)
    }
}

#[async_trait::async_trait]
impl BigIpClientTrait for BigIpClient {
    fn base_url(&self) -> &str {
        self.http.base_url()
    }

    async fn validate_credentials(&self) -> Result<(), BigIpError> {
        debug!("Validating BIG-IP credentials and connectivity");
        let _: serde_json::Value = self.http.get(VERSION_PATH).await?;
        debug!("Credentials validated successfully");
        Ok(())
    }

    async fn exists(&self, path: &ResourcePath) -> Result<bool, BigIpError> {
        match self.http.get::<serde_json::Value>(&path.uri()).await {
            Ok(_) => Ok(true),
            Err(BigIpError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn load(&self, path: &ResourcePath) -> Result<RemoteObject, BigIpError> {
        let object: RemoteObject = self.http
            .get(&format!("{}?{}", path.uri(), EXPAND_SUBCOLLECTIONS))
            .await?;
        Ok(object.expand_subcollections())
    }

    async fn create(&self, path: &ResourcePath, attributes: &serde_json::Value) -> Result<RemoteObject, BigIpError> {
        let body = create_body(path, attributes)?;
        self.http.post(&path.collection_uri(), &body).await
    }

    async fn modify(&self, path: &ResourcePath, attributes: &serde_json::Value) -> Result<RemoteObject, BigIpError> {
        self.http.patch(&path.uri(), attributes).await
    }

    async fn delete(&self, path: &ResourcePath) -> Result<(), BigIpError> {
        self.http.delete(&path.uri()).await
    }
}
