//! Common utilities for the iControl REST client
//!
//! Provides the authenticated HTTP wrapper shared by the real client.

use crate::error::BigIpError;
use crate::models::ApiErrorBody;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Header carrying a token obtained from `/mgmt/shared/authn/login`
pub const AUTH_TOKEN_HEADER: &str = "X-F5-Auth-Token";

/// How requests are authenticated
#[derive(Clone)]
pub enum Auth {
    /// HTTP basic authentication on every request
    Basic { username: String, password: String },
    /// Token issued by a login provider
    Token(String),
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::Basic { username, .. } => f.debug_struct("Basic").field("username", username).finish_non_exhaustive(),
            Auth::Token(_) => f.write_str("Token(..)"),
        }
    }
}

/// HTTP client wrapper with authentication
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, auth: Auth) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the authentication scheme (after a token login)
    pub fn set_auth(&mut self, auth: Auth) {
        self.auth = auth;
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client
            .request(method, self.build_url(path))
            .header("Accept", "application/json");
        match &self.auth {
            Auth::Basic { username, password } => builder.basic_auth(username, Some(password)),
            Auth::Token(token) => builder.header(AUTH_TOKEN_HEADER, token),
        }
    }

    /// Make a GET request
    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, BigIpError> {
        debug!("GET {}", path);
        let response = self.request(Method::GET, path).send().await?;
        let response = check_status(response, "GET", path).await?;
        decode(response).await
    }

    /// Make a POST request
    pub async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, BigIpError> {
        debug!("POST {} with body: {}", path, body);
        let response = self.request(Method::POST, path).json(body).send().await?;
        let response = check_status(response, "POST", path).await?;
        decode(response).await
    }

    /// POST without authentication headers (login endpoint)
    pub async fn post_unauthenticated<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, BigIpError> {
        debug!("POST {} (login)", path);
        let response = self.client
            .post(self.build_url(path))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        let response = check_status(response, "POST", path).await?;
        decode(response).await
    }

    /// Make a PATCH request
    pub async fn patch<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, BigIpError> {
        debug!("PATCH {} with body: {}", path, body);
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        let response = check_status(response, "PATCH", path).await?;
        decode(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), BigIpError> {
        debug!("DELETE {}", path);
        let response = self.request(Method::DELETE, path).send().await?;
        check_status(response, "DELETE", path).await?;
        Ok(())
    }
}

/// Map non-success statuses onto `BigIpError`, preferring the iControl `message` field.
async fn check_status(response: Response, method: &str, path: &str) -> Result<Response, BigIpError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = api_error_message(&body);

    match status {
        StatusCode::UNAUTHORIZED => Err(BigIpError::Authentication(format!(
            "{} {}: {} - {}",
            method, path, status, message
        ))),
        StatusCode::NOT_FOUND => Err(BigIpError::NotFound(format!("{} - {}", path, message))),
        _ => Err(BigIpError::Api(format!(
            "{} {} failed: {} - {}",
            method, path, status, message
        ))),
    }
}

/// Extract the human readable message from an iControl error body
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { message: Some(message), .. }) => message,
        _ => body.chars().take(500).collect(),
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, BigIpError> {
    let text = response.text().await?;
    // DELETE and some PATCH endpoints answer with an empty body
    let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| {
        BigIpError::Api(format!(
            "error decoding response body: {} - Response (first 500 chars): {}",
            e,
            text.chars().take(500).collect::<String>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_from_json() {
        let body = r#"{"code":404,"message":"01020036:3: The requested Pool (/Common/x) was not found.","errorStack":[],"apiError":3}"#;
        assert_eq!(
            api_error_message(body),
            "01020036:3: The requested Pool (/Common/x) was not found."
        );
    }

    #[test]
    fn test_api_error_message_falls_back_to_body() {
        assert_eq!(api_error_message("<html>Bad Gateway</html>"), "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_build_url() {
        let client = HttpClient::new(
            Client::new(),
            "https://bigip:443/".to_string(),
            Auth::Token("t".to_string()),
        );
        assert_eq!(client.build_url("/mgmt/tm/sys/ntp"), "https://bigip:443/mgmt/tm/sys/ntp");
        assert_eq!(client.build_url("https://other/x"), "https://other/x");
    }
}
