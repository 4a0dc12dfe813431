use crate::config::Config;
use crate::utils::errors::{Endpoint, Result};
use crate::utils::output::mask_token;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Token endpoint response. Only `access_token` is used; the rest is logged.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<Value>,
    #[serde(default)]
    expires_on: Option<Value>,
    #[serde(default)]
    not_before: Option<Value>,
    #[serde(default)]
    resource: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
}

/// Fetches access tokens from the instance metadata identity endpoint
pub struct ManagedIdentityCredential {
    client: Client,
    token_url: String,
}

impl ManagedIdentityCredential {
    pub fn new(token_url: String) -> Result<Self> {
        let client = super::create_http_client()?;

        Ok(Self { client, token_url })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Request a token. One attempt, no caching.
    pub async fn get_token(&self) -> Result<String> {
        let request = self.client.get(&self.token_url).header("Metadata", "true");

        let response: TokenResponse =
            super::get_json(&self.client, request, Endpoint::ManagedIdentity).await?;

        tracing::debug!(
            token_type = ?response.token_type,
            resource = ?response.resource,
            expires_in = ?response.expires_in,
            expires_on = ?response.expires_on,
            not_before = ?response.not_before,
            has_refresh_token = response.refresh_token.is_some(),
            "Received managed identity token: {}",
            mask_token(&response.access_token)
        );

        Ok(response.access_token)
    }
}

/// Where the bearer token for the vault request comes from
pub enum TokenSource {
    /// Caller-supplied token, used verbatim
    Static(String),
    ManagedIdentity(ManagedIdentityCredential),
}

impl TokenSource {
    /// A non-empty bearer token wins; the identity endpoint is only set up otherwise
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.bearer_token() {
            Some(token) => Ok(TokenSource::Static(token.to_string())),
            None => Ok(TokenSource::ManagedIdentity(ManagedIdentityCredential::new(
                config.managed_identity_url().to_string(),
            )?)),
        }
    }

    pub async fn token(&self) -> Result<String> {
        match self {
            TokenSource::Static(token) => {
                tracing::debug!("Using supplied bearer token: {}", mask_token(token));
                Ok(token.clone())
            }
            TokenSource::ManagedIdentity(credential) => {
                tracing::info!(
                    "Requesting token from managed identity endpoint: {}",
                    credential.token_url()
                );
                credential.get_token().await
            }
        }
    }
}
