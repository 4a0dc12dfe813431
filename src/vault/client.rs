use crate::config::Config;
use crate::utils::errors::{AkvError, Endpoint, Result};
use crate::vault::auth::TokenSource;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SecretResponse {
    value: String,
}

/// Reads a single secret from a Key Vault secret URL
pub struct KeyVaultClient {
    client: Client,
    secret_url: String,
}

impl KeyVaultClient {
    pub fn new(secret_url: String) -> Result<Self> {
        let client = super::create_http_client()?;

        Ok(Self { client, secret_url })
    }

    /// Get secret URL
    pub fn secret_url(&self) -> &str {
        &self.secret_url
    }

    /// GET the secret URL with the given bearer token and return its `value` field
    pub async fn get_secret(&self, token: &str) -> Result<String> {
        let request = self.client.get(&self.secret_url).bearer_auth(token);

        let response: SecretResponse =
            super::get_json(&self.client, request, Endpoint::KeyVault).await?;

        Ok(response.value)
    }
}

/// Resolve a token, then read the secret with it.
///
/// Any failure while obtaining the token is wrapped as a managed identity
/// error and the vault is never contacted.
pub async fn fetch_secret(config: &Config) -> Result<String> {
    let token = resolve_token(config)
        .await
        .map_err(|e| AkvError::ManagedIdentity(Box::new(e)))?;

    let client = KeyVaultClient::new(config.keyvault_url().to_string())?;
    tracing::info!("Fetching secret from {}", client.secret_url());

    client.get_secret(&token).await
}

async fn resolve_token(config: &Config) -> Result<String> {
    TokenSource::from_config(config)?.token().await
}
