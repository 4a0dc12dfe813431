use crate::utils::errors::{AkvError, Result};

/// Azure instance metadata endpoint, scoped to the Key Vault resource
pub const DEFAULT_MANAGED_IDENTITY_URL: &str = "http://169.254.169.254/metadata/identity/oauth2/token?api-version=2018-02-01&resource=https://vault.azure.net";

pub const MANAGED_IDENTITY_URL_ENV: &str = "MANAGED_IDENTITY_URL";
pub const BEARER_TOKEN_ENV: &str = "BEARER_TOKEN";

/// Resolved settings for a single run. Built once, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    keyvault_url: String,
    managed_identity_url: String,
    bearer_token: Option<String>,
}

impl Config {
    /// Empty values count as absent: an empty identity URL falls back to the
    /// default and an empty bearer token selects the managed identity flow.
    pub fn new(
        keyvault_url: Option<String>,
        managed_identity_url: Option<String>,
        bearer_token: Option<String>,
    ) -> Result<Self> {
        let keyvault_url = keyvault_url
            .filter(|url| !url.is_empty())
            .ok_or(AkvError::MissingKeyVaultUrl)?;

        let managed_identity_url = managed_identity_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_MANAGED_IDENTITY_URL.to_string());

        Ok(Self {
            keyvault_url,
            managed_identity_url,
            bearer_token: bearer_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn keyvault_url(&self) -> &str {
        &self.keyvault_url
    }

    pub fn managed_identity_url(&self) -> &str {
        &self.managed_identity_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}

// Keeps the bearer token out of debug logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("keyvault_url", &self.keyvault_url)
            .field("managed_identity_url", &self.managed_identity_url)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keyvault_url() {
        assert!(matches!(
            Config::new(None, None, None),
            Err(AkvError::MissingKeyVaultUrl)
        ));
        assert!(matches!(
            Config::new(Some(String::new()), None, None),
            Err(AkvError::MissingKeyVaultUrl)
        ));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new(Some("https://kv/secrets/a".to_string()), None, None).unwrap();
        assert_eq!(config.keyvault_url(), "https://kv/secrets/a");
        assert_eq!(config.managed_identity_url(), DEFAULT_MANAGED_IDENTITY_URL);
        assert_eq!(config.bearer_token(), None);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::new(
            Some("https://kv/secrets/a".to_string()),
            Some(String::new()),
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(config.managed_identity_url(), DEFAULT_MANAGED_IDENTITY_URL);
        assert_eq!(config.bearer_token(), None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::new(
            Some("https://kv/secrets/a".to_string()),
            Some("http://localhost:1234/token".to_string()),
            Some("tok".to_string()),
        )
        .unwrap();
        assert_eq!(config.managed_identity_url(), "http://localhost:1234/token");
        assert_eq!(config.bearer_token(), Some("tok"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new(
            Some("https://kv/secrets/a".to_string()),
            None,
            Some("super-secret-token".to_string()),
        )
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
