use std::fmt;
use thiserror::Error;

/// Which of the two remote endpoints a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ManagedIdentity,
    KeyVault,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::ManagedIdentity => f.write_str("managed identity"),
            Endpoint::KeyVault => f.write_str("keyvault"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AkvError {
    #[error("error creating {endpoint} request: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("error accessing {endpoint} url: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} non 200 status code: {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("error reading {endpoint} response: {source}")]
    Read {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("error parsing {endpoint} response: {source}")]
    Parse {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("error getting managed identity: {0}")]
    ManagedIdentity(#[source] Box<AkvError>),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("missing key vault url")]
    MissingKeyVaultUrl,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AkvError {
    /// HTTP status code behind this failure, looking through the managed identity wrapper
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AkvError::Status { status, .. } => Some(*status),
            AkvError::ManagedIdentity(inner) => inner.status_code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AkvError>;
