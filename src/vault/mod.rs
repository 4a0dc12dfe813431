pub mod auth;
pub mod client;

use crate::utils::errors::{AkvError, Endpoint, Result};
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Total time allowed for each request, body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the HTTP client used for both the identity and the vault request.
/// Redirects are never followed; a 3xx comes back as the final response.
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(Policy::none())
        .use_rustls_tls() // Use rustls with system certificate store
        .build()
        .map_err(AkvError::Client)
}

/// Send a GET and decode a 200 JSON body. Each stage fails with its own variant.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    request: RequestBuilder,
    endpoint: Endpoint,
) -> Result<T> {
    let request = request
        .build()
        .map_err(|source| AkvError::Request { endpoint, source })?;

    tracing::debug!("Making GET request to {endpoint}: {}", request.url());

    let response = client
        .execute(request)
        .await
        .map_err(|source| AkvError::Transport { endpoint, source })?;

    let status = response.status();
    tracing::debug!("Response status: {status}");

    if status != StatusCode::OK {
        return Err(AkvError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| AkvError::Read { endpoint, source })?;
    tracing::trace!("Read {} byte response body from {endpoint}", body.len());

    serde_json::from_slice(&body).map_err(|source| AkvError::Parse { endpoint, source })
}
