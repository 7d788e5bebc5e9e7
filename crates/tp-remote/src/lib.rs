//! Remote document-store client for the bowling series tracker.
//!
//! Talks to a JSON document API holding the same [`Series`] shape the
//! local SQLite store persists:
//!
//! - `GET    {base}/v1/series` — list all series documents
//! - `PUT    {base}/v1/series/{id}` — create or replace one document
//! - `DELETE {base}/v1/series/{id}` — remove one document
//!
//! Requests carry a bearer token. The client is transport only; which
//! backend a command uses is decided by the CLI configuration.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tp_core::{Series, SeriesId};

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote store errors.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The client configuration was unusable.
    #[error("invalid remote configuration: {reason}")]
    InvalidConfig { reason: &'static str },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// API returned an error response.
    #[error("API error: {message}")]
    Api { message: String },
    /// Failed to parse a response body.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Document-store API client.
///
/// # Thread Safety
///
/// Safe to clone and share across threads; clones share the underlying
/// HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client for the given API base URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or token is empty or whitespace-only,
    /// or if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, RemoteError> {
        let base_url = base_url.into();
        let token = token.into();

        if base_url.trim().is_empty() {
            return Err(RemoteError::InvalidConfig {
                reason: "base URL cannot be empty",
            });
        }
        if token.trim().is_empty() {
            return Err(RemoteError::InvalidConfig {
                reason: "token cannot be empty",
            });
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(RemoteError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/v1/series", self.base_url)
    }

    fn document_url(&self, id: &SeriesId) -> String {
        format!("{}/v1/series/{id}", self.base_url)
    }

    /// Fetches every series document.
    pub async fn list_series(&self) -> Result<Vec<Series>, RemoteError> {
        let response = self
            .http
            .get(self.collection_url())
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let payload: SeriesList = serde_json::from_str(&body)
            .map_err(|err| RemoteError::InvalidResponse(err.to_string()))?;
        Ok(payload.series)
    }

    /// Creates or replaces a series document keyed by its ID.
    pub async fn put_series(&self, series: &Series) -> Result<(), RemoteError> {
        let response = self
            .http
            .put(self.document_url(&series.id))
            .bearer_auth(&self.token)
            .json(series)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(api_error(status, &body));
        }
        Ok(())
    }

    /// Deletes a series document. Returns whether it existed.
    pub async fn delete_series(&self, id: &SeriesId) -> Result<bool, RemoteError> {
        let response = self
            .http
            .delete(self.document_url(id))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            let body = response.text().await?;
            return Err(api_error(status, &body));
        }
        Ok(true)
    }
}

#[derive(Debug, Deserialize)]
struct SeriesList {
    series: Vec<Series>,
}

fn api_error(status: reqwest::StatusCode, body: &str) -> RemoteError {
    parse_api_error(body).unwrap_or_else(|| RemoteError::Api {
        message: format!("status {status}: {body}"),
    })
}

fn parse_api_error(body: &str) -> Option<RemoteError> {
    #[derive(Deserialize)]
    struct ErrorPayload {
        error: ErrorDetails,
    }

    #[derive(Deserialize)]
    struct ErrorDetails {
        message: String,
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .map(|payload| RemoteError::Api {
            message: payload.error.message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rejects_empty_base_url() {
        assert!(matches!(
            Client::new("", "token-1"),
            Err(RemoteError::InvalidConfig { .. })
        ));
        assert!(matches!(
            Client::new("   ", "token-1"),
            Err(RemoteError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn client_rejects_empty_token() {
        assert!(matches!(
            Client::new("https://store.example.com", ""),
            Err(RemoteError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = Client::new("https://store.example.com/", "token-1").unwrap();
        assert_eq!(
            client.collection_url(),
            "https://store.example.com/v1/series"
        );
        let id = SeriesId::new("abc").unwrap();
        assert_eq!(
            client.document_url(&id),
            "https://store.example.com/v1/series/abc"
        );
    }

    #[test]
    fn client_debug_redacts_token() {
        let client = Client::new("https://store.example.com", "secret-token").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn parse_api_error_extracts_message() {
        let body = r#"{"error":{"message":"document too large"}}"#;
        let err = parse_api_error(body).unwrap();
        assert!(matches!(err, RemoteError::Api { message } if message == "document too large"));
    }

    #[test]
    fn parse_api_error_tolerates_unknown_body() {
        assert!(parse_api_error("<html>oops</html>").is_none());
    }
}
