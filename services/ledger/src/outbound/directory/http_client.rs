//! Reqwest-backed user directory adapter.
//!
//! This adapter owns transport details only: URL construction, the bounded
//! wait, HTTP error mapping, and JSON decoding into the shared user model.
//! The wait is bounded by an explicit client-wide timeout (default three
//! seconds) rather than relying on the transport's unbounded default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use service_core::{User, UserId};
use url::Url;

use super::dto::LookupResponseDto;
use crate::domain::ports::{UserDirectory, UserDirectoryError};

/// Default bounded wait applied to every lookup call.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Directory adapter performing HTTP GET requests against one base URL.
pub struct HttpUserDirectory {
    client: Client,
    base: Url,
}

impl HttpUserDirectory {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: normalise_base(base),
        })
    }

    fn lookup_url(&self, id: &UserId) -> Result<Url, UserDirectoryError> {
        self.base
            .join(&format!("users/{id}"))
            .map_err(|err| UserDirectoryError::transport(format!("invalid lookup URL: {err}")))
    }
}

// Url::join treats the last path segment of a slash-less base as a file and
// replaces it; a trailing slash keeps configured path prefixes intact.
fn normalise_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn lookup_user(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        let url = self.lookup_url(id)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_lookup(body.as_ref())
    }
}

fn parse_lookup(body: &[u8]) -> Result<Option<User>, UserDirectoryError> {
    let decoded: LookupResponseDto = serde_json::from_slice(body).map_err(|err| {
        UserDirectoryError::decode(format!("invalid directory JSON payload: {err}"))
    })?;
    decoded.into_domain_user().map_err(UserDirectoryError::decode)
}

fn map_transport_error(err: reqwest::Error) -> UserDirectoryError {
    if err.is_timeout() {
        UserDirectoryError::timeout(err.to_string())
    } else {
        UserDirectoryError::transport(err.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectoryError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserDirectoryError::timeout(message)
        }
        _ => UserDirectoryError::upstream_status(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
