//! HTTP fetcher.
//!
//! Issues a single GET request and classifies the terminal result: status 200
//! becomes [`FetchOutcome::Success`], any other terminal status becomes
//! [`FetchOutcome::Failure`] carrying the same response data. Redirects are
//! followed transparently, so "terminal" means the status of the final hop.
//!
//! There is no retry and no cancellation. Without a timeout a request that
//! never completes is awaited indefinitely; callers opt into a bound via the
//! `timeout` argument, in which case an elapsed deadline surfaces as
//! [`FetchError::Timeout`].

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::error::FetchError;

/// The one status code that counts as success.
const SUCCESS_STATUS: u16 = 200;

// ============================================================================
// Response Types
// ============================================================================

/// A terminal HTTP result: status line plus body text.
///
/// Alive only for the duration of one outcome handling; nothing here is
/// retained between fetches.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Numeric status code of the final response.
    pub status: u16,
    /// Canonical reason phrase for the status code, empty if it has none.
    pub status_text: String,
    /// Response body decoded as text.
    pub body: String,
}

impl FetchResponse {
    /// Formats the status line the way it is surfaced to the page,
    /// e.g. `404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.status_text)
    }
}

/// Tagged result of a completed fetch.
///
/// Exactly one variant is produced per call that reaches a terminal status.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The terminal status was exactly 200.
    Success(FetchResponse),
    /// Any other terminal status.
    Failure(FetchResponse),
}

impl FetchOutcome {
    /// Returns `true` for the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the response carried by either variant.
    #[must_use]
    pub const fn response(&self) -> &FetchResponse {
        match self {
            Self::Success(resp) | Self::Failure(resp) => resp,
        }
    }
}

// ============================================================================
// Client & Fetch
// ============================================================================

/// Creates the shared HTTP client used for all page fetches.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built (should never happen).
#[must_use]
pub fn create_client(user_agent: Option<&str>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua.to_string());
    }
    builder.build().expect("failed to build HTTP client")
}

/// Issues a GET request and classifies the terminal status.
///
/// # Errors
///
/// Returns [`FetchError::Network`] if the connection fails before a status
/// is received, [`FetchError::Body`] if the body cannot be read, and
/// [`FetchError::Timeout`] if `timeout` is set and elapses first.
pub async fn fetch(
    client: &reqwest::Client,
    url: Url,
    timeout: Option<Duration>,
) -> Result<FetchOutcome, FetchError> {
    debug!(url = %url, "fetching");

    let request = async {
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;
        Ok::<_, FetchError>((status, body))
    };

    let (status, body) = match timeout {
        Some(limit) => tokio::time::timeout(limit, request)
            .await
            .map_err(|_| FetchError::Timeout {
                url: url.to_string(),
            })??,
        None => request.await?,
    };

    let response = FetchResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    };

    debug!(url = %url, status = response.status, "fetch completed");

    if response.status == SUCCESS_STATUS {
        Ok(FetchOutcome::Success(response))
    } else {
        Ok(FetchOutcome::Failure(response))
    }
}

// ============================================================================
// Tests
// ============================================================================
