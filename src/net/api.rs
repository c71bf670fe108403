//! HTTP helper for the one-shot card list fetch.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds (tests): returns [`LoadError::Unavailable`] since there is
//! no browser to fetch from.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is folded into [`LoadError`]; the caller turns it into
//! the on-page fallback message. Nothing here retries or times out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::CardRecord;

/// Why the card list could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected response status {0}")]
    Status(u16),

    /// The body was not a JSON array of card records.
    #[error("card data parse failed: {0}")]
    Decode(String),

    /// No browser fetch API in this build.
    #[error("card data is only available in the browser")]
    Unavailable,
}

/// Fetch the card list from `url` with a single GET.
///
/// # Errors
///
/// See [`LoadError`].
pub async fn fetch_cards(url: &str) -> Result<Vec<CardRecord>, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
        decode_cards(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("fetch_cards({url}) skipped outside the browser");
        Err(LoadError::Unavailable)
    }
}

/// Map a response status onto success or [`LoadError::Status`].
///
/// # Errors
///
/// Returns [`LoadError::Status`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(LoadError::Status(status)) }
}

/// Decode a response body into card records.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] with the serde message on malformed input.
pub fn decode_cards(body: &str) -> Result<Vec<CardRecord>, LoadError> {
    super::types::parse_cards(body).map_err(|e| LoadError::Decode(e.to_string()))
}
