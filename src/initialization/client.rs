//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to download the CSV listing.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header
/// - Overall request timeout (the listing is tens of megabytes)
/// - Redirect following enabled (GitHub raw links redirect to the CDN)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, InitializationError> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(InitializationError::from)
}
