//! The adapter trait and its typed error.
//!
//! Adapter failures stay typed until the dispatch handler — dispatch is the
//! single place where every failure collapses to the common
//! `{success: false, error}` shape.

use async_trait::async_trait;

use promptbuddy_core::EnhanceRequest;

/// Failure of a single enhancement call.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// The HTTP request itself failed (connect, TLS, body read).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status. The message is the vendor error body's
    /// `error.message` when parseable, else `"{Provider} API error: {status}"`.
    #[error("{0}")]
    Api(String),

    /// A success status whose body held no completion text.
    #[error("{provider} returned an empty response")]
    EmptyCompletion { provider: &'static str },
}

/// Trait every provider adapter implements.
///
/// One implementation exists — [`crate::HttpEnhancer`] — but the seam keeps
/// dispatch and tests independent of the HTTP machinery.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Send exactly one enhancement request. No retries, no backoff, no
    /// application-level timeout.
    ///
    /// Returns the whitespace-trimmed rewritten prompt.
    async fn enhance(&self, request: &EnhanceRequest) -> Result<String, EnhanceError>;

    /// Display name for logging and error messages.
    fn display_name(&self) -> &'static str;
}
