//! The provider seam.
//!
//! The executor never talks to a concrete API. It is handed a [`Provider`]:
//! anything that can turn an [`AnalysisRequest`] into a [`RawPayload`] or
//! fail at the transport level. `polisight-bedrock` supplies the production
//! implementation; tests supply fakes.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use polisight_core::models::token_count::TokenCount;

use crate::request::AnalysisRequest;

/// The untyped response a provider hands back for classification.
///
/// A provider-side failure is encoded in `body` as a top-level `"error"`
/// object: `{"error": {"message": "...", "transient": true}}`. Anything
/// else is treated as a candidate payload and passed to schema validation.
#[derive(Debug, Clone)]
pub struct RawPayload {
    pub body: Value,
    /// Token usage, when the provider reports it.
    pub usage: Option<TokenCount>,
}

impl RawPayload {
    pub fn new(body: Value) -> Self {
        RawPayload { body, usage: None }
    }

    /// A payload encoding a provider-side failure with the given transience
    /// signal.
    pub fn failure(message: &str, transient: bool) -> Self {
        RawPayload {
            body: serde_json::json!({
                "error": { "message": message, "transient": transient }
            }),
            usage: None,
        }
    }
}

/// Transport-level failure of a provider invocation. Always classified as
/// a network error, always retryable.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("request cancelled")]
    Cancelled,
}

/// One external call. Implementations own transport, authentication, and
/// endpoint details; the executor only sees the outcome.
pub trait Provider {
    fn invoke(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<RawPayload, InvokeError>> + Send;
}
