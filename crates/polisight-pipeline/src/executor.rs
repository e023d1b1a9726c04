//! Single-attempt execution of a validated call.
//!
//! [`execute`] performs exactly one provider invocation and classifies
//! every possible outcome. Retry loops, caching, and batching belong to
//! the caller; this layer guarantees only correctness-of-shape for a
//! single call.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use polisight_core::models::token_count::TokenCount;
use polisight_core::schema::{Schema, validate};

use crate::error::ClassifiedError;
use crate::provider::{Provider, RawPayload};
use crate::request::AnalysisRequest;

/// A value proven to conform to its schema, with transaction metadata.
///
/// Only constructed after the raw payload passed full schema validation;
/// no partially validated value ever reaches a caller.
#[derive(Debug, Clone)]
pub struct ValidatedResult<T> {
    /// Transaction ID assigned to this invocation.
    pub id: Uuid,
    pub model_id: String,
    pub usage: Option<TokenCount>,
    pub value: T,
}

/// Invoke `provider` once with `request` and classify the outcome.
///
/// - Transport failure or cancellation → [`ClassifiedError::Network`],
///   retryable.
/// - Payload carrying a provider failure envelope →
///   [`ClassifiedError::Provider`], retryable per the provider's
///   transience signal (absent signal reads as not retryable).
/// - Payload failing schema validation → [`ClassifiedError::Validation`]
///   with the full violation list and the raw payload, never retryable.
/// - Otherwise the narrowed payload is deserialized into `T` and returned
///   as a [`ValidatedResult`].
///
/// # Panics
///
/// Panics if the narrowed payload does not deserialize into `T`. The
/// registry keeps each schema aligned with its domain type, so this
/// indicates a schema-definition bug, not a runtime condition.
pub async fn execute<T, P>(
    request: AnalysisRequest,
    schema: &Schema,
    provider: &P,
) -> Result<ValidatedResult<T>, ClassifiedError>
where
    T: DeserializeOwned,
    P: Provider,
{
    let id = Uuid::new_v4();
    let model_id = request.model_id.clone();

    info!(transaction_id = %id, model = %model_id, "invoking provider");

    let RawPayload { body, usage } = match provider.invoke(request).await {
        Ok(raw) => raw,
        Err(e) => {
            info!(transaction_id = %id, error = %e, "classified as network failure");
            return Err(ClassifiedError::Network {
                message: e.to_string(),
            });
        }
    };

    if let Some((message, retryable)) = failure_envelope(&body) {
        info!(transaction_id = %id, retryable, "classified as provider failure");
        return Err(ClassifiedError::Provider { message, retryable });
    }

    let narrowed = match validate(schema, &body) {
        Ok(narrowed) => narrowed,
        Err(violations) => {
            info!(
                transaction_id = %id,
                violation_count = violations.len(),
                "classified as validation failure"
            );
            return Err(ClassifiedError::Validation {
                violations,
                raw: body,
            });
        }
    };

    let value: T = serde_json::from_value(narrowed).unwrap_or_else(|e| {
        panic!("schema and result type disagree (schema-definition bug): {e}")
    });

    info!(transaction_id = %id, model = %model_id, "validated call complete");

    Ok(ValidatedResult {
        id,
        model_id,
        usage,
        value,
    })
}

/// Detect a provider-side failure indicator in a raw payload body.
///
/// The convention is a top-level `"error"` entry: an object with `message`
/// and an optional `transient` flag, or a bare string. Returns the message
/// and retryability.
fn failure_envelope(body: &Value) -> Option<(String, bool)> {
    match body.get("error")? {
        Value::Object(error) => {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("provider reported an unspecified failure")
                .to_string();
            let transient = error
                .get("transient")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Some((message, transient))
        }
        Value::String(message) => Some((message.clone(), false)),
        _ => None,
    }
}
