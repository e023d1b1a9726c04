use serde_json::Value;
use thiserror::Error;

use polisight_core::schema::Violation;

/// Every failure mode of a validated call, classified.
///
/// The executor returns this as a value; it never panics for expected
/// failures. Callers branch on the variant: `Validation` is terminal and
/// reportable, `Network` is always worth retrying, `Provider` carries the
/// provider's own transience signal.
#[derive(Debug, Error)]
pub enum ClassifiedError {
    /// The response was well-formed but did not match the expected schema.
    /// Deterministic for a given input, so never retryable.
    #[error("response failed schema validation: {}", summarize(.violations))]
    Validation {
        /// Every violated constraint, in field-path order.
        violations: Vec<Violation>,
        /// The raw payload that failed, for diagnosis and bug reports.
        raw: Value,
    },

    /// The provider itself signaled a failure inside its payload.
    #[error("provider failure: {message}")]
    Provider { message: String, retryable: bool },

    /// The invocation failed at the transport level (connection, timeout,
    /// cancellation) before a payload was received.
    #[error("network failure: {message}")]
    Network { message: String },
}

impl ClassifiedError {
    /// Whether a caller-side retry with the same request could succeed.
    pub fn retryable(&self) -> bool {
        match self {
            ClassifiedError::Validation { .. } => false,
            ClassifiedError::Provider { retryable, .. } => *retryable,
            ClassifiedError::Network { .. } => true,
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
