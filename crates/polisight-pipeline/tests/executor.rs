use std::future::Future;

use serde::Deserialize;
use serde_json::{Value, json};

use polisight_core::models::token_count::TokenCount;
use polisight_core::schema::{FieldSchema, Schema};
use polisight_pipeline::error::ClassifiedError;
use polisight_pipeline::executor::execute;
use polisight_pipeline::provider::{InvokeError, Provider, RawPayload};
use polisight_pipeline::request::AnalysisRequest;

#[derive(Debug, Deserialize, PartialEq)]
struct Scorecard {
    id: i64,
    name: String,
    score: String,
}

fn scorecard_schema() -> Schema {
    Schema::object(vec![
        FieldSchema::required("id", Schema::Integer),
        FieldSchema::required("name", Schema::String),
        FieldSchema::required("score", Schema::enumeration(["A", "B", "C", "D", "F"])),
    ])
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new("test-model", "You grade things.", "Grade this.")
}

/// Returns a fixed payload for every invocation.
struct StaticProvider {
    payload: Value,
    usage: Option<TokenCount>,
}

impl StaticProvider {
    fn new(payload: Value) -> Self {
        StaticProvider {
            payload,
            usage: None,
        }
    }
}

impl Provider for StaticProvider {
    fn invoke(
        &self,
        _request: AnalysisRequest,
    ) -> impl Future<Output = Result<RawPayload, InvokeError>> + Send {
        let payload = self.payload.clone();
        let usage = self.usage;
        async move {
            Ok(RawPayload {
                body: payload,
                usage,
            })
        }
    }
}

/// Fails at the transport level on every invocation.
struct FailingProvider {
    error: fn() -> InvokeError,
}

impl Provider for FailingProvider {
    fn invoke(
        &self,
        _request: AnalysisRequest,
    ) -> impl Future<Output = Result<RawPayload, InvokeError>> + Send {
        let error = (self.error)();
        async move { Err(error) }
    }
}

#[tokio::test]
async fn throwing_provider_classified_as_network_never_validation() {
    let provider = FailingProvider {
        error: || InvokeError::Transport("connection reset".to_string()),
    };

    let error = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect_err("transport failure must not produce a result");

    assert!(matches!(error, ClassifiedError::Network { .. }));
    assert!(error.retryable());
}

#[tokio::test]
async fn cancelled_invocation_is_network_and_retryable() {
    let provider = FailingProvider {
        error: || InvokeError::Cancelled,
    };

    let error = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect_err("cancellation must not produce a result");

    match error {
        ClassifiedError::Network { message } => assert!(message.contains("cancelled")),
        other => panic!("expected Network, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_enum_field_classified_as_validation_not_provider() {
    let payload = json!({"id": 1, "name": "A"});
    let provider = StaticProvider::new(payload.clone());

    let error = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect_err("missing score must fail validation");

    assert!(!error.retryable());
    match error {
        ClassifiedError::Validation { violations, raw } => {
            assert!(violations.iter().any(|v| v.path == "$.score"));
            // The originating payload is preserved for diagnosis.
            assert_eq!(raw, payload);
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_failure_envelope_carries_transience() {
    let provider = StaticProvider::new(json!({
        "error": {"message": "model is being throttled", "transient": true}
    }));

    let error = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect_err("failure envelope must not validate");

    match error {
        ClassifiedError::Provider { message, retryable } => {
            assert_eq!(message, "model is being throttled");
            assert!(retryable);
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_failure_without_transience_signal_is_not_retryable() {
    let provider = StaticProvider::new(json!({
        "error": {"message": "account not entitled to this model"}
    }));

    let error = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect_err("failure envelope must not validate");

    assert!(matches!(error, ClassifiedError::Provider { .. }));
    assert!(!error.retryable());
}

#[tokio::test]
async fn bare_string_error_envelope_is_provider_failure() {
    let provider = StaticProvider::new(json!({"error": "internal failure"}));

    let error = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect_err("failure envelope must not validate");

    match error {
        ClassifiedError::Provider { message, retryable } => {
            assert_eq!(message, "internal failure");
            assert!(!retryable);
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn well_formed_payload_yields_exact_narrowed_value() {
    let provider = StaticProvider::new(json!({"id": 1, "name": "A", "score": "B"}));

    let result = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect("payload should validate");

    assert_eq!(
        result.value,
        Scorecard {
            id: 1,
            name: "A".to_string(),
            score: "B".to_string(),
        }
    );
    assert_eq!(result.model_id, "test-model");
}

#[tokio::test]
async fn unknown_fields_in_payload_are_tolerated() {
    let provider = StaticProvider::new(json!({
        "id": 1, "name": "A", "score": "B", "model_notes": "extra"
    }));

    let result = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect("unknown fields must not fail validation");

    assert_eq!(result.value.score, "B");
}

#[tokio::test]
async fn reported_usage_is_passed_through() {
    let provider = StaticProvider {
        payload: json!({"id": 1, "name": "A", "score": "B"}),
        usage: Some(TokenCount {
            input: 120,
            output: 48,
        }),
    };

    let result = execute::<Scorecard, _>(request(), &scorecard_schema(), &provider)
        .await
        .expect("payload should validate");

    let usage = result.usage.expect("usage should be carried through");
    assert_eq!(usage.total(), 168);
}

#[tokio::test]
async fn concurrent_executions_do_not_interfere() {
    let first = StaticProvider::new(json!({"id": 1, "name": "First", "score": "A"}));
    let second = StaticProvider::new(json!({"id": 2, "name": "Second", "score": "F"}));
    let schema = scorecard_schema();

    let (a, b) = tokio::join!(
        execute::<Scorecard, _>(request(), &schema, &first),
        execute::<Scorecard, _>(request(), &schema, &second),
    );

    let a = a.expect("first execution should succeed");
    let b = b.expect("second execution should succeed");

    assert_eq!(a.value.name, "First");
    assert_eq!(b.value.name, "Second");
    assert_ne!(a.id, b.id, "each invocation gets its own transaction id");
}
