//! The production [`Provider`]: AWS Bedrock via the Converse API.
//!
//! Outcome mapping follows the pipeline's channels:
//!
//! - SDK timeout and dispatch failures → [`InvokeError`] (the executor
//!   classifies these as network failures).
//! - Bedrock service errors → a provider failure envelope in the payload
//!   body, carrying Bedrock's transience: throttling, model-not-ready,
//!   model-timeout, service-unavailable and internal-server errors are
//!   transient; validation, access and model errors are not.
//! - A reply that parses as JSON → the payload body. A reply that does not
//!   is passed through as a string so schema validation reports the
//!   mismatch.

use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use aws_smithy_types::error::display::DisplayErrorContext;
use serde_json::Value;
use tracing::info;

use polisight_pipeline::provider::{InvokeError, Provider, RawPayload};
use polisight_pipeline::request::AnalysisRequest;

use crate::context::build_context_block;
use crate::tokens;

pub struct BedrockProvider {
    client: Client,
}

impl BedrockProvider {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        BedrockProvider {
            client: Client::new(config),
        }
    }
}

impl Provider for BedrockProvider {
    fn invoke(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<RawPayload, InvokeError>> + Send {
        async move {
            let system = if request.documents.is_empty() {
                request.system_prompt.clone()
            } else {
                format!(
                    "{}\n\n{}",
                    request.system_prompt,
                    build_context_block(&request.documents)
                )
            };

            let message = Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(request.query.clone()))
                .build()
                .map_err(|e| InvokeError::Transport(e.to_string()))?;

            let mut call = self
                .client
                .converse()
                .model_id(&request.model_id)
                .system(SystemContentBlock::Text(system))
                .messages(message);

            if request.settings.temperature.is_some() || request.settings.max_tokens.is_some() {
                call = call.inference_config(
                    InferenceConfiguration::builder()
                        .set_temperature(request.settings.temperature)
                        .set_max_tokens(request.settings.max_tokens)
                        .build(),
                );
            }

            let response = match call.send().await {
                Ok(response) => response,
                Err(e) => return sdk_outcome(e),
            };

            let usage = response.usage().map(tokens::extract_token_usage);

            let Some(output_message) = response.output().and_then(|o| o.as_message().ok()) else {
                return Ok(RawPayload::failure("response contained no message", false));
            };

            let text = output_message
                .content()
                .iter()
                .filter_map(|block| {
                    if let ContentBlock::Text(t) = block {
                        Some(t.as_str())
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("");

            info!(
                model = %request.model_id,
                reply_len = text.len(),
                "converse reply received"
            );

            Ok(RawPayload {
                body: parse_reply(&text),
                usage,
            })
        }
    }
}

/// Parse the assistant's reply as JSON. Models occasionally wrap JSON in a
/// code fence; strip it first. A reply that still is not JSON is passed
/// through as a string so validation reports the mismatch.
fn parse_reply(text: &str) -> Value {
    let trimmed = text.trim();
    let stripped = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map(|rest| rest.strip_suffix("```").unwrap_or(rest).trim())
        .unwrap_or(trimmed);

    serde_json::from_str(stripped).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Map an SDK failure into the pipeline's channels.
fn sdk_outcome(error: SdkError<ConverseError>) -> Result<RawPayload, InvokeError> {
    match error {
        SdkError::TimeoutError(_) => Err(InvokeError::Timeout),
        SdkError::ServiceError(context) => {
            let service_error = context.into_err();
            let transient = matches!(
                service_error,
                ConverseError::ThrottlingException(_)
                    | ConverseError::ModelNotReadyException(_)
                    | ConverseError::ModelTimeoutException(_)
                    | ConverseError::ServiceUnavailableException(_)
                    | ConverseError::InternalServerException(_)
            );
            Ok(RawPayload::failure(
                &DisplayErrorContext(service_error).to_string(),
                transient,
            ))
        }
        other => Err(InvokeError::Transport(
            DisplayErrorContext(other).to_string(),
        )),
    }
}
