use serde::{Deserialize, Serialize};

use polisight_core::models::policy::PolicyDocument;

/// The parameter bundle for one model invocation.
///
/// Immutable once constructed; ownership moves to the provider when the
/// executor invokes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Model (inference profile) ID, e.g. `us.anthropic.claude-sonnet-4-6`.
    pub model_id: String,
    pub system_prompt: String,
    /// The user's question or analysis instruction.
    pub query: String,
    /// Policy documents giving the model context for this request.
    pub documents: Vec<PolicyDocument>,
    pub settings: GenerationSettings,
}

impl AnalysisRequest {
    pub fn new(model_id: &str, system_prompt: &str, query: &str) -> Self {
        AnalysisRequest {
            model_id: model_id.to_string(),
            system_prompt: system_prompt.to_string(),
            query: query.to_string(),
            documents: Vec::new(),
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_documents(mut self, documents: Vec<PolicyDocument>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Sampling and length settings passed through to the provider.
/// `None` leaves the provider's default in place.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
}
