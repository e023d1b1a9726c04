//! High-level analysis operations: build the request, run the validated
//! call, and record the transaction.

use serde::{Deserialize, Serialize};
use tracing::info;

use polisight_core::models::analysis::{HouseholdAnalysis, PolicyAnalysis};
use polisight_core::models::policy::PolicyDocument;
use polisight_core::models::token_count::TokenUsage;
use polisight_core::models::transaction::{
    AnalysisTransaction, TransactionStatus, TransactionType,
};
use polisight_core::schema::registry;
use polisight_pipeline::error::ClassifiedError;
use polisight_pipeline::executor::{ValidatedResult, execute};
use polisight_pipeline::request::{AnalysisRequest, GenerationSettings};

use crate::provider::BedrockProvider;
use crate::tokens;

const POLICY_ANALYSIS_SYSTEM_PROMPT: &str = "\
You are an insurance coverage analyst. Analyze the policy described in the \
context documents and answer the user's question. Respond with a single \
JSON object with fields: summary (string), coverage_grade (one of A, B, C, \
D, F), coverage_gaps (array of {category, description, severity: \
low|moderate|high}), recommendations (array of {title, description}), and \
optionally custom_sections (object of string values). Output only JSON.";

const HOUSEHOLD_ANALYSIS_SYSTEM_PROMPT: &str = "\
You are an insurance coverage analyst reviewing coverage for a whole \
household. Assess each member named in the user's question against the \
policies in the context documents. Respond with a single JSON object with \
fields: summary (string), overall_grade (one of A, B, C, D, F), and \
member_assessments (array of {member_name, role: primary|spouse|dependent, \
grade, notes, uncovered_needs: array of strings}). Output only JSON.";

/// Low temperature for stable JSON, with room for long reports.
const ANALYSIS_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: Some(0.2),
    max_tokens: Some(4096),
};

/// A completed analysis plus its audit record, ready for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome<T> {
    pub analysis: T,
    pub transaction: AnalysisTransaction,
}

/// Analyze a single policy.
pub async fn analyze_policy(
    provider: &BedrockProvider,
    model_id: &str,
    documents: Vec<PolicyDocument>,
    query: &str,
) -> Result<AnalysisOutcome<PolicyAnalysis>, ClassifiedError> {
    let request = AnalysisRequest::new(model_id, POLICY_ANALYSIS_SYSTEM_PROMPT, query)
        .with_documents(documents)
        .with_settings(ANALYSIS_SETTINGS);

    let result = execute(request, registry::policy_analysis(), provider).await?;
    Ok(outcome(result, TransactionType::PolicyAnalysis))
}

/// Analyze coverage for a multi-member household.
pub async fn analyze_household(
    provider: &BedrockProvider,
    model_id: &str,
    documents: Vec<PolicyDocument>,
    query: &str,
) -> Result<AnalysisOutcome<HouseholdAnalysis>, ClassifiedError> {
    let request = AnalysisRequest::new(model_id, HOUSEHOLD_ANALYSIS_SYSTEM_PROMPT, query)
        .with_documents(documents)
        .with_settings(ANALYSIS_SETTINGS);

    let result = execute(request, registry::household_analysis(), provider).await?;
    Ok(outcome(result, TransactionType::HouseholdAnalysis))
}

fn outcome<T>(result: ValidatedResult<T>, transaction_type: TransactionType) -> AnalysisOutcome<T> {
    let ValidatedResult {
        id,
        model_id,
        usage,
        value,
    } = result;

    let usage = usage
        .map(|t| tokens::usage_with_cost(t, &model_id))
        .unwrap_or_else(TokenUsage::zero);

    info!(
        transaction_id = %id,
        cost_usd = usage.cost_usd,
        "recording analysis transaction"
    );

    AnalysisOutcome {
        analysis: value,
        transaction: AnalysisTransaction {
            id,
            transaction_type,
            model_id,
            usage,
            status: TransactionStatus::Complete,
            created_at: jiff::Timestamp::now(),
        },
    }
}
