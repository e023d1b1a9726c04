use polisight_core::models::cost::{CostEstimate, ModelPricing};
use polisight_core::models::token_count::{TokenCount, TokenUsage};

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_usage(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: usage.input_tokens as u64,
        output: usage.output_tokens as u64,
    }
}

/// Price a token count for the given model. Unknown models cost 0.0; the
/// frontend labels those estimates as unavailable.
pub fn usage_with_cost(tokens: TokenCount, model_id: &str) -> TokenUsage {
    let cost_usd = get_pricing(model_id)
        .map(|p| p.estimate_cost(tokens))
        .unwrap_or(0.0);
    TokenUsage { tokens, cost_usd }
}

/// Build the pre-call cost estimate shown in the analysis dialog.
pub fn estimate_for(model_id: &str, estimated_tokens: TokenCount) -> CostEstimate {
    let estimated_cost_usd = get_pricing(model_id)
        .map(|p| p.estimate_cost(estimated_tokens))
        .unwrap_or(0.0);
    CostEstimate {
        model_id: model_id.to_string(),
        estimated_tokens,
        estimated_cost_usd,
    }
}

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        // Claude 4 Opus
        id if id.contains("claude-opus-4") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        // Claude 4 Sonnet
        id if id.contains("claude-sonnet-4") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        // Claude 3.5 Haiku
        id if id.contains("claude-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        _ => None,
    }
}
