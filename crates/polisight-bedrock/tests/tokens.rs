use polisight_bedrock::tokens::{estimate_for, get_pricing, usage_with_cost};
use polisight_core::models::token_count::TokenCount;

#[test]
fn known_models_have_pricing() {
    assert!(get_pricing("us.anthropic.claude-opus-4-6-v1").is_some());
    assert!(get_pricing("us.anthropic.claude-sonnet-4-6").is_some());
    assert!(get_pricing("us.anthropic.claude-haiku-3-5-v1").is_some());
}

#[test]
fn unknown_model_has_no_pricing() {
    assert!(get_pricing("us.meta.llama-3").is_none());
}

#[test]
fn cost_scales_with_token_counts() {
    let tokens = TokenCount {
        input: 1_000_000,
        output: 1_000_000,
    };

    let usage = usage_with_cost(tokens, "us.anthropic.claude-sonnet-4-6");

    // Sonnet: $3/M input + $15/M output.
    assert!((usage.cost_usd - 18.0).abs() < 1e-9);
    assert_eq!(usage.tokens.total(), 2_000_000);
}

#[test]
fn estimate_carries_model_and_tokens() {
    let estimate = estimate_for(
        "us.anthropic.claude-opus-4-6-v1",
        TokenCount {
            input: 2_000_000,
            output: 0,
        },
    );

    // Opus: $15/M input.
    assert!((estimate.estimated_cost_usd - 30.0).abs() < 1e-9);
    assert_eq!(estimate.model_id, "us.anthropic.claude-opus-4-6-v1");
}

#[test]
fn unknown_model_costs_zero() {
    let tokens = TokenCount {
        input: 500,
        output: 500,
    };

    let usage = usage_with_cost(tokens, "some-unknown-model");

    assert_eq!(usage.cost_usd, 0.0);
    assert_eq!(usage.tokens.total(), 1000);
}
