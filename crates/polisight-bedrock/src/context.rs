//! Prompt context builder.
//!
//! Assembles extracted policy document text into a structured block that
//! is appended to the system prompt, giving the model sight of every
//! document attached to the request.

use polisight_core::models::policy::PolicyDocument;

/// Build a structured context block from policy documents.
///
/// Returns an XML-style block for the system prompt. If `documents` is
/// empty, returns an empty string (no context to inject).
pub fn build_context_block(documents: &[PolicyDocument]) -> String {
    if documents.is_empty() {
        return String::new();
    }

    let mut block = String::from("<policy_context>\n");

    for doc in documents {
        block.push_str(&format!("<document name=\"{}\">\n", doc.filename));
        block.push_str(&doc.text);
        if !doc.text.ends_with('\n') {
            block.push('\n');
        }
        block.push_str("</document>\n");
    }

    block.push_str("</policy_context>");
    block
}
