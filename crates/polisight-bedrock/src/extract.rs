//! Policy document text extraction via the Bedrock Converse API.
//!
//! Plan brochures, summaries of benefits, and EOBs arrive as PDF or DOCX.
//! The Converse API parses those formats natively through `DocumentBlock`,
//! so extraction is a single model call asking for plain text.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, DocumentBlock, DocumentFormat, DocumentSource, Message,
    SystemContentBlock,
};
use tracing::info;

use polisight_core::models::policy::PolicyDocument;

use crate::error::BedrockError;

const EXTRACTION_SYSTEM_PROMPT: &str = "\
You are extracting text from an insurance policy document. \
Return the complete plain text, preserving paragraph and section structure. \
Do not summarize, annotate, or reformat.";

/// Extract the text of a policy document (PDF, DOC, or DOCX) via Bedrock.
///
/// The caller chooses the model (e.g. a Claude inference profile).
pub async fn extract_policy_text(
    config: &aws_config::SdkConfig,
    model_id: &str,
    bytes: &[u8],
    filename: &str,
    format: DocumentFormat,
) -> Result<PolicyDocument, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let doc_block = DocumentBlock::builder()
        .format(format)
        .name(sanitize_document_name(filename))
        .source(DocumentSource::Bytes(aws_smithy_types::Blob::new(bytes)))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Document(doc_block))
        .content(ContentBlock::Text(
            "Extract the full text of this policy document.".to_string(),
        ))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    info!(model_id, filename, "extracting policy document text");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(
            EXTRACTION_SYSTEM_PROMPT.to_string(),
        ))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let text = response
        .output()
        .and_then(|o| o.as_message().ok())
        .map(|m| {
            m.content()
                .iter()
                .filter_map(|block| {
                    if let ContentBlock::Text(t) = block {
                        Some(t.as_str())
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    info!(
        model_id,
        filename,
        text_len = text.len(),
        "policy text extraction complete"
    );

    Ok(PolicyDocument {
        filename: filename.to_string(),
        text,
    })
}

/// Sanitize a filename for the `DocumentBlock` name field, which only
/// allows alphanumerics, single spaces, hyphens, parentheses, and square
/// brackets.
fn sanitize_document_name(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || "-()[]".contains(c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a file extension to a Bedrock `DocumentFormat`.
///
/// Returns `None` for extensions extraction does not support.
pub fn document_format_for_extension(ext: &str) -> Option<DocumentFormat> {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => Some(DocumentFormat::Pdf),
        "docx" => Some(DocumentFormat::Docx),
        "doc" => Some(DocumentFormat::Doc),
        _ => None,
    }
}
