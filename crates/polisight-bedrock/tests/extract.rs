use aws_sdk_bedrockruntime::types::DocumentFormat;

use polisight_bedrock::extract::document_format_for_extension;

#[test]
fn known_extensions_map_to_formats() {
    assert_eq!(
        document_format_for_extension("pdf"),
        Some(DocumentFormat::Pdf)
    );
    assert_eq!(
        document_format_for_extension("DOCX"),
        Some(DocumentFormat::Docx)
    );
    assert_eq!(
        document_format_for_extension("doc"),
        Some(DocumentFormat::Doc)
    );
}

#[test]
fn unsupported_extensions_rejected() {
    assert_eq!(document_format_for_extension("xlsx"), None);
    assert_eq!(document_format_for_extension("txt"), None);
    assert_eq!(document_format_for_extension(""), None);
}
