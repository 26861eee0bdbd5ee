use crate::docx::extract_docx_text;
use crate::error::{ExtractError, Result};
use crate::format::DocumentFormat;

/// Convert uploaded bytes into plain text for the declared format.
///
/// Pure transformation: no side effects, same output for the same input.
/// Whitespace-only results are valid here; rejecting them is the caller's
/// decision. Plain text and markdown decode lossily, so malformed UTF-8
/// never fails the upload.
pub fn extract(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    log::debug!("Extracting {} document ({} bytes)", format.as_str(), bytes.len());

    match format {
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::pdf(e.to_string()))
        }
        DocumentFormat::Docx => extract_docx_text(bytes),
        DocumentFormat::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract(b"The sky is blue.", DocumentFormat::Text).unwrap();
        assert_eq!(text, "The sky is blue.");
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        let text = extract(&[b'o', b'k', 0xFF, b'!'], DocumentFormat::Text).unwrap();
        assert_eq!(text, "ok\u{FFFD}!");
    }

    #[test]
    fn test_garbage_pdf_errors() {
        let err = extract(b"not a pdf", DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
