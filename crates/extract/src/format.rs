/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Detect the format from the declared MIME type, falling back to the
    /// filename extension. Returns `None` for anything the service cannot
    /// extract; the HTTP boundary surfaces that as 415.
    pub fn detect(content_type: &str, file_name: &str) -> Option<Self> {
        let mime = content_type.to_ascii_lowercase();
        let name = file_name.to_ascii_lowercase();

        if mime.contains("pdf") || name.ends_with(".pdf") {
            return Some(Self::Pdf);
        }
        if mime.contains("word") || name.ends_with(".docx") {
            return Some(Self::Docx);
        }
        if mime.contains("text") || name.ends_with(".txt") || name.ends_with(".md") {
            return Some(Self::Text);
        }
        None
    }

    /// Human-readable format name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime() {
        assert_eq!(
            DocumentFormat::detect("application/pdf", "report"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "notes"
            ),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::detect("text/plain", "readme"),
            Some(DocumentFormat::Text)
        );
        assert_eq!(
            DocumentFormat::detect("text/markdown", "readme"),
            Some(DocumentFormat::Text)
        );
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            DocumentFormat::detect("application/octet-stream", "paper.PDF"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect("application/octet-stream", "notes.docx"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::detect("application/octet-stream", "README.md"),
            Some(DocumentFormat::Text)
        );
        assert_eq!(
            DocumentFormat::detect("", "todo.txt"),
            Some(DocumentFormat::Text)
        );
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(DocumentFormat::detect("application/zip", "archive.zip"), None);
        assert_eq!(DocumentFormat::detect("image/png", "photo.png"), None);
        assert_eq!(DocumentFormat::detect("", "binary"), None);
    }
}
