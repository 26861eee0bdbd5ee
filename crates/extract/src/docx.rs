//! DOCX text extraction.
//!
//! A .docx file is a zip container; the document body lives in
//! `word/document.xml` with visible text inside `<w:t>` runs. This walks
//! that XML and concatenates the runs, inserting breaks at paragraph
//! boundaries.

use crate::error::{ExtractError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PATH: &str = "word/document.xml";

/// Pull plain text out of DOCX bytes
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::docx(e.to_string()))?;

    let mut xml = Vec::new();
    archive
        .by_name(DOCUMENT_PATH)
        .map_err(|e| ExtractError::docx(format!("{DOCUMENT_PATH}: {e}")))?
        .read_to_end(&mut xml)
        .map_err(|e| ExtractError::docx(e.to_string()))?;

    plaintext_from_document_xml(&xml)
}

/// Walk `word/document.xml` and collect the text runs
fn plaintext_from_document_xml(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| ExtractError::docx(e.to_string()))?
        {
            Event::Start(e) if e.name().local_name().as_ref() == b"t" => {
                in_text_run = true;
            }
            Event::End(e) => match e.name().local_name().as_ref() {
                b"t" => in_text_run = false,
                // Paragraph boundary
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().local_name().as_ref() {
                b"br" => text.push('\n'),
                b"tab" => text.push('\t'),
                _ => {}
            },
            Event::Text(e) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|err| ExtractError::docx(err.to_string()))?;
                text.push_str(&run);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body_xml}</w:body>
</w:document>"#
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PATH, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_paragraph_text() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:t> world</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Second paragraph</w:t></w:r></w:p>",
        );
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Hello world\nSecond paragraph\n");
    }

    #[test]
    fn test_line_break_and_tab_runs() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>a</w:t><w:br/><w:t>b</w:t><w:tab/><w:t>c</w:t></w:r></w:p>",
        );
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "a\nb\tc\n");
    }

    #[test]
    fn test_entities_unescaped() {
        let bytes = docx_with_body("<w:p><w:r><w:t>a &amp; b</w:t></w:r></w:p>");
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "a & b\n");
    }

    #[test]
    fn test_not_a_zip_errors() {
        let err = extract_docx_text(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[test]
    fn test_zip_without_document_xml_errors() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
