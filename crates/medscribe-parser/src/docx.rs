//! DOCX to plain text conversion
//!
//! A .docx file is a zip archive whose main body lives in
//! `word/document.xml`. Text runs (`w:t`) are concatenated; paragraphs
//! (`w:p`) become newlines, explicit breaks (`w:br`) newlines, and tabs
//! (`w:tab`) tab characters. Table cells flow in document order, which
//! linearizes tables well enough for prompting.

use crate::error::ParserError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io::Read;
use std::path::Path;

pub(crate) fn convert(path: &Path) -> Result<String, ParserError> {
    let file = fs::File::open(path).map_err(|e| ParserError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| conversion(path, e))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| conversion(path, e))?
        .read_to_string(&mut xml)
        .map_err(|e| conversion(path, e))?;

    extract_body_text(path, &xml)
}

fn extract_body_text(path: &Path, xml: &str) -> Result<String, ParserError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(|e| conversion(path, e))? {
            Event::Start(e) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = true;
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                text.push_str(&t.unescape().map_err(|e| conversion(path, e))?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

fn conversion(
    path: &Path,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> ParserError {
    ParserError::Conversion {
        path: path.to_path_buf(),
        source: err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Chief complaint: chest pain</w:t></w:r></w:p>
    <w:p><w:r><w:t>Assessment:</w:t></w:r><w:r><w:tab/><w:t>stable angina</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn write_docx(dir: &tempfile::TempDir, xml: &str) -> std::path::PathBuf {
        let path = dir.path().join("visit.docx");
        let file = fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
        path
    }

    #[test]
    fn test_extracts_paragraphs_and_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_docx(&dir, DOCUMENT_XML);

        let text = convert(&path).unwrap();
        assert_eq!(text, "Chief complaint: chest pain\nAssessment:\tstable angina\n");
    }

    #[test]
    fn test_archive_without_document_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.docx");
        let file = fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"nothing here").unwrap();
        zip.finish().unwrap();

        let err = convert(&path).unwrap_err();
        assert!(matches!(err, ParserError::Conversion { .. }));
    }

    #[test]
    fn test_not_a_zip_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        fs::write(&path, b"plain bytes, not a zip").unwrap();

        let err = convert(&path).unwrap_err();
        assert!(matches!(err, ParserError::Conversion { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unescapes_entities() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body><w:p><w:r><w:t>Tylenol &amp; rest</w:t></w:r></w:p></w:body></w:document>"#;
        let dir = tempfile::tempdir().unwrap();
        let path = write_docx(&dir, xml);

        assert_eq!(convert(&path).unwrap(), "Tylenol & rest\n");
    }
}
