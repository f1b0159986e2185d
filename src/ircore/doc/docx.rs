use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;
use super::loader::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Text of the top-level body paragraphs, one line per paragraph.
pub fn read_docx_file(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    paragraphs_from_xml(&xml)
}

// Runs of a paragraph are concatenated; tables and nested paragraphs
// (text boxes) do not start paragraphs of their own.
fn paragraphs_from_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = vec![];
    let mut current: Option<String> = None;
    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut in_text = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" => {
                    if table_depth == 0 && paragraph_depth == 0 {
                        current = Some(String::new());
                    }
                    paragraph_depth += 1;
                }
                b"w:t" => in_text = true,
                _ => (),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if table_depth == 0 && paragraph_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" => {
                    if let Some(p) = current.as_mut() {
                        p.push('\t');
                    }
                }
                b"w:br" | b"w:cr" => {
                    if let Some(p) = current.as_mut() {
                        p.push('\n');
                    }
                }
                _ => (),
            },
            Event::Text(t) if in_text => {
                if let Some(p) = current.as_mut() {
                    p.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 {
                        if let Some(p) = current.take() {
                            paragraphs.push(p);
                        }
                    }
                }
                b"w:t" => in_text = false,
                _ => (),
            },
            Event::Eof => break,
            _ => (),
        }
    }
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
pub(crate) fn write_docx_fixture(path: &Path, body: &str) {
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    zip.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body);
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}
