use std::io;
use std::path::Path;
use encoding_rs::{Encoding, WINDOWS_1252};
use thiserror::Error;
use super::cfg::Cfg;
use super::{DocFormat, is_missing_path, text, docx, convert, pdf};

pub const FILE_NOT_FOUND: &str = "File not found.";
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format.";

/// Why one document could not be read. Never leaves the loader: it is
/// rendered into the placeholder text of that document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),
    #[error("{0}")]
    Pdf(String),
    #[error("{0}")]
    Conversion(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    pub text: String,
    /// `text` is a placeholder, not the document's content.
    pub degraded: bool,
}

impl Extracted {
    pub fn content(text: String) -> Self {
        Extracted { text, degraded: false }
    }
    pub fn placeholder(text: impl Into<String>) -> Self {
        Extracted { text: text.into(), degraded: true }
    }
}

/// Turns a path into text. Implementations must not fail: a document
/// that cannot be read comes back as placeholder text.
pub trait TextLoader {
    fn load(&self, path: &str) -> Extracted;

    fn read_text(&self, path: &str) -> String {
        self.load(path).text
    }
}

impl<F> TextLoader for F
where
    F: Fn(&str) -> Extracted,
{
    fn load(&self, path: &str) -> Extracted {
        self(path)
    }
}

pub struct FileLoader {
    converter: String,
    fallback_encoding: &'static Encoding,
}

impl Default for FileLoader {
    fn default() -> Self {
        FileLoader {
            converter: String::from("libreoffice"),
            fallback_encoding: WINDOWS_1252,
        }
    }
}

impl FileLoader {
    pub fn new(cfg: &Cfg) -> Self {
        FileLoader {
            converter: cfg.get_converter().to_string(),
            fallback_encoding: cfg.get_fallback_encoding(),
        }
    }

    fn extract(&self, path: &Path, format: DocFormat) -> Result<String, ExtractError> {
        match format {
            DocFormat::Txt => text::read_text_file(path, self.fallback_encoding),
            DocFormat::Docx => docx::read_docx_file(path),
            DocFormat::Doc => convert::read_doc_file(path, &self.converter),
            DocFormat::Pdf => pdf::read_pdf_file(path),
        }
    }
}

impl TextLoader for FileLoader {
    fn load(&self, path: &str) -> Extracted {
        if is_missing_path(path) {
            log::warn!("no file attached ({:?})", path);
            return Extracted::placeholder(FILE_NOT_FOUND);
        }
        let format = match DocFormat::from_path(path) {
            Some(f) => f,
            None => {
                log::warn!("{}: unsupported file format", path);
                return Extracted::placeholder(UNSUPPORTED_FORMAT);
            }
        };
        match self.extract(Path::new(path), format) {
            Ok(text) => {
                log::debug!("{}: {} bytes of text", path, text.len());
                Extracted::content(text)
            }
            Err(e) => {
                log::warn!("{}: {}", path, e);
                Extracted::placeholder(format!("An error occurred: {}", e))
            }
        }
    }
}
