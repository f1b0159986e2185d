pub mod cfg;
pub mod loader;
pub mod text;
pub mod docx;
pub mod convert;
pub mod pdf;
pub mod corpus;
pub mod manifest;
pub mod dir;

use std::path::Path;
use crate::ircore::CandidateId;
use loader::Extracted;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[".doc", ".docx", ".pdf", ".txt"];

// values the records layer stores when no file is attached
const MISSING_PATH_SENTINELS: &[&str] = &["", "N/A", "NULL", "None"];

pub fn is_missing_path(path: &str) -> bool {
    MISSING_PATH_SENTINELS.contains(&path.trim())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocFormat {
    Txt,
    Docx,
    Doc,
    Pdf,
}

impl DocFormat {
    /// Format from the file extension, case-insensitive.
    pub fn from_path(path: &str) -> Option<DocFormat> {
        let extension = Path::new(path).extension()?.to_string_lossy().to_lowercase();
        match extension.as_str() {
            "txt" => Some(DocFormat::Txt),
            "docx" => Some(DocFormat::Docx),
            "doc" => Some(DocFormat::Doc),
            "pdf" => Some(DocFormat::Pdf),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub identifier: CandidateId,
    pub path: String,
}

impl Candidate {
    pub fn new(identifier: CandidateId, path: impl Into<String>) -> Self {
        Candidate { identifier, path: path.into() }
    }
}

#[derive(PartialEq, Debug)]
pub struct Document {
    identifier: Option<CandidateId>,
    source_path: String,
    text: String,
    degraded: bool,
}

impl Document {
    pub fn reference(source_path: &str, extracted: Extracted) -> Self {
        Document {
            identifier: None,
            source_path: source_path.to_string(),
            text: extracted.text,
            degraded: extracted.degraded,
        }
    }
    pub fn candidate(candidate: &Candidate, extracted: Extracted) -> Self {
        Document {
            identifier: Some(candidate.identifier),
            source_path: candidate.path.clone(),
            text: extracted.text,
            degraded: extracted.degraded,
        }
    }
    pub fn get_identifier(&self) -> Option<CandidateId> {
        self.identifier
    }
    pub fn get_text(&self) -> &str {
        &self.text
    }
    pub fn get_path(&self) -> &str {
        &self.source_path
    }
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}
