use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::ircore::CandidateId;
use crate::ircore::doc::Candidate;
use crate::ircore::error::FinderError;

#[derive(Deserialize)]
struct ManifestLine {
    id: CandidateId,
    #[serde(default)]
    path: Option<String>,
}

/// One JSON object per line, `{"id": 7, "path": "resumes/7.docx"}`.
/// A null or absent path is kept as a missing file; lines that do not
/// parse are logged and skipped.
pub fn parse_manifest(source: &str, text: &str) -> Vec<Candidate> {
    let mut candidates = vec![];
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ManifestLine>(line) {
            Ok(entry) => candidates.push(Candidate::new(entry.id, entry.path.unwrap_or_default())),
            Err(e) => log::warn!("{}:{}: {}", source, n + 1, e),
        }
    }
    candidates
}

pub fn read_manifest(path: &Path) -> Result<Vec<Candidate>, FinderError> {
    let path_string = path.to_string_lossy().to_string();
    let text = fs::read_to_string(path).map_err(|e| FinderError::io(&path_string, e))?;
    Ok(parse_manifest(&path_string, &text))
}
