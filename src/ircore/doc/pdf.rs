use std::fs;
use std::panic;
use std::path::Path;
use super::loader::ExtractError;

/// Text of every page, concatenated in page order.
pub fn read_pdf_file(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;
    // the parser panics on some malformed files; keep that inside this document
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf(format!("{}: malformed PDF", path.display()))),
    }
}
