use std::path::Path;
use std::process::Command;
use super::docx::read_docx_file;
use super::loader::ExtractError;

/// Legacy `.doc`: convert to `.docx` with an external converter into a
/// temporary directory, then read that. The directory is removed when
/// `out_dir` drops, on success and on every error path.
pub fn read_doc_file(path: &Path, converter: &str) -> Result<String, ExtractError> {
    let out_dir = tempfile::Builder::new().prefix("rfind-doc").tempdir()?;
    let output = Command::new(converter)
        .arg("--headless")
        .arg("--convert-to")
        .arg("docx")
        .arg("--outdir")
        .arg(out_dir.path())
        .arg(path)
        .output()?;
    let mut converted_name = match path.file_stem() {
        Some(stem) => stem.to_os_string(),
        None => return Err(ExtractError::Conversion(format!("{} has no file name", path.display()))),
    };
    converted_name.push(".docx");
    let converted = out_dir.path().join(converted_name);
    if !output.status.success() || !converted.is_file() {
        return Err(ExtractError::Conversion(format!("{} could not convert {} ({}): {}",
            converter, path.display(), output.status,
            String::from_utf8_lossy(&output.stderr).trim())));
    }
    log::debug!("{} converted to {}", path.display(), converted.display());
    read_docx_file(&converted)
}
