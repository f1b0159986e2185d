use std::fs::{self, File};
use std::path::Path;
use std::io::{self, Read, ErrorKind};
use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;
use super::loader::ExtractError;

/// UTF-8 first; bytes that are not valid UTF-8 are decoded with `fallback`.
pub fn read_text_file(path: &Path, fallback: &'static Encoding) -> Result<String, ExtractError> {
    match fs::read_to_string(path) {
        Ok(c) => Ok(c),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            log::debug!("{} is not UTF-8, decoding as {}", path.display(), fallback.name());
            Ok(read_to_string_non_utf8_encoding(path, fallback)?)
        }
        Err(e) => Err(e.into()),
    }
}

fn read_to_string_non_utf8_encoding(path: &Path, encoding: &'static Encoding) -> io::Result<String> {
    let source_file = File::open(path)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding))
        .build(source_file);
    let mut dest = String::new();
    decoder.read_to_string(&mut dest)?;
    Ok(dest)
}
