use thiserror::Error;
use std::io;
use crate::ircore::doc::SUPPORTED_EXTENSIONS;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("the file '{path}' is not supported. Supported file types are: {}", SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedFormat { path: String },
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FinderError {
    pub fn io(path: &str, source: io::Error) -> Self {
        FinderError::Io { path: path.to_string(), source }
    }
}
