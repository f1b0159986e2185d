use serde::{Serialize, Deserialize};
use encoding_rs::{Encoding, WINDOWS_1252};
use std::fs;
use std::path::Path;
use crate::ircore::CFG_NAME;
use crate::ircore::token::tokenizer::Language;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(default)]
pub struct Cfg {
    language: Language,
    converter: String,
    fallback_encoding: String,
}

impl Default for Cfg {
    fn default() -> Self {
        Cfg {
            language: Language::Auto,
            converter: String::from("libreoffice"),
            fallback_encoding: String::from("windows-1252"),
        }
    }
}

impl Cfg {
    pub fn new() -> Self {
        Cfg::default()
    }

    pub fn from_str(cfg_str: &str) -> Self {
        match serde_yaml::from_str(cfg_str) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("invalid configuration, using defaults: {}", e);
                Cfg::new()
            }
        }
    }

    /// Reads `path`, or `.rfindcfg` in the working directory when no path
    /// is given. Missing or unreadable files fall back to defaults.
    pub fn load(path: Option<&str>) -> Self {
        let cfg_path = match path {
            Some(p) => Path::new(p).to_path_buf(),
            None => {
                let default_path = Path::new(CFG_NAME);
                if !default_path.is_file() {
                    return Cfg::new();
                }
                default_path.to_path_buf()
            }
        };
        match fs::read_to_string(&cfg_path) {
            Ok(cfg_str) => Self::from_str(&cfg_str),
            Err(e) => {
                log::warn!("{}: {}, using defaults", cfg_path.display(), e);
                Cfg::new()
            }
        }
    }

    pub fn get_language(&self) -> Language {
        self.language
    }

    pub fn get_converter(&self) -> &str {
        &self.converter
    }

    pub fn get_fallback_encoding(&self) -> &'static Encoding {
        match Encoding::for_label(self.fallback_encoding.as_bytes()) {
            Some(encoding) => encoding,
            None => {
                log::warn!("unknown encoding {}, using {}", self.fallback_encoding, WINDOWS_1252.name());
                WINDOWS_1252
            }
        }
    }
}
