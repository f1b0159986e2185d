use unicode_segmentation::UnicodeSegmentation;
use serde::{Serialize, Deserialize};
use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use whatlang::Lang;

// building the dictionary is expensive, share one per process
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    Auto,
}

impl Default for Language {
    fn default() -> Self {
        Language::Auto
    }
}

impl Language {
    /// Turns `Auto` into a concrete language by looking at `sample`,
    /// usually the reference document. The result applies to the whole corpus.
    pub fn resolve(self, sample: &str) -> Language {
        match self {
            Language::Auto => match whatlang::detect_lang(sample) {
                Some(Lang::Cmn) => Language::Chinese,
                _ => Language::English,
            },
            lang => lang,
        }
    }
}

#[derive(Debug)]
pub struct Segmentator {
    lang: Language,
}

impl Segmentator {
    pub fn new(lang: Language) -> Self {
        let lang = match lang {
            Language::Auto => Language::English,
            lang => lang,
        };
        Segmentator { lang }
    }

    pub fn get_language(&self) -> Language {
        self.lang
    }

    // a token is a run of two or more word chars (alphanumeric or '_')
    pub fn parse_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.lang {
            Language::Chinese => {
                let raw_word_list = JIEBA.cut(text, false);
                let mut words = vec![];
                for raw_word in raw_word_list {
                    if let Some(c) = raw_word.chars().next() {
                        if c.is_alphabetic() {
                            words.push(raw_word);
                        }
                    }
                }
                words
            }
            _ => text
                .unicode_words()
                .flat_map(|w| w.split(|c: char| !(c.is_alphanumeric() || c == '_')))
                .filter(|t| t.chars().nth(1).is_some())
                .collect(),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        match self.lang {
            Language::Chinese => text.to_string(),
            _ => text.to_lowercase(),
        }
    }
}
