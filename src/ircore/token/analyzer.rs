use super::vocabulary::Vocabulary;
use super::tokenizer::{Segmentator, Language};
use crate::ircore::TermId;

pub struct Analyzer {
    vocab: Vocabulary,
    seg: Segmentator,
}

pub struct AnalyzerStats {
    pub term_count: usize,
    pub lang: String,
}

impl Analyzer {
    /// `lang` should already be resolved; `Auto` falls back to English.
    pub fn new(lang: Language) -> Self {
        Analyzer {
            vocab: Vocabulary::new(),
            seg: Segmentator::new(lang),
        }
    }

    pub fn get_vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn analyze(&mut self, text: &str) -> Vec<TermId> {
        let text_normalized = self.seg.normalize(text);
        let tokens = self.seg.parse_tokens(&text_normalized);
        self.vocab.generate_ids(&tokens)
    }

    pub fn stats(&self) -> AnalyzerStats {
        let lang = match self.seg.get_language() {
            Language::Chinese => "Chinese",
            _ => "English",
        };
        AnalyzerStats {
            term_count: self.vocab.len(),
            lang: lang.to_string(),
        }
    }
}
