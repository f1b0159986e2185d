use std::collections::HashMap;
use crate::ircore::TermId;

/// Term <-> id map built from one corpus only. Ids are dense and follow
/// the order in which terms are first seen, so the same corpus always
/// yields the same ids.
#[derive(Debug, Default)]
pub struct Vocabulary {
    term_ids: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary {
            term_ids: HashMap::new(),
            terms: vec![],
        }
    }

    pub fn add(&mut self, word: &str) -> TermId {
        if let Some(&term_id) = self.term_ids.get(word) {
            return term_id;
        }
        let term_id = self.terms.len() as TermId;
        self.term_ids.insert(word.to_owned(), term_id);
        self.terms.push(word.to_owned());
        term_id
    }

    pub fn generate_ids(&mut self, words: &[&str]) -> Vec<TermId> {
        words.iter().map(|w| self.add(w)).collect()
    }

    pub fn get(&self, word: &str) -> Option<TermId> {
        self.term_ids.get(word).copied()
    }

    pub fn get_term_by_id(&self, tid: TermId) -> Option<&str> {
        self.terms.get(tid as usize).map(|t| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
