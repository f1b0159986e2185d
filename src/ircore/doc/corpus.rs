use super::{Candidate, Document};
use super::loader::TextLoader;

/// Reference document at position 0, candidates after it in input order.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn assemble<L: TextLoader + ?Sized>(loader: &L, reference_path: &str, candidates: &[Candidate]) -> Self {
        let mut documents = Vec::with_capacity(candidates.len() + 1);
        documents.push(Document::reference(reference_path, loader.load(reference_path)));
        for (n, candidate) in candidates.iter().enumerate() {
            documents.push(Document::candidate(candidate, loader.load(&candidate.path)));
            if (n + 1) % 100 == 0 {
                log::debug!("{} of {} candidates loaded", n + 1, candidates.len());
            }
        }
        Corpus { documents }
    }

    pub fn reference(&self) -> &Document {
        &self.documents[0]
    }

    pub fn candidates(&self) -> &[Document] {
        &self.documents[1..]
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn degraded_count(&self) -> usize {
        self.candidates().iter().filter(|d| d.is_degraded()).count()
    }
}
