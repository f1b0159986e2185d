use std::collections::{BTreeMap, HashMap, HashSet};
use crate::ircore::TermId;
use crate::ircore::utils::sparse_vector::{SparseVector, SparseVectorOp};

/// Row-per-document TF-IDF weights of one corpus.
///
/// Weights are raw term counts times the smoothed inverse document
/// frequency `ln((1 + n) / (1 + df)) + 1`, and every row is scaled to unit
/// length. The vocabulary is whatever the fitted corpus contains, so
/// weights (and any score derived from them) mean nothing outside it.
#[derive(Debug)]
pub struct TfIdfMatrix {
    rows: Vec<SparseVector>,
    // the number of documents in the corpus containing the term (id)
    document_frequency: HashMap<TermId, u32>,
    // number of tokens of each document, row order
    document_length: Vec<usize>,
}

#[derive(Debug, PartialEq)]
pub struct CorpusStats {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub total_document_length: usize,
    pub average_document_length: f64,
}

impl TfIdfMatrix {
    pub fn fit_transform(docs: &[Vec<TermId>]) -> Self {
        let mut document_frequency: HashMap<TermId, u32> = HashMap::new();
        for term_ids in docs {
            let distinct: HashSet<&TermId> = term_ids.iter().collect();
            for &tid in distinct {
                document_frequency.entry(tid)
                    .and_modify(|count| *count += 1)
                    .or_insert(1);
            }
        }
        let n = docs.len() as f64;
        let idf = |tid: &TermId| -> f64 {
            let df = document_frequency.get(tid).copied().unwrap_or(0) as f64;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        };
        let mut rows = Vec::with_capacity(docs.len());
        for term_ids in docs {
            let mut term_frequency: BTreeMap<TermId, u32> = BTreeMap::new();
            for &tid in term_ids {
                *term_frequency.entry(tid).or_insert(0) += 1;
            }
            let mut row = SparseVector::new();
            for (tid, freq) in term_frequency {
                row.vec_set(tid, freq as f64 * idf(&tid));
            }
            row.vec_normalize();
            rows.push(row);
        }
        TfIdfMatrix {
            rows,
            document_frequency,
            document_length: docs.iter().map(|d| d.len()).collect(),
        }
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn get_document_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get_document_frequency(&self, term: TermId) -> Option<u32> {
        self.document_frequency.get(&term).copied()
    }

    pub fn stats(&self) -> CorpusStats {
        let total: usize = self.document_length.iter().sum();
        let average = if self.document_length.is_empty() {
            0.0
        } else {
            total as f64 / self.document_length.len() as f64
        };
        CorpusStats {
            document_count: self.rows.len(),
            vocabulary_size: self.document_frequency.len(),
            total_document_length: total,
            average_document_length: average,
        }
    }
}
