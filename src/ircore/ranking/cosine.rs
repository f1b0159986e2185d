use crate::ircore::ranking::tfidf::TfIdfMatrix;
use crate::ircore::utils::sparse_vector::SparseVectorOp;

pub trait CosineScorer {
    /// Similarity of every candidate row (1..n) against the reference row 0,
    /// in row order. Rows are unit length, so the dot product is the cosine.
    fn cosine_to_reference(&self) -> Vec<f64>;
}

impl CosineScorer for TfIdfMatrix {
    fn cosine_to_reference(&self) -> Vec<f64> {
        let reference = match self.row(0) {
            Some(r) => r,
            None => return vec![],
        };
        self.rows()
            .iter()
            .skip(1)
            .map(|row| {
                let score = reference.vec_dot(row);
                if score.is_finite() {
                    score.clamp(0.0, 1.0)
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_to_reference() {
        // reference "a b"; candidates "a c", "a b", "d"
        let docs = vec![vec![0, 1], vec![0, 2], vec![0, 1], vec![3]];
        let m = TfIdfMatrix::fit_transform(&docs);
        let scores = m.cosine_to_reference();
        assert_eq!(scores.len(), 3);
        assert!(scores[0] > 0.0 && scores[0] < 1.0);
        assert!((scores[1] - 1.0).abs() <= 1e-12);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_two_document_score() {
        let docs = vec![vec![0, 1], vec![0, 2]];
        let scores = TfIdfMatrix::fit_transform(&docs).cosine_to_reference();
        assert!((scores[0] - 0.336097).abs() <= 1e-6);
    }

    #[test]
    fn test_no_candidates() {
        let only_reference = TfIdfMatrix::fit_transform(&[vec![0, 1]]);
        assert!(only_reference.cosine_to_reference().is_empty());
        assert!(TfIdfMatrix::fit_transform(&[]).cosine_to_reference().is_empty());
    }

    #[test]
    fn test_empty_reference_scores_zero() {
        let docs = vec![vec![], vec![0, 1]];
        let scores = TfIdfMatrix::fit_transform(&docs).cosine_to_reference();
        assert_eq!(scores, vec![0.0]);
    }
}
