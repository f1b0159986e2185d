pub mod tfidf;
pub mod cosine;

use serde::Serialize;
use crate::ircore::CandidateId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub identifier: CandidateId,
    pub score: f64,
    /// 1-based position in the result, 0 until ranked.
    pub rank: usize,
    /// The candidate's text is a loader placeholder, not extracted content.
    pub degraded: bool,
}

impl ScoredCandidate {
    pub fn new(identifier: CandidateId, score: f64, degraded: bool) -> Self {
        ScoredCandidate { identifier, score, rank: 0, degraded }
    }
}

/// Candidates ordered by descending score, zero scores left out.
///
/// Scores come from one corpus-relative vectorization and are only
/// comparable with other entries of the same result, never across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    entries: Vec<ScoredCandidate>,
    candidate_count: usize,
    reference_degraded: bool,
}

impl RankingResult {
    pub fn empty(reference_degraded: bool) -> Self {
        RankingResult { entries: vec![], candidate_count: 0, reference_degraded }
    }

    /// `scored` must be in input order: equal scores keep that order.
    pub fn from_scores(scored: Vec<ScoredCandidate>, reference_degraded: bool) -> Self {
        let candidate_count = scored.len();
        let mut entries = scored;
        // sort_by is stable
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.retain(|c| c.score != 0.0);
        for (i, c) in entries.iter_mut().enumerate() {
            c.rank = i + 1;
        }
        RankingResult { entries, candidate_count, reference_degraded }
    }

    pub fn entries(&self) -> &[ScoredCandidate] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of candidates scored, including the ones filtered out.
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    pub fn reference_degraded(&self) -> bool {
        self.reference_degraded
    }
}
