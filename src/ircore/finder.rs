use crate::ircore::TermId;
use crate::ircore::doc::{Candidate, DocFormat};
use crate::ircore::doc::cfg::Cfg;
use crate::ircore::doc::corpus::Corpus;
use crate::ircore::doc::loader::{FileLoader, TextLoader};
use crate::ircore::error::FinderError;
use crate::ircore::ranking::{RankingResult, ScoredCandidate};
use crate::ircore::ranking::cosine::CosineScorer;
use crate::ircore::ranking::tfidf::TfIdfMatrix;
use crate::ircore::token::analyzer::Analyzer;
use crate::ircore::token::tokenizer::Language;

/// Ranks candidate documents (resumes, job descriptions) by TF-IDF cosine
/// similarity to one reference document.
///
/// Nothing is kept between calls: every `rank` loads and vectorizes the
/// whole corpus again, so scores from two calls are not comparable.
pub struct Finder<L: TextLoader> {
    loader: L,
    language: Language,
}

impl Finder<FileLoader> {
    pub fn from_cfg(cfg: &Cfg) -> Self {
        Finder::new(FileLoader::new(cfg), cfg.get_language())
    }
}

impl<L: TextLoader> Finder<L> {
    pub fn new(loader: L, language: Language) -> Self {
        Finder { loader, language }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn rank(&self, reference_path: &str, candidates: &[Candidate]) -> Result<RankingResult, FinderError> {
        if DocFormat::from_path(reference_path).is_none() {
            return Err(FinderError::UnsupportedFormat { path: reference_path.to_string() });
        }
        let corpus = Corpus::assemble(&self.loader, reference_path, candidates);
        let reference = corpus.reference();
        let reference_degraded = reference.is_degraded();
        if reference_degraded {
            log::warn!("reference {} could not be read, ranking against: {}",
                reference_path, reference.get_text());
        }
        if corpus.candidates().is_empty() {
            return Ok(RankingResult::empty(reference_degraded));
        }

        let mut analyzer = Analyzer::new(self.language.resolve(reference.get_text()));
        let term_ids: Vec<Vec<TermId>> = corpus.documents()
            .iter()
            .map(|doc| analyzer.analyze(doc.get_text()))
            .collect();
        let matrix = TfIdfMatrix::fit_transform(&term_ids);
        let stats = matrix.stats();
        let analyzer_stats = analyzer.stats();
        log::debug!("corpus: {} documents, {} terms ({}), {:.1} tokens per document, {} degraded",
            stats.document_count, analyzer_stats.term_count, analyzer_stats.lang,
            stats.average_document_length, corpus.degraded_count());

        let scores = matrix.cosine_to_reference();
        let scored: Vec<ScoredCandidate> = corpus.candidates()
            .iter()
            .zip(scores)
            .filter_map(|(doc, score)| doc.get_identifier()
                .map(|id| ScoredCandidate::new(id, score, doc.is_degraded())))
            .collect();
        let result = RankingResult::from_scores(scored, reference_degraded);
        log::info!("{} of {} candidates match {}", result.len(), result.candidate_count(), reference_path);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::CandidateId;
    use crate::ircore::doc::loader::{Extracted, FILE_NOT_FOUND};
    use std::collections::HashMap;

    const ELECTRICIAN_JOB: &str = "Electrician job requiring OSHA certification and 5 years wiring experience";

    // in-memory documents; unknown paths behave like unreadable files
    struct MemoryLoader {
        files: HashMap<String, String>,
    }

    impl MemoryLoader {
        fn new(files: &[(&str, &str)]) -> Self {
            MemoryLoader {
                files: files.iter().map(|(p, t)| (p.to_string(), t.to_string())).collect(),
            }
        }
    }

    impl TextLoader for MemoryLoader {
        fn load(&self, path: &str) -> Extracted {
            match self.files.get(path) {
                Some(text) => Extracted::content(text.clone()),
                None => Extracted::placeholder(FILE_NOT_FOUND),
            }
        }
    }

    fn ids(result: &RankingResult) -> Vec<CandidateId> {
        result.iter().map(|c| c.identifier).collect()
    }

    fn scenario() -> (Finder<MemoryLoader>, Vec<Candidate>) {
        let loader = MemoryLoader::new(&[
            ("jobs/electrician.txt", ELECTRICIAN_JOB),
            ("resumes/dev.txt", "Software engineer building distributed systems in Rust and Go"),
            ("resumes/chef.txt", "Pastry chef specializing in laminated doughs"),
            ("resumes/sparky.docx", "Licensed electrician with OSHA 30 certification and 8 years of \
                commercial wiring experience, panel installation and conduit work"),
        ]);
        let candidates = vec![
            Candidate::new(1, "resumes/dev.txt"),
            Candidate::new(2, "resumes/sparky.docx"),
            Candidate::new(3, "resumes/gone.pdf"),
        ];
        (Finder::new(loader, Language::English), candidates)
    }

    #[test]
    fn test_electrician_ranks_first() {
        let (finder, candidates) = scenario();
        let result = finder.rank("jobs/electrician.txt", &candidates).unwrap();
        // the developer only shares "and"; the missing file shares nothing
        assert_eq!(ids(&result), vec![2, 1]);
        assert!(result.entries()[1].score < 0.1);
        let top = &result.entries()[0];
        assert_eq!(top.rank, 1);
        assert!(top.score > 0.0 && top.score <= 1.0);
        assert!(!top.degraded);
        assert_eq!(result.candidate_count(), 3);
        assert!(!result.reference_degraded());
    }

    #[test]
    fn test_rank_is_idempotent() {
        let (finder, candidates) = scenario();
        let first = finder.rank("jobs/electrician.txt", &candidates).unwrap();
        let second = finder.rank("jobs/electrician.txt", &candidates).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_identical_resumes_tie_in_input_order() {
        let resume = "Electrician, OSHA certification, residential wiring";
        let loader = MemoryLoader::new(&[
            ("job.txt", ELECTRICIAN_JOB),
            ("a.txt", resume),
            ("b.txt", resume),
            ("c.txt", "Experience in wiring"),
        ]);
        let finder = Finder::new(loader, Language::English);
        let candidates = vec![
            Candidate::new(9, "b.txt"),
            Candidate::new(4, "c.txt"),
            Candidate::new(7, "a.txt"),
        ];
        let result = finder.rank("job.txt", &candidates).unwrap();
        assert_eq!(ids(&result), vec![9, 7, 4]);
        assert_eq!(result.entries()[0].score, result.entries()[1].score);
        let ranks: Vec<usize> = result.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_no_zero_contiguous_ranks() {
        let loader = MemoryLoader::new(&[
            ("job.txt", "forklift operator warehouse night shift safety"),
            ("1.txt", "warehouse associate, forklift certified"),
            ("2.txt", "pastry chef"),
            ("3.txt", "night shift security guard, safety training"),
            ("4.txt", "forklift operator warehouse night shift safety lead"),
            ("5.txt", "warehouse"),
        ]);
        let finder = Finder::new(loader, Language::English);
        let candidates: Vec<Candidate> = (1..=5)
            .map(|i| Candidate::new(i, format!("{}.txt", i)))
            .collect();
        let result = finder.rank("job.txt", &candidates).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(ids(&result)[0], 4);
        assert!(!ids(&result).contains(&2));
        for pair in result.entries().windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for (i, c) in result.iter().enumerate() {
            assert_eq!(c.rank, i + 1);
            assert!(c.score > 0.0);
        }
    }

    #[test]
    fn test_unsupported_reference_is_rejected_before_loading() {
        let loader = |path: &str| -> Extracted { panic!("{} should not be loaded", path) };
        let finder = Finder::new(loader, Language::English);
        let candidates = vec![Candidate::new(1, "resumes/a.txt")];
        for reference in ["jobs/electrician.csv", "jobs/electrician", "", "N/A"] {
            match finder.rank(reference, &candidates) {
                Err(FinderError::UnsupportedFormat { path }) => assert_eq!(path, reference),
                _ => assert!(false, "{} accepted", reference),
            }
        }
    }

    #[test]
    fn test_reference_extension_case_insensitive() {
        let loader = MemoryLoader::new(&[("JOB.TXT", "wiring"), ("a.txt", "wiring")]);
        let finder = Finder::new(loader, Language::English);
        let result = finder.rank("JOB.TXT", &[Candidate::new(1, "a.txt")]).unwrap();
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_empty_candidates() {
        let (finder, _) = scenario();
        let result = finder.rank("jobs/electrician.txt", &[]).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.candidate_count(), 0);
    }

    #[test]
    fn test_all_zero_scores() {
        let (finder, _) = scenario();
        let result = finder.rank("jobs/electrician.txt", &[Candidate::new(1, "resumes/chef.txt")]).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.candidate_count(), 1);
    }

    #[test]
    fn test_missing_reference_still_ranks() {
        let (finder, candidates) = scenario();
        let result = finder.rank("jobs/deleted.docx", &candidates).unwrap();
        assert!(result.reference_degraded());
        // only the candidate with the same placeholder text shares vocabulary
        assert_eq!(ids(&result), vec![3]);
        assert!(result.entries()[0].degraded);
    }

    #[test]
    fn test_chinese_corpus() {
        let loader = MemoryLoader::new(&[
            ("job.txt", "招聘电工，需要安全证书和布线经验"),
            ("a.txt", "持证电工，五年布线经验"),
            ("b.txt", "厨师，擅长川菜"),
        ]);
        let finder = Finder::new(loader, Language::Auto);
        let result = finder.rank("job.txt", &[Candidate::new(1, "b.txt"), Candidate::new(2, "a.txt")]).unwrap();
        assert_eq!(ids(&result)[0], 2);
    }

    #[test]
    fn test_rank_sample_corpus() {
        use crate::ircore::doc::manifest::read_manifest;
        use std::path::Path;
        let finder = Finder::from_cfg(&Cfg::new());
        let candidates = read_manifest(Path::new("./sample_corpus/employees.jsonl")).unwrap();
        let result = finder.rank("./sample_corpus/job_descriptions/electrician.txt", &candidates).unwrap();
        assert_eq!(ids(&result)[0], 102);
        assert!(!ids(&result).contains(&104));
        assert!(result.iter().all(|c| !c.degraded));

        let result = finder.rank("./sample_corpus/job_descriptions/software_engineer.txt", &candidates).unwrap();
        assert_eq!(ids(&result)[0], 101);

        assert!(matches!(finder.rank("./sample_corpus/employees.jsonl", &candidates),
            Err(FinderError::UnsupportedFormat { .. })));
    }
}
