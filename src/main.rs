pub mod ircore;
use std::collections::HashMap;
use std::path::Path;
use std::process;
use clap::{Parser, Subcommand};
use ircore::CandidateId;
use ircore::doc::Candidate;
use ircore::doc::cfg::Cfg;
use ircore::doc::dir::candidates_from_dir;
use ircore::doc::loader::TextLoader;
use ircore::doc::manifest::read_manifest;
use ircore::error::FinderError;
use ircore::finder::Finder;
use ircore::ranking::RankingResult;

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Rank resumes against a job description (or job descriptions against a resume)
struct Cli {
    #[clap(short, long, value_parser)]
    /// Configuration file, defaults to .rfindcfg in the working directory
    config: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Rank candidate documents by similarity to a reference document
    Rank {
        #[clap(short, long, value_parser)]
        /// Reference document (.doc, .docx, .pdf or .txt)
        reference: String,
        #[clap(short, long, value_parser)]
        /// JSON lines file of {"id": .., "path": ..} candidates
        manifest: Option<String>,
        #[clap(short = 'd', long, value_parser)]
        /// Directory of candidate documents
        candidates_dir: Option<String>,
        #[clap(short, long, value_parser, default_value_t = 10)]
        /// Number of results to display
        top: usize,
        #[clap(long, action)]
        /// Print every ranked candidate as a JSON line
        json: bool,
    },
    /// Print the text extracted from a document
    Extract {
        #[clap(value_parser)]
        /// Document path
        path: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let cfg = Cfg::load(cli.config.as_deref());

    match &cli.command {
        Commands::Rank { reference, manifest, candidates_dir, top, json } => {
            let candidates = match load_candidates(manifest.as_deref(), candidates_dir.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(2);
                }
            };
            if let Err(e) = command_rank(&cfg, reference, &candidates, *top, *json) {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        Commands::Extract { path } => {
            command_extract(&cfg, path);
        }
    }
}

fn load_candidates(manifest: Option<&str>, candidates_dir: Option<&str>) -> Result<Vec<Candidate>, String> {
    match (manifest, candidates_dir) {
        (Some(m), None) => read_manifest(Path::new(m)).map_err(|e| e.to_string()),
        (None, Some(d)) => candidates_from_dir(Path::new(d)).map_err(|e| e.to_string()),
        _ => Err(String::from("exactly one of --manifest or --candidates-dir is required")),
    }
}

fn command_rank(cfg: &Cfg, reference: &str, candidates: &[Candidate], top: usize, json: bool)
    -> Result<(), FinderError> {
    let finder = Finder::from_cfg(cfg);
    log::info!("ranking {} candidates against {}", candidates.len(), reference);
    let result = finder.rank(reference, candidates)?;
    if json {
        print_json(&result);
    } else {
        let paths: HashMap<CandidateId, &str> = candidates.iter()
            .map(|c| (c.identifier, c.path.as_str()))
            .collect();
        print_table(&result, &paths, top);
    }
    Ok(())
}

fn print_json(result: &RankingResult) {
    for candidate in result.iter() {
        match serde_json::to_string(candidate) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("{}: {}", candidate.identifier, e),
        }
    }
}

fn print_table(result: &RankingResult, paths: &HashMap<CandidateId, &str>, top: usize) {
    if result.reference_degraded() {
        eprintln!("warning: the reference document could not be read, scores are not meaningful");
    }
    let result_len = result.len();
    println!("{} results", result_len);
    if result_len == 0 {
        return;
    }
    let display = result_len.min(top);
    if display < result_len {
        println!("top {}:", display);
    }
    for candidate in result.iter().take(display) {
        let path = paths.get(&candidate.identifier).copied().unwrap_or("N/A");
        let marker = if candidate.degraded { " (unreadable)" } else { "" };
        println!("{}: {} {} {:.2}%{}", candidate.rank, candidate.identifier, path,
            candidate.score * 100.0, marker);
    }
}

fn command_extract(cfg: &Cfg, path: &str) {
    let finder = Finder::from_cfg(cfg);
    let extracted = finder.loader().load(path);
    if extracted.degraded {
        eprintln!("{}: {}", path, extracted.text);
        process::exit(1);
    }
    println!("{}", extracted.text);
}
