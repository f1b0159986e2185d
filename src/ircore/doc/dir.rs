use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use crate::ircore::CandidateId;
use crate::ircore::doc::Candidate;
use crate::ircore::error::FinderError;

/// Breadth-first walk over the files below a directory, entries of each
/// directory in name order.
pub struct DirIter {
    path_queue: VecDeque<PathBuf>,
}

impl DirIter {
    pub fn new(path: &Path) -> Self {
        DirIter {
            path_queue: VecDeque::from(vec![path.to_path_buf()]),
        }
    }

    fn ignore(path: &Path) -> bool {
        //by default, ignore hidden files on unix like platforms
        match path.file_name() {
            Some(filename) => filename.to_string_lossy().starts_with('.'),
            None => false,
        }
    }
}

impl Iterator for DirIter {
    type Item = PathBuf;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.path_queue.pop_front() {
            if Self::ignore(&path) {
                log::info!("ignore {}", path.display());
            } else if path.is_file() {
                return Some(path);
            } else if path.is_dir() {
                log::debug!("{}...", path.display());
                match path.read_dir() {
                    Ok(entries) => {
                        let mut children: Vec<PathBuf> = entries
                            .filter_map(|entry| entry.ok().map(|e| e.path()))
                            .collect();
                        children.sort();
                        self.path_queue.extend(children);
                    }
                    Err(e) => log::error!("{}: {}", path.display(), e),
                }
            }
        }
        None
    }
}

/// Every file below `dir` as a candidate, identifiers 1..n in walk order.
pub fn candidates_from_dir(dir: &Path) -> Result<Vec<Candidate>, FinderError> {
    let dir_string = dir.to_string_lossy().to_string();
    if !dir.is_dir() {
        return Err(FinderError::io(&dir_string,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory")));
    }
    Ok(DirIter::new(dir)
        .enumerate()
        .map(|(n, path)| Candidate::new(n as CandidateId + 1, path.to_string_lossy().to_string()))
        .collect())
}
