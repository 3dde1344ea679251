use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Lists candidate executable names for executable search.
pub trait ExecutableSource: Send + Sync {
    fn list(&self) -> anyhow::Result<Vec<String>>;
}

/// A fixed list of names.
impl ExecutableSource for Vec<String> {
    fn list(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Names of the entries in a set of binary directories, sorted and
/// de-duplicated. Directories that do not exist are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryExecutables {
    dirs: Vec<PathBuf>,
}

impl DirectoryExecutables {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }
}

impl ExecutableSource for DirectoryExecutables {
    fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut names = BTreeSet::new();
        for dir in &self.dirs {
            let entries = match std::fs::read_dir(dir) {
                Ok(e) => e,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(dir = %dir.display(), "executable directory missing");
                    continue;
                }
                Err(e) => {
                    tracing::error!(dir = %dir.display(), error = %e, "failed to list directory");
                    return Err(e.into());
                }
            };
            for entry in entries {
                let entry = entry?;
                if let Some(name) = entry.file_name().to_str() {
                    names.insert(name.to_string());
                }
            }
        }
        Ok(names.into_iter().collect())
    }
}

/// Finds user files for the local search plugin.
pub trait FileSearch: Send + Sync {
    fn search(&self, term: &str) -> anyhow::Result<Vec<String>>;
}

/// In-memory file index: paths whose file name contains the term.
impl FileSearch for Vec<PathBuf> {
    fn search(&self, term: &str) -> anyhow::Result<Vec<String>> {
        let term = term.to_lowercase();
        Ok(self
            .iter()
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().to_lowercase().contains(&term))
                    .unwrap_or(false)
            })
            .map(|p| p.display().to_string())
            .collect())
    }
}

/// Walks the given roots looking for files and folders whose name contains
/// the search term. Hidden entries are skipped.
#[derive(Debug, Clone)]
pub struct HomeFileSearch {
    roots: Vec<PathBuf>,
    max_depth: usize,
    limit: usize,
}

impl HomeFileSearch {
    pub fn new(roots: Vec<PathBuf>, max_depth: usize, limit: usize) -> Self {
        Self {
            roots,
            max_depth,
            limit,
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
}

impl FileSearch for HomeFileSearch {
    fn search(&self, term: &str) -> anyhow::Result<Vec<String>> {
        let term = term.to_lowercase();
        let mut results = Vec::new();
        for root in &self.roots {
            let walker = WalkDir::new(root)
                .min_depth(1)
                .max_depth(self.max_depth)
                .into_iter()
                .filter_entry(|e| !is_hidden(e));
            for entry in walker {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::debug!(root = %root.display(), error = %e, "skipping unreadable entry");
                        continue;
                    }
                };
                let matches = entry
                    .file_name()
                    .to_str()
                    .map(|n| n.to_lowercase().contains(&term))
                    .unwrap_or(false);
                if matches {
                    results.push(entry.path().display().to_string());
                    if results.len() >= self.limit {
                        return Ok(results);
                    }
                }
            }
        }
        Ok(results)
    }
}
