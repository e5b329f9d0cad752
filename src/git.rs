//! Dirty file lookup through `git status`

use crate::error::{CheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Source of the files considered dirty for `--dirty` runs
pub trait DirtyFileProvider {
    /// Canonical paths of modified, added or untracked files
    fn dirty_files(&self) -> Result<Vec<PathBuf>>;
}

/// Asks git for the working tree status of `root`
#[derive(Debug, Clone)]
pub struct GitStatus {
    root: PathBuf,
}

impl GitStatus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CheckError::Git(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(CheckError::Git(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| CheckError::Git(format!("non UTF-8 git output: {}", e)))
    }
}

impl DirtyFileProvider for GitStatus {
    fn dirty_files(&self) -> Result<Vec<PathBuf>> {
        // Porcelain paths are relative to the repository top level
        let toplevel = PathBuf::from(self.git(&["rev-parse", "--show-toplevel"])?.trim());
        let status = self.git(&["status", "--porcelain", "-z", "--untracked-files=all"])?;

        let files = resolve_paths(&toplevel, parse_porcelain(&status));
        debug!("git reports {} dirty file(s)", files.len());
        Ok(files)
    }
}

/// A fixed list, for callers that already know the dirty files
#[derive(Debug, Clone, Default)]
pub struct StaticDirtyFiles(pub Vec<PathBuf>);

impl DirtyFileProvider for StaticDirtyFiles {
    fn dirty_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

/// Extract the paths from `git status --porcelain -z` output.
///
/// Entries are NUL-terminated and paths are never quoted, so names with
/// spaces or non-ASCII characters come through verbatim. Renames and copies
/// (`R  new\0old`) report the new path. Deleted entries are dropped since
/// there is nothing left to scan.
pub fn parse_porcelain(status: &str) -> Vec<String> {
    let mut entries = status.split('\0');
    let mut paths = Vec::new();

    while let Some(entry) = entries.next() {
        let (Some(code), Some(path)) = (entry.get(..2), entry.get(3..)) else {
            continue;
        };
        if path.is_empty() {
            continue;
        }
        // The source path of a rename or copy follows as its own field
        if code.contains(['R', 'C']) {
            entries.next();
        }
        if code.contains('D') {
            continue;
        }
        paths.push(path.to_string());
    }

    paths
}

fn resolve_paths(toplevel: &Path, paths: Vec<String>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter_map(|rel| {
            let full = toplevel.join(&rel);
            match fs::canonicalize(&full) {
                Ok(path) if path.is_file() => Some(path),
                Ok(_) => None,
                Err(e) => {
                    warn!("Ignoring dirty path {}: {}", full.display(), e);
                    None
                }
            }
        })
        .collect()
}
