//! Candidate file discovery
//!
//! Walks the configured directories with `ignore`, so `.gitignore`,
//! `.git/info/exclude` and the global git excludes are honoured, then applies
//! the explicit exclude list and the optional dirty-file filter.

use crate::error::{CheckError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{Walk, WalkBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Files that must never be scanned
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    paths: HashSet<PathBuf>,
    globs: Option<GlobSet>,
}

impl ExcludeSet {
    /// Entries with glob metacharacters become patterns, the rest exact paths.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut paths = HashSet::new();
        let mut builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for entry in entries {
            let text = entry.to_string_lossy();
            if text.contains(['*', '?', '[']) {
                builder.add(Glob::new(&text.replace('\\', "/"))?);
                has_globs = true;
            } else {
                // Excluded files that do not exist yet are kept verbatim
                let canonical = fs::canonicalize(&entry).unwrap_or(entry);
                paths.insert(canonical);
            }
        }

        let globs = if has_globs { Some(builder.build()?) } else { None };
        Ok(Self { paths, globs })
    }

    pub fn contains(&self, path: &Path) -> bool {
        if self.paths.contains(path) {
            return true;
        }
        self.globs.as_ref().is_some_and(|globs| globs.is_match(path))
    }
}

/// Lazy, single-pass iterator over candidate files in traversal order
pub struct FileWalk {
    walk: Walk,
    exclude: ExcludeSet,
    dirty: Option<HashSet<PathBuf>>,
    seen: HashSet<PathBuf>,
}

impl Iterator for FileWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry in self.walk.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = match fs::canonicalize(entry.path()) {
                Ok(path) => path,
                Err(e) => {
                    warn!("Cannot resolve {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            if let Some(dirty) = &self.dirty {
                if !dirty.contains(&path) {
                    continue;
                }
            }

            if self.exclude.contains(&path) {
                debug!("Excluded: {}", path.display());
                continue;
            }

            // Overlapping roots would otherwise yield the same file twice
            if !self.seen.insert(path.clone()) {
                continue;
            }

            return Some(path);
        }

        None
    }
}

/// Start walking `directories`.
///
/// Every root must exist and be readable; a bad root fails the whole call
/// before anything is yielded, since a partial scan would hide matches.
pub fn enumerate(
    directories: &[PathBuf],
    exclude: ExcludeSet,
    dirty: Option<HashSet<PathBuf>>,
) -> Result<FileWalk> {
    let roots = directories
        .iter()
        .map(|dir| validate_root(dir))
        .collect::<Result<Vec<_>>>()?;

    let (first, rest) = roots.split_first().ok_or(CheckError::MissingDirectories)?;

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .hidden(true) // Skip dotfiles and VCS directories
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false) // .gitignore applies outside a checkout too
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    debug!("Walking {} director(ies)", roots.len());

    Ok(FileWalk {
        walk: builder.build(),
        exclude,
        dirty,
        seen: HashSet::new(),
    })
}

fn validate_root(dir: &Path) -> Result<PathBuf> {
    let unreadable = |source| CheckError::RootUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let canonical = fs::canonicalize(dir).map_err(unreadable)?;
    // read_dir fails for files and for directories we may not list
    fs::read_dir(&canonical).map_err(unreadable)?;
    Ok(canonical)
}
