//! Run orchestration
//!
//! Builds the tokens, resolves the dirty set, walks the directories, scans
//! the files and hands back a [`CheckReport`]. One `Checker` per run.

use crate::cli::parallel::ParallelScanner;
use crate::config::CheckConfig;
use crate::discovery::{self, ExcludeSet};
use crate::error::Result;
use crate::git::DirtyFileProvider;
use crate::record::MatchRecord;
use crate::scanner::{LineMatcher, ScanObserver, ScanOutcome, Scanner};
use crate::tokens::{DEFAULT_KEYWORDS, build_search_tokens};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Per-invocation switches coming from the command line
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Only scan files git reports as dirty
    pub dirty_only: bool,
    /// Stop the whole run at the first match
    pub stop_on_first_match: bool,
    /// Scan files on this many threads; `None` or `Some(1)` scans sequentially
    pub threads: Option<usize>,
}

/// Everything a run found
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub records: Vec<MatchRecord>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    /// Dirty mode found nothing dirty, so nothing was scanned
    pub short_circuited: bool,
    pub stopped_early: bool,
}

impl CheckReport {
    fn from_outcome(outcome: ScanOutcome) -> Self {
        Self {
            records: outcome.records,
            files_scanned: outcome.files_scanned,
            files_skipped: outcome.files_skipped,
            short_circuited: false,
            stopped_early: outcome.stopped_early,
        }
    }

    pub fn error_count(&self) -> usize {
        self.records.len()
    }

    /// Distinct files with at least one match
    pub fn file_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.path.as_path())
            .collect::<HashSet<&Path>>()
            .len()
    }

    pub fn is_success(&self) -> bool {
        self.records.is_empty()
    }

    /// `Found 3 errors / 2 files`
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        let files = self.file_count();
        format!(
            "Found {} {} / {} {}",
            errors,
            if errors == 1 { "error" } else { "errors" },
            files,
            if files == 1 { "file" } else { "files" }
        )
    }
}

pub struct Checker<'a> {
    config: &'a CheckConfig,
}

impl<'a> Checker<'a> {
    pub fn new(config: &'a CheckConfig) -> Self {
        Self { config }
    }

    /// Build the scanner for this configuration
    pub fn scanner(&self, stop_on_first_match: bool) -> Scanner {
        let search = build_search_tokens(DEFAULT_KEYWORDS, &self.config.extra_keywords.join(","));
        debug!("{} search tokens, {} ignore tokens", search.len(), self.config.ignore.len());

        Scanner::new(
            LineMatcher::new(&search, &self.config.ignore),
            self.config.root.clone(),
            self.config.editor.clone(),
            stop_on_first_match,
        )
    }

    pub fn run(
        &self,
        options: &CheckOptions,
        dirty: &dyn DirtyFileProvider,
        observer: &mut dyn ScanObserver,
    ) -> Result<CheckReport> {
        let dirty_filter = if options.dirty_only {
            let files = dirty.dirty_files()?;
            if files.is_empty() {
                info!("No dirty files, nothing to check");
                return Ok(CheckReport {
                    short_circuited: true,
                    ..CheckReport::default()
                });
            }
            Some(
                files
                    .into_iter()
                    .map(|path| fs::canonicalize(&path).unwrap_or(path))
                    .collect::<HashSet<_>>(),
            )
        } else {
            None
        };

        let exclude = ExcludeSet::new(self.config.ignore_files.iter().cloned())?;
        let files = discovery::enumerate(&self.config.directories, exclude, dirty_filter)?;
        let scanner = self.scanner(options.stop_on_first_match);

        let outcome = match options.threads {
            Some(threads) if threads != 1 && !options.stop_on_first_match => {
                let parallel = ParallelScanner::new(threads);
                info!("Scanning on {} thread(s)", parallel.num_threads());
                parallel.scan(&scanner, files, observer)?
            }
            _ => scanner.scan_files(files, observer),
        };

        let report = CheckReport::from_outcome(outcome);
        info!(
            "Scanned {} file(s), skipped {}, {} match(es)",
            report.files_scanned,
            report.files_skipped,
            report.error_count()
        );
        Ok(report)
    }
}
