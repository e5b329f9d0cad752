//! Line scanner
//!
//! Decides for every line of every candidate file whether it holds a
//! leftover debugging call, and turns hits into [`MatchRecord`]s.
//!
//! Rules, in order:
//! 1. A line containing any ignore token (case-insensitive) is skipped.
//! 2. Each search token is checked as `" " + token.trim_start()` by plain,
//!    case-sensitive substring containment. A hit at the very start of the
//!    line counts.
//! 3. The first token that hits produces one record; remaining tokens are
//!    not checked for that line.

use crate::editor::Editor;
use crate::record::MatchRecord;
use crate::tokens::SearchTokens;
use std::fs;
use std::io;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Bytes inspected when deciding whether a file is binary
const BINARY_SNIFF_LEN: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    Clean,
    Ignored,
    /// Index of the first matching search token
    Matched { token: usize },
}

/// Compiled token sets for one run
#[derive(Debug, Clone)]
pub struct LineMatcher {
    search: Vec<String>,
    ignore: Vec<String>,
}

impl LineMatcher {
    pub fn new(search: &SearchTokens, ignore: &[String]) -> Self {
        Self {
            search: search
                .iter()
                .map(|token| format!(" {}", token.trim_start()))
                .collect(),
            ignore: ignore
                .iter()
                .filter(|token| !token.is_empty())
                .map(|token| token.to_lowercase())
                .collect(),
        }
    }

    pub fn classify(&self, line: &str) -> LineVerdict {
        if !self.ignore.is_empty() {
            let lowered = line.to_lowercase();
            if self.ignore.iter().any(|token| lowered.contains(token.as_str())) {
                return LineVerdict::Ignored;
            }
        }

        match self.search.iter().position(|token| line.contains(token.as_str())) {
            Some(token) => LineVerdict::Matched { token },
            None => LineVerdict::Clean,
        }
    }

    /// The normalised search token at `index`, as used for matching
    pub fn token(&self, index: usize) -> Option<&str> {
        self.search.get(index).map(String::as_str)
    }
}

/// Hooks for display layers. The scanner works the same without them.
pub trait ScanObserver {
    fn on_file_scanned(&mut self, _path: &Path, _matches: usize) {}

    fn on_file_skipped(&mut self, _path: &Path) {}

    fn on_match(&mut self, _record: &MatchRecord) {}
}

/// What happened to a single file
#[derive(Debug)]
pub enum FileScan {
    Scanned(Vec<MatchRecord>),
    Binary,
    Unreadable(io::Error),
}

/// Records and counters collected over a whole file set
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<MatchRecord>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    /// The run stopped at the first match
    pub stopped_early: bool,
}

impl ScanOutcome {
    /// Fold one file's result in. Breaks when the run must stop here.
    pub fn absorb(
        &mut self,
        path: &Path,
        scan: FileScan,
        stop_on_first_match: bool,
        observer: &mut dyn ScanObserver,
    ) -> ControlFlow<()> {
        match scan {
            FileScan::Scanned(records) => {
                self.files_scanned += 1;
                observer.on_file_scanned(path, records.len());
                for record in &records {
                    observer.on_match(record);
                }
                let found = !records.is_empty();
                self.records.extend(records);

                if found && stop_on_first_match {
                    self.stopped_early = true;
                    return ControlFlow::Break(());
                }
            }
            FileScan::Binary => {
                debug!("Skipping binary file: {}", path.display());
                self.files_skipped += 1;
                observer.on_file_skipped(path);
            }
            FileScan::Unreadable(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                self.files_skipped += 1;
                observer.on_file_skipped(path);
            }
        }
        ControlFlow::Continue(())
    }
}

/// Scans files line by line with a fixed [`LineMatcher`]
#[derive(Debug, Clone)]
pub struct Scanner {
    matcher: LineMatcher,
    root: PathBuf,
    editor: Editor,
    stop_on_first_match: bool,
}

impl Scanner {
    pub fn new(matcher: LineMatcher, root: PathBuf, editor: Editor, stop_on_first_match: bool) -> Self {
        Self {
            matcher,
            root,
            editor,
            stop_on_first_match,
        }
    }

    /// Scan a single file. Never writes to it.
    pub fn scan_file(&self, path: &Path) -> FileScan {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return FileScan::Unreadable(e),
        };

        if is_likely_binary(&bytes) {
            return FileScan::Binary;
        }

        let text = String::from_utf8_lossy(&bytes);
        FileScan::Scanned(self.scan_text(path, &text))
    }

    /// Scan already loaded file content
    pub fn scan_text(&self, path: &Path, text: &str) -> Vec<MatchRecord> {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        let mut records = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            match self.matcher.classify(line) {
                LineVerdict::Matched { token } => {
                    debug!(
                        "{}:{} matched {:?}",
                        path.display(),
                        index + 1,
                        self.matcher.token(token).unwrap_or_default()
                    );
                    records.push(MatchRecord::build(path, &self.root, &lines, index, &self.editor));
                    if self.stop_on_first_match {
                        break;
                    }
                }
                LineVerdict::Ignored | LineVerdict::Clean => {}
            }
        }

        records
    }

    /// Scan every file in order, stopping the whole set at the first match
    /// when configured to.
    pub fn scan_files<I>(&self, files: I, observer: &mut dyn ScanObserver) -> ScanOutcome
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut outcome = ScanOutcome::default();

        for path in files {
            let scan = self.scan_file(&path);
            if outcome
                .absorb(&path, scan, self.stop_on_first_match, observer)
                .is_break()
            {
                break;
            }
        }

        outcome
    }
}

/// A NUL byte near the start of the file marks it as binary
fn is_likely_binary(content: &[u8]) -> bool {
    content.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}
