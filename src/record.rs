//! Match records: one leftover call with its context and editor link

use crate::editor::Editor;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Lines of context shown before the matching line
const CONTEXT_BEFORE: usize = 2;
/// Lines of context shown after the matching line
const CONTEXT_AFTER: usize = 1;

/// One leftover debugging call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Zero-based line index within the file
    pub line_index: usize,
    /// One-based line number, as shown to the user
    pub line: usize,
    /// Absolute path of the file
    pub path: PathBuf,
    /// Path relative to the project root, or the absolute path when outside it
    pub file: String,
    /// `file://` URI of the file
    pub real_path: String,
    /// Editor deep-link to the line
    pub link: String,
    /// Two lines before, the line itself and one line after, concatenated
    pub snippet: String,
    /// One-based number of the first line in `snippet`
    pub snippet_start: usize,
}

impl MatchRecord {
    /// Build the record for `lines[line_index]`.
    ///
    /// Lines are expected to keep their terminators so the snippet reads as
    /// the file does. Context that would fall outside the file is empty.
    pub fn build<S: AsRef<str>>(
        path: &Path,
        root: &Path,
        lines: &[S],
        line_index: usize,
        editor: &Editor,
    ) -> Self {
        let first = line_index.saturating_sub(CONTEXT_BEFORE);
        let last = (line_index + CONTEXT_AFTER).min(lines.len().saturating_sub(1));

        let snippet = lines
            .get(first..=last.max(first))
            .unwrap_or_default()
            .iter()
            .fold(String::new(), |mut snippet, line| {
                snippet.push_str(line.as_ref());
                snippet
            });

        let absolute = path.to_string_lossy().into_owned();
        let line = line_index + 1;

        let file = path
            .strip_prefix(root)
            .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|_| absolute.clone());

        Self {
            line_index,
            line,
            path: path.to_path_buf(),
            file,
            real_path: format!("file://{}", absolute),
            link: editor.link(&absolute, line),
            snippet,
            snippet_start: first + 1,
        }
    }
}
