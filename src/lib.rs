// ds-check - Leftover Debug Call Checker Library
//!
//! Finds `ds()`-style debugging calls left in source trees before they get
//! committed. Files are discovered with gitignore awareness, scanned line by
//! line against expanded keyword tokens, and every hit is reported with an
//! editor deep-link and a few lines of context.

pub mod check;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod editor;
pub mod error;
pub mod git;
pub mod record;
pub mod scanner;
pub mod tokens;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use check::{CheckOptions, CheckReport, Checker};
pub use config::{CheckConfig, FileConfig};
pub use editor::Editor;
pub use error::{CheckError, Result};
pub use record::MatchRecord;
pub use scanner::{LineMatcher, LineVerdict, ScanObserver, Scanner};
pub use tokens::{DEFAULT_KEYWORDS, SearchTokens, build_ignore_tokens, build_search_tokens};
