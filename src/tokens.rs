//! Search and ignore token building
//!
//! Every debugging keyword (`ds`, `dsq`, ...) is expanded into the call-site
//! spellings people actually leave behind: bare, commented out, called as a
//! method, annotated. Ignore tokens are used as-is.

use std::collections::HashSet;

/// Keywords that are always searched for, before any user extras.
pub const DEFAULT_KEYWORDS: &[&str] = &["ds", "dsq", "dsd", "ds1", "ds2", "ds3", "ds4", "ds5"];

/// Ordered, deduplicated list of search tokens for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTokens {
    tokens: Vec<String>,
}

impl SearchTokens {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split a comma separated list, trimming entries and dropping empty ones
pub fn split_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The seven surface forms of a single keyword
fn variants(keyword: &str) -> [String; 7] {
    [
        format!(" {keyword}"),
        keyword.to_string(),
        format!("//{keyword}"),
        format!("->{keyword}"),
        format!("{keyword}("),
        format!("@{keyword}"),
        format!(" @{keyword}"),
    ]
}

/// Build the search tokens from the default keywords plus a CSV of extras.
///
/// Keywords keep first-seen order so results are reproducible; duplicate
/// keywords and duplicate tokens are dropped.
pub fn build_search_tokens<S: AsRef<str>>(default_keywords: &[S], extra_csv: &str) -> SearchTokens {
    let extras = split_csv(extra_csv);

    let mut seen_keywords = HashSet::new();
    let mut seen_tokens = HashSet::new();
    let mut tokens = Vec::new();

    let keywords = default_keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .chain(extras.iter().map(String::as_str));

    for keyword in keywords {
        if keyword.is_empty() || !seen_keywords.insert(keyword.to_string()) {
            continue;
        }

        for token in variants(keyword) {
            if seen_tokens.insert(token.clone()) {
                tokens.push(token);
            }
        }
    }

    SearchTokens { tokens }
}

/// Build the ignore tokens from a CSV. No expansion is applied.
pub fn build_ignore_tokens(csv: &str) -> Vec<String> {
    split_csv(csv)
}
