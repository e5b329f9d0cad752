// src/config/mod.rs
//! ds-check configuration
//!
//! Settings come from an optional `ds-check.toml` in the project root and
//! from `DS_*` environment variables, which win over the file. The result is
//! a plain [`CheckConfig`] built once at startup and handed to everything
//! else; nothing below `main` reads the process environment.

use crate::editor::Editor;
use crate::error::{CheckError, Result};
use crate::tokens::split_csv;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "ds-check.toml";

pub const ENV_CHECK_IN_DIR: &str = "DS_CHECK_IN_DIR";
pub const ENV_IGNORE_FILES: &str = "DS_CHECK_IGNORE_FILES";
pub const ENV_IGNORE: &str = "DS_CHECK_IGNORE";
pub const ENV_CHECK_IN_FOR: &str = "DS_CHECK_IN_FOR";
pub const ENV_EDITOR: &str = "DS_PREFERRED_IDE";
pub const ENV_EDITOR_TEMPLATE: &str = "DS_CUSTOM_EDITOR";

/// A list written either as a TOML array or as a comma separated string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CsvList {
    Text(String),
    List(Vec<String>),
}

impl CsvList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            CsvList::Text(text) => split_csv(&text),
            CsvList::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

/// Contents of `ds-check.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directories to search, relative to the project root
    pub check_in_dir: Option<CsvList>,

    /// Files never scanned, relative to the project root (globs allowed)
    pub ignore_files: Option<CsvList>,

    /// Lines containing any of these are skipped
    pub ignore: Option<CsvList>,

    /// Keywords searched on top of the defaults
    pub check_in_for: Option<CsvList>,

    pub editor: Option<String>,

    pub editor_template: Option<String>,
}

impl FileConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Parse `path` if it exists
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("No configuration file at {}", path.display());
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Project base path; everything else is relative to it
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub ignore_files: Vec<PathBuf>,
    pub ignore: Vec<String>,
    pub extra_keywords: Vec<String>,
    pub editor: Editor,
}

impl CheckConfig {
    /// Merge the file settings with environment overrides.
    ///
    /// `env` is a snapshot of the variables, usually `std::env::vars()`
    /// collected by the binary. Empty variables count as unset.
    pub fn resolve(root: &Path, file: Option<FileConfig>, env: &HashMap<String, String>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let env_list = |key: &str| {
            env.get(key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| CsvList::Text(value.clone()))
        };
        let env_text = |key: &str| {
            env.get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let root = fs::canonicalize(root).map_err(|source| CheckError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let directories: Vec<PathBuf> = env_list(ENV_CHECK_IN_DIR)
            .or(file.check_in_dir)
            .map(CsvList::into_vec)
            .unwrap_or_default()
            .iter()
            .map(|dir| under_root(&root, dir))
            .collect();

        if directories.is_empty() {
            return Err(CheckError::MissingDirectories);
        }

        let ignore_files = env_list(ENV_IGNORE_FILES)
            .or(file.ignore_files)
            .map(CsvList::into_vec)
            .unwrap_or_default()
            .iter()
            .map(|entry| under_root(&root, entry))
            .collect();

        let ignore = env_list(ENV_IGNORE)
            .or(file.ignore)
            .map(CsvList::into_vec)
            .unwrap_or_default();

        let extra_keywords = env_list(ENV_CHECK_IN_FOR)
            .or(file.check_in_for)
            .map(CsvList::into_vec)
            .unwrap_or_default();

        let editor_template = env_text(ENV_EDITOR_TEMPLATE).or(file.editor_template);
        let editor = match env_text(ENV_EDITOR).or(file.editor) {
            Some(id) => Editor::resolve(&id, editor_template.as_deref())?,
            None => Editor::default(),
        };

        Ok(Self {
            root,
            directories,
            ignore_files,
            ignore,
            extra_keywords,
            editor,
        })
    }
}

/// Configured paths are always taken relative to the root, with or
/// without a leading slash.
fn under_root(root: &Path, entry: &str) -> PathBuf {
    root.join(entry.trim().trim_start_matches(['/', '\\']))
}
