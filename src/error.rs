use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("no directories to search: set check_in_dir in ds-check.toml or DS_CHECK_IN_DIR")]
    MissingDirectories,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown editor '{0}' (expected phpstorm, atom, sublime, vs_code, vs_code_remote or custom)")]
    UnknownEditor(String),

    #[error("Invalid ignore_files pattern: {0}")]
    InvalidGlob(#[from] globset::Error),

    #[error("Cannot read directory {}: {}", path.display(), source)]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git error: {0}")]
    Git(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
