pub mod observer;
pub mod project;
pub mod tempdir;

// Re-export the helpers for easy access
pub use observer::NoopObserver;
pub use project::{TestProject, config_for};
pub use tempdir::unique_temp_dir;
