/// Throwaway project trees for scanner and orchestrator tests
use super::unique_temp_dir;
use crate::config::CheckConfig;
use crate::editor::Editor;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestProject {
    // Held so the directory lives as long as the project
    _dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new(test_name: &str) -> Self {
        let dir = unique_temp_dir(test_name);
        // Canonical, so it compares equal to what the walker yields
        let root = fs::canonicalize(dir.path()).expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }
}

/// Config scanning `dirs` (relative to the project root) with everything
/// else left at defaults
pub fn config_for(project: &TestProject, dirs: &[&str]) -> CheckConfig {
    CheckConfig {
        root: project.root().to_path_buf(),
        directories: dirs.iter().map(|dir| project.root().join(dir)).collect(),
        ignore_files: Vec::new(),
        ignore: Vec::new(),
        extra_keywords: Vec::new(),
        editor: Editor::VsCode,
    }
}
