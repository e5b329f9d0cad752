/// Test helper for creating unique temporary directories
///
/// Prevents parallel test conflicts by ensuring each test gets a unique temp directory
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::TempDir;

static TEMP_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a uniquely named temporary directory for parallel test execution
///
/// The prefix is not a dotfile name, so the directory walker never treats
/// the project root itself as hidden.
pub fn unique_temp_dir(test_name: &str) -> TempDir {
    let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let unique_name = format!("ds_check_test_{}_{}", test_name, counter);

    tempfile::Builder::new()
        .prefix(&unique_name)
        .tempdir()
        .expect("Failed to create unique temp directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_temp_dirs_are_different() {
        let dir1 = unique_temp_dir("test");
        let dir2 = unique_temp_dir("test");
        let dir3 = unique_temp_dir("test");

        let mut paths = HashSet::new();
        paths.insert(dir1.path().to_path_buf());
        paths.insert(dir2.path().to_path_buf());
        paths.insert(dir3.path().to_path_buf());

        assert_eq!(paths.len(), 3, "All temp dirs should be unique");
    }

    #[test]
    fn test_unique_temp_dir_names_are_not_hidden() {
        let dir = unique_temp_dir("hidden_check");
        let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.starts_with("ds_check_test_hidden_check"), "unexpected name: {}", name);
    }
}
