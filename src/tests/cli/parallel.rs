/// Tests for the Rayon-backed scanner
use crate::cli::ParallelScanner;
use crate::editor::Editor;
use crate::scanner::{LineMatcher, Scanner};
use crate::tests::helpers::{NoopObserver, TestProject};
use crate::tokens::{DEFAULT_KEYWORDS, build_search_tokens};

#[test]
fn test_zero_threads_means_one_per_cpu() {
    assert_eq!(ParallelScanner::new(0).num_threads(), num_cpus::get());
    assert_eq!(ParallelScanner::new(3).num_threads(), 3);
}

#[test]
fn test_results_keep_input_order_and_skip_unreadable_files() {
    let project = TestProject::new("parallel_order");
    let mut files = Vec::new();
    for i in 0..12 {
        files.push(project.write(&format!("f{}.php", i), &format!("  ds({});\n", i)));
    }
    files.insert(5, project.root().join("gone.php"));

    let scanner = Scanner::new(
        LineMatcher::new(&build_search_tokens(DEFAULT_KEYWORDS, ""), &[]),
        project.root().to_path_buf(),
        Editor::VsCode,
        false,
    );

    let outcome = ParallelScanner::new(4)
        .scan(&scanner, files.clone(), &mut NoopObserver)
        .unwrap();

    assert_eq!(outcome.files_scanned, 12);
    assert_eq!(outcome.files_skipped, 1);
    let paths: Vec<_> = outcome.records.iter().map(|r| r.path.clone()).collect();
    let expected: Vec<_> = files.into_iter().filter(|p| !p.ends_with("gone.php")).collect();
    assert_eq!(paths, expected);
}
