/// Tests for ProgressReporter counting
use crate::cli::ProgressReporter;
use crate::editor::Editor;
use crate::record::MatchRecord;
use crate::scanner::ScanObserver;
use std::path::Path;

#[test]
fn test_progress_reporter_counts_without_output() {
    let mut reporter = ProgressReporter::new(false);
    let record = MatchRecord::build(Path::new("/p/a.php"), Path::new("/p"), &["  ds();"], 0, &Editor::VsCode);

    for _ in 0..10 {
        reporter.on_file_scanned(Path::new("/p/a.php"), 0);
    }
    reporter.on_file_skipped(Path::new("/p/b.bin"));
    reporter.on_match(&record);

    assert_eq!(reporter.scanned(), 10);
    assert_eq!(reporter.matches(), 1);

    reporter.complete();
}
