// Tests for match record construction (context snippet, links, paths)

use crate::editor::Editor;
use crate::record::MatchRecord;
use std::path::Path;

const LINES: [&str; 6] = ["l1\n", "l2\n", "l3\n", "l4\n", "l5\n", "l6"];

fn build(line_index: usize) -> MatchRecord {
    MatchRecord::build(
        Path::new("/proj/src/a.php"),
        Path::new("/proj"),
        &LINES,
        line_index,
        &Editor::VsCode,
    )
}

#[test]
fn test_snippet_has_two_lines_before_and_one_after() {
    let record = build(3);

    assert_eq!(record.snippet, "l2\nl3\nl4\nl5\n");
    assert_eq!(record.snippet_start, 2);
}

#[test]
fn test_snippet_on_first_line_has_no_prefix() {
    let record = build(0);

    assert_eq!(record.snippet, "l1\nl2\n");
    assert_eq!(record.snippet_start, 1);
    assert_eq!(record.line, 1);
    assert_eq!(record.line_index, 0);
}

#[test]
fn test_snippet_on_second_line_has_one_line_before() {
    assert_eq!(build(1).snippet, "l1\nl2\nl3\n");
}

#[test]
fn test_snippet_on_last_line_has_no_suffix() {
    let record = build(5);

    assert_eq!(record.snippet, "l4\nl5\nl6");
    assert_eq!(record.line, 6);
}

#[test]
fn test_single_line_file() {
    let record = MatchRecord::build(
        Path::new("/proj/a.php"),
        Path::new("/proj"),
        &["  ds($x);"],
        0,
        &Editor::VsCode,
    );

    assert_eq!(record.snippet, "  ds($x);");
}

#[test]
fn test_paths_and_link() {
    let record = build(2);

    assert_eq!(record.path, Path::new("/proj/src/a.php"));
    assert_eq!(record.file, "src/a.php");
    assert_eq!(record.real_path, "file:///proj/src/a.php");
    assert_eq!(record.link, "vscode://file//proj/src/a.php:3");
}

#[test]
fn test_link_uses_the_configured_editor() {
    let record = MatchRecord::build(
        Path::new("/proj/a.php"),
        Path::new("/proj"),
        &LINES,
        4,
        &Editor::PhpStorm,
    );

    assert_eq!(record.link, "phpstorm://open?file=/proj/a.php&line=5");
}

#[test]
fn test_file_outside_root_keeps_absolute_path() {
    let record = MatchRecord::build(
        Path::new("/elsewhere/a.php"),
        Path::new("/proj"),
        &LINES,
        0,
        &Editor::VsCode,
    );

    assert_eq!(record.file, "/elsewhere/a.php");
}
