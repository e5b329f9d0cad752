/// Tests for report rendering (text and JSON)
use crate::check::CheckReport;
use crate::cli::{OutputFormat, OutputWriter};
use crate::editor::Editor;
use crate::record::MatchRecord;
use std::path::Path;

fn report_with_one_match() -> CheckReport {
    let lines = ["<?php\n", "\n", "  ds($x);\n", "return 1;\n"];
    let record = MatchRecord::build(
        Path::new("/proj/src/a.php"),
        Path::new("/proj"),
        &lines,
        2,
        &Editor::VsCode,
    );
    CheckReport {
        records: vec![record],
        files_scanned: 1,
        ..CheckReport::default()
    }
}

fn render(format: OutputFormat, report: &CheckReport, hyperlinks: bool) -> String {
    let mut out = Vec::new();
    OutputWriter::new(format, &mut out)
        .with_hyperlinks(hyperlinks)
        .write_report(report)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_report_lists_matches_and_summary() {
    let out = render(OutputFormat::Text, &report_with_one_match(), false);

    assert!(out.contains(" 1. src/a.php:3"), "output was:\n{}", out);
    assert!(out.contains(">  3 |   ds($x);") || out.contains("> 3 |   ds($x);"), "output was:\n{}", out);
    assert!(out.contains("1 | <?php"), "output was:\n{}", out);
    assert!(out.contains("[ERROR] Found 1 error / 1 file"), "output was:\n{}", out);
}

#[test]
fn test_text_report_hyperlinks() {
    let out = render(OutputFormat::Text, &report_with_one_match(), true);

    assert!(out.contains("\x1b]8;;vscode://file//proj/src/a.php:3\x1b\\src/a.php:3\x1b]8;;\x1b\\"));
}

#[test]
fn test_text_report_success_banner() {
    let out = render(OutputFormat::Text, &CheckReport::default(), false);

    assert!(out.contains("No ds() found."));
    assert!(out.contains("✓ SUCCESS"));
}

#[test]
fn test_short_circuited_run_only_shows_success() {
    let report = CheckReport {
        short_circuited: true,
        ..CheckReport::default()
    };
    let out = render(OutputFormat::Text, &report, false);

    assert!(!out.contains("No ds() found."));
    assert!(out.contains("✓ SUCCESS"));
}

#[test]
fn test_json_report() {
    let out = render(OutputFormat::Json, &report_with_one_match(), false);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["errors"], 1);
    assert_eq!(value["files"], 1);
    assert_eq!(value["records"][0]["line"], 3);
    assert_eq!(value["records"][0]["file"], "src/a.php");
    assert_eq!(value["records"][0]["real_path"], "file:///proj/src/a.php");
}
