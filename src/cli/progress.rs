/// Progress reporting for long scans
///
/// Writes throttled updates to stderr, leaving stdout clean for the report.
/// Plugged into the scanner through `ScanObserver`; the scan itself does not
/// know it exists.
use crate::record::MatchRecord;
use crate::scanner::ScanObserver;
use std::path::Path;
use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ProgressReporter {
    start_time: Instant,
    last_report: Instant,
    scanned: usize,
    skipped: usize,
    matches: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Create a reporter; a disabled one only counts
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_report: now,
            scanned: 0,
            skipped: 0,
            matches: 0,
            enabled,
        }
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    fn report(&mut self) {
        // Throttle: only report every 100ms
        let now = Instant::now();
        if now.duration_since(self.last_report) < REPORT_INTERVAL {
            return;
        }
        self.last_report = now;

        if self.enabled {
            eprint!(
                "\r⚡ Checked {} files ({} skipped), {} found",
                self.scanned, self.skipped, self.matches
            );
        }
    }

    /// Report completion
    pub fn complete(&self) {
        if !self.enabled {
            return;
        }
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.scanned as f64 / elapsed
        } else {
            0.0
        };
        eprintln!(
            "\r✅ Checked {} files in {:.2}s ({:.0} files/sec)",
            self.scanned, elapsed, rate
        );
    }
}

impl ScanObserver for ProgressReporter {
    fn on_file_scanned(&mut self, _path: &Path, _matches: usize) {
        self.scanned += 1;
        self.report();
    }

    fn on_file_skipped(&mut self, _path: &Path) {
        self.skipped += 1;
        self.report();
    }

    fn on_match(&mut self, _record: &MatchRecord) {
        self.matches += 1;
    }
}
