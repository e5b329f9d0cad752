/// Parallel scanning for large trees
///
/// Files are scanned independently on a Rayon pool and folded back in
/// discovery order, so the report reads the same as a sequential run.
/// Stop-on-first-match runs never come here.
use crate::error::{CheckError, Result};
use crate::scanner::{FileScan, ScanObserver, ScanOutcome, Scanner};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::debug;

pub struct ParallelScanner {
    num_threads: usize,
}

impl ParallelScanner {
    /// `0` means one thread per CPU
    pub fn new(num_threads: usize) -> Self {
        let num_threads = if num_threads == 0 { num_cpus::get() } else { num_threads };
        Self { num_threads }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn scan<I>(&self, scanner: &Scanner, files: I, observer: &mut dyn ScanObserver) -> Result<ScanOutcome>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
            .map_err(|e| CheckError::InvalidConfig(format!("Failed to build thread pool: {}", e)))?;

        let files: Vec<PathBuf> = files.into_iter().collect();
        debug!("Scanning {} files on {} threads", files.len(), self.num_threads);

        // par_iter().collect() keeps input order
        let scans: Vec<FileScan> = pool.install(|| files.par_iter().map(|path| scanner.scan_file(path)).collect());

        let mut outcome = ScanOutcome::default();
        for (path, scan) in files.iter().zip(scans) {
            // Never breaks: stop-on-first-match is sequential only
            let _ = outcome.absorb(path, scan, false, observer);
        }
        Ok(outcome)
    }
}
