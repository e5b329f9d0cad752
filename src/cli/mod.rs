/// Display-side helpers for the ds-check binary
///
/// Nothing in the scanning core depends on these modules.
///
/// Modules:
/// - output: Renders a report as text or JSON
/// - parallel: Optional Rayon-backed file scanning
/// - progress: Progress reporting on stderr
pub mod output;
pub mod parallel;
pub mod progress;

pub use output::{OutputFormat, OutputWriter};
pub use parallel::ParallelScanner;
pub use progress::ProgressReporter;
