// ds-check's Test Infrastructure
//
// Unit tests for small pure helpers live next to their code; everything that
// needs a project tree on disk lives here.

// ============================================================================
// SHARED HELPERS - Temp project trees and configs
// ============================================================================
pub mod helpers;

pub mod record_tests; // Context snippets, links, display paths


// ============================================================================
// CLI TESTS - Output, parallel scanning, progress
// ============================================================================
pub mod cli {
    pub mod output;
    pub mod parallel;
    pub mod progress;
}
