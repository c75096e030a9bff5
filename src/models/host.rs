//! Host capability traits
//!
//! The printer only depends on what it reads from the host's test objects.

use super::test_result::{TestError, TestStatus};

/// Read access to a test's identity
pub trait TestInfo {
    /// Names from the root suite to the test itself, never empty
    fn title_path(&self) -> &[String];
}

/// Read access to a completed test's outcome
pub trait TestOutcome {
    fn status(&self) -> TestStatus;

    fn duration_ms(&self) -> u64;

    fn errors(&self) -> &[TestError];
}

/// Read access to the finished run
pub trait RunOutcome {
    fn duration_ms(&self) -> u64;
}
