//! Test result models
//!
//! Defines the test identity, outcome and run result types handed over by the host.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::host::{RunOutcome, TestInfo, TestOutcome};

/// Test execution status as reported by the host runner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    TimedOut,
    Interrupted,
}

impl TestStatus {
    /// Statuses rendered through the failure path
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            TestStatus::Failed | TestStatus::TimedOut | TestStatus::Interrupted
        )
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "passed"),
            TestStatus::Failed => write!(f, "failed"),
            TestStatus::Skipped => write!(f, "skipped"),
            TestStatus::TimedOut => write!(f, "timed-out"),
            TestStatus::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// A single error attached to a test outcome
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
}

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Identity of a test: names from the outermost suite down to the test title
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub title_path: Vec<String>,
}

impl TestCase {
    pub fn new<I, S>(title_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title_path: title_path.into_iter().map(Into::into).collect(),
        }
    }

    /// Test's own title (last path element)
    pub fn title(&self) -> &str {
        self.title_path.last().map(String::as_str).unwrap_or("")
    }

    /// Enclosing suite names, outermost first
    pub fn suites(&self) -> &[String] {
        let len = self.title_path.len().saturating_sub(1);
        &self.title_path[..len]
    }
}

impl TestInfo for TestCase {
    fn title_path(&self) -> &[String] {
        &self.title_path
    }
}

/// Outcome of a single test execution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub status: TestStatus,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub errors: Vec<TestError>,
}

impl TestResult {
    pub fn with_status(status: TestStatus, duration_ms: u64) -> Self {
        Self {
            status,
            duration_ms,
            errors: Vec::new(),
        }
    }

    pub fn passed(duration_ms: u64) -> Self {
        Self::with_status(TestStatus::Passed, duration_ms)
    }

    pub fn failed(duration_ms: u64, error: TestError) -> Self {
        Self::with_status(TestStatus::Failed, duration_ms).with_error(error)
    }

    pub fn skipped() -> Self {
        Self::with_status(TestStatus::Skipped, 0)
    }

    pub fn with_error(mut self, error: TestError) -> Self {
        self.errors.push(error);
        self
    }
}

impl TestOutcome for TestResult {
    fn status(&self) -> TestStatus {
        self.status
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    fn errors(&self) -> &[TestError] {
        &self.errors
    }
}

/// Result of a whole run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub duration_ms: u64,
}

impl RunResult {
    pub fn new(duration_ms: u64) -> Self {
        Self { duration_ms }
    }
}

impl RunOutcome for RunResult {
    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}
