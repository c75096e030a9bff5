//! Spec-style console reporter for streamed test results
//!
//! A host test runner drives a [`Reporter`] through four hooks: run start,
//! each completed test, run end, and a query for whether the reporter owns
//! the console. [`ResultPrinter`] answers them by printing an indented suite
//! tree, a colored summary, and numbered failure details to stdout.
//!
//! ## Usage
//!
//! ```no_run
//! use spec_reporter::{Reporter, ResultPrinter, RunResult, TestCase, TestResult};
//!
//! let mut printer = ResultPrinter::new();
//! printer.on_run_start();
//! printer.on_test_complete(
//!     &TestCase::new(["Parser", "handles empty input"]),
//!     &TestResult::passed(3),
//! );
//! printer.on_run_end(&RunResult::new(3));
//! ```
//!
//! Recorded runs can be replayed with the bundled binary:
//!
//! ```bash
//! spec-reporter replay run.jsonl
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod replay;
pub mod utils;

pub use error::{ReporterError, Result};
pub use models::{
    RunOutcome, RunResult, TestCase, TestError, TestInfo, TestOutcome, TestResult, TestStatus,
};
pub use output::{PendingFailure, Reporter, ResultPrinter, RunCounters};
