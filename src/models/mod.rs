//! Data models for streamed test results
//!
//! This module contains the types the host hands to the reporter and the
//! capability traits the printer reads them through.

mod host;
mod test_result;

pub use host::{RunOutcome, TestInfo, TestOutcome};
pub use test_result::{RunResult, TestCase, TestError, TestResult, TestStatus};
