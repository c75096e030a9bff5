//! Spec-style result printer
//!
//! Renders streamed test results as an indented suite tree, followed by a
//! summary line and a numbered list of failure details.

use std::collections::HashSet;
use std::io::{self, Stdout, Write};

use tracing::{debug, warn};

use super::style::{paint, Style, Symbol};
use crate::models::{RunOutcome, TestError, TestInfo, TestOutcome, TestStatus};

/// Joins ancestor names into the key recorded for printed suites
pub const SUITE_PATH_SEPARATOR: &str = " > ";

/// Stack lines shown per error, after the header line
pub const STACK_EXCERPT_LINES: usize = 3;

const INDENT: &str = "  ";
const DETAIL_INDENT: &str = "     ";

/// Hook contract driven by the host test runner
pub trait Reporter {
    fn on_run_start(&mut self);

    fn on_test_complete(&mut self, test: &dyn TestInfo, result: &dyn TestOutcome);

    fn on_run_end(&mut self, result: &dyn RunOutcome);

    /// Whether the reporter writes to the console itself
    fn prints_to_stdio(&self) -> bool;
}

/// Running status counters for one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunCounters {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// A failed test kept for the details section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFailure {
    pub title_path: Vec<String>,
    pub status: TestStatus,
    pub errors: Vec<TestError>,
}

/// Printer for spec-style console output
pub struct ResultPrinter<W: Write = Stdout> {
    out: W,
    counters: RunCounters,
    failures: Vec<PendingFailure>,
    printed_suites: HashSet<String>,
}

impl ResultPrinter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ResultPrinter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ResultPrinter<W> {
    /// Create a printer writing to an arbitrary sink
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            counters: RunCounters::default(),
            failures: Vec::new(),
            printed_suites: HashSet::new(),
        }
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    pub fn failures(&self) -> &[PendingFailure] {
        &self.failures
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write report line: {}", e);
        }
    }

    /// Print every not-yet-seen ancestor suite of `path`, outermost first
    fn print_suites(&mut self, path: &[String]) {
        let suites = &path[..path.len().saturating_sub(1)];

        for depth in 0..suites.len() {
            let key = suites[..=depth].join(SUITE_PATH_SEPARATOR);
            if self.printed_suites.insert(key) {
                let line = format!("{}{}", INDENT.repeat(depth), suites[depth]);
                self.emit(&line);
            }
        }
    }

    fn summary_line(&self, duration_ms: u64) -> String {
        let mut clauses = Vec::new();

        if self.counters.passed > 0 {
            clauses.push(paint(
                Style::Green,
                format!("{} passing", self.counters.passed),
            ));
        }
        if self.counters.failed > 0 {
            clauses.push(paint(Style::Red, format!("{} failing", self.counters.failed)));
        }
        if self.counters.skipped > 0 {
            clauses.push(paint(
                Style::Yellow,
                format!("{} skipped", self.counters.skipped),
            ));
        }

        format!(
            "{INDENT}{} {}",
            clauses.join(", "),
            paint(Style::Dim, format!("({duration_ms}ms)"))
        )
    }
}

impl<W: Write> Reporter for ResultPrinter<W> {
    fn on_run_start(&mut self) {
        debug!("Run started");
        self.emit("");
    }

    fn on_test_complete(&mut self, test: &dyn TestInfo, result: &dyn TestOutcome) {
        let path = test.title_path();
        let title = path.last().map(String::as_str).unwrap_or("");
        let indent = INDENT.repeat(path.len().saturating_sub(1));
        let status = result.status();

        debug!("Test completed: {} ({})", path.join(SUITE_PATH_SEPARATOR), status);

        self.print_suites(path);

        let line = if status.is_failure() {
            self.counters.failed += 1;
            self.failures.push(PendingFailure {
                title_path: path.to_vec(),
                status,
                errors: result.errors().to_vec(),
            });
            format!(
                "{indent}{}",
                paint(Style::Red, format!("{}) {title}", self.counters.failed))
            )
        } else if status == TestStatus::Skipped {
            self.counters.skipped += 1;
            format!(
                "{indent}{}",
                paint(Style::Yellow, format!("{} {title}", Symbol::Pending))
            )
        } else {
            self.counters.passed += 1;
            format!(
                "{indent}{} {title} {}",
                paint(Style::Green, Symbol::Pass),
                paint(Style::Dim, format!("{}ms", result.duration_ms()))
            )
        };

        self.emit(&line);
    }

    fn on_run_end(&mut self, result: &dyn RunOutcome) {
        debug!(
            "Run finished: {} passed, {} failed, {} skipped",
            self.counters.passed, self.counters.failed, self.counters.skipped
        );

        self.emit("");
        let summary = self.summary_line(result.duration_ms());
        self.emit(&summary);

        if self.failures.is_empty() {
            return;
        }

        self.emit("");
        let lines: Vec<String> = self
            .failures
            .iter()
            .enumerate()
            .flat_map(|(i, failure)| failure_block(i + 1, failure))
            .collect();
        for line in lines {
            self.emit(&line);
        }
    }

    fn prints_to_stdio(&self) -> bool {
        true
    }
}

/// Lines of one numbered failure entry, trailing blank line included
fn failure_block(ordinal: usize, failure: &PendingFailure) -> Vec<String> {
    let mut lines = vec![paint(
        Style::Red,
        format!("{INDENT}{ordinal}) {}:", failure.title_path.join(" ")),
    )];

    for error in &failure.errors {
        if let Some(message) = &error.message {
            lines.push(format!("{DETAIL_INDENT}{}", paint(Style::Red, message)));
        }
        if let Some(stack) = &error.stack {
            for frame in stack_excerpt(stack) {
                lines.push(format!("{DETAIL_INDENT}{}", paint(Style::Dim, frame)));
            }
        }
    }

    lines.push(String::new());
    lines
}

/// Stack lines worth showing: the header line duplicates the message, so
/// it is dropped and the following frames are kept, trimmed
pub fn stack_excerpt(stack: &str) -> Vec<&str> {
    stack
        .lines()
        .skip(1)
        .take(STACK_EXCERPT_LINES)
        .map(str::trim)
        .collect()
}
