//! Recorded run replay
//!
//! Drives a [`Reporter`] from an event log captured from a host runner.
//! Logs may be a JSON array, a YAML sequence, or JSON Lines.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ReporterError, Result};
use crate::models::{RunResult, TestCase, TestResult};
use crate::output::{Reporter, RunCounters};

/// One host lifecycle call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    RunStart,
    TestComplete { test: TestCase, result: TestResult },
    RunEnd { result: RunResult },
}

/// Event log encodings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventFormat {
    Json,
    JsonLines,
    Yaml,
}

impl EventFormat {
    /// Pick the format from a file extension, defaulting to JSON Lines
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("json") => EventFormat::Json,
            Some("yaml" | "yml") => EventFormat::Yaml,
            _ => EventFormat::JsonLines,
        }
    }
}

/// Counts of what a replay fed to the reporter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub tests: usize,
}

/// Load and validate an event log from disk
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<ReplayEvent>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let format = EventFormat::from_path(path);

    debug!("Loading {:?} event log from {}", format, path.display());

    parse_events(&content, format)
}

/// Parse and validate an event log
pub fn parse_events(content: &str, format: EventFormat) -> Result<Vec<ReplayEvent>> {
    let events: Vec<ReplayEvent> = match format {
        EventFormat::Json => serde_json::from_str(content)?,
        EventFormat::Yaml => serde_yaml::from_str(content)?,
        EventFormat::JsonLines => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line)
                    .map_err(|source| ReporterError::JsonLine { line: i + 1, source })
            })
            .collect::<Result<_>>()?,
    };

    for (i, event) in events.iter().enumerate() {
        if let ReplayEvent::TestComplete { test, .. } = event {
            if test.title_path.is_empty() {
                return Err(ReporterError::EmptyTitlePath(i + 1));
            }
        }
    }

    Ok(events)
}

/// Feed every event to the reporter, in order
pub fn replay(events: &[ReplayEvent], reporter: &mut dyn Reporter) -> ReplayStats {
    let mut stats = ReplayStats::default();

    for event in events {
        match event {
            ReplayEvent::RunStart => reporter.on_run_start(),
            ReplayEvent::TestComplete { test, result } => {
                reporter.on_test_complete(test, result);
                stats.tests += 1;
            }
            ReplayEvent::RunEnd { result } => reporter.on_run_end(result),
        }
        stats.events += 1;
    }

    info!("Replayed {} events ({} tests)", stats.events, stats.tests);

    stats
}

/// Process exit status for a finished run: 1 when any test failed
pub fn exit_status(counters: &RunCounters) -> u8 {
    if counters.has_failures() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RunOutcome, TestInfo, TestOutcome, TestStatus};
    use crate::output::ResultPrinter;
    use std::io::Write;

    const JSON_LINES: &str = r#"{"event":"run_start"}
{"event":"test_complete","test":{"title_path":["Suite","works"]},"result":{"status":"passed","duration_ms":5}}

{"event":"test_complete","test":{"title_path":["Suite","breaks"]},"result":{"status":"failed","duration_ms":2,"errors":[{"message":"nope"}]}}
{"event":"run_end","result":{"duration_ms":9}}
"#;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Reporter for Recorder {
        fn on_run_start(&mut self) {
            self.calls.push("start".to_string());
        }

        fn on_test_complete(&mut self, test: &dyn TestInfo, result: &dyn TestOutcome) {
            self.calls
                .push(format!("{} {}", test.title_path().join("/"), result.status()));
        }

        fn on_run_end(&mut self, result: &dyn RunOutcome) {
            self.calls.push(format!("end {}", result.duration_ms()));
        }

        fn prints_to_stdio(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(EventFormat::from_path("run.json"), EventFormat::Json);
        assert_eq!(EventFormat::from_path("run.yml"), EventFormat::Yaml);
        assert_eq!(EventFormat::from_path("run.yaml"), EventFormat::Yaml);
        assert_eq!(EventFormat::from_path("run.jsonl"), EventFormat::JsonLines);
        assert_eq!(EventFormat::from_path("run"), EventFormat::JsonLines);
    }

    #[test]
    fn test_parse_json_lines() {
        let events = parse_events(JSON_LINES, EventFormat::JsonLines).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], ReplayEvent::RunStart);
        assert_eq!(
            events[3],
            ReplayEvent::RunEnd {
                result: RunResult::new(9)
            }
        );
    }

    #[test]
    fn test_json_lines_error_reports_line() {
        let content = "{\"event\":\"run_start\"}\n{\"event\":\"bogus\"}\n";
        let err = parse_events(content, EventFormat::JsonLines).unwrap_err();
        assert!(matches!(err, ReporterError::JsonLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_yaml() {
        let content = r#"
- event: run_start
- event: test_complete
  test:
    title_path: [Parser, handles empty input]
  result:
    status: timed-out
    duration_ms: 3000
- event: run_end
  result:
    duration_ms: 3001
"#;
        let events = parse_events(content, EventFormat::Yaml).unwrap();
        assert_eq!(events.len(), 3);
        match &events[1] {
            ReplayEvent::TestComplete { test, result } => {
                assert_eq!(test.title(), "handles empty input");
                assert_eq!(result.status, TestStatus::TimedOut);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_empty_title_path_rejected() {
        let content = r#"[{"event":"run_start"},{"event":"test_complete","test":{"title_path":[]},"result":{"status":"passed"}}]"#;
        let err = parse_events(content, EventFormat::Json).unwrap_err();
        assert!(matches!(err, ReporterError::EmptyTitlePath(2)));
    }

    #[test]
    fn test_replay_dispatches_in_order() {
        let events = parse_events(JSON_LINES, EventFormat::JsonLines).unwrap();
        let mut recorder = Recorder::default();
        let stats = replay(&events, &mut recorder);

        assert_eq!(stats, ReplayStats { events: 4, tests: 2 });
        assert_eq!(
            recorder.calls,
            vec!["start", "Suite/works passed", "Suite/breaks failed", "end 9"]
        );
    }

    #[test]
    fn test_load_and_replay_through_printer() {
        let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        file.write_all(JSON_LINES.as_bytes()).unwrap();

        let events = load_events(file.path()).unwrap();
        let mut printer = ResultPrinter::with_writer(Vec::new());
        replay(&events, &mut printer);

        assert_eq!(printer.counters().passed, 1);
        assert_eq!(printer.counters().failed, 1);

        let out = String::from_utf8(printer.into_writer()).unwrap();
        assert!(out.contains("Suite\n"));
        assert!(out.contains("works"));
        assert!(out.contains("1) Suite breaks:"));
        assert!(out.contains("nope"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_events("/nonexistent/run.jsonl").unwrap_err();
        assert!(matches!(err, ReporterError::Io(_)));
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&RunCounters::default()), 0);

        let clean = RunCounters {
            passed: 3,
            failed: 0,
            skipped: 2,
        };
        assert_eq!(exit_status(&clean), 0);

        let failing = RunCounters {
            failed: 1,
            ..clean
        };
        assert_eq!(exit_status(&failing), 1);
    }

    #[test]
    fn test_exit_status_after_replay() {
        let events = parse_events(JSON_LINES, EventFormat::JsonLines).unwrap();
        let mut printer = ResultPrinter::with_writer(Vec::new());
        replay(&events, &mut printer);
        assert_eq!(exit_status(&printer.counters()), 1);
    }
}
