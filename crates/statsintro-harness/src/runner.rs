//! Running cases one after the other and collecting the outcomes

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::case::{Case, CaseKind};
use crate::expected::ExpectedResult;

/// Result of running one case
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    /// First value outside its tolerance
    Mismatch {
        id: &'static str,
        expected: f64,
        actual: f64,
    },
    /// The demo returned a different number of values than recorded
    ArityMismatch { expected: usize, actual: usize },
    /// The demo returned an error
    Errored(String),
    /// The demo panicked
    Panicked(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "ok"),
            Outcome::Mismatch {
                id,
                expected,
                actual,
            } => write!(f, "FAILED {id}: expected {expected}, got {actual}"),
            Outcome::ArityMismatch { expected, actual } => {
                write!(f, "FAILED expected {expected} values, got {actual}")
            }
            Outcome::Errored(msg) => write!(f, "ERROR {msg}"),
            Outcome::Panicked(msg) => write!(f, "PANIC {msg}"),
        }
    }
}

/// Outcome of one case with its name
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: &'static str,
    pub kind: &'static str,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

/// Outcomes of a run, in the order the cases ran
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub cases: Vec<CaseReport>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    /// True when every case that ran passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.outcome.is_pass())
    }

    pub fn get(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            writeln!(f, "{:<24} {:<8} {}", case.name, case.kind, case.outcome)?;
        }
        write!(
            f,
            "{} passed, {} failed, {} total",
            self.passed(),
            self.failed(),
            self.cases.len()
        )
    }
}

/// Compare returned values with the records, in order
pub fn judge(values: &[f64], expected: &[ExpectedResult]) -> Outcome {
    if values.len() != expected.len() {
        return Outcome::ArityMismatch {
            expected: expected.len(),
            actual: values.len(),
        };
    }
    for (record, &actual) in expected.iter().zip(values) {
        if let Err(m) = record.check(actual) {
            return Outcome::Mismatch {
                id: m.id,
                expected: m.expected,
                actual: m.actual,
            };
        }
    }
    Outcome::Passed
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run one case; errors and panics become outcomes
pub fn run_case(case: &Case) -> Outcome {
    let result = catch_unwind(AssertUnwindSafe(|| match &case.kind {
        CaseKind::Checked { run, expected } => match run() {
            Ok(values) => judge(&values, expected),
            Err(e) => Outcome::Errored(e.to_string()),
        },
        CaseKind::Smoke { run } => match run() {
            Ok(()) => Outcome::Passed,
            Err(e) => Outcome::Errored(e.to_string()),
        },
    }));
    result.unwrap_or_else(|payload| Outcome::Panicked(panic_message(payload)))
}

/// Sequential case runner with optional selection
#[derive(Debug, Clone, Default)]
pub struct Runner {
    filter: Option<String>,
    checked_only: bool,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run only cases whose name contains `filter`
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Skip smoke cases
    pub fn checked_only(mut self, checked_only: bool) -> Self {
        self.checked_only = checked_only;
        self
    }

    pub fn selects(&self, case: &Case) -> bool {
        if self.checked_only && !case.kind.is_checked() {
            return false;
        }
        match &self.filter {
            Some(filter) => case.name.contains(filter.as_str()),
            None => true,
        }
    }

    pub fn run(&self, cases: &[Case]) -> Report {
        let mut report = Report::default();
        for case in cases.iter().filter(|c| self.selects(c)) {
            debug!(case = case.name, kind = case.kind.label(), "running");
            let start = Instant::now();
            let outcome = run_case(case);
            let elapsed = start.elapsed();
            if outcome.is_pass() {
                info!(case = case.name, ?elapsed, "passed");
            } else {
                warn!(case = case.name, %outcome, "failed");
            }
            report.cases.push(CaseReport {
                name: case.name,
                kind: case.kind.label(),
                outcome,
                elapsed,
            });
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expected::Tolerance;

    const RECORDS: &[ExpectedResult] = &[
        ExpectedResult::new("a", 1.0),
        ExpectedResult::new("b", 2.0).with_tolerance(Tolerance::Exact),
    ];

    #[test]
    fn test_judge() {
        assert_eq!(judge(&[1.00000001, 2.0], RECORDS), Outcome::Passed);
        assert_eq!(
            judge(&[1.0], RECORDS),
            Outcome::ArityMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(
            judge(&[1.1, 3.0], RECORDS),
            Outcome::Mismatch {
                id: "a",
                expected: 1.0,
                actual: 1.1
            }
        );
    }

    #[test]
    fn test_report_counts() {
        let mut report = Report::default();
        for (name, outcome) in [("x", Outcome::Passed), ("y", Outcome::Errored("bad".into()))] {
            report.cases.push(CaseReport {
                name,
                kind: "smoke",
                outcome,
                elapsed: Duration::ZERO,
            });
        }
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(report.failures().next().map(|c| c.name), Some("y"));
        assert!(report.to_string().ends_with("1 passed, 1 failed, 2 total"));
    }

    #[test]
    fn test_empty_report_is_success() {
        assert!(Report::default().is_success());
    }
}
