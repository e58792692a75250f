//! Test cases: a demo plus what counts as success

use std::fmt;

use statsintro_core::Result;

use crate::expected::ExpectedResult;

/// Demo returning the values to compare with the records
pub type CheckedRun = fn() -> Result<Vec<f64>>;

/// Demo that only has to finish without error
pub type SmokeRun = Box<dyn Fn() -> Result<()>>;

/// How a case is judged
pub enum CaseKind {
    /// Values are compared one by one with the records, in order
    Checked {
        run: CheckedRun,
        expected: &'static [ExpectedResult],
    },
    /// Success means returning `Ok`
    Smoke { run: SmokeRun },
}

impl CaseKind {
    pub fn is_checked(&self) -> bool {
        matches!(self, CaseKind::Checked { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseKind::Checked { .. } => "checked",
            CaseKind::Smoke { .. } => "smoke",
        }
    }
}

impl fmt::Debug for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseKind::Checked { expected, .. } => f
                .debug_struct("Checked")
                .field("expected", expected)
                .finish_non_exhaustive(),
            CaseKind::Smoke { .. } => f.debug_struct("Smoke").finish_non_exhaustive(),
        }
    }
}

/// A named demo run by the harness
#[derive(Debug)]
pub struct Case {
    pub name: &'static str,
    pub kind: CaseKind,
}

impl Case {
    pub fn checked(name: &'static str, run: CheckedRun, expected: &'static [ExpectedResult]) -> Self {
        Self {
            name,
            kind: CaseKind::Checked { run, expected },
        }
    }

    pub fn smoke<F>(name: &'static str, run: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Self {
            name,
            kind: CaseKind::Smoke { run: Box::new(run) },
        }
    }
}
