//! Suites, cases and their outcomes

use serde::Serialize;
use tracing::debug;

use crate::failure::CaseFailure;

pub type CaseResult = Result<(), CaseFailure>;

/// A named check.
#[derive(Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub check: fn() -> CaseResult,
}

/// A named group of cases, run in registration order.
pub struct Suite {
    pub name: &'static str,
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cases: Vec::new(),
        }
    }

    pub fn case(mut self, name: &'static str, check: fn() -> CaseResult) -> Self {
        self.cases.push(Case { name, check });
        self
    }

    pub fn run(&self) -> SuiteReport {
        let outcomes = self
            .cases
            .iter()
            .map(|case| {
                let result = (case.check)();
                debug!(suite = self.name, case = case.name, passed = result.is_ok(), "ran case");
                CaseOutcome {
                    case: case.name.to_string(),
                    passed: result.is_ok(),
                    failure: result.err(),
                }
            })
            .collect();

        SuiteReport {
            suite: self.name.to_string(),
            outcomes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub case: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<CaseFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }
}
