//! Run report rendering and exit status

use std::fmt::Write as _;

use serde::Serialize;

use crate::suite::{Suite, SuiteReport};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suites: Vec<SuiteReport>,
}

impl RunReport {
    pub fn run(suites: &[Suite]) -> Self {
        Self {
            suites: suites.iter().map(Suite::run).collect(),
        }
    }

    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.outcomes.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.suites.iter().map(SuiteReport::failed_count).sum()
    }

    /// Number of failed cases, saturated to fit a process exit status.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.failed_count()).unwrap_or(u8::MAX)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for suite in &self.suites {
            for outcome in &suite.outcomes {
                let status = if outcome.passed { "PASS" } else { "FAIL" };
                let _ = writeln!(out, "{}: {}/{}", status, suite.suite, outcome.case);
                if let Some(ref failure) = outcome.failure {
                    let _ = writeln!(out, "    - {}", failure);
                }
            }
        }
        let _ = writeln!(
            out,
            "\n{} cases, {} failed",
            self.case_count(),
            self.failed_count()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{CaseFailure, FailureCategory};
    use crate::suite::CaseOutcome;

    fn outcome(case: &str, passed: bool) -> CaseOutcome {
        CaseOutcome {
            case: case.to_string(),
            passed,
            failure: (!passed)
                .then(|| CaseFailure::new(FailureCategory::Property, format!("{} failed", case))),
        }
    }

    fn report_with_failures(failed: usize) -> RunReport {
        let outcomes = (0..failed).map(|i| outcome(&format!("c{}", i), false)).collect();
        RunReport {
            suites: vec![SuiteReport {
                suite: "S".to_string(),
                outcomes,
            }],
        }
    }

    #[test]
    fn test_exit_code_counts_failures() {
        assert_eq!(report_with_failures(0).exit_code(), 0);
        assert_eq!(report_with_failures(3).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_saturates() {
        assert_eq!(report_with_failures(300).exit_code(), u8::MAX);
    }

    #[test]
    fn test_render_text() {
        let report = RunReport {
            suites: vec![SuiteReport {
                suite: "Core".to_string(),
                outcomes: vec![outcome("good", true), outcome("bad", false)],
            }],
        };

        assert_eq!(
            report.render_text(),
            "PASS: Core/good\nFAIL: Core/bad\n    - [Property] bad failed\n\n2 cases, 1 failed\n"
        );
    }
}
