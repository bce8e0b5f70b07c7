//! example-check library
//!
//! Check harness for the example providers and output line.

pub mod checks;
pub mod error;
pub mod failure;
pub mod report;
pub mod suite;

pub use failure::{CaseFailure, FailureCategory};
pub use report::RunReport;
pub use suite::{Case, CaseResult, Suite};
