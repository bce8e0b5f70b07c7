//! Failure categorization for the check harness
//!
//! - Setup: a provider returned an error before the property could be checked
//! - Property: the provider worked but the observed behaviour is wrong

use std::fmt;

use example_data::AllocationError;
use serde::Serialize;

/// Category of failure for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureCategory {
    Setup,
    Property,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCategory::Setup => write!(f, "Setup"),
            FailureCategory::Property => write!(f, "Property"),
        }
    }
}

/// Why a single case failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseFailure {
    pub category: FailureCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CaseFailure {
    pub fn new(category: FailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// A provider could not allocate its cell.
    pub fn provider_failed(err: AllocationError) -> Self {
        Self::new(FailureCategory::Setup, err.to_string())
    }

    /// Observed value differs from the expected one.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(FailureCategory::Property, message)
            .with_details(format!("Expected: {}, Actual: {}", expected, actual))
    }
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " - {}", details)?;
        }
        Ok(())
    }
}
