use thiserror::Error;

/// Errors raised by the harness itself rather than by a case.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// `--suite` named no built-in suite; carries the name and the available ones.
    #[error("Unknown suite '{0}'. Available suites: {1}")]
    UnknownSuite(String, String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
