use std::collections::TryReserveError;

use thiserror::Error;

/// A provider could not reserve heap storage for a counter cell.
#[derive(Error, Debug)]
#[error("Allocation failed in '{provider}'")]
pub struct AllocationError {
    /// Name of the provider whose allocation failed.
    pub provider: &'static str,
    #[source]
    source: TryReserveError,
}

impl AllocationError {
    /// Wrap a failed reservation made on behalf of `provider`.
    pub fn new(provider: &'static str, source: TryReserveError) -> Self {
        Self { provider, source }
    }
}

pub type Result<T> = std::result::Result<T, AllocationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn overflow() -> TryReserveError {
        Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err()
    }

    #[test]
    fn test_display_names_provider() {
        let err = AllocationError::new("do_a_useful_thing", overflow());
        assert_eq!(err.to_string(), "Allocation failed in 'do_a_useful_thing'");
    }

    #[test]
    fn test_source_is_reserve_error() {
        let err = AllocationError::new("do_a_subuseful_thing", overflow());
        let source = err.source().expect("source should be set");
        assert!(source.is::<TryReserveError>());
    }
}
