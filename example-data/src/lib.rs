//! example-data library
//!
//! Owned counter cells shared by the primary and secondary providers.

pub mod counter;
pub mod error;

pub use counter::Counter;
pub use error::{AllocationError, Result};
