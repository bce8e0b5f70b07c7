//! Counter cells
//!
//! A `Counter` is a single heap-allocated integer handed to its caller by
//! value. It is not `Clone`, so every cell has exactly one owner and is
//! released exactly once when that owner drops it.

use std::fmt;

use tracing::debug;

use crate::error::{AllocationError, Result};

/// An owned, heap-allocated integer cell.
#[derive(Debug, PartialEq, Eq)]
pub struct Counter {
    // Always exactly one element.
    cell: Box<[i32]>,
}

impl Counter {
    /// Allocate a fresh cell holding `value` on behalf of `provider`.
    ///
    /// Storage is reserved with a checked reservation, so running out of
    /// memory comes back as an [`AllocationError`] rather than an abort.
    pub fn allocate(provider: &'static str, value: i32) -> Result<Self> {
        let mut slot: Vec<i32> = Vec::new();
        slot.try_reserve_exact(1)
            .map_err(|source| AllocationError::new(provider, source))?;
        slot.push(value);

        debug!(provider, value, "allocated counter cell");
        Ok(Self {
            cell: slot.into_boxed_slice(),
        })
    }

    /// Current value of the cell.
    pub fn get(&self) -> i32 {
        self.cell[0]
    }

    /// Overwrite the value in place. Other cells are unaffected.
    pub fn set(&mut self, value: i32) {
        self.cell[0] = value;
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
