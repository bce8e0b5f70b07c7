//! example-lib library
//!
//! Primary counter provider. Also hosts the [`code`] module.

pub mod code;

use example_data::{Counter, Result};

/// Value held by every primary cell.
pub const USEFUL_VALUE: i32 = 1;

/// Allocate a fresh primary counter cell. The caller owns it.
pub fn do_a_useful_thing() -> Result<Counter> {
    Counter::allocate("do_a_useful_thing", USEFUL_VALUE)
}
