//! example-sublib library
//!
//! Secondary counter provider. Same shape as `example-lib`'s provider,
//! shipped as its own crate.

use example_data::{Counter, Result};

/// Value held by every secondary cell.
pub const SUBUSEFUL_VALUE: i32 = 2;

/// Allocate a fresh secondary counter cell. The caller owns it.
pub fn do_a_subuseful_thing() -> Result<Counter> {
    Counter::allocate("do_a_subuseful_thing", SUBUSEFUL_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_subuseful_value() {
        assert_eq!(do_a_subuseful_thing().unwrap().get(), SUBUSEFUL_VALUE);
    }

    #[test]
    fn test_cells_are_independent() {
        let first = do_a_subuseful_thing().unwrap();
        let mut second = do_a_subuseful_thing().unwrap();

        second.set(-1);
        assert_eq!(first.get(), SUBUSEFUL_VALUE);
        assert_eq!(second.get(), -1);
    }
}
