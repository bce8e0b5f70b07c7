//! Built-in suites
//!
//! Each case exercises one observable property of the providers or of the
//! composed output line.

use example_data::Counter;
use example_lib::code::get_code;
use example_lib::{do_a_useful_thing, USEFUL_VALUE};
use example_sublib::{do_a_subuseful_thing, SUBUSEFUL_VALUE};

use crate::error::{HarnessError, Result};
use crate::failure::{CaseFailure, FailureCategory};
use crate::suite::{CaseResult, Suite};

pub fn builtin_suites() -> Vec<Suite> {
    vec![
        Suite::new("Providers")
            .case("code_is_stable", code_is_stable)
            .case("code_is_non_empty", code_is_non_empty)
            .case("primary_cells_are_independent", primary_cells_are_independent)
            .case(
                "secondary_cells_are_independent",
                secondary_cells_are_independent,
            ),
        Suite::new("Output")
            .case("line_shape", line_shape)
            .case("line_is_idempotent", line_is_idempotent),
    ]
}

/// All built-in suites, or only the one called `name`.
pub fn select(name: Option<&str>) -> Result<Vec<Suite>> {
    let suites = builtin_suites();
    let Some(name) = name else {
        return Ok(suites);
    };

    let available: Vec<&str> = suites.iter().map(|s| s.name).collect();
    let available = available.join(", ");
    suites
        .into_iter()
        .find(|s| s.name == name)
        .map(|s| vec![s])
        .ok_or_else(|| HarnessError::UnknownSuite(name.to_string(), available))
}

fn code_is_stable() -> CaseResult {
    let first = get_code();
    let second = get_code();
    if first != second {
        return Err(CaseFailure::mismatch("Code token changed between calls", first, second));
    }
    if first.as_ptr() != second.as_ptr() {
        return Err(CaseFailure::new(
            FailureCategory::Property,
            "Code token was not borrowed from the same constant",
        ));
    }
    Ok(())
}

fn code_is_non_empty() -> CaseResult {
    if get_code().is_empty() {
        return Err(CaseFailure::new(FailureCategory::Property, "Code token is empty"));
    }
    Ok(())
}

fn primary_cells_are_independent() -> CaseResult {
    cells_are_independent(do_a_useful_thing, USEFUL_VALUE)
}

fn secondary_cells_are_independent() -> CaseResult {
    cells_are_independent(do_a_subuseful_thing, SUBUSEFUL_VALUE)
}

/// Two calls must yield cells that can be mutated and dropped separately.
fn cells_are_independent(
    provider: fn() -> example_data::Result<Counter>,
    expected: i32,
) -> CaseResult {
    let mut first = provider().map_err(CaseFailure::provider_failed)?;
    let second = provider().map_err(CaseFailure::provider_failed)?;

    for cell in [&first, &second] {
        if cell.get() != expected {
            return Err(CaseFailure::mismatch("Fresh cell has wrong value", expected, cell.get()));
        }
    }

    first.set(expected.wrapping_add(100));
    if second.get() != expected {
        return Err(CaseFailure::mismatch(
            "Mutating one cell changed the other",
            expected,
            second.get(),
        ));
    }

    drop(first);
    if second.get() != expected {
        return Err(CaseFailure::mismatch(
            "Dropping one cell changed the other",
            expected,
            second.get(),
        ));
    }
    Ok(())
}

fn line_shape() -> CaseResult {
    let line = example::compose().map_err(CaseFailure::provider_failed)?;
    let expected = format!("{}{}{}", get_code(), USEFUL_VALUE, SUBUSEFUL_VALUE);

    if line.chars().any(char::is_whitespace) {
        return Err(CaseFailure::new(FailureCategory::Property, "Output line contains whitespace")
            .with_details(format!("{:?}", line)));
    }
    if line != expected {
        return Err(CaseFailure::mismatch("Output line has wrong shape", expected, line));
    }
    Ok(())
}

fn line_is_idempotent() -> CaseResult {
    let first = example::compose().map_err(CaseFailure::provider_failed)?;
    let second = example::compose().map_err(CaseFailure::provider_failed)?;
    if first != second {
        return Err(CaseFailure::mismatch("Output line changed between runs", first, second));
    }
    Ok(())
}
