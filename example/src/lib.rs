//! example library
//!
//! Composes the code token and both counters into the output line.

pub mod logging;

use std::io::Write;

use anyhow::Context;
use example_data::{Counter, Result};
use example_lib::code::get_code;
use example_lib::do_a_useful_thing;
use example_sublib::do_a_subuseful_thing;
use tracing::debug;

/// The three providers the output line is built from.
#[derive(Clone, Copy)]
pub struct Providers {
    pub code: fn() -> &'static str,
    pub primary: fn() -> Result<Counter>,
    pub secondary: fn() -> Result<Counter>,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            code: get_code,
            primary: do_a_useful_thing,
            secondary: do_a_subuseful_thing,
        }
    }
}

/// Format the output line: token, primary, secondary, no separators.
pub fn render_line(code: &str, thing: &Counter, subthing: &Counter) -> String {
    format!("{}{}{}", code, thing, subthing)
}

/// Call every provider once and render the result.
///
/// Any cell already allocated is dropped before this returns, on success
/// and on error.
pub fn compose_with(providers: Providers) -> Result<String> {
    let code = (providers.code)();
    let thing = (providers.primary)()?;
    let subthing = (providers.secondary)()?;

    let line = render_line(code, &thing, &subthing);
    debug!(%line, "rendered output line");
    Ok(line)
}

/// [`compose_with`] using the real providers.
pub fn compose() -> Result<String> {
    compose_with(Providers::default())
}

/// Compose the line and write it, newline-terminated, to `out`.
///
/// Nothing is written if a provider fails.
pub fn write_line_with<W: Write>(providers: Providers, out: &mut W) -> anyhow::Result<()> {
    let line = compose_with(providers).context("failed to provision counters")?;
    writeln!(out, "{}", line).context("failed to write output line")?;
    out.flush()?;
    Ok(())
}

/// [`write_line_with`] using the real providers.
pub fn write_line<W: Write>(out: &mut W) -> anyhow::Result<()> {
    write_line_with(Providers::default(), out)
}
