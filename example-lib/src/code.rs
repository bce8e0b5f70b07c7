//! Code token

/// The code token printed at the start of the output line.
pub const CODE: &str = "abc";

/// Borrow the code token. Never fails and never allocates.
pub fn get_code() -> &'static str {
    CODE
}
