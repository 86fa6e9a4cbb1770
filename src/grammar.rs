//! Shared grammar productions and pattern construction.
//!
//! Every format grammar in this crate is composed from named productions by
//! string interpolation, then anchored to the whole input and compiled once.
//! Productions shared between formats (the decimal octet used by both the
//! IPv4 and email address-literal grammars, the non-negative integer used by
//! the relative JSON Pointer grammar) are defined here so composed formats
//! cannot drift apart.

use regex::Regex;

/// ASCII decimal digit. The Unicode `\d` class also matches digits outside
/// ASCII, which none of the format grammars permit.
pub(crate) const DIGIT: &str = "[0-9]";

/// ASCII hexadecimal digit, either case.
pub(crate) const HEXDIG: &str = "[0-9A-Fa-f]";

/// RFC 3986 dec-octet, 0-255. A 3-digit octet must match the `1xx`, `2xx` or
/// `25x` alternative literally, so `01` and `256` have no path through the
/// alternation.
pub(crate) const DEC_OCTET: &str = "(?:[0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";

/// Non-negative integer with no superfluous leading zero.
pub(crate) const NON_NEGATIVE_INTEGER: &str = "(?:0|[1-9][0-9]*)";

/// Anchor a composed production to the whole input and compile it.
///
/// The productions compiled here are all written in this crate. A production
/// that fails to compile is a bug in its composition, not a property of any
/// input, so unlike the checkers this does not map the failure to a `false`
/// verdict. The panic surfaces on first use of the affected checker.
pub(crate) fn anchored(production: &str) -> Regex {
  match Regex::new(&format!("^(?:{})$", production)) {
    Ok(re) => re,
    Err(e) => panic!("malformed grammar production {:?}: {}", production, e),
  }
}
