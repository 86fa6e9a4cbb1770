//! The "regex" format: acceptance by the host expression engine.

use log::debug;
use regex::Regex;

/// Validates that a string compiles as a regular expression under the host
/// engine (the [`regex`](https://docs.rs/regex) crate) in its default
/// Unicode mode. Any compilation failure is an invalidity verdict.
///
/// This is engine-dependent on purpose: the format's governing grammar is
/// whatever the host engine accepts. Patterns relying on lookaround or
/// backreferences are valid in ECMA-262 engines but rejected here, and the
/// converse holds for some of this engine's spellings.
pub fn is_regex(value: &str) -> bool {
  match Regex::new(value) {
    Ok(_) => true,
    Err(e) => {
      debug!("pattern {:?} rejected by the host engine: {}", value, e);
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verify_compilable_patterns() {
    assert!(is_regex("a+b*c?"));
    assert!(is_regex("[0-9]{2,4}"));
    assert!(is_regex("^[^@]+@[^@]+$"));
    assert!(is_regex(r"(?P<name>\d+)"));
    assert!(is_regex(r"\p{Greek}+"));
    assert!(is_regex(""));
  }

  #[test]
  fn verify_uncompilable_patterns() {
    assert!(!is_regex("("));
    assert!(!is_regex("[a-z"));
    assert!(!is_regex(r"\"));
    assert!(!is_regex("(?P<dup>a)(?P<dup>b)"));
  }

  #[test]
  fn verify_engine_dependence() {
    // ECMA-262 lookahead is not part of this engine's grammar
    assert!(!is_regex("(?=a)b"));
  }
}
