//! JSON Pointer and Relative JSON Pointer grammars.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::{anchored, NON_NEGATIVE_INTEGER};

// RFC 6901: zero or more "/"-prefixed reference tokens. A token mixes
// unescaped scalar values (everything but "/" and "~") with the ~0 and ~1
// escapes. Classes range over scalar values, so astral-plane characters are
// single members rather than surrogate pairs.
pub(crate) fn json_pointer() -> String {
  let unescaped = r"[\x00-\x2E\x30-\x7D\x7F-\x{10FFFF}]";
  let escaped = "~[01]";

  format!("(?:/(?:{}|{})*)*", unescaped, escaped)
}

static JSON_POINTER: Lazy<Regex> = Lazy::new(|| anchored(&json_pointer()));

static RELATIVE_JSON_POINTER: Lazy<Regex> = Lazy::new(|| {
  let index_manipulation = format!("[+-]{}", NON_NEGATIVE_INTEGER);

  anchored(&format!(
    "{}(?:(?:{})?{}|#)",
    NON_NEGATIVE_INTEGER,
    index_manipulation,
    json_pointer()
  ))
});

/// Validates a JSON Pointer per [RFC 6901](https://www.rfc-editor.org/rfc/rfc6901.html).
pub fn is_json_pointer(value: &str) -> bool {
  JSON_POINTER.is_match(value)
}

/// Validates a Relative JSON Pointer per
/// [draft-bhutton-relative-json-pointer-00](https://datatracker.ietf.org/doc/html/draft-bhutton-relative-json-pointer-00):
/// a non-negative integer prefix followed by an optional signed index
/// adjustment and a JSON Pointer, or by the literal `#`.
///
/// The embedded pointer grammar is the [`is_json_pointer`] production
/// itself, so the two checkers accept the same token language.
pub fn is_relative_json_pointer(value: &str) -> bool {
  RELATIVE_JSON_POINTER.is_match(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verify_json_pointer_tokens() {
    assert!(is_json_pointer(""));
    assert!(is_json_pointer("/foo"));
    assert!(is_json_pointer("/foo/0"));
    assert!(is_json_pointer("/"));
    assert!(is_json_pointer("//"));
    assert!(is_json_pointer("/ "));
    assert!(is_json_pointer("/c%d"));
    assert!(is_json_pointer("/i\\j"));
    assert!(is_json_pointer("/k\"l"));
    assert!(is_json_pointer("/子子孫孫/𝄞"));
  }

  #[test]
  fn verify_json_pointer_escapes() {
    assert!(is_json_pointer("/a~0b"));
    assert!(is_json_pointer("/m~1n"));
    assert!(is_json_pointer("/~0~1"));

    assert!(!is_json_pointer("/~"));
    assert!(!is_json_pointer("/~2"));
    assert!(!is_json_pointer("/foo~"));
    assert!(!is_json_pointer("/a~b"));
  }

  #[test]
  fn verify_json_pointer_prefix() {
    assert!(!is_json_pointer("foo"));
    assert!(!is_json_pointer("0"));
    assert!(!is_json_pointer("#/foo"));
  }

  #[test]
  fn verify_relative_json_pointer_prefix() {
    assert!(is_relative_json_pointer("0"));
    assert!(is_relative_json_pointer("1"));
    assert!(is_relative_json_pointer("120"));
    assert!(is_relative_json_pointer("0/foo/bar"));
    assert!(is_relative_json_pointer("2/0/baz/1~1zip"));

    assert!(!is_relative_json_pointer(""));
    assert!(!is_relative_json_pointer("/foo/bar"));
    assert!(!is_relative_json_pointer("-1/foo"));
    assert!(!is_relative_json_pointer("01/foo"));
    assert!(!is_relative_json_pointer("0 /foo"));
  }

  #[test]
  fn verify_relative_json_pointer_index_manipulation() {
    assert!(is_relative_json_pointer("0+1"));
    assert!(is_relative_json_pointer("0-1/foo"));
    assert!(is_relative_json_pointer("2+10/bar"));

    assert!(!is_relative_json_pointer("+1/foo"));
    assert!(!is_relative_json_pointer("0+01/foo"));
    assert!(!is_relative_json_pointer("0+-1/foo"));
  }

  #[test]
  fn verify_relative_json_pointer_hash() {
    assert!(is_relative_json_pointer("0#"));
    assert!(is_relative_json_pointer("12#"));

    assert!(!is_relative_json_pointer("#"));
    assert!(!is_relative_json_pointer("0#/foo"));
    assert!(!is_relative_json_pointer("0##"));
    assert!(!is_relative_json_pointer("0+1#"));
  }
}
