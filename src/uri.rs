//! URI, IRI and URI Template checkers.
//!
//! The full RFC 3986/3987 ABNF and the RFC 6570 template grammar are not
//! reimplemented here; all five predicates delegate to the
//! [`iri-string`](https://docs.rs/iri-string) parser and report its verdict.

use iri_string::template::UriTemplateStr;
use iri_string::types::{IriReferenceStr, IriStr, UriReferenceStr, UriStr};

/// Validates a URI per [RFC 3986](https://www.rfc-editor.org/rfc/rfc3986.html).
/// The string must carry a scheme; use [`is_uri_reference`] for relative
/// references.
pub fn is_uri(value: &str) -> bool {
  UriStr::new(value).is_ok()
}

/// Validates a URI Reference (URI or relative-ref) per
/// [RFC 3986, section 4.1](https://www.rfc-editor.org/rfc/rfc3986.html#section-4.1).
pub fn is_uri_reference(value: &str) -> bool {
  UriReferenceStr::new(value).is_ok()
}

/// Validates an IRI per [RFC 3987](https://www.rfc-editor.org/rfc/rfc3987.html).
pub fn is_iri(value: &str) -> bool {
  IriStr::new(value).is_ok()
}

/// Validates an IRI Reference per
/// [RFC 3987](https://www.rfc-editor.org/rfc/rfc3987.html).
pub fn is_iri_reference(value: &str) -> bool {
  IriReferenceStr::new(value).is_ok()
}

/// Validates a URI Template per
/// [RFC 6570](https://www.rfc-editor.org/rfc/rfc6570.html).
pub fn is_uri_template(value: &str) -> bool {
  UriTemplateStr::new(value).is_ok()
}
