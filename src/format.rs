//! Keyword lookup for the "format" vocabulary.

use std::fmt;

use crate::email::{is_email, is_idn_email};
use crate::hostname::{is_ascii_idn, is_idn};
use crate::network::{is_ipv4, is_ipv6, is_uuid};
use crate::pointer::{is_json_pointer, is_relative_json_pointer};
use crate::regexp::is_regex;
use crate::temporal::{is_date, is_date_time, is_duration, is_time};
use crate::uri::{is_iri, is_iri_reference, is_uri, is_uri_reference, is_uri_template};

/// JSON Schema "format" keyword values understood by this crate.
///
/// The `hostname` keyword resolves to the IDNA2008 checker, the meaning the
/// format has carried since draft-07; [`crate::is_hostname`] stays available
/// for the RFC 1123 semantics of draft-06 and earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  /// RFC 3339 full-date
  Date,
  /// RFC 3339 date-time
  DateTime,
  /// RFC 3339 duration
  Duration,
  /// RFC 5321 Mailbox
  Email,
  /// IDNA2008 hostname of A-labels and NR-LDH labels
  Hostname,
  /// RFC 6531 internationalized Mailbox
  IdnEmail,
  /// IDNA2008 internationalized hostname
  IdnHostname,
  /// Dotted-quad IPv4 address
  Ipv4,
  /// RFC 3986 IPv6 address
  Ipv6,
  /// RFC 3987 IRI
  Iri,
  /// RFC 3987 IRI Reference
  IriReference,
  /// RFC 6901 JSON Pointer
  JsonPointer,
  /// Host-engine regular expression
  Regex,
  /// Relative JSON Pointer
  RelativeJsonPointer,
  /// RFC 3339 full-time
  Time,
  /// RFC 3986 URI
  Uri,
  /// RFC 3986 URI Reference
  UriReference,
  /// RFC 6570 URI Template
  UriTemplate,
  /// RFC 4122 UUID
  Uuid,
}

impl Format {
  /// Look up a format from its keyword value.
  ///
  /// ```
  /// use json_schema_formats::Format;
  ///
  /// assert_eq!(Format::from_keyword("date-time"), Some(Format::DateTime));
  /// assert_eq!(Format::from_keyword("unknown"), None);
  /// ```
  pub fn from_keyword(keyword: &str) -> Option<Format> {
    match keyword {
      "date" => Some(Format::Date),
      "date-time" => Some(Format::DateTime),
      "duration" => Some(Format::Duration),
      "email" => Some(Format::Email),
      "hostname" => Some(Format::Hostname),
      "idn-email" => Some(Format::IdnEmail),
      "idn-hostname" => Some(Format::IdnHostname),
      "ipv4" => Some(Format::Ipv4),
      "ipv6" => Some(Format::Ipv6),
      "iri" => Some(Format::Iri),
      "iri-reference" => Some(Format::IriReference),
      "json-pointer" => Some(Format::JsonPointer),
      "regex" => Some(Format::Regex),
      "relative-json-pointer" => Some(Format::RelativeJsonPointer),
      "time" => Some(Format::Time),
      "uri" => Some(Format::Uri),
      "uri-reference" => Some(Format::UriReference),
      "uri-template" => Some(Format::UriTemplate),
      "uuid" => Some(Format::Uuid),
      _ => None,
    }
  }

  /// The keyword value for this format.
  pub fn keyword(&self) -> &'static str {
    match self {
      Format::Date => "date",
      Format::DateTime => "date-time",
      Format::Duration => "duration",
      Format::Email => "email",
      Format::Hostname => "hostname",
      Format::IdnEmail => "idn-email",
      Format::IdnHostname => "idn-hostname",
      Format::Ipv4 => "ipv4",
      Format::Ipv6 => "ipv6",
      Format::Iri => "iri",
      Format::IriReference => "iri-reference",
      Format::JsonPointer => "json-pointer",
      Format::Regex => "regex",
      Format::RelativeJsonPointer => "relative-json-pointer",
      Format::Time => "time",
      Format::Uri => "uri",
      Format::UriReference => "uri-reference",
      Format::UriTemplate => "uri-template",
      Format::Uuid => "uuid",
    }
  }

  /// Check a string against this format's grammar.
  pub fn check(&self, value: &str) -> bool {
    match self {
      Format::Date => is_date(value),
      Format::DateTime => is_date_time(value),
      Format::Duration => is_duration(value),
      Format::Email => is_email(value),
      Format::Hostname => is_ascii_idn(value),
      Format::IdnEmail => is_idn_email(value),
      Format::IdnHostname => is_idn(value),
      Format::Ipv4 => is_ipv4(value),
      Format::Ipv6 => is_ipv6(value),
      Format::Iri => is_iri(value),
      Format::IriReference => is_iri_reference(value),
      Format::JsonPointer => is_json_pointer(value),
      Format::Regex => is_regex(value),
      Format::RelativeJsonPointer => is_relative_json_pointer(value),
      Format::Time => is_time(value),
      Format::Uri => is_uri(value),
      Format::UriReference => is_uri_reference(value),
      Format::UriTemplate => is_uri_template(value),
      Format::Uuid => is_uuid(value),
    }
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.keyword())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_keyword_round_trip() {
    for keyword in &[
      "date",
      "date-time",
      "duration",
      "email",
      "hostname",
      "idn-email",
      "idn-hostname",
      "ipv4",
      "ipv6",
      "iri",
      "iri-reference",
      "json-pointer",
      "regex",
      "relative-json-pointer",
      "time",
      "uri",
      "uri-reference",
      "uri-template",
      "uuid",
    ] {
      let format = Format::from_keyword(keyword).unwrap();
      assert_eq!(format.keyword(), *keyword);
      assert_eq!(format.to_string(), *keyword);
    }

    assert_eq!(Format::from_keyword("int32"), None);
    assert_eq!(Format::from_keyword("DATE"), None);
  }

  #[test]
  fn verify_hostname_keyword_is_idna() {
    let format = Format::from_keyword("hostname").unwrap();

    assert!(format.check("xn--ihqwcrb4cv8a8dqg056pqjye"));
    assert!(!format.check("실례.테스트"));
  }

  #[test]
  fn verify_dispatch() {
    assert!(Format::Date.check("2024-02-29"));
    assert!(!Format::Date.check("2023-02-29"));
    assert!(Format::Ipv4.check("192.168.1.1"));
    assert!(Format::JsonPointer.check("/foo/0"));
    assert!(!Format::JsonPointer.check("/foo~2"));
  }
}
