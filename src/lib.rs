//! # json-schema-formats
//!
//! Pure predicate functions for the "format" vocabulary of JSON Schema.
//! Each checker decides whether a string conforms to one format grammar
//! (the RFC 3339 date/time shapes, RFC 3339 durations, IP addresses,
//! UUIDs, URIs/IRIs and their references, URI Templates, JSON Pointers,
//! hostnames and email addresses) and answers with a plain `bool`. There
//! are no side effects, no I/O and no diagnostics: a string either
//! conforms or it does not, and schema validators embedding these checkers
//! are expected to produce their own error reporting.
//!
//! Grammars are composed from named productions exactly as their governing
//! RFCs write them and compiled once per process; every checker is
//! reentrant and safe to call from any number of threads.
//!
//! ## Supported formats
//!
//! - [x] `date`, `time`, `date-time` (RFC 3339, including real leap second
//!   acceptance for `date-time`)
//! - [x] `duration` (RFC 3339, Appendix A)
//! - [x] `ipv4` (dotted quad), `ipv6` (RFC 3986)
//! - [x] `uuid` (RFC 4122)
//! - [x] `json-pointer` (RFC 6901), `relative-json-pointer`
//! - [x] `hostname` (RFC 1123 and IDNA2008 variants), `idn-hostname`
//! - [x] `email` (RFC 5321), `idn-email` (RFC 6531)
//! - [x] `uri`, `uri-reference` (RFC 3986), `iri`, `iri-reference`
//!   (RFC 3987), `uri-template` (RFC 6570)
//! - [x] `regex` (host engine acceptance)
//!
//! ## Usage
//!
//! Call the checkers directly, or resolve them from the keyword values that
//! appear in schemas:
//!
//! ```rust
//! use json_schema_formats::{is_date, is_ipv4, is_json_pointer, Format};
//!
//! assert!(is_date("2024-02-29"));
//! assert!(!is_date("2023-02-29"));
//! assert!(is_ipv4("192.168.1.1"));
//! assert!(!is_ipv4("256.0.0.1"));
//! assert!(is_json_pointer("/foo/0"));
//!
//! let format = Format::from_keyword("date-time").unwrap();
//! assert!(format.check("1998-12-31T23:59:60Z"));
//! ```
//!
//! "format" assertions apply to strings only; gating on the instance type
//! is the caller's job. The checkers themselves are total over `&str` and
//! never panic on malformed input.
//!
//! ## Caveats
//!
//! - `date-time` consults a finite table of leap second insertions
//!   ([`has_leap_second`]); a seconds field of `60` on a day past the
//!   table's horizon is rejected until the table is extended.
//! - `regex` reports whether the *host* engine (the
//!   [`regex`](https://docs.rs/regex) crate) accepts the pattern. Engines
//!   disagree at the edges; a pattern valid under ECMA-262 lookaround is
//!   rejected here.
//! - `hostname` carries the IDNA2008 meaning it acquired in draft-07.
//!   [`is_hostname`] keeps the older RFC 1123 behavior for consumers of
//!   earlier drafts.

/// Gregorian calendar arithmetic and the leap second table
pub mod calendar;
/// RFC 5321 / RFC 6531 email address grammars
pub mod email;
/// Keyword lookup for the "format" vocabulary
pub mod format;
mod grammar;
/// RFC 1123 and IDNA2008 hostname grammars
pub mod hostname;
/// IPv4, IPv6 and UUID grammars
pub mod network;
/// JSON Pointer grammars
pub mod pointer;
/// The "regex" format
pub mod regexp;
/// RFC 3339 date, time, date-time and duration grammars
pub mod temporal;
/// URI, IRI and URI Template checkers
pub mod uri;

#[doc(inline)]
pub use self::{
  calendar::{days_in_month, has_leap_second},
  email::{is_email, is_idn_email},
  format::Format,
  hostname::{is_ascii_idn, is_hostname, is_idn},
  network::{is_ipv4, is_ipv6, is_uuid},
  pointer::{is_json_pointer, is_relative_json_pointer},
  regexp::is_regex,
  temporal::{is_date, is_date_time, is_duration, is_time},
  uri::{is_iri, is_iri_reference, is_uri, is_uri_reference, is_uri_template},
};
