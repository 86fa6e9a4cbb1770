//! IPv4, IPv6 and UUID grammars.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::{anchored, DEC_OCTET, HEXDIG};

pub(crate) fn ipv4_address() -> String {
  format!(
    "{}\\.{}\\.{}\\.{}",
    DEC_OCTET, DEC_OCTET, DEC_OCTET, DEC_OCTET
  )
}

// RFC 3986 IPv6address: nine alternatives keyed by the position of the "::"
// elision, with the trailing 32 bits writable as two h16 pieces or an
// embedded dotted quad.
pub(crate) fn ipv6_address() -> String {
  let h16 = format!("{}{{1,4}}", HEXDIG);
  let ls32 = format!("(?:{}:{}|{})", h16, h16, ipv4_address());

  let alternatives = [
    format!("(?:{}:){{6}}{}", h16, ls32),
    format!("::(?:{}:){{5}}{}", h16, ls32),
    format!("(?:{})?::(?:{}:){{4}}{}", h16, h16, ls32),
    format!("(?:(?:{}:)?{})?::(?:{}:){{3}}{}", h16, h16, h16, ls32),
    format!("(?:(?:{}:){{0,2}}{})?::(?:{}:){{2}}{}", h16, h16, h16, ls32),
    format!("(?:(?:{}:){{0,3}}{})?::{}:{}", h16, h16, h16, ls32),
    format!("(?:(?:{}:){{0,4}}{})?::{}", h16, h16, ls32),
    format!("(?:(?:{}:){{0,5}}{})?::{}", h16, h16, h16),
    format!("(?:(?:{}:){{0,6}}{})?::", h16, h16),
  ];

  format!("(?:{})", alternatives.join("|"))
}

static IPV4: Lazy<Regex> = Lazy::new(|| anchored(&ipv4_address()));

static IPV6: Lazy<Regex> = Lazy::new(|| anchored(&ipv6_address()));

static UUID: Lazy<Regex> = Lazy::new(|| {
  // time-low "-" time-mid "-" time-high-and-version "-"
  // clock-seq-and-reserved clock-seq-low "-" node
  let hex_octet = format!("(?:{}{{2}})", HEXDIG);

  anchored(&format!(
    "{0}{{4}}-{0}{{2}}-{0}{{2}}-{0}{0}-{0}{{6}}",
    hex_octet
  ))
});

/// Validates an IPv4 address in the dotted-quad form of
/// [RFC 2673, section 3.2](https://www.rfc-editor.org/rfc/rfc2673.html#section-3.2),
/// each octet 0-255 with no superfluous leading zero.
pub fn is_ipv4(value: &str) -> bool {
  IPV4.is_match(value)
}

/// Validates an IPv6 address per the `IPv6address` rule of
/// [RFC 3986, section 3.2.2](https://www.rfc-editor.org/rfc/rfc3986.html#section-3.2.2).
pub fn is_ipv6(value: &str) -> bool {
  IPV6.is_match(value)
}

/// Validates a UUID per [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122.html):
/// 8-4-4-4-12 hexadecimal digits, either case. Version and variant bits are
/// not inspected.
pub fn is_uuid(value: &str) -> bool {
  UUID.is_match(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verify_ipv4_octet_ranges() {
    assert!(is_ipv4("192.168.1.1"));
    assert!(is_ipv4("255.255.255.255"));
    assert!(is_ipv4("0.0.0.0"));
    assert!(is_ipv4("87.65.43.21"));

    assert!(!is_ipv4("256.0.0.1"));
    assert!(!is_ipv4("999.0.0.1"));
    assert!(!is_ipv4("01.1.1.1"));
    assert!(!is_ipv4("1.1.1.016"));
  }

  #[test]
  fn verify_ipv4_shape() {
    assert!(!is_ipv4("1.2.3"));
    assert!(!is_ipv4("1.2.3.4.5"));
    assert!(!is_ipv4("1.2.3.4 "));
    assert!(!is_ipv4(" 1.2.3.4"));
    assert!(!is_ipv4("1.2.3.4\n"));
    assert!(!is_ipv4("192.168.1.1:8080"));
    assert!(!is_ipv4("::ffff:1.2.3.4"));
  }

  #[test]
  fn verify_ipv6_uncompressed() {
    assert!(is_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
    assert!(is_ipv6("1:2:3:4:5:6:7:8"));
  }

  #[test]
  fn verify_ipv6_elision() {
    assert!(is_ipv6("::"));
    assert!(is_ipv6("::1"));
    assert!(is_ipv6("1::"));
    assert!(is_ipv6("2001:db8::7"));
    assert!(is_ipv6("1::8"));
    assert!(is_ipv6("1:2:3:4:5:6::8"));
  }

  #[test]
  fn verify_ipv6_embedded_ipv4() {
    assert!(is_ipv6("::ffff:192.168.0.1"));
    assert!(is_ipv6("64:ff9b::192.0.2.33"));

    assert!(!is_ipv6("::ffff:192.168.300.1"));
    assert!(!is_ipv6("1:2:3:4:5:6:7:192.0.2.33"));
  }

  #[test]
  fn verify_ipv6_rejects_malformed() {
    assert!(!is_ipv6(""));
    assert!(!is_ipv6(":::"));
    assert!(!is_ipv6("1:2:3:4:5:6:7"));
    assert!(!is_ipv6("1:2:3:4:5:6:7:8:9"));
    assert!(!is_ipv6("1::2::3"));
    assert!(!is_ipv6("12345::"));
    assert!(!is_ipv6("1:2:3:4:5:6:7:8::"));
    assert!(!is_ipv6("fe80::1%eth0"));
  }

  #[test]
  fn verify_uuid_grouping() {
    assert!(is_uuid("2eb8aa08-aa98-11ea-b4aa-73b441d16380"));
    assert!(is_uuid("2EB8AA08-AA98-11EA-B4AA-73B441D16380"));
    assert!(is_uuid("2eb8AA08-aa98-11ea-B4Aa-73B441D16380"));
    assert!(is_uuid("00000000-0000-0000-0000-000000000000"));

    assert!(!is_uuid("2eb8aa08aa9811eab4aa73b441d16380"));
    assert!(!is_uuid("2eb8aa08-aa98-11ea-b4aa-73b441d1638"));
    assert!(!is_uuid("2eb8aa08-aa98-11ea-b4aa-73b441d163800"));
    assert!(!is_uuid("2eb8aa08-aa98-11ea-73b441d16380"));
    assert!(!is_uuid("g2b8aa08-aa98-11ea-b4aa-73b441d16380"));
    assert!(!is_uuid("{2eb8aa08-aa98-11ea-b4aa-73b441d16380}"));
  }
}
