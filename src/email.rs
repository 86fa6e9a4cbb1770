//! Email address grammars: RFC 5321 Mailbox and its RFC 6531
//! internationalized extension.
//!
//! The local part is matched in-crate; the domain part reuses the hostname
//! and address checkers, so the two sides of the `@` can never disagree
//! with the standalone formats.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::anchored;
use crate::hostname::{is_hostname, is_idn};
use crate::network::{is_ipv4, is_ipv6};

const ATEXT: &str = "[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]";
const QTEXT_SMTP: &str = r"[\x20-\x21\x23-\x5B\x5D-\x7E]";

// RFC 6531 widens atext and qtextSMTP with UTF8-non-ascii
const UTF8_ATEXT: &str = "[A-Za-z0-9!#$%&'*+/=?^_`{|}~\\x{80}-\\x{10FFFF}-]";
const UTF8_QTEXT_SMTP: &str = r"[\x20-\x21\x23-\x5B\x5D-\x7E\x{80}-\x{10FFFF}]";

// Local-part = Dot-string / Quoted-string
fn local_part(atext: &str, qtext: &str) -> String {
  let dot_string = format!("{}+(?:\\.{}+)*", atext, atext);
  let quoted_pair = r"\\[\x20-\x7E]";
  let quoted_string = format!("\"(?:{}|{})*\"", qtext, quoted_pair);

  format!("(?:{}|{})", dot_string, quoted_string)
}

static LOCAL_PART: Lazy<Regex> = Lazy::new(|| anchored(&local_part(ATEXT, QTEXT_SMTP)));

static UTF8_LOCAL_PART: Lazy<Regex> =
  Lazy::new(|| anchored(&local_part(UTF8_ATEXT, UTF8_QTEXT_SMTP)));

/// Validates a Mailbox per [RFC 5321, section 4.1.2](https://www.rfc-editor.org/rfc/rfc5321.html#section-4.1.2):
/// a Dot-string or Quoted-string local part and a domain that is either a
/// hostname or a bracketed IPv4/IPv6 address literal.
pub fn is_email(value: &str) -> bool {
  mailbox(value, &LOCAL_PART, is_hostname)
}

/// Validates an internationalized Mailbox per
/// [RFC 6531, section 3.3](https://www.rfc-editor.org/rfc/rfc6531.html#section-3.3):
/// the local part admits non-ASCII atext and the domain is an IDN.
pub fn is_idn_email(value: &str) -> bool {
  mailbox(value, &UTF8_LOCAL_PART, is_idn)
}

// The local part may contain "@" inside a Quoted-string, so the split
// happens at the last one.
fn mailbox(value: &str, local_part: &Regex, domain_check: fn(&str) -> bool) -> bool {
  let at = match value.rfind('@') {
    Some(at) => at,
    None => return false,
  };
  let (local, domain) = (&value[..at], &value[at + 1..]);

  local_part.is_match(local) && is_domain(domain, domain_check)
}

fn is_domain(domain: &str, check: fn(&str) -> bool) -> bool {
  if let Some(literal) = domain
    .strip_prefix('[')
    .and_then(|rest| rest.strip_suffix(']'))
  {
    match literal.strip_prefix("IPv6:") {
      Some(address) => is_ipv6(address),
      None => is_ipv4(literal),
    }
  } else {
    check(domain)
  }
}
