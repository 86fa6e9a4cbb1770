//! Hostname grammars: RFC 1123 and the IDNA2008 forms.
//!
//! The IDNA checkers validate the ASCII label structure and length in-crate
//! and delegate the Unicode policy decisions (bidi, joiners, hyphen
//! placement, U-label/A-label round-tripping) to the UTS 46 processing of
//! the [`idna`] crate.

use idna::uts46::{AsciiDenyList, DnsLength, Hyphens, Uts46};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// LDH label, 1-63 octets, hyphen neither first nor last. Spelled with an
// explicit first/last character class; the engine has no lookaround.
static HOSTNAME: Lazy<Regex> = Lazy::new(|| {
  let label = "[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?";

  crate::grammar::anchored(&format!("{}(?:\\.{})*", label, label))
});

// Relaxed label for the IDNA forms: A-labels carry hyphens at fixed
// positions ("xn--"), so hyphen placement is left to the UTS 46 processing.
static IDN_LABELS: Lazy<Regex> = Lazy::new(|| {
  let label = "[A-Za-z0-9-]{1,63}";

  crate::grammar::anchored(&format!("{}(?:\\.{})*", label, label))
});

/// Validates a hostname per [RFC 1123, section 2.1](https://www.rfc-editor.org/rfc/rfc1123.html#section-2.1):
/// dot-joined LDH labels of at most 63 octets, hyphens only in the interior,
/// total length under 256 octets.
///
/// This is the "hostname" format of draft-04 through draft-06. Draft-07
/// redefined the format in IDNA2008 terms; see [`is_ascii_idn`].
pub fn is_hostname(value: &str) -> bool {
  value.len() < 256 && HOSTNAME.is_match(value)
}

/// Validates a hostname made of NR-LDH labels and A-labels per
/// [RFC 5890, section 2.3.2.1](https://www.rfc-editor.org/rfc/rfc5890.html#section-2.3.2.1).
/// This is the "hostname" format since draft-07.
///
/// Structure and length are checked in-crate; the string must additionally
/// survive UTS 46 ToUnicode processing with hyphen, bidi and joiner checks
/// enabled, which is where A-labels are actually decoded and judged.
pub fn is_ascii_idn(value: &str) -> bool {
  if value.len() >= 256 || !IDN_LABELS.is_match(value) {
    return false;
  }

  let (_, verdict) = Uts46::new().to_unicode(value.as_bytes(), AsciiDenyList::EMPTY, Hyphens::Check);
  match verdict {
    Ok(()) => true,
    Err(e) => {
      debug!("hostname {:?} rejected by UTS 46 processing: {:?}", value, e);
      false
    }
  }
}

/// Validates an internationalized hostname (the "idn-hostname" format) per
/// [RFC 5890, section 2.3.2.1](https://www.rfc-editor.org/rfc/rfc5890.html#section-2.3.2.1).
///
/// The string is first converted to its ASCII form; a conversion failure is
/// an invalidity verdict, not an error. The ASCII form then passes through
/// [`is_ascii_idn`].
pub fn is_idn(value: &str) -> bool {
  let ascii = match Uts46::new().to_ascii(
    value.as_bytes(),
    AsciiDenyList::EMPTY,
    Hyphens::Check,
    DnsLength::Verify,
  ) {
    Ok(ascii) => ascii,
    Err(e) => {
      debug!("hostname {:?} failed ToASCII conversion: {:?}", value, e);
      return false;
    }
  };

  is_ascii_idn(&ascii)
}
