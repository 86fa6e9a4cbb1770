//! RFC 3339 date, time, date-time and duration grammars.
//!
//! Each checker is a two-stage pipeline: a structural match against the
//! composed RFC 3339 production, then a semantic pass for the constraints a
//! regular grammar cannot express (the day-of-month bound, leap second
//! eligibility). Both stages report failure identically as `false`.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::calendar::{days_in_month, has_leap_second};
use crate::grammar::{anchored, DIGIT};

const TIME_HOUR: &str = "(?:[01][0-9]|2[0-3])";
const TIME_MINUTE: &str = "[0-5][0-9]";
const TIME_SECOND: &str = "[0-5][0-9]";

// full-date, with a structural 01-31 day; the real day-of-month bound needs
// the month and year, applied in is_date after the match
fn full_date() -> String {
  format!(
    "(?P<year>{}{{4}})-(?P<month>0[1-9]|1[0-2])-(?P<day>0[1-9]|[12][0-9]|3[01])",
    DIGIT
  )
}

fn time_offset() -> String {
  format!("(?:[zZ]|[+-]{}:{})", TIME_HOUR, TIME_MINUTE)
}

fn partial_time() -> String {
  format!(
    "{}:{}:{}(?:\\.{}+)?",
    TIME_HOUR, TIME_MINUTE, TIME_SECOND, DIGIT
  )
}

static DATE: Lazy<Regex> = Lazy::new(|| anchored(&full_date()));

static TIME: Lazy<Regex> = Lazy::new(|| anchored(&format!("{}{}", partial_time(), time_offset())));

// The time portion of a date-time. A seconds value of 60 is structurally
// admissible here; is_date_time decides whether the instant really carries a
// leap second.
static DATE_TIME_TIME: Lazy<Regex> = Lazy::new(|| {
  anchored(&format!(
    "(?P<hour>{}):(?P<minute>{}):(?P<second>{}|60)(?:\\.{}+)?(?P<offset>{})",
    TIME_HOUR,
    TIME_MINUTE,
    TIME_SECOND,
    DIGIT,
    time_offset()
  ))
});

static DURATION: Lazy<Regex> = Lazy::new(|| {
  // RFC 3339 Appendix A. Weeks cannot be combined with any other unit, and
  // seconds/minutes/hours require the T prefix.
  let dur_second = format!("{}+S", DIGIT);
  let dur_minute = format!("{}+M(?:{})?", DIGIT, dur_second);
  let dur_hour = format!("{}+H(?:{})?", DIGIT, dur_minute);
  let dur_time = format!("T(?:{}|{}|{})", dur_hour, dur_minute, dur_second);
  let dur_day = format!("{}+D", DIGIT);
  let dur_week = format!("{}+W", DIGIT);
  let dur_month = format!("{}+M(?:{})?", DIGIT, dur_day);
  let dur_year = format!("{}+Y(?:{})?", DIGIT, dur_month);
  let dur_date = format!("(?:{}|{}|{})(?:{})?", dur_day, dur_month, dur_year, dur_time);

  anchored(&format!("P(?:{}|{}|{})", dur_date, dur_time, dur_week))
});

/// Validates a full-date per [RFC 3339, section 5.6](https://www.rfc-editor.org/rfc/rfc3339.html#section-5.6):
/// `YYYY-MM-DD` where the day respects the month length and the Gregorian
/// leap year rule.
pub fn is_date(value: &str) -> bool {
  match date_components(value) {
    Some((year, month, day)) => day <= days_in_month(month, year),
    None => false,
  }
}

fn date_components(value: &str) -> Option<(i32, u32, u32)> {
  let caps = DATE.captures(value)?;
  let year = caps.name("year")?.as_str().parse().ok()?;
  let month = caps.name("month")?.as_str().parse().ok()?;
  let day = caps.name("day")?.as_str().parse().ok()?;

  Some((year, month, day))
}

/// Validates a full-time per [RFC 3339, section 5.6](https://www.rfc-editor.org/rfc/rfc3339.html#section-5.6):
/// `HH:MM:SS` with an optional fraction and a mandatory `Z` or numeric
/// offset.
///
/// A leap second is only legitimate on specific calendar dates, and a
/// time-only string names no date, so a seconds value of 60 never validates
/// here.
pub fn is_time(value: &str) -> bool {
  TIME.is_match(value)
}

/// Validates a date-time per [RFC 3339, section 5.6](https://www.rfc-editor.org/rfc/rfc3339.html#section-5.6):
/// a full-date, a `T` or `t` separator, and a full-time whose seconds field
/// may be 60 when the denoted UTC instant really precedes an inserted leap
/// second.
///
/// The leap second table is finite, so acceptance of a seconds value of 60
/// can change across releases as new insertions are recorded.
pub fn is_date_time(value: &str) -> bool {
  // slice on byte positions; a multi-byte character straddling one of the
  // boundaries is a mismatch, not a panic
  let date = match value.get(..10) {
    Some(date) => date,
    None => return false,
  };
  let separator = match value.get(10..11) {
    Some(separator) => separator,
    None => return false,
  };
  let time = match value.get(11..) {
    Some(time) => time,
    None => return false,
  };

  if !is_date(date) || !separator.eq_ignore_ascii_case("t") {
    return false;
  }

  let caps = match DATE_TIME_TIME.captures(time) {
    Some(caps) => caps,
    None => return false,
  };

  if caps.name("second").map(|m| m.as_str()) != Some("60") {
    return true;
  }

  match leap_candidate(date, &caps) {
    Some(instant) => has_leap_second(instant),
    None => false,
  }
}

// UTC instant one second before the candidate leap second: the matched date
// and hour/minute with the seconds field clamped to 59, shifted out of its
// numeric offset.
fn leap_candidate(date: &str, caps: &Captures<'_>) -> Option<DateTime<Utc>> {
  let (year, month, day) = date_components(date)?;
  let hour = caps.name("hour")?.as_str().parse().ok()?;
  let minute = caps.name("minute")?.as_str().parse().ok()?;
  let offset = offset_seconds(caps.name("offset")?.as_str())?;

  let date = NaiveDate::from_ymd_opt(year, month, day)?;
  let time = NaiveTime::from_hms_opt(hour, minute, 59)?;
  let local = NaiveDateTime::new(date, time);

  Some(Utc.from_utc_datetime(&(local - Duration::seconds(offset))))
}

fn offset_seconds(offset: &str) -> Option<i64> {
  if offset.eq_ignore_ascii_case("z") {
    return Some(0);
  }

  let sign = if offset.starts_with('-') { -1 } else { 1 };
  let hours: i64 = offset.get(1..3)?.parse().ok()?;
  let minutes: i64 = offset.get(4..6)?.parse().ok()?;

  Some(sign * (hours * 3600 + minutes * 60))
}

/// Validates a duration per [RFC 3339, Appendix A](https://www.rfc-editor.org/rfc/rfc3339.html#appendix-A).
/// Purely structural; magnitudes are unbounded.
pub fn is_duration(value: &str) -> bool {
  DURATION.is_match(value)
}
