//! Gregorian calendar arithmetic and the UTC leap second table.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// UTC days whose final second (23:59:59) was followed by a positive leap
/// second, per the IERS Bulletin C insertion history. The table ends at
/// 2016-12-31, the most recent insertion, and must be extended by hand when
/// a new one is announced.
const LEAP_SECOND_DATES: &[(i32, u32, u32)] = &[
  (1972, 6, 30),
  (1972, 12, 31),
  (1973, 12, 31),
  (1974, 12, 31),
  (1975, 12, 31),
  (1976, 12, 31),
  (1977, 12, 31),
  (1978, 12, 31),
  (1979, 12, 31),
  (1981, 6, 30),
  (1982, 6, 30),
  (1983, 6, 30),
  (1985, 6, 30),
  (1987, 12, 31),
  (1989, 12, 31),
  (1990, 12, 31),
  (1992, 6, 30),
  (1993, 6, 30),
  (1994, 6, 30),
  (1995, 12, 31),
  (1997, 6, 30),
  (1998, 12, 31),
  (2005, 12, 31),
  (2008, 12, 31),
  (2012, 6, 30),
  (2015, 6, 30),
  (2016, 12, 31),
];

/// Returns the number of days in `month` (1-12) of `year`, applying the
/// Gregorian leap year rule for February.
///
/// Callers are expected to pass a grammar-validated month; the result for a
/// month outside 1-12 is unspecified.
pub fn days_in_month(month: u32, year: i32) -> u32 {
  match month {
    1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
    4 | 6 | 9 | 11 => 30,
    2 if is_leap_year(year) => 29,
    _ => 28,
  }
}

fn is_leap_year(year: i32) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Whether a positive leap second was inserted immediately after the given
/// UTC instant, i.e. whether `instant` is the 23:59:59 that a 23:59:60
/// followed on one of the recorded insertion dates.
///
/// Instants past the end of the table answer `false`. A date-time carrying a
/// future leap second therefore stays invalid until the table learns about
/// the insertion.
pub fn has_leap_second(instant: DateTime<Utc>) -> bool {
  instant.hour() == 23
    && instant.minute() == 59
    && instant.second() == 59
    && LEAP_SECOND_DATES
      .iter()
      .any(|&(year, month, day)| {
        instant.year() == year && instant.month() == month && instant.day() == day
      })
}
