//! UTC datetime utilities without timezone dependencies.
//!
//! Hosts export dates in a handful of ISO 8601 spellings. Open Graph
//! (`article:published_time`) and JSON-LD (`datePublished`) both want
//! ISO 8601, so everything is normalized here to one of:
//!
//! - `YYYY-MM-DD` (date-only input)
//! - `YYYY-MM-DDTHH:MM:SSZ` (any input carrying a time)
//!
//! # Examples
//!
//! ```ignore
//! assert_eq!(normalize("2024-06-15").as_deref(), Some("2024-06-15"));
//! assert_eq!(
//!     normalize("2024-06-15T14:30:45+02:00").as_deref(),
//!     Some("2024-06-15T12:30:45Z")
//! );
//! ```

use anyhow::{Result, bail};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// A parsed date, remembering whether the source carried a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub datetime: DateTimeUtc,
    pub has_time: bool,
}

impl ParsedDate {
    /// ISO 8601 form used in emitted metadata.
    pub fn to_iso8601(self) -> String {
        if self.has_time {
            self.datetime.to_rfc3339()
        } else {
            self.datetime.to_ymd()
        }
    }
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse an ISO 8601 date or datetime.
    ///
    /// Accepted shapes:
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DD[T ]HH:MM[:SS][.fraction][Z|±HH:MM|±HHMM]`
    ///
    /// A missing offset is read as UTC. Fractional seconds are dropped.
    pub fn parse(s: &str) -> Option<ParsedDate> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(ParsedDate {
                datetime: dt,
                has_time: false,
            });
        }

        if !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }
        let rest = &bytes[11..];

        // HH:MM is mandatory once a time separator is present
        if rest.len() < 5 || rest[2] != b':' {
            return None;
        }
        let hour = parse_u8(&rest[0..2])?;
        let minute = parse_u8(&rest[3..5])?;
        let mut rest = &rest[5..];

        let mut second = 0;
        if rest.first() == Some(&b':') {
            second = parse_u8(rest.get(1..3)?)?;
            rest = &rest[3..];
        }

        // Fractional seconds
        if rest.first() == Some(&b'.') {
            let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            rest = &rest[1 + digits..];
        }

        let offset_minutes = parse_offset(rest)?;

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(ParsedDate {
            datetime: dt.shift_minutes(-offset_minutes)?,
            has_time: true,
        })
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Move the instant by a signed number of minutes, rolling days,
    /// months and years as needed. Offsets never exceed a day.
    ///
    /// `None` when the result leaves the four-digit year range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shift_minutes(self, delta: i32) -> Option<Self> {
        let Self {
            mut year,
            mut month,
            mut day,
            second,
            ..
        } = self;

        let mut total = i32::from(self.hour) * 60 + i32::from(self.minute) + delta;
        if total < 0 {
            total += 24 * 60;
            if day > 1 {
                day -= 1;
            } else {
                if month > 1 {
                    month -= 1;
                } else {
                    month = 12;
                    year = year.checked_sub(1)?;
                }
                day = Self::days_in_month(year, month);
            }
        } else if total >= 24 * 60 {
            total -= 24 * 60;
            if day < Self::days_in_month(year, month) {
                day += 1;
            } else {
                day = 1;
                if month < 12 {
                    month += 1;
                } else {
                    month = 1;
                    year = year.checked_add(1).filter(|y| *y <= 9999)?;
                }
            }
        }

        Some(Self::new(year, month, day, (total / 60) as u8, (total % 60) as u8, second))
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_ymd(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Normalize a host-provided date string to ISO 8601.
///
/// Returns `None` when the input is not a recognizable date.
pub fn normalize(s: &str) -> Option<String> {
    DateTimeUtc::parse(s).map(ParsedDate::to_iso8601)
}

/// Parse a trailing UTC offset into signed minutes east of UTC.
fn parse_offset(bytes: &[u8]) -> Option<i32> {
    match bytes {
        [] | [b'Z' | b'z'] => Some(0),
        [sign @ (b'+' | b'-'), rest @ ..] => {
            let (hh, mm) = match rest {
                [h1, h2, b':', m1, m2] | [h1, h2, m1, m2] => ([*h1, *h2], [*m1, *m2]),
                [h1, h2] => ([*h1, *h2], [b'0', b'0']),
                _ => return None,
            };
            let hours = i32::from(parse_u8(&hh)?);
            let minutes = i32::from(parse_u8(&mm)?);
            if hours > 23 || minutes > 59 {
                return None;
            }
            let total = hours * 60 + minutes;
            Some(if *sign == b'-' { -total } else { total })
        }
        _ => None,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
