//! Fixed-width time and date patterns
//!
//! There is no timezone database here: local time is UTC shifted by a fixed
//! offset. Every pattern is zero-padded so both strings of a morph always
//! have the same length.

use core::fmt::Write;

use heapless::String;

use crate::error::{Error, Result};

/// Capacity of a formatted time string
pub const TIME_STRING_CAPACITY: usize = 8;

/// Formatted time string
pub type TimeString = String<TIME_STRING_CAPACITY>;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Supported display patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `HH:MM:SS`, 24 hours
    #[default]
    HoursMinutesSeconds,
    /// `HH:MM`, 24 hours
    HoursMinutes,
    /// `HH:MM:SS`, 12 hours (`12:00:00` at midnight and noon)
    TwelveHourMinutesSeconds,
    /// `DD/MM`
    DayMonth,
    /// `MM/DD`
    MonthDay,
}

impl TimeFormat {
    /// Number of characters every formatted string has
    pub const fn width(self) -> usize {
        match self {
            Self::HoursMinutesSeconds | Self::TwelveHourMinutesSeconds => 8,
            Self::HoursMinutes | Self::DayMonth | Self::MonthDay => 5,
        }
    }

    /// Format the whole second containing `secs` (seconds since the Unix
    /// epoch), shifted by `utc_offset_secs`
    #[allow(clippy::cast_possible_truncation)]
    pub fn format(self, secs: f64, utc_offset_secs: i32) -> Result<TimeString> {
        if !secs.is_finite() {
            return Err(Error::InvalidConfiguration("timestamp must be finite"));
        }

        let local = (libm::floor(secs) as i64).saturating_add(i64::from(utc_offset_secs));
        let days = local.div_euclid(SECONDS_PER_DAY);
        let second_of_day = local.rem_euclid(SECONDS_PER_DAY);

        let hours = second_of_day / SECONDS_PER_HOUR;
        let minutes = second_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        let seconds = second_of_day % SECONDS_PER_MINUTE;

        let mut out = TimeString::new();
        let written = match self {
            Self::HoursMinutesSeconds => {
                write!(out, "{hours:02}:{minutes:02}:{seconds:02}")
            }
            Self::HoursMinutes => write!(out, "{hours:02}:{minutes:02}"),
            Self::TwelveHourMinutesSeconds => {
                let hours = match hours % 12 {
                    0 => 12,
                    h => h,
                };
                write!(out, "{hours:02}:{minutes:02}:{seconds:02}")
            }
            Self::DayMonth => {
                let (month, day) = month_day_from_days(days);
                write!(out, "{day:02}/{month:02}")
            }
            Self::MonthDay => {
                let (month, day) = month_day_from_days(days);
                write!(out, "{month:02}/{day:02}")
            }
        };
        written.map_err(|_| Error::InvalidConfiguration("time string exceeds capacity"))?;

        Ok(out)
    }
}

/// Month (1-12) and day of month (1-31) for a count of days since
/// 1970-01-01, proleptic Gregorian calendar
fn month_day_from_days(days: i64) -> (i64, i64) {
    // Shift the epoch to 0000-03-01 so leap days end each 400-year era
    let shifted = days.saturating_add(719_468);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    (month, day)
}
