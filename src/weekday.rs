use std::fmt;

use crate::date::month_length;

/// Day of the week, indexed 0 to 6 starting at Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn from_index(index: i32) -> Option<Self> {
        Some(match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return None,
        })
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Single-letter column label for the grid header.
    pub fn letter(self) -> &'static str {
        match self {
            Self::Sunday | Self::Saturday => "S",
            Self::Monday => "M",
            Self::Tuesday | Self::Thursday => "T",
            Self::Wednesday => "W",
            Self::Friday => "F",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Name for a raw weekday index. Out-of-range indices get a diagnostic
/// string instead of a failure; this component signals errors that way.
pub fn weekday_name(index: i32) -> &'static str {
    match Weekday::from_index(index) {
        Some(day) => day.full_name(),
        None => "invalid weekday index",
    }
}

/// Weekday index of a date, 0 = Sunday.
///
/// This reproduces the historical closed-form calculation untouched,
/// including its `+1` adjustment for years after 2000. It agrees with the
/// proleptic Gregorian calendar for every year from 1601 on, but is off by
/// one day within 1600 itself, where it can even return -1 (see the
/// regression tests). Callers must hand in a month between 1 and 12 and a
/// day within the month; nothing is validated here.
pub fn day_number(day: u32, month: u32, year: i32) -> i32 {
    let mut res: i32 = 0;

    // Five weekdays of drift per full century since 1600.
    let mut rest = year - 1600;
    while rest >= 100 {
        res += 5;
        rest -= 100;
    }
    res %= 7;

    // Leap days among the remaining two-digit years count double.
    let quads = (rest - 1) / 4;
    let plain = (rest - 1) - quads;
    res = (res + (quads * 2 + plain) % 7) % 7;

    let mut days: i32 = 0;
    for m in 1..month {
        // An invalid month feeds the table's sentinel into the sum.
        days += month_length(m, year).map(|n| n as i32).unwrap_or(-1);
    }
    days = (days + day as i32) % 7;
    res = (res + days) % 7;

    if year > 2000 {
        res += 1;
    }
    res % 7
}
