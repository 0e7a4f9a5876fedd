use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};

use crate::date_input::IntoDateString;
use crate::errors::{DateError, Result};

/// The only date format accepted and produced: zero-padded `YYYYMMDD`.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Returns a lazy iterator over every day from `start` to `end`, both inclusive,
/// as `YYYYMMDD` strings.
///
/// Both bounds are parsed before anything is yielded, so malformed input fails
/// here rather than halfway through iteration. If `start` is after `end` the
/// iterator is simply empty.
///
/// # Arguments
///
/// * `start` - First day of the range (e.g. `20210101` or `"20210101"`).
/// * `end` - Last day of the range, inclusive.
///
/// # Examples
///
/// ```
/// # use daterange_core::dates::daterange;
/// let days: Vec<String> = daterange(20200228, "20200301").unwrap().collect();
/// assert_eq!(days, ["20200228", "20200229", "20200301"]);
///
/// assert_eq!(daterange(20210103, 20210101).unwrap().count(), 0);
/// assert!(daterange(20211301, 20210101).is_err());
/// ```
pub fn daterange(start: impl IntoDateString, end: impl IntoDateString) -> Result<DateRange> {
    let start = parse_date(&start.into_date_string()?)?;
    let end = parse_date(&end.into_date_string()?)?;
    let range = DateRange::from_dates(start, end);
    tracing::debug!(%start, %end, days = range.len(), "built date range");
    Ok(range)
}

/// Strictly parses an 8-digit `YYYYMMDD` string.
///
/// Unlike a bare `chrono` parse this rejects signs, whitespace, short or long
/// inputs and year `0000`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::invalid(s));
    }
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateError::invalid(s))?;
    if date.year() < 1 {
        return Err(DateError::invalid(s));
    }
    Ok(date)
}

/// Formats a date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Lazy walk over the `NaiveDate`s from `start` to `end`, inclusive of both.
/// If `start` is after `end`, the range is empty.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daterange_core::dates::days_in_range;
/// let start_date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let end_date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
///
/// let dates: Vec<NaiveDate> = days_in_range(start_date, end_date).collect();
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 8, 17).unwrap());
/// ```
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> DayRange {
    DayRange::new(start, end)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRange {
    front: NaiveDate,
    back: NaiveDate,
    done: bool,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            front: start,
            back: end,
            done: start > end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.done
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }
        let current = self.front;
        match current.succ_opt() {
            Some(next) if current < self.back => self.front = next,
            _ => self.done = true,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done {
            0
        } else {
            (self.back - self.front).num_days() as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DayRange {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.done {
            return None;
        }
        let current = self.back;
        match current.pred_opt() {
            Some(prev) if current > self.front => self.back = prev,
            _ => self.done = true,
        }
        Some(current)
    }
}

impl ExactSizeIterator for DayRange {}
impl FusedIterator for DayRange {}

/// [`DayRange`] rendered as `YYYYMMDD` strings. Built by [`daterange`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    days: DayRange,
}

impl DateRange {
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            days: DayRange::new(start, end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Drops the string formatting and yields the remaining days as `NaiveDate`s.
    pub fn into_days(self) -> DayRange {
        self.days
    }
}

impl Iterator for DateRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.days.next().map(format_date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl DoubleEndedIterator for DateRange {
    fn next_back(&mut self) -> Option<String> {
        self.days.next_back().map(format_date)
    }
}

impl ExactSizeIterator for DateRange {}
impl FusedIterator for DateRange {}
