//! Normalisation of loosely typed date arguments into `YYYYMMDD` strings.
//!
//! Callers may hand `daterange` an integer (`20210101`), a string
//! (`"20210101"`) or an already parsed [`NaiveDate`]. Everything is turned into
//! the 8-digit string form first and then goes through the strict parser, so
//! every input kind obeys the same rules.

use chrono::{Datelike, NaiveDate};

use crate::dates::DATE_FORMAT;
use crate::errors::{DateError, Result};

/// Conversion into the raw `YYYYMMDD` string that [`crate::dates::parse_date`] expects.
///
/// Strings are passed through untouched (no trimming). Non-negative integers are
/// zero-padded to 8 digits, negative ones are rejected.
pub trait IntoDateString {
    fn into_date_string(self) -> Result<String>;
}

impl IntoDateString for &str {
    fn into_date_string(self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl IntoDateString for String {
    fn into_date_string(self) -> Result<String> {
        Ok(self)
    }
}

impl IntoDateString for &String {
    fn into_date_string(self) -> Result<String> {
        Ok(self.clone())
    }
}

impl IntoDateString for NaiveDate {
    fn into_date_string(self) -> Result<String> {
        // %Y pads to 4 digits but widens (and signs) outside 1..=9999.
        if !(1..=9999).contains(&self.year()) {
            return Err(DateError::invalid(self.to_string()));
        }
        Ok(self.format(DATE_FORMAT).to_string())
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl IntoDateString for $t {
                fn into_date_string(self) -> Result<String> {
                    Ok(format!("{:08}", self))
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl IntoDateString for $t {
                fn into_date_string(self) -> Result<String> {
                    if self < 0 {
                        return Err(DateError::invalid(self.to_string()));
                    }
                    Ok(format!("{:08}", self))
                }
            }
        )*
    };
}

impl_unsigned!(u32, u64, usize);
impl_signed!(i32, i64);
