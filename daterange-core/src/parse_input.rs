use chrono::{Duration, Local, NaiveDate};

use crate::dates::parse_date;
use crate::errors::{DateError, Result};
use crate::keywords::Keywords;

/// Configuration options for [`resolve_date`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions {
    /// The date to use as "today" for relative keywords. Defaults to the local date.
    pub reference_date: Option<NaiveDate>,
}

/// Parses a user-supplied range bound into a calendar date.
///
/// Tokens are tried in this order:
/// 1.  **Relative keywords**: `today`, `yesterday`, `tomorrow` and any synonyms
///     registered through [`Keywords::extend`], case-insensitive, resolved
///     against `reference_date`.
/// 2.  **Strict `YYYYMMDD`** via [`parse_date`].
///
/// Surrounding whitespace is ignored here, since tokens usually come straight
/// from the command line.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daterange_core::parse_input::{resolve_date, ParseOptions};
/// let opts = ParseOptions {
///     reference_date: Some(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()),
/// };
///
/// let yesterday = resolve_date("yesterday", Some(opts)).unwrap();
/// assert_eq!(yesterday, NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
///
/// let fixed = resolve_date("20210115", Some(opts)).unwrap();
/// assert_eq!(fixed, NaiveDate::from_ymd_opt(2021, 1, 15).unwrap());
///
/// assert!(resolve_date("someday", Some(opts)).is_err());
/// ```
pub fn resolve_date(token: &str, options: Option<ParseOptions>) -> Result<NaiveDate> {
    let options = options.unwrap_or_default();
    let token = token.trim();

    if let Some(keyword) = Keywords::find(token) {
        let reference_date = options
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        let date = reference_date
            .checked_add_signed(Duration::days(keyword.offset_days()))
            .ok_or_else(|| DateError::invalid(token))?;
        tracing::debug!(%token, %date, "resolved keyword");
        return Ok(date);
    }

    parse_date(token)
}
