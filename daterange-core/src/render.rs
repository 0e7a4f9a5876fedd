//! Plain-text rendering of date ranges.

use std::io::{self, Write};

/// Streams formatted dates into `out`, `separator` between consecutive items.
/// Returns how many dates were written. Nothing is buffered, so a long range
/// is never held in memory.
pub fn write_dates<W, I>(out: &mut W, dates: I, separator: &str) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut written = 0;
    for date in dates {
        if written > 0 {
            out.write_all(separator.as_bytes())?;
        }
        out.write_all(date.as_ref().as_bytes())?;
        written += 1;
    }
    Ok(written)
}

/// Joins already formatted dates with `separator`.
pub fn join_dates<I>(dates: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    dates
        .into_iter()
        .map(|date| date.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Turns escape sequences typed on a command line
/// (`\n`, `\t`, `\\`) into the characters they stand for.
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
