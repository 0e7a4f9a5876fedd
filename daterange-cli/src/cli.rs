use std::path::PathBuf;

use clap::Parser;

use crate::render::ColorMode;

/// daterange — print every day between two dates, inclusive, as YYYYMMDD
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// First day of the range: `YYYYMMDD` or a keyword (`today`, `yesterday`,
    /// `tomorrow`, or a configured synonym).
    pub start: String,
    /// Last day of the range, inclusive. Same formats as START.
    pub end: String,
    /// Text printed between dates. Escapes like `\n` and `\t` are understood.
    /// Defaults to the `separator` in config.toml, or a newline.
    #[arg(long, short, env = "DATERANGE_SEPARATOR")]
    pub separator: Option<String>,
    /// Print the number of days in the range instead of the days.
    #[arg(long, short, conflicts_with = "reverse")]
    pub count: bool,
    /// Print newest day first.
    #[arg(long, short)]
    pub reverse: bool,
    /// Read configuration from this file instead of the default locations.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Control ANSI colors in messages.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_bounds() {
        let cli = Cli::try_parse_from(["daterange", "20210101", "today"]).unwrap();
        assert_eq!(cli.start, "20210101");
        assert_eq!(cli.end, "today");
        assert!(!cli.count);
        assert!(!cli.reverse);
    }

    #[test]
    fn both_bounds_are_required() {
        assert!(Cli::try_parse_from(["daterange", "20210101"]).is_err());
    }

    #[test]
    fn count_conflicts_with_reverse() {
        let res = Cli::try_parse_from(["daterange", "-c", "-r", "20210101", "20210102"]);
        assert!(res.is_err());
    }
}
