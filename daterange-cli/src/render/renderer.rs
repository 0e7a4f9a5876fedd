use std::io::{self, Write};

use daterange_core::render::write_dates;
use termimad::crossterm::style::{Color, Stylize};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub separator: String,
    pub use_color: bool,
    /// Whether stderr is a terminal. Informational messages are only shown then.
    pub interactive: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            use_color: false,
            interactive: false,
        }
    }
}

/// Dates go to `out`, human-facing messages to stderr. Keeping them apart means
/// piping `daterange` into another program only ever sees dates.
pub struct Renderer {
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: Option<RenderOptions>) -> Self {
        Self {
            opts: opts.unwrap_or_default(),
        }
    }

    /// Writes every date followed by a single trailing newline.
    /// An empty range writes nothing at all.
    pub fn write_dates<W, I>(&self, out: &mut W, dates: I) -> io::Result<usize>
    where
        W: Write,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let written = write_dates(out, dates, &self.opts.separator)?;
        if written > 0 {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(written)
    }

    pub fn write_count<W: Write>(&self, out: &mut W, count: usize) -> io::Result<()> {
        writeln!(out, "{count}")?;
        out.flush()
    }

    /// Only shown when stderr is a terminal; colored unless colors are off.
    pub fn print_info(&self, message: &str) {
        if let Some(line) = self.info_line(message) {
            eprintln!("{line}");
        }
    }

    fn info_line(&self, message: &str) -> Option<String> {
        if !self.opts.interactive {
            return None;
        }
        if self.opts.use_color {
            Some(message.to_string().with(Color::Cyan).to_string())
        } else {
            Some(message.to_string())
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{} {message}", "daterange:".with(Color::Red).bold());
        } else {
            eprintln!("daterange: {message}");
        }
    }
}
