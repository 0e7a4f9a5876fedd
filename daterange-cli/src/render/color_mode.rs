use std::io::{self, IsTerminal};

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Messages go to stderr, so that is the stream checked in `Auto` mode.
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    false
                } else {
                    io::stderr().is_terminal()
                }
            }
        }
    }
}
