//! ANSI style and symbol tables

use std::fmt;

/// Terminal styles used by the printer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Bold,
    Dim,
    Green,
    Red,
    Reset,
    Yellow,
}

impl Style {
    pub fn code(&self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Green => "\x1b[32m",
            Style::Red => "\x1b[31m",
            Style::Reset => "\x1b[0m",
            Style::Yellow => "\x1b[33m",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status glyphs. Failures are numbered instead of carrying a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Pass,
    Pending,
}

impl Symbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Pass => "✓",
            Symbol::Pending => "-",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Wrap `text` in `style`, always closing with a reset
pub fn paint(style: Style, text: impl fmt::Display) -> String {
    format!("{style}{text}{}", Style::Reset)
}
