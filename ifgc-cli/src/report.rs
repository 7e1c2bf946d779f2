//! User-facing status lines.
//!
//! Informational and success lines go to stdout, unless the SVG itself is
//! being streamed there, in which case they move to stderr. `--quiet`
//! silences progress lines only. Errors always go to stderr.

use std::fmt::Display;

use colored::Colorize;

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
    to_stderr: bool,
}

impl Reporter {
    pub fn new(quiet: bool, to_stderr: bool) -> Self {
        Self { quiet, to_stderr }
    }

    /// Cyan progress line.
    pub fn info(&self, message: impl Display) {
        if self.quiet {
            return;
        }
        self.emit(message.to_string().cyan());
    }

    /// Green `✔` line surrounded by blank lines. Printed even when quiet.
    pub fn success(&self, message: impl Display) {
        self.emit(format!("\n✔ {message}\n").green());
    }

    fn emit(&self, line: impl Display) {
        if self.to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Red `✖` block on stderr. Never suppressed.
pub fn error(message: impl Display) {
    eprintln!("{}", format!("\n✖ {message}\n").red());
}
