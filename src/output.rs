//! Status lines for the stampbrush CLI.
//!
//! Lines are `<verb> <message>` with the verb right-aligned in a fixed
//! column, written to stderr. Stdout is left to `presets` and
//! `completions`.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::session::ReplaySummary;

const VERB_COLUMN: usize = 12;
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// How a status line is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work starting or finished (green).
    Progress,
    /// Counts and other facts (cyan).
    Note,
    /// Something was skipped or is missing (yellow).
    Warn,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
        }
    }
}

/// One line of CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub tone: Tone,
    pub verb: &'static str,
    pub message: String,
}

impl StatusLine {
    pub fn new(tone: Tone, verb: &'static str, message: impl Into<String>) -> Self {
        Self {
            tone,
            verb,
            message: message.into(),
        }
    }
}

/// Writes status lines, colouring them when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Format `line` without writing it.
    pub fn render(&self, line: &StatusLine) -> String {
        let verb = line.verb;
        if self.color {
            format!("{}{verb:>VERB_COLUMN$}{RESET} {}", line.tone.ansi(), line.message)
        } else {
            format!("{verb:>VERB_COLUMN$} {}", line.message)
        }
    }

    pub fn emit(&self, line: &StatusLine) {
        let _ = writeln!(io::stderr().lock(), "{}", self.render(line));
    }

    pub fn emit_all(&self, lines: &[StatusLine]) {
        let mut stderr = io::stderr().lock();
        for line in lines {
            let _ = writeln!(stderr, "{}", self.render(line));
        }
    }

    /// The closing line of `paint`: where the PNG went and its pixel size.
    pub fn export_line(&self, path: &Path, backing: (u32, u32)) -> StatusLine {
        let size = format!("({}x{})", backing.0, backing.1);
        let size = if self.color {
            format!("{DIM}{size}{RESET}")
        } else {
            size
        };
        StatusLine::new(Tone::Progress, "Exported", format!("{} {}", display_path(path), size))
    }
}

/// Summarise a finished replay: skipped uploads, a missing image, then the
/// stamp count.
pub fn replay_report(summary: &ReplaySummary, has_image: bool) -> Vec<StatusLine> {
    let mut lines = Vec::new();
    if summary.failed_uploads > 0 {
        lines.push(StatusLine::new(
            Tone::Warn,
            "Skipped",
            format!("{} that failed to decode", count(summary.failed_uploads, "image")),
        ));
    }
    if !has_image {
        lines.push(StatusLine::new(
            Tone::Warn,
            "Warning",
            "no stamp image loaded; the canvas is blank",
        ));
    }
    lines.push(StatusLine::new(
        Tone::Note,
        "Painted",
        format!(
            "{} in {}",
            count(summary.stamps, "stamp"),
            count(summary.strokes, "stroke")
        ),
    ));
    lines
}

/// `count(1, "stamp")` is "1 stamp", anything else takes an `s`.
pub fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// `path` relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
