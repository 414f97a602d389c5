//! User-facing hook messages.
//!
//! The hooks never print directly; they hand messages to a [`Reporter`].
//! The CLI uses [`ConsoleReporter`]; tests record messages in memory.

use std::io::{self, Write};

/// Reset sequence appended after every colored message.
pub const TERMINATOR: &str = "\x1b[0m";

/// Message classes shown to the user.
///
/// `Warning` and `Hint` have no caller yet; they keep the full prefix set
/// available to future hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum MessageKind {
    Info,
    Warning,
    Hint,
    Success,
}

impl MessageKind {
    /// ANSI color prefix, including the bracketed label where there is one.
    pub fn prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m [INFO]: ",
            MessageKind::Warning => "\x1b[1;33m [WARNING]: ",
            MessageKind::Hint => "\x1b[3;33m",
            MessageKind::Success => "\x1b[1;32m [SUCCESS]: ",
        }
    }

    /// Prefix used when color is disabled.
    pub fn plain_prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "[INFO]: ",
            MessageKind::Warning => "[WARNING]: ",
            MessageKind::Hint => "",
            MessageKind::Success => "[SUCCESS]: ",
        }
    }

    /// Render a full line for this kind.
    pub fn format(self, message: &str, color: bool) -> String {
        if color {
            format!("{}{}{}", self.prefix(), message, TERMINATOR)
        } else {
            format!("{}{}", self.plain_prefix(), message)
        }
    }
}

/// Sink for hook messages.
pub trait Reporter {
    fn emit(&mut self, kind: MessageKind, message: &str);

    fn info(&mut self, message: &str) {
        self.emit(MessageKind::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.emit(MessageKind::Success, message);
    }
}

/// Writes messages to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&mut self, kind: MessageKind, message: &str) {
        let line = kind.format(message, self.color);
        let mut stdout = io::stdout().lock();
        // A closed stdout must not turn a finished hook into a failure.
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Keeps every message in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<(MessageKind, String)>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of one kind, in emission order.
    pub fn of_kind(&self, kind: MessageKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn emit(&mut self, kind: MessageKind, message: &str) {
        self.messages.push((kind, message.to_string()));
    }
}
