//! User-facing console lines.
//!
//! Stdout carries the progress lines and `--print-config` notes; warnings and
//! errors go to stderr. Labels are colored only when the stream is a TTY.

use owo_colors::OwoColorize;

enum Label {
    Info,
    Warn,
    Error,
}

impl Label {
    fn text(&self) -> &'static str {
        match self {
            Label::Info => "info:",
            Label::Warn => "warn:",
            Label::Error => "error:",
        }
    }

    fn painted(&self) -> String {
        match self {
            Label::Info => self.text().cyan().bold().to_string(),
            Label::Warn => self.text().yellow().bold().to_string(),
            Label::Error => self.text().red().bold().to_string(),
        }
    }

    fn render(&self, stream: atty::Stream) -> String {
        if atty::is(stream) {
            self.painted()
        } else {
            self.text().to_string()
        }
    }
}

pub fn print_info(msg: &str) {
    println!("{} {}", Label::Info.render(atty::Stream::Stdout), msg);
}

pub fn print_warn(msg: &str) {
    eprintln!("{} {}", Label::Warn.render(atty::Stream::Stderr), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", Label::Error.render(atty::Stream::Stderr), msg);
}

/// Unprefixed stdout line; the "Moving X to Y" progress output goes here.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
