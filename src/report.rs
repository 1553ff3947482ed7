//! Console reporting.
//!
//! Format functions are pure (no I/O) so tests can assert on exact text;
//! `print_*` wrappers route to stdout, warnings and errors to stderr with a
//! colored severity prefix. The reporter only prints — whether a condition
//! is fatal is the caller's decision, and exit codes live in `main`.
//!
//! Per-file success lines come in two flavors, switched by the `emoji`
//! config flag: an emoji glyph, or an uppercase textual alternative for
//! terminals (and logs) where emoji is unwelcome.

use colored::Colorize;

/// Glyph printed for each written page when emoji output is on.
pub const WROTE_GLYPH: &str = "📝";

/// Per-file success line: `📝 name.md` or `WROTE name.md`.
pub fn format_wrote(filename: &str, emoji: bool) -> String {
    if emoji {
        format!("{WROTE_GLYPH} {filename}")
    } else {
        format!("WROTE {filename}")
    }
}

pub fn print_wrote(filename: &str, emoji: bool) {
    println!("{}", format_wrote(filename, emoji));
}

pub fn info(msg: &str) {
    println!("{msg}");
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "WARNING:".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), msg);
}
