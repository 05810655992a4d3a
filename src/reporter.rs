//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow lokal
//! to be used as a library without printing side effects.

use colored::Colorize;

use crate::core::ParseWarning;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a green success line.
pub fn success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green().bold(), message);
}

/// Print a red failure line.
pub fn failure(message: &str) {
    println!("{} {}", FAILURE_MARK.red().bold(), message);
}

/// Print a yellow warning line.
pub fn warning(message: &str) {
    println!("{}: {}", "warning".bold().yellow(), message);
}

/// Print a dimmed note line.
pub fn note(message: &str) {
    println!("  {}", message.dimmed());
}

/// Print parser warnings (skipped files/entries) in a compact list.
pub fn print_parse_warnings(warnings: &[ParseWarning]) {
    for item in warnings {
        warning(&format!("{}: {}", item.file, item.message));
    }
    if !warnings.is_empty() {
        println!(
            "{}",
            format!("{} file(s) or entry(ies) skipped", warnings.len()).dimmed()
        );
    }
}

/// Print a `name: value` detail row, aligned for short labels.
pub fn detail(label: &str, value: &str) {
    println!("  {:<12} {}", format!("{}:", label).bold(), value);
}
