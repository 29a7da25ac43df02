//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Diagnostics go through `tracing`; this module only handles what the
//! user asked to see.

use std::fmt::Display;

use super::render::CrumbItem;

/// Separator between labels in text output.
pub const TRAIL_SEPARATOR: &str = " > ";

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print requested data. Always shown, even in quiet mode.
pub fn data(message: impl Display) {
    println!("{}", message);
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format visible trail items as a single line of labels.
///
/// With `Verbosity::Debug`, each label is followed by its path.
pub fn format_trail(items: &[CrumbItem], verbosity: Verbosity) -> String {
    items
        .iter()
        .map(|item| match verbosity {
            Verbosity::Debug => format!("{} ({})", item.label, item.path),
            _ => item.label.clone(),
        })
        .collect::<Vec<_>>()
        .join(TRAIL_SEPARATOR)
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
