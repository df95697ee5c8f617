//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;

/// Check mark used in success messages
pub const CHECK: &str = "✓";

/// Green check mark
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Spinner style for long-running polls
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}").expect("static spinner template")
}

/// Styling extension for displayable values
pub trait Stylize: std::fmt::Display {
    /// Green, for successful outcomes
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Yellow, for warnings and soft failures
    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    /// Dimmed, for secondary detail
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Cyan, for values the user cares about (SHAs, PR numbers)
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Bold, for headings
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}
