//! Common utilities shared between the loader, runner and CLI

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{AssertionFailure, Error, Result};

/// Shorten a string for single-line display
pub fn truncate_for_display(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_display() {
        assert_eq!(truncate_for_display("short", 10), "short");
        assert_eq!(truncate_for_display("abcdefghij", 4), "abcd...");
    }
}
