//! Utility functions for string formatting and manipulation.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{capitalize_first, contains_ignore_case, format_age, slug_to_title, truncate};
