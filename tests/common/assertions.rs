//! Common assertion helpers for test output validation
//!
//! Provides predicates for the summary, warning and error messages printed
//! by bulk-rename.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the success summary
pub fn renamed_count(count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Renamed {count} item(s)"))
}

/// Creates a predicate that checks for the nothing-to-do summary
pub fn nothing_changed() -> impl Predicate<str> {
    predicates::str::contains("No names were changed")
}

/// Creates a predicate that checks for a warning containing `text`
pub fn has_warning(text: &str) -> impl Predicate<str> {
    predicates::str::contains("Warning:").and(predicates::str::contains(text.to_string()))
}

/// Creates a predicate that checks for an error banner containing `text`
pub fn has_error(text: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(text.to_string()))
}

/// Creates a predicate that checks for the edit list header
pub fn has_list_header() -> impl Predicate<str> {
    predicates::str::contains("Do NOT add or remove uncommented lines!")
}
