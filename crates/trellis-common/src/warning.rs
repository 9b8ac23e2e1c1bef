//! Diagnostics with colored terminal output.
//!
//! Messages are deduplicated so that asking about the same unknown tag or
//! attribute many times produces a single line on stderr.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Records `message` for `component` and reports whether it is new.
///
/// Does not print. Split out of [`warn_once`] so the deduplication can be
/// observed without writing to stderr.
pub fn record_warning(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a questionable input (prints once per unique message).
///
/// Returns `true` if the warning was printed by this call.
///
/// # Example
/// ```ignore
/// warn_once("Content", "unknown element <blink>; treating as flow content");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let is_new = record_warning(component, message);
    if is_new {
        eprintln!("{YELLOW}[Trellis {component}] ⚠ {message}{RESET}");
    }
    is_new
}

/// Forget every recorded warning.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so that `clear_warnings` cannot race with other assertions
    // on the shared set.
    #[test]
    fn test_record_warning_deduplicates_until_cleared() {
        let message = "unknown element <test-dedup>";
        assert!(record_warning("Test", message));
        assert!(!record_warning("Test", message));
        // Same message from a different component is a different warning.
        assert!(record_warning("Other", message));

        clear_warnings();
        assert!(record_warning("Test", message));
    }
}
