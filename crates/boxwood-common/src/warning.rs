//! Style engine warnings with colored terminal output.
//!
//! CSS is forgiving: malformed and unknown declarations are dropped rather
//! than reported as errors. This module is where those drops become visible.
//! Each distinct message is printed once until [`clear_warnings`] is called.
//!
//! Messages carry property names taken from the input, so a long-lived host
//! should call [`clear_warnings`] between stylesheets. At most
//! [`MAX_RECORDED_WARNINGS`] distinct messages are kept; once the limit is
//! reached, further new messages are dropped and a single notice says so.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Set of warnings already emitted, keyed by `"[component] message"`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but nothing is printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Set once the limit notice has been printed.
static LIMIT_REACHED: AtomicBool = AtomicBool::new(false);

/// Upper bound on the number of distinct warnings kept between
/// [`clear_warnings`] calls.
pub const MAX_RECORDED_WARNINGS: usize = 1024;

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Report a dropped declaration or unsupported feature (printed once per
/// unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported unit 'vmin' in margin-left");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = {
        let mut guard = warned();
        let set = guard.get_or_insert_with(HashSet::new);
        if set.len() >= MAX_RECORDED_WARNINGS && !set.contains(&key) {
            drop(guard);
            report_limit();
            return;
        }
        set.insert(key)
    };

    if first_time && !QUIET.load(Ordering::Relaxed) {
        eprintln!(
            "{}",
            format!("[Boxwood {component}] ⚠ {message}").yellow()
        );
    }
}

fn report_limit() {
    if !LIMIT_REACHED.swap(true, Ordering::Relaxed) && !QUIET.load(Ordering::Relaxed) {
        let notice =
            format!("[Boxwood] ⚠ over {MAX_RECORDED_WARNINGS} warnings, further ones are not shown");
        eprintln!("{}", notice.yellow());
    }
}

/// Silence (or re-enable) printing. Warnings are recorded either way.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Returns true if this exact warning has been recorded.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    warned().as_ref().is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings. Hosts should call this before processing a
/// new stylesheet.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
    LIMIT_REACHED.store(false, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded_once() {
        set_quiet(true);
        warn_once("Test", "recorded once");
        warn_once("Test", "recorded once");
        assert!(was_warned("Test", "recorded once"));
        assert!(!was_warned("Other", "recorded once"));
        assert_eq!(warning_count(), 1);

        clear_warnings();
        assert_eq!(warning_count(), 0);
        assert!(!was_warned("Test", "recorded once"));

        // Distinct messages beyond the limit are not kept.
        for i in 0..MAX_RECORDED_WARNINGS + 10 {
            warn_once("Test", &format!("unknown property 'x-{i}'"));
        }
        assert_eq!(warning_count(), MAX_RECORDED_WARNINGS);
        assert!(was_warned("Test", "unknown property 'x-0'"));
        let overflow = format!("unknown property 'x-{MAX_RECORDED_WARNINGS}'");
        assert!(!was_warned("Test", &overflow));

        clear_warnings();
        assert_eq!(warning_count(), 0);
    }
}
