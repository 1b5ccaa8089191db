//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning every frame.
//! Layout runs once per frame, so a malformed style string would otherwise
//! be reported sixty times a second.
//!
//! Every emitted warning is also recorded, so hosts and tests can ask
//! whether a given condition was reported without scraping stderr.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned lock only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Report a recoverable condition (prints once per unique message).
///
/// # Example
/// ```
/// use tessera_common::warning::{warn_once, was_warned};
///
/// warn_once("Units", "invalid number '12xx'");
/// assert!(was_warned("Units", "invalid number '12xx'"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Tessera {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once(component, message)` has fired since the last
/// [`clear_warnings`].
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Clear all recorded warnings (call when loading a new scene)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
