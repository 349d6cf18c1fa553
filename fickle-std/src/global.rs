//! Process-wide chaos switch.
//!
//! Every [`Dispatcher`](crate::Dispatcher) consults this flag before drawing:
//! chaos only runs when both the global flag and the dispatcher's own flag
//! are on. The flag starts enabled and lives for the whole process.

use std::sync::atomic::{AtomicBool, Ordering};

/// Atomic cell holding the process-wide flag.
///
/// Kept private so the only way to flip it is through the functions below.
struct GlobalSwitch {
    enabled: AtomicBool,
}

impl GlobalSwitch {
    const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    fn swap(&self, enabled: bool) -> bool {
        self.enabled.swap(enabled, Ordering::SeqCst)
    }

    fn get(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

static GLOBAL_CHAOS: GlobalSwitch = GlobalSwitch::new(true);

/// Enables chaos for every dispatcher in the process.
///
/// Returns the value the flag held before the call.
pub fn enable_global_chaos() -> bool {
    let previous = GLOBAL_CHAOS.swap(true);
    #[cfg(feature = "tracing")]
    {
        tracing::info!(previous, "global chaos enabled");
    }
    previous
}

/// Disables chaos for every dispatcher in the process.
///
/// Returns the value the flag held before the call.
pub fn disable_global_chaos() -> bool {
    let previous = GLOBAL_CHAOS.swap(false);
    #[cfg(feature = "tracing")]
    {
        tracing::info!(previous, "global chaos disabled");
    }
    previous
}

/// Reads the process-wide flag without changing it.
pub fn is_global_chaos_enabled() -> bool {
    GLOBAL_CHAOS.get()
}

/// Sets the global flag for a scope and restores the prior value on drop.
///
/// # Example
///
/// ```rust
/// use fickle_std::global::{GlobalChaosGuard, is_global_chaos_enabled};
///
/// let before = is_global_chaos_enabled();
/// {
///     let _calm = GlobalChaosGuard::set(false);
///     assert!(!is_global_chaos_enabled());
/// }
/// assert_eq!(is_global_chaos_enabled(), before);
/// ```
#[must_use = "the previous value is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct GlobalChaosGuard {
    previous: bool,
}

impl GlobalChaosGuard {
    /// Sets the global flag to `enabled`, remembering the old value.
    pub fn set(enabled: bool) -> Self {
        let previous = if enabled {
            enable_global_chaos()
        } else {
            disable_global_chaos()
        };
        Self { previous }
    }

    /// The value that will be restored on drop.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl Drop for GlobalChaosGuard {
    fn drop(&mut self) {
        if self.previous {
            enable_global_chaos();
        } else {
            disable_global_chaos();
        }
    }
}
