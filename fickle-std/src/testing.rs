//! Testing utilities for Fickle.
//!
//! This module provides utilities to make testing weighted dispatch easier.
//!
//! # Features
//!
//! - [`FixedDraw`]: A random source that always returns the same value
//! - [`ScriptedDraw`]: A random source that replays a list of draws
//! - [`CallCounter`]: Shared per-variant invocation counts

use crate::shapes::{BoxRunner, runner};
use fickle_core::RandomSource;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Fixed Draw
// ============================================================================

/// A random source that always returns the same draw.
///
/// Values outside `[0, 1)` are passed through untouched, which makes it
/// possible to exercise the baseline fallback of an exhausted walk.
///
/// # Example
///
/// ```rust
/// use fickle_core::RandomSource;
/// use fickle_std::testing::FixedDraw;
///
/// let draw = FixedDraw::new(0.3);
/// assert_eq!(draw.next_f64(), 0.3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw {
    value: f64,
}

impl FixedDraw {
    /// Create a source returning `value` on every draw.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedDraw {
    fn next_f64(&self) -> f64 {
        self.value
    }
}

// ============================================================================
// Scripted Draw
// ============================================================================

/// A random source that replays a script of draws, wrapping around at the
/// end.
#[derive(Debug)]
pub struct ScriptedDraw {
    script: Vec<f64>,
    cursor: AtomicUsize,
}

impl ScriptedDraw {
    /// Create a source from a non-empty script.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<f64>) -> Self {
        assert!(!script.is_empty(), "script must contain at least one draw");
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomSource for ScriptedDraw {
    fn next_f64(&self) -> f64 {
        let position = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.script[position % self.script.len()]
    }
}

// ============================================================================
// Call Counter
// ============================================================================

/// Invocation counts for a fixed number of variant slots.
///
/// Clones share the same counts, so runners handed to a dispatcher report
/// back to the counter kept by the test.
///
/// # Example
///
/// ```rust
/// use fickle_std::{shapes::RunnerDispatcher, testing::CallCounter};
///
/// let counter = CallCounter::new(2);
/// let dispatcher =
///     RunnerDispatcher::equal_weights([counter.runner(0), counter.runner(1)]).unwrap();
///
/// dispatcher.dispatch_baseline(());
/// assert_eq!(counter.counts(), vec![1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct CallCounter {
    slots: Arc<Vec<AtomicUsize>>,
}

impl CallCounter {
    /// Create a counter with `slots` zeroed slots.
    pub fn new(slots: usize) -> Self {
        Self {
            slots: Arc::new((0..slots).map(|_| AtomicUsize::new(0)).collect()),
        }
    }

    /// Record one call against `slot`.
    pub fn hit(&self, slot: usize) {
        self.slots[slot].fetch_add(1, Ordering::SeqCst);
    }

    /// Calls recorded against `slot`.
    pub fn count(&self, slot: usize) -> usize {
        self.slots[slot].load(Ordering::SeqCst)
    }

    /// All counts in slot order.
    pub fn counts(&self) -> Vec<usize> {
        self.slots
            .iter()
            .map(|slot| slot.load(Ordering::SeqCst))
            .collect()
    }

    /// Calls across every slot.
    pub fn total(&self) -> usize {
        self.counts().iter().sum()
    }

    /// Ratio of calls between two slots.
    pub fn ratio(&self, numerator: usize, denominator: usize) -> f64 {
        self.count(numerator) as f64 / self.count(denominator) as f64
    }

    /// Reset every slot to zero.
    pub fn reset(&self) {
        for slot in self.slots.iter() {
            slot.store(0, Ordering::SeqCst);
        }
    }

    /// A runner that records a call against `slot` each time it runs.
    pub fn runner(&self, slot: usize) -> BoxRunner {
        let counter = self.clone();
        runner(move || counter.hit(slot))
    }
}
