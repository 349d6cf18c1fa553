#![allow(dead_code)]

use fickle::{
    Dispatcher, Variant,
    random::SeededRandom,
    shapes::{BoxConsumer, BoxRunner, ConsumerDispatcher, consumer},
    testing::CallCounter,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Targets
// ============================================================================

/// Shared tallies mutated by consumer variants.
#[derive(Debug, Default)]
pub struct TestTarget {
    pub x: AtomicUsize,
    pub y: AtomicUsize,
    pub z: AtomicUsize,
}

impl TestTarget {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn y(&self) -> usize {
        self.y.load(Ordering::SeqCst)
    }

    pub fn z(&self) -> usize {
        self.z.load(Ordering::SeqCst)
    }

    pub fn ratio(&self) -> f64 {
        self.y() as f64 / self.z() as f64
    }
}

pub fn bump_y() -> BoxConsumer<Arc<TestTarget>> {
    consumer(|t: Arc<TestTarget>| {
        t.y.fetch_add(1, Ordering::SeqCst);
    })
}

pub fn bump_z() -> BoxConsumer<Arc<TestTarget>> {
    consumer(|t: Arc<TestTarget>| {
        t.z.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Dispatcher Fixtures
// ============================================================================

pub const ITERATIONS: usize = 1_000_000;

/// Runner dispatcher with one counted slot per weight, drawing from a seed.
pub fn counted(
    counter: &CallCounter,
    weights: &[f64],
    seed: u64,
) -> Dispatcher<BoxRunner, SeededRandom> {
    let variants: Vec<Variant<BoxRunner>> = weights
        .iter()
        .enumerate()
        .map(|(slot, &weight)| Variant::new(counter.runner(slot), weight).unwrap())
        .collect();
    Dispatcher::with_source(variants, SeededRandom::new(seed)).unwrap()
}

/// Consumer dispatcher over [`TestTarget`] variants, drawing from a seed.
pub fn targeted(
    variants: Vec<Variant<BoxConsumer<Arc<TestTarget>>>>,
    seed: u64,
) -> ConsumerDispatcher<Arc<TestTarget>, SeededRandom> {
    Dispatcher::with_source(variants, SeededRandom::new(seed)).unwrap()
}

/// Asserts `actual` is within `tolerance` (relative) of `expected`.
pub fn assert_ratio(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= expected * tolerance,
        "ratio {actual} is not within {}% of {expected}",
        tolerance * 100.0
    );
}
