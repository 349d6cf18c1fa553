//! Call-shape adapters.
//!
//! A [`Dispatcher`] is generic over anything implementing
//! [`Invoke`](fickle_core::Invoke). Storing several different closures in one
//! dispatcher needs a common type, so this module names the boxed trait
//! objects for each shape, gives a helper to box a closure into each, and
//! adds shape-named entry points that pack arguments into the tuple
//! [`Dispatcher::dispatch`] expects.
//!
//! # Example
//!
//! ```rust
//! use fickle_core::Variant;
//! use fickle_std::shapes::{FunctionDispatcher, function};
//!
//! let lookup = FunctionDispatcher::<u32, Option<u32>>::new([
//!     Variant::new(function(|id: u32| Some(id * 10)), 0.95).unwrap(),
//!     Variant::new(function(|_: u32| None), 0.05).unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(lookup.dispatch_baseline((4,)), Some(40));
//! ```

use crate::{dispatcher::Dispatcher, random::ThreadRandom};
use fickle_core::RandomSource;

/// A boxed `Fn()`.
pub type BoxRunner = Box<dyn Fn() + Send + Sync>;
/// A boxed `Fn() -> R`.
pub type BoxSupplier<R> = Box<dyn Fn() -> R + Send + Sync>;
/// A boxed `Fn(A)`.
pub type BoxConsumer<A> = Box<dyn Fn(A) + Send + Sync>;
/// A boxed `Fn(A) -> R`.
pub type BoxFunction<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;
/// A boxed `Fn(A, B)`.
pub type BoxBiConsumer<A, B> = Box<dyn Fn(A, B) + Send + Sync>;
/// A boxed `Fn(A, B) -> R`.
pub type BoxBiFunction<A, B, R> = Box<dyn Fn(A, B) -> R + Send + Sync>;

/// Dispatcher over side-effecting, argument-less variants.
pub type RunnerDispatcher<S = ThreadRandom> = Dispatcher<BoxRunner, S>;
/// Dispatcher over argument-less variants producing `R`.
pub type SupplierDispatcher<R, S = ThreadRandom> = Dispatcher<BoxSupplier<R>, S>;
/// Dispatcher over variants consuming an `A`.
pub type ConsumerDispatcher<A, S = ThreadRandom> = Dispatcher<BoxConsumer<A>, S>;
/// Dispatcher over variants mapping `A` to `R`.
pub type FunctionDispatcher<A, R, S = ThreadRandom> =
    Dispatcher<BoxFunction<A, R>, S>;
/// Dispatcher over variants consuming an `A` and a `B`.
pub type BiConsumerDispatcher<A, B, S = ThreadRandom> =
    Dispatcher<BoxBiConsumer<A, B>, S>;
/// Dispatcher over variants mapping `A` and `B` to `R`.
pub type BiFunctionDispatcher<A, B, R, S = ThreadRandom> =
    Dispatcher<BoxBiFunction<A, B, R>, S>;

/// Box a closure as a [`BoxRunner`].
pub fn runner<F>(f: F) -> BoxRunner
where
    F: Fn() + Send + Sync + 'static,
{
    Box::new(f)
}

/// Box a closure as a [`BoxSupplier`].
pub fn supplier<R, F>(f: F) -> BoxSupplier<R>
where
    F: Fn() -> R + Send + Sync + 'static,
{
    Box::new(f)
}

/// Box a closure as a [`BoxConsumer`].
pub fn consumer<A, F>(f: F) -> BoxConsumer<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Box::new(f)
}

/// Box a closure as a [`BoxFunction`].
pub fn function<A, R, F>(f: F) -> BoxFunction<A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Box::new(f)
}

/// Box a closure as a [`BoxBiConsumer`].
pub fn bi_consumer<A, B, F>(f: F) -> BoxBiConsumer<A, B>
where
    F: Fn(A, B) + Send + Sync + 'static,
{
    Box::new(f)
}

/// Box a closure as a [`BoxBiFunction`].
pub fn bi_function<A, B, R, F>(f: F) -> BoxBiFunction<A, B, R>
where
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    Box::new(f)
}

impl<S: RandomSource> Dispatcher<BoxRunner, S> {
    /// Dispatch with no arguments.
    pub fn run(&self) {
        self.dispatch(())
    }
}

impl<R, S: RandomSource> Dispatcher<BoxSupplier<R>, S> {
    /// Dispatch with no arguments and return the produced value.
    pub fn get(&self) -> R {
        self.dispatch(())
    }
}

impl<A, S: RandomSource> Dispatcher<BoxConsumer<A>, S> {
    /// Dispatch with one argument.
    pub fn accept(&self, a: A) {
        self.dispatch((a,))
    }
}

impl<A, R, S: RandomSource> Dispatcher<BoxFunction<A, R>, S> {
    /// Dispatch with one argument and return the produced value.
    pub fn apply(&self, a: A) -> R {
        self.dispatch((a,))
    }
}

impl<A, B, S: RandomSource> Dispatcher<BoxBiConsumer<A, B>, S> {
    /// Dispatch with two arguments.
    pub fn accept(&self, a: A, b: B) {
        self.dispatch((a, b))
    }
}

impl<A, B, R, S: RandomSource> Dispatcher<BoxBiFunction<A, B, R>, S> {
    /// Dispatch with two arguments and return the produced value.
    pub fn apply(&self, a: A, b: B) -> R {
        self.dispatch((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedDraw;
    use fickle_core::Variant;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_runner() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&hits);
        let dispatcher = RunnerDispatcher::<FixedDraw>::with_source(
            [Variant::new(
                runner(move || {
                    counted.fetch_add(1, Ordering::SeqCst);
                }),
                1.0,
            )
            .unwrap()],
            FixedDraw::new(0.0),
        )
        .unwrap();

        dispatcher.run();
        dispatcher.run();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_supplier_selects_by_draw() {
        let dispatcher = SupplierDispatcher::<&str, FixedDraw>::with_source(
            [
                Variant::new(supplier(|| "ok"), 0.5).unwrap(),
                Variant::new(supplier(|| "timeout"), 0.5).unwrap(),
            ],
            FixedDraw::new(0.9),
        )
        .unwrap();

        assert_eq!(dispatcher.dispatch_forced(()), "timeout");
        assert_eq!(dispatcher.dispatch_baseline(()), "ok");
    }

    #[test]
    fn test_consumer_and_function() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let consumers = ConsumerDispatcher::<i32, FixedDraw>::with_source(
            [Variant::new(consumer(move |x: i32| sink.lock().unwrap().push(x)), 1.0).unwrap()],
            FixedDraw::new(0.0),
        )
        .unwrap();
        consumers.accept(3);
        consumers.accept(4);
        assert_eq!(*seen.lock().unwrap(), vec![3, 4]);

        let functions = FunctionDispatcher::<i32, i32, FixedDraw>::with_source(
            [
                Variant::new(function(|x: i32| x + 1), 0.25).unwrap(),
                Variant::new(function(|x: i32| x * 100), 0.75).unwrap(),
            ],
            FixedDraw::new(0.5),
        )
        .unwrap();
        assert_eq!(functions.dispatch_forced((2,)), 200);
        assert_eq!(functions.dispatch_baseline((2,)), 3);
    }

    #[test]
    fn test_bi_shapes() {
        let total = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&total);
        let bi_consumers = BiConsumerDispatcher::<usize, usize, FixedDraw>::with_source(
            [Variant::new(
                bi_consumer(move |a: usize, b: usize| {
                    sink.fetch_add(a * b, Ordering::SeqCst);
                }),
                1.0,
            )
            .unwrap()],
            FixedDraw::new(0.0),
        )
        .unwrap();
        bi_consumers.accept(3, 4);
        assert_eq!(total.load(Ordering::SeqCst), 12);

        let bi_functions = BiFunctionDispatcher::<i32, i32, i32, FixedDraw>::with_source(
            [
                Variant::new(bi_function(|a: i32, b: i32| a + b), 0.5).unwrap(),
                Variant::new(bi_function(|a: i32, b: i32| a - b), 0.5).unwrap(),
            ],
            FixedDraw::new(0.75),
        )
        .unwrap();
        assert_eq!(bi_functions.dispatch_forced((5, 3)), 2);
        assert_eq!(bi_functions.dispatch_baseline((5, 3)), 8);
    }
}
