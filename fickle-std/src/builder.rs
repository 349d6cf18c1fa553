//! Builder for configuring a [`Dispatcher`].

use crate::{dispatcher::Dispatcher, random::ThreadRandom};
use fickle_core::{ChaosResult, RandomSource, Variant};

/// Builder for constructing a [`Dispatcher`].
///
/// Variants are validated as they are added but errors are held until
/// [`build`](Self::build), so a whole configuration can be written as one
/// chain.
///
/// # Example
///
/// ```rust
/// use fickle_std::{Dispatcher, random::SeededRandom, shapes::{BoxRunner, runner}};
///
/// let dispatcher = Dispatcher::<BoxRunner>::builder()
///     .name("payment_gateway")
///     .variant(runner(|| {}), 0.98)
///     .variant(runner(|| {}), 0.02)
///     .random_source(SeededRandom::new(7))
///     .local_chaos(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(dispatcher.name(), "payment_gateway");
/// assert!(!dispatcher.is_local_chaos_enabled());
/// ```
pub struct DispatcherBuilder<F, S = ThreadRandom> {
    variants: Vec<ChaosResult<Variant<F>>>,
    local_chaos: bool,
    name: &'static str,
    source: S,
}

impl<F> Default for DispatcherBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> DispatcherBuilder<F> {
    /// Create an empty builder drawing from [`ThreadRandom`].
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
            local_chaos: true,
            name: "dispatcher",
            source: ThreadRandom,
        }
    }
}

impl<F, S> DispatcherBuilder<F, S> {
    /// Add a callable with its weight. The first variant is the baseline.
    pub fn variant(mut self, callable: F, weight: f64) -> Self {
        self.variants.push(Variant::new(callable, weight));
        self
    }

    /// Add a callable that may be absent.
    ///
    /// An absent callable is a configuration error reported by
    /// [`build`](Self::build), unlike [`push`](Self::push) which skips `None`.
    pub fn variant_opt(mut self, callable: Option<F>, weight: f64) -> Self {
        self.variants.push(Variant::from_option(callable, weight));
        self
    }

    /// Add a pre-built variant. `None` is skipped.
    pub fn push(mut self, variant: impl Into<Option<Variant<F>>>) -> Self {
        if let Some(variant) = variant.into() {
            self.variants.push(Ok(variant));
        }
        self
    }

    /// Initial state of the local chaos flag (default `true`).
    pub fn local_chaos(mut self, enabled: bool) -> Self {
        self.local_chaos = enabled;
        self
    }

    /// Label used in log events.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Replace the random source.
    pub fn random_source<S2: RandomSource>(self, source: S2) -> DispatcherBuilder<F, S2> {
        DispatcherBuilder {
            variants: self.variants,
            local_chaos: self.local_chaos,
            name: self.name,
            source,
        }
    }
}

impl<F, S: RandomSource> DispatcherBuilder<F, S> {
    /// Build the dispatcher.
    ///
    /// Reports the first invalid variant, then applies the same checks as
    /// [`Dispatcher::new`].
    pub fn build(self) -> ChaosResult<Dispatcher<F, S>> {
        let variants = self.variants.into_iter().collect::<ChaosResult<Vec<_>>>()?;
        Dispatcher::from_parts(variants, self.local_chaos, self.name, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        shapes::BoxRunner,
        testing::{CallCounter, FixedDraw},
    };
    use fickle_core::{ArgumentError, ChaosError};

    #[test]
    fn test_defaults() {
        let counter = CallCounter::new(1);
        let dispatcher = DispatcherBuilder::new()
            .variant(counter.runner(0), 1.0)
            .build()
            .unwrap();

        assert_eq!(dispatcher.name(), "dispatcher");
        assert!(dispatcher.is_local_chaos_enabled());
        assert_eq!(dispatcher.num_functions(), 1);
    }

    #[test]
    fn test_push_skips_absent() {
        let counter = CallCounter::new(2);
        let dispatcher = DispatcherBuilder::<BoxRunner>::new()
            .push(Option::<Variant<BoxRunner>>::None)
            .push(Variant::new(counter.runner(0), 0.5).unwrap())
            .push(Some(Variant::new(counter.runner(1), 0.5).unwrap()))
            .build()
            .unwrap();

        assert_eq!(dispatcher.num_functions(), 2);
        assert_eq!(dispatcher.range(), 1.0);
    }

    #[test]
    fn test_first_error_wins() {
        let counter = CallCounter::new(3);
        let err = DispatcherBuilder::new()
            .variant(counter.runner(0), 1.0)
            .variant(counter.runner(1), -1.0)
            .variant(counter.runner(2), f64::NAN)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ChaosError::InvalidArgument(ArgumentError::NonPositiveWeight(-1.0))
        );
    }

    #[test]
    fn test_variant_opt_requires_callable() {
        let counter = CallCounter::new(1);
        let dispatcher = DispatcherBuilder::new()
            .variant_opt(Some(counter.runner(0)), 2.0)
            .build()
            .unwrap();
        assert_eq!(dispatcher.range(), 2.0);

        let err = DispatcherBuilder::<BoxRunner>::new()
            .variant_opt(Some(counter.runner(0)), 1.0)
            .variant_opt(None, 1.0)
            .build()
            .unwrap_err();
        assert!(err.is_null_reference());
    }

    #[test]
    fn test_empty_builder() {
        let err = DispatcherBuilder::<BoxRunner>::new().build().unwrap_err();
        assert_eq!(err, ChaosError::InvalidArgument(ArgumentError::NoVariants));
    }

    #[test]
    fn test_custom_source_and_flag() {
        let counter = CallCounter::new(2);
        let mut dispatcher = DispatcherBuilder::new()
            .variant(counter.runner(0), 0.5)
            .variant(counter.runner(1), 0.5)
            .random_source(FixedDraw::new(0.75))
            .local_chaos(false)
            .build()
            .unwrap();

        // Local chaos is off, so dispatch stays on the baseline.
        dispatcher.dispatch(());
        assert_eq!(counter.counts(), vec![1, 0]);

        assert!(!dispatcher.enable_chaos());
        dispatcher.dispatch_forced(());
        assert_eq!(counter.counts(), vec![1, 1]);
    }
}
