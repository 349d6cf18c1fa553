//! Weighted dispatcher.
//!
//! Holds an ordered list of [`Variant`]s and picks one per call in
//! proportion to its weight. The variant at index 0 is the baseline: it runs
//! whenever chaos is switched off, locally or globally.

use crate::{builder::DispatcherBuilder, global, random::ThreadRandom};
use fickle_core::{ArgumentError, ChaosError, ChaosResult, Invoke, RandomSource, Variant};
use std::fmt;

/// Builds equal-weight variants from bare callables.
///
/// Every input slot, present or not, counts towards `N`, and each present
/// callable gets weight `1 / N`. Absent slots are skipped.
pub fn equal_weight_variants<F, I>(callables: I) -> ChaosResult<Vec<Variant<F>>>
where
    I: IntoIterator,
    I::Item: Into<Option<F>>,
{
    let slots: Vec<Option<F>> = callables.into_iter().map(Into::into).collect();
    let weight = 1.0 / slots.len() as f64;
    slots
        .into_iter()
        .flatten()
        .map(|callable| Variant::new(callable, weight))
        .collect()
}

/// Dispatches each call to one of several weighted variants.
///
/// # Enablement
///
/// Weighted selection only happens when [`will_run_with_chaos`] is `true`,
/// i.e. the process-wide flag (see [`global`]) and this dispatcher's local
/// flag are both on. Otherwise the baseline variant runs.
///
/// # Concurrency
///
/// Dispatching takes `&self` and never blocks unless the random source does.
/// Mutation (`add`, `enable_chaos`, `disable_chaos`) takes `&mut self`, so
/// the borrow checker keeps it from overlapping with dispatches.
///
/// # Example
///
/// ```rust
/// use fickle_core::Variant;
/// use fickle_std::shapes::{SupplierDispatcher, supplier};
///
/// type Fetch = Result<u32, &'static str>;
///
/// let fetch = SupplierDispatcher::<Fetch>::new([
///     Variant::new(supplier::<Fetch, _>(|| Ok(200)), 0.9).unwrap(),
///     Variant::new(supplier::<Fetch, _>(|| Err("connection reset")), 0.1).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(fetch.dispatch_baseline(()), Ok(200));
/// ```
///
/// [`will_run_with_chaos`]: Dispatcher::will_run_with_chaos
pub struct Dispatcher<F, S = ThreadRandom> {
    variants: Vec<Variant<F>>,
    range: f64,
    local_chaos: bool,
    name: &'static str,
    source: S,
}

impl<F> Dispatcher<F> {
    /// Create a dispatcher from weighted variants.
    ///
    /// Items may be `Variant<F>` or `Option<Variant<F>>`; `None` entries are
    /// skipped. The first remaining variant becomes the baseline.
    pub fn new<I>(variants: I) -> ChaosResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<Variant<F>>>,
    {
        Self::with_source(variants, ThreadRandom)
    }

    /// Create a dispatcher giving every callable the same weight.
    ///
    /// See [`equal_weight_variants`] for how absent callables are counted.
    pub fn equal_weights<I>(callables: I) -> ChaosResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<F>>,
    {
        Self::new(equal_weight_variants(callables)?)
    }

    /// Start configuring a dispatcher.
    pub fn builder() -> DispatcherBuilder<F> {
        DispatcherBuilder::new()
    }
}

impl<F, S: RandomSource> Dispatcher<F, S> {
    /// Create a dispatcher that draws from `source`.
    pub fn with_source<I>(variants: I, source: S) -> ChaosResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<Variant<F>>>,
    {
        let variants: Vec<Variant<F>> = variants.into_iter().filter_map(Into::into).collect();
        Self::from_parts(variants, true, "dispatcher", source)
    }

    pub(crate) fn from_parts(
        variants: Vec<Variant<F>>,
        local_chaos: bool,
        name: &'static str,
        source: S,
    ) -> ChaosResult<Self> {
        if variants.is_empty() {
            return Err(ArgumentError::NoVariants.into());
        }

        let range: f64 = variants.iter().map(Variant::weight).sum();
        if range.is_infinite() {
            return Err(ArgumentError::InfiniteRange.into());
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name,
                variants = variants.len(),
                range,
                local_chaos,
                "dispatcher constructed"
            );
        }

        Ok(Self {
            variants,
            range,
            local_chaos,
            name,
            source,
        })
    }

    /// Run the call through a weighted variant if chaos is on, otherwise
    /// through the baseline.
    pub fn dispatch<Args>(&self, args: Args) -> F::Output
    where
        F: Invoke<Args>,
    {
        if self.will_run_with_chaos() {
            self.dispatch_forced(args)
        } else {
            self.dispatch_baseline(args)
        }
    }

    /// Always run the baseline variant, whatever the flags say.
    pub fn dispatch_baseline<Args>(&self, args: Args) -> F::Output
    where
        F: Invoke<Args>,
    {
        self.baseline().invoke(args)
    }

    /// Always run a weighted draw, whatever the flags say.
    pub fn dispatch_forced<Args>(&self, args: Args) -> F::Output
    where
        F: Invoke<Args>,
    {
        let index = self.choose();
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(name = self.name, index, "variant selected");
        }
        self.variants[index].invoke(args)
    }

    /// Draw the index of the variant a forced dispatch would run.
    ///
    /// Scales a uniform draw by the range and walks the variants in
    /// insertion order, subtracting each weight until the draw falls under
    /// one. If rounding lets the walk run off the end, the baseline (index
    /// 0) is returned.
    pub fn choose(&self) -> usize {
        let mut draw = self.source.next_f64() * self.range;
        for (index, variant) in self.variants.iter().enumerate() {
            if draw < variant.weight() {
                return index;
            }
            draw -= variant.weight();
        }

        #[cfg(feature = "tracing")]
        {
            tracing::warn!(
                name = self.name,
                residual = draw,
                range = self.range,
                "weighted walk exhausted, falling back to baseline"
            );
        }
        0
    }

    /// Whether a call to [`dispatch`](Self::dispatch) would draw.
    ///
    /// `true` only when both the global and the local flags are on.
    pub fn will_run_with_chaos(&self) -> bool {
        global::is_global_chaos_enabled() && self.local_chaos
    }

    /// The random source used for draws.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<F, S> Dispatcher<F, S> {
    /// Append a callable with the given weight.
    ///
    /// Accepts `F` or `Option<F>`. Fails without touching the dispatcher if
    /// the weight is invalid, the callable is absent, or the new range would
    /// overflow.
    pub fn add(&mut self, callable: impl Into<Option<F>>, weight: f64) -> ChaosResult<&mut Self> {
        let variant = Variant::from_option(callable.into(), weight)?;
        self.push(variant)
    }

    /// Append a pre-built variant.
    ///
    /// Accepts `Variant<F>` or `Option<Variant<F>>`.
    pub fn add_variant(
        &mut self,
        variant: impl Into<Option<Variant<F>>>,
    ) -> ChaosResult<&mut Self> {
        let variant = variant
            .into()
            .ok_or(ChaosError::NullReference("chaos function cannot be null"))?;
        self.push(variant)
    }

    fn push(&mut self, variant: Variant<F>) -> ChaosResult<&mut Self> {
        let range = self.range + variant.weight();
        if range.is_infinite() {
            return Err(ArgumentError::InfiniteRange.into());
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = self.name,
                weight = variant.weight(),
                range,
                "variant added"
            );
        }

        self.variants.push(variant);
        self.range = range;
        Ok(self)
    }

    /// Turn local chaos on. Returns the previous local setting.
    pub fn enable_chaos(&mut self) -> bool {
        self.set_local_chaos(true)
    }

    /// Turn local chaos off. Returns the previous local setting.
    pub fn disable_chaos(&mut self) -> bool {
        self.set_local_chaos(false)
    }

    fn set_local_chaos(&mut self, enabled: bool) -> bool {
        let previous = std::mem::replace(&mut self.local_chaos, enabled);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = self.name, enabled, previous, "local chaos toggled");
        }
        previous
    }

    /// The local flag alone, ignoring the global one.
    pub fn is_local_chaos_enabled(&self) -> bool {
        self.local_chaos
    }

    /// Sum of all variant weights.
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Number of registered variants.
    pub fn num_functions(&self) -> usize {
        self.variants.len()
    }

    /// Variant weights in insertion order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.variants.iter().map(Variant::weight)
    }

    /// All variants in insertion order.
    pub fn variants(&self) -> &[Variant<F>] {
        &self.variants
    }

    /// The variant that runs when chaos is off.
    pub fn baseline(&self) -> &Variant<F> {
        &self.variants[0]
    }

    /// Label used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<F, S> fmt::Debug for Dispatcher<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("weights", &self.weights().collect::<Vec<_>>())
            .field("range", &self.range)
            .field("local_chaos", &self.local_chaos)
            .finish_non_exhaustive()
    }
}
