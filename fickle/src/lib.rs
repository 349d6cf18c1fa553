//! # fickle - Weighted Chaos Dispatcher
//!
//! `fickle` routes each call to one of several variants of a function, chosen
//! at random in proportion to per-variant weights. It is meant for injecting
//! controlled misbehaviour (timeouts, errors, alternate results) into code
//! paths under test, with switches to turn the chaos off again.
//!
//! ## Quick Start
//!
//! ```rust
//! use fickle::prelude::*;
//!
//! # fn main() -> Result<(), ChaosError> {
//! let mut fetch: SupplierDispatcher<Result<&str, &str>> = Dispatcher::new([
//!     Variant::new(supplier::<Result<&str, &str>, _>(|| Ok("payload")), 0.9)?,
//!     Variant::new(supplier::<Result<&str, &str>, _>(|| Err("timed out")), 0.1)?,
//! ])?;
//!
//! // Roughly one call in ten fails.
//! let _maybe = fetch.get();
//!
//! // With chaos off, the first variant always runs.
//! fetch.disable_chaos();
//! assert_eq!(fetch.get(), Ok("payload"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Switches
//!
//! Weighted selection only happens when both switches are on:
//!
//! - the process-wide switch: [`enable_global_chaos`], [`disable_global_chaos`]
//! - the per-dispatcher switch: [`Dispatcher::enable_chaos`],
//!   [`Dispatcher::disable_chaos`]
//!
//! Every toggle returns the previous value so callers can restore it.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use fickle_core::{
    // Errors
    ArgumentError,
    ChaosError,
    ChaosResult,
    // Call shape
    Invoke,
    // Randomness
    RandomSource,
    // Variants
    Variant,
    validate_weight,
};

// Dispatching
pub use fickle_std::{Dispatcher, DispatcherBuilder, equal_weight_variants};

// Global switch
pub use fickle_std::global::{
    GlobalChaosGuard, disable_global_chaos, enable_global_chaos, is_global_chaos_enabled,
};

/// Random sources.
pub mod random {
    pub use fickle_std::random::{SeededRandom, ThreadRandom};
}

/// Call-shape aliases, boxing helpers and entry points.
pub mod shapes {
    #![allow(clippy::wildcard_imports)]
    pub use fickle_std::shapes::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use fickle_std::testing::*;
}

/// Prelude module - common imports for Fickle.
///
/// # Usage
///
/// ```rust
/// use fickle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        ArgumentError,
        ChaosError,
        ChaosResult,
        // Dispatching
        Dispatcher,
        DispatcherBuilder,
        // Global switch
        GlobalChaosGuard,
        // Core traits
        Invoke,
        RandomSource,
        Variant,
        disable_global_chaos,
        enable_global_chaos,
        is_global_chaos_enabled,
    };
    pub use crate::shapes::{
        BiConsumerDispatcher, BiFunctionDispatcher, BoxBiConsumer, BoxBiFunction, BoxConsumer,
        BoxFunction, BoxRunner, BoxSupplier, ConsumerDispatcher, FunctionDispatcher,
        RunnerDispatcher, SupplierDispatcher, bi_consumer, bi_function, consumer, function, runner,
        supplier,
    };
}
