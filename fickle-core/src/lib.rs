//! # fickle-core
//!
//! Core traits for the Fickle weighted chaos dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to describe variants, not run them. The dispatcher
//! itself lives in `fickle-std`.
//!
//! # Building Blocks
//!
//! ## Call Shape ([`Invoke`])
//!
//! The one capability every variant needs: "call me with this tuple of
//! arguments". Plain closures and boxed `dyn Fn` objects implement it for
//! zero, one and two arguments through blanket implementations.
//!
//! ## Weighted Variant ([`Variant`])
//!
//! A callable paired with a strictly positive, finite weight. Weights are
//! validated once, at construction, so nothing downstream re-checks them.
//!
//! ## Randomness ([`RandomSource`])
//!
//! The uniform `[0, 1)` draw used for weighted selection, kept behind a
//! trait so tests can script it.
//!
//! # Error Types
//!
//! - [`ChaosError`] - Top-level error type
//! - [`ArgumentError`] - Malformed weights and ranges

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod invoke;
mod random;
mod variant;

// Re-exports
pub use error::{ArgumentError, ChaosError, ChaosResult};
pub use invoke::Invoke;
pub use random::RandomSource;
pub use variant::{Variant, validate_weight};
