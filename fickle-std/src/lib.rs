//! # fickle-std
//!
//! Standard implementations for the Fickle weighted chaos dispatcher.
//!
//! This crate provides:
//! - **Dispatching**: [`Dispatcher`], [`DispatcherBuilder`]
//! - **Global switch**: process-wide enable/disable in [`global`]
//! - **Random sources**: [`ThreadRandom`], [`SeededRandom`]
//! - **Call shapes**: boxed callable aliases and entry points in [`shapes`]
//! - **Testing**: scripted draws and call counters in [`testing`]
//!
//! [`ThreadRandom`]: random::ThreadRandom
//! [`SeededRandom`]: random::SeededRandom

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use fickle_core;

// Modules
pub mod builder;
pub mod dispatcher;
pub mod global;
pub mod random;
pub mod shapes;
pub mod testing;

pub use builder::DispatcherBuilder;
pub use dispatcher::{Dispatcher, equal_weight_variants};
