//! Weighted variants.

use crate::{
    error::{ArgumentError, ChaosError, ChaosResult},
    invoke::Invoke,
};
use std::fmt;

/// Checks that `weight` can be used as a selection weight.
///
/// A weight must be finite and strictly positive. NaN and infinities are
/// reported before the sign check.
pub fn validate_weight(weight: f64) -> Result<f64, ArgumentError> {
    if weight.is_nan() || weight.is_infinite() {
        return Err(ArgumentError::NonFiniteWeight(weight));
    }
    if weight <= 0.0 {
        return Err(ArgumentError::NonPositiveWeight(weight));
    }
    Ok(weight)
}

/// A callable paired with its selection weight.
///
/// Immutable once built: the weight is validated in the constructor and
/// there is no way to change either half afterwards.
///
/// # Example
///
/// ```rust
/// use fickle_core::Variant;
///
/// let slow = Variant::new(|| "timeout", 0.1).unwrap();
/// assert_eq!(slow.weight(), 0.1);
/// assert_eq!(slow.invoke(()), "timeout");
/// ```
pub struct Variant<F> {
    weight: f64,
    callable: F,
}

impl<F> Variant<F> {
    /// Creates a variant from a callable and its weight.
    pub fn new(callable: F, weight: f64) -> ChaosResult<Self> {
        Self::from_option(Some(callable), weight)
    }

    /// Creates a variant from a possibly absent callable.
    ///
    /// The weight is checked first, so a bad weight wins over a missing
    /// callable.
    pub fn from_option(callable: Option<F>, weight: f64) -> ChaosResult<Self> {
        let weight = validate_weight(weight)?;
        let callable = callable.ok_or(ChaosError::NullReference("function cannot be null"))?;
        Ok(Self { weight, callable })
    }

    /// The selection weight of this variant.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// A reference to the wrapped callable.
    pub fn callable(&self) -> &F {
        &self.callable
    }

    /// Unwraps the variant into its callable.
    pub fn into_callable(self) -> F {
        self.callable
    }

    /// Calls the wrapped callable, returning whatever it returns.
    pub fn invoke<Args>(&self, args: Args) -> F::Output
    where
        F: Invoke<Args>,
    {
        self.callable.invoke(args)
    }
}

impl<F> fmt::Debug for Variant<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}
