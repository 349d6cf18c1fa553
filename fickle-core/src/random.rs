//! Random source trait.

/// A source of uniform draws used for weighted selection.
///
/// Implementations must return values in `[0.0, 1.0)` and be callable
/// concurrently through a shared reference.
pub trait RandomSource: Send + Sync {
    /// Draw a float in `[0.0, 1.0)`.
    fn next_f64(&self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for std::sync::Arc<S> {
    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }
}
