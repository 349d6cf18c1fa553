//! # Call Shape (Invoke)
//!
//! The abstraction every variant is dispatched through. Arguments travel as
//! a tuple so a single trait covers every arity:
//!
//! | Shape        | Callable          | `Args`     |
//! |--------------|-------------------|------------|
//! | runner       | `Fn()`            | `()`       |
//! | supplier     | `Fn() -> R`       | `()`       |
//! | consumer     | `Fn(A)`           | `(A,)`     |
//! | function     | `Fn(A) -> R`      | `(A,)`     |
//! | bi-consumer  | `Fn(A, B)`        | `(A, B)`   |
//! | bi-function  | `Fn(A, B) -> R`   | `(A, B)`   |
//!
//! Side-effecting shapes are simply the `R = ()` case.

/// Something that can be called with a fixed tuple of arguments.
///
/// Implemented for every closure, function pointer and boxed `dyn Fn` of
/// arity zero, one or two. Implement it by hand to dispatch to a struct.
///
/// # Example
///
/// ```rust
/// use fickle_core::Invoke;
///
/// let double = |x: i32| x * 2;
/// assert_eq!(double.invoke((21,)), 42);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked with arguments `{Args}`",
    label = "missing `Invoke<{Args}>` implementation",
    note = "Arguments are passed as a tuple: `()`, `(a,)` or `(a, b)`."
)]
pub trait Invoke<Args> {
    /// The value produced by the call, `()` for side-effecting shapes.
    type Output;

    /// Calls the underlying function.
    fn invoke(&self, args: Args) -> Self::Output;
}

impl<F, R> Invoke<()> for F
where
    F: Fn() -> R,
{
    type Output = R;

    fn invoke(&self, _args: ()) -> R {
        (self)()
    }
}

impl<F, A, R> Invoke<(A,)> for F
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn invoke(&self, (a,): (A,)) -> R {
        (self)(a)
    }
}

impl<F, A, B, R> Invoke<(A, B)> for F
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    fn invoke(&self, (a, b): (A, B)) -> R {
        (self)(a, b)
    }
}
