//! Adapters that lift ordinary functions into the `Optional`/`Outcome` algebra
//!
//! Legacy code signals trouble in two ways this crate does not: by panicking,
//! and by returning a `None` sentinel. The adapters here wrap such functions so
//! their callers get data instead:
//!
//! - [`resultify`] turns a function that may panic into one returning
//!   `Outcome<R, PanicError>`.
//! - [`optionalify`] turns a function that may panic or return `None` into one
//!   returning `Optional<T>`.
//!
//! Wrapped functions of any arity from 0 to 8 are supported. Arguments are
//! passed to `call` as a tuple, and closures need their parameter types spelled
//! out because nothing constrains them at the point of wrapping.
//!
//! Captured panics still run the process panic hook (which prints to stderr by
//! default) before they are turned into data.
//!
//! # Examples
//!
//! ```
//! use shoal::adapt::{optionalify, resultify};
//! use shoal::{Optional, Outcome};
//! use std::collections::HashMap;
//!
//! fn divide(a: i32, b: i32) -> i32 {
//!     a / b
//! }
//!
//! let divide = resultify(divide);
//! assert_eq!(divide.call((10, 2)), Outcome::success(5));
//! assert!(divide.call((10, 0)).is_failure());
//!
//! let ports: HashMap<&str, u16> = HashMap::from([("http", 80)]);
//! let lookup = optionalify(|key: &str| ports.get(key).copied());
//! assert_eq!(lookup.call(("http",)), Optional::present(80));
//! assert_eq!(lookup.call(("gopher",)), Optional::empty());
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::PanicError;
use crate::{Optional, Outcome};

/// A function that can be invoked with its arguments packed into a tuple.
///
/// Implemented for every `Fn` of arity 0 through 8, so adapters can be generic
/// over the argument list without knowing the arity.
///
/// # Example
///
/// ```
/// use shoal::adapt::Callable;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// assert_eq!(add.invoke((2, 3)), 5);
/// assert_eq!((|| "constant").invoke(()), "constant");
/// ```
pub trait Callable<Args> {
    /// The wrapped function's return type.
    type Output;

    /// Call the function with unpacked `args`.
    fn invoke(&self, args: Args) -> Self::Output;
}

// Implements Callable for Fn of each arity; the argument tuple is destructured
// into bindings that reuse the type parameter names.
macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg),*> Callable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
impl_callable!(A1, A2, A3, A4, A5, A6, A7);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8);

/// A return value that may stand for "no value".
///
/// [`optionalify`] maps `None`/`Empty` returns to `Optional::Empty` and anything
/// else to `Optional::Present`.
pub trait Nullable {
    /// The type of a non-null value.
    type Value;

    /// Convert into an [`Optional`], treating the null sentinel as `Empty`.
    fn into_optional(self) -> Optional<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_optional(self) -> Optional<T> {
        Optional::from_option(self)
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    fn into_optional(self) -> Optional<T> {
        self
    }
}

/// Wrap `f` so that panics become `Failure(PanicError)`.
///
/// See [`Resultified::call`].
///
/// # Example
///
/// ```
/// use shoal::adapt::resultify;
/// use shoal::Outcome;
///
/// let parse = resultify(|s: &str| s.parse::<u8>().expect("not a byte"));
///
/// assert_eq!(parse.call(("42",)), Outcome::success(42));
///
/// let err = parse.call(("999",)).unwrap_err();
/// assert!(err.message().starts_with("not a byte"));
/// ```
pub fn resultify<F>(f: F) -> Resultified<F> {
    Resultified { f }
}

/// Wrap `f` so that `None` returns and panics become `Optional::Empty`.
///
/// Panics are caught by default; use [`Optionalified::catch_panics`] to let them
/// propagate instead.
///
/// # Example
///
/// ```
/// use shoal::adapt::optionalify;
/// use shoal::Optional;
///
/// let first_char = optionalify(|s: &str| s.chars().next());
///
/// assert_eq!(first_char.call(("hey",)), Optional::present('h'));
/// assert_eq!(first_char.call(("",)), Optional::empty());
/// ```
pub fn optionalify<F>(f: F) -> Optionalified<F> {
    Optionalified {
        f,
        catch_panics: true,
    }
}

/// A function wrapped by [`resultify`].
#[derive(Clone, Copy)]
pub struct Resultified<F> {
    f: F,
}

impl<F> Resultified<F> {
    /// Call the wrapped function.
    ///
    /// A normal return becomes `Success(value)`. A panic inside the function is
    /// caught and returned as `Failure(PanicError)`; this method never panics
    /// itself.
    ///
    /// # Example
    ///
    /// ```
    /// use shoal::adapt::resultify;
    ///
    /// let divide = resultify(|a: i32, b: i32| a / b);
    /// let err = divide.call((1, 0)).unwrap_err();
    ///
    /// assert_eq!(err.message(), "attempt to divide by zero");
    /// ```
    pub fn call<Args>(&self, args: Args) -> Outcome<<F as Callable<Args>>::Output, PanicError>
    where
        F: Callable<Args>,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| self.f.invoke(args))) {
            Ok(value) => Outcome::Success(value),
            Err(payload) => {
                let error = PanicError::from_payload(payload);
                log_captured("resultify", &error);
                Outcome::Failure(error)
            }
        }
    }

    /// Unwrap the adapter, returning the original function.
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> fmt::Debug for Resultified<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resultified").finish_non_exhaustive()
    }
}

/// A function wrapped by [`optionalify`].
#[derive(Clone, Copy)]
pub struct Optionalified<F> {
    f: F,
    catch_panics: bool,
}

impl<F> Optionalified<F> {
    /// Choose whether panics in the wrapped function become `Empty` (`true`, the
    /// default) or propagate to the caller unmodified (`false`).
    ///
    /// # Example
    ///
    /// ```should_panic
    /// use shoal::adapt::optionalify;
    ///
    /// let strict = optionalify(|| -> Option<i32> { panic!("backend unreachable") })
    ///     .catch_panics(false);
    ///
    /// strict.call(()); // panics with "backend unreachable"
    /// ```
    pub fn catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Shorthand for `catch_panics(false)`.
    pub fn propagate_panics(self) -> Self {
        self.catch_panics(false)
    }

    /// Whether panics are converted to `Empty`.
    pub fn catches_panics(&self) -> bool {
        self.catch_panics
    }

    /// Call the wrapped function.
    ///
    /// A `None`/`Empty` return becomes `Empty`, any other return `Present`. When
    /// panics are caught they also become `Empty`; otherwise they unwind through
    /// this call.
    pub fn call<Args>(
        &self,
        args: Args,
    ) -> Optional<<<F as Callable<Args>>::Output as Nullable>::Value>
    where
        F: Callable<Args>,
        <F as Callable<Args>>::Output: Nullable,
    {
        let returned = if self.catch_panics {
            match panic::catch_unwind(AssertUnwindSafe(|| self.f.invoke(args))) {
                Ok(returned) => returned,
                Err(payload) => {
                    log_captured("optionalify", &PanicError::from_payload(payload));
                    return Optional::Empty;
                }
            }
        } else {
            self.f.invoke(args)
        };

        let optional = returned.into_optional();
        if optional.is_empty() {
            log_null_return("optionalify");
        }
        optional
    }

    /// Unwrap the adapter, returning the original function.
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> fmt::Debug for Optionalified<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optionalified")
            .field("catch_panics", &self.catch_panics)
            .finish_non_exhaustive()
    }
}

fn log_captured(adapter: &'static str, error: &PanicError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(adapter = adapter, error = %error, "captured panic from wrapped function");
    #[cfg(not(feature = "tracing"))]
    let _ = (adapter, error);
}

fn log_null_return(adapter: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(adapter = adapter, "wrapped function returned no value");
    #[cfg(not(feature = "tracing"))]
    let _ = adapter;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn divide(a: i32, b: i32) -> i32 {
        a / b
    }

    #[test]
    fn test_callable_arities() {
        assert_eq!((|| 1).invoke(()), 1);
        assert_eq!((|a: i32| a + 1).invoke((1,)), 2);
        assert_eq!(divide.invoke((9, 3)), 3);
        assert_eq!(
            (|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
                a + b + c + d + e + f + g + h
            })
            .invoke((1, 1, 1, 1, 1, 1, 1, 1)),
            8
        );
    }

    #[test]
    fn test_resultify_success() {
        assert_eq!(resultify(divide).call((10, 2)), Outcome::success(5));
    }

    #[test]
    fn test_resultify_captures_division_by_zero() {
        let err = resultify(divide).call((10, 0)).unwrap_err();
        assert_eq!(err, PanicError::new("attempt to divide by zero"));
    }

    #[test]
    fn test_resultify_captures_formatted_panic() {
        let checked = resultify(|n: u32| {
            if n > 3 {
                panic!("{} is too large", n);
            }
            n
        });
        assert_eq!(checked.call((2,)), Outcome::success(2));
        assert_eq!(
            checked.call((7,)),
            Outcome::failure(PanicError::new("7 is too large"))
        );
    }

    #[test]
    fn test_resultify_reusable_after_panic() {
        let adapted = resultify(divide);
        assert!(adapted.call((1, 0)).is_failure());
        assert_eq!(adapted.call((8, 4)), Outcome::success(2));
    }

    #[test]
    fn test_resultify_into_inner() {
        let adapted = resultify(divide);
        let original = adapted.into_inner();
        assert_eq!(original(6, 3), 2);
    }

    #[test]
    fn test_optionalify_maps_none_to_empty() {
        let table: HashMap<&str, i32> = HashMap::from([("a", 1)]);
        let lookup = optionalify(|key: &str| table.get(key).copied()).catch_panics(false);

        assert_eq!(lookup.call(("a",)), Optional::present(1));
        assert_eq!(lookup.call(("b",)), Optional::empty());
    }

    #[test]
    #[should_panic(expected = "lookup backend failed")]
    fn test_optionalify_propagates_when_not_catching() {
        let lookup = optionalify(|_: &str| -> Option<i32> { panic!("lookup backend failed") })
            .propagate_panics();
        lookup.call(("a",));
    }

    #[test]
    fn test_optionalify_catches_by_default() {
        let lookup = optionalify(|_: &str| -> Option<i32> { panic!("lookup backend failed") });
        assert!(lookup.catches_panics());
        assert_eq!(lookup.call(("a",)), Optional::empty());
    }

    #[test]
    fn test_optionalify_accepts_optional_returns() {
        let half = optionalify(|n: i32| {
            if n % 2 == 0 {
                Optional::present(n / 2)
            } else {
                Optional::empty()
            }
        });
        assert_eq!(half.call((8,)), Optional::present(4));
        assert_eq!(half.call((7,)), Optional::empty());
    }

    #[test]
    fn test_optionalify_calls_once_per_call() {
        let calls = Cell::new(0);
        let counted = optionalify(|| {
            calls.set(calls.get() + 1);
            Some(())
        });
        counted.call(());
        counted.call(());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_debug_output() {
        let adapted = optionalify(|| Some(1)).catch_panics(false);
        assert_eq!(
            format!("{:?}", adapted),
            "Optionalified { catch_panics: false, .. }"
        );
        assert_eq!(format!("{:?}", resultify(divide)), "Resultified { .. }");
    }
}
