//! A success-or-failure container.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It mirrors
//! [`Optional`](crate::Optional)'s combinator surface, parameterized over two
//! independent payload types, and converts to and from it:
//!
//! - [`Outcome::ok`] / [`Outcome::err`] keep one side as an `Optional`
//! - [`Optional::ok_or`](crate::Optional::ok_or) turns absence into a failure
//! - `transpose()` on either container swaps the nesting order
//!
//! # Outcome vs Result
//!
//! `Outcome` has the same shape as `std::result::Result`, and the two convert
//! losslessly through `From`. It exists so code can stay inside one consistent
//! combinator vocabulary (`Optional`/`Outcome`, `present`/`success`) and so that
//! extraction failures carry an [`UnwrapError`].
//!
//! # Examples
//!
//! ```rust
//! use shoal::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into()
//! }
//!
//! let port = parse_port("8080")
//!     .and_then(|p| {
//!         if p >= 1024 {
//!             Outcome::success(p)
//!         } else {
//!             Outcome::failure(format!("port {} is privileged", p))
//!         }
//!     })
//!     .unwrap_or(3000);
//! assert_eq!(port, 8080);
//!
//! assert!(parse_port("http").is_failure());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::UnwrapError;
use crate::Optional;

/// A value that is either `Success(T)` or `Failure(E)`.
///
/// # Example
///
/// ```rust
/// use shoal::Outcome;
///
/// let good: Outcome<i32, &str> = Outcome::success(3);
/// let bad: Outcome<i32, &str> = Outcome::failure("no");
///
/// match good {
///     Outcome::Success(v) => println!("got {}", v),
///     Outcome::Failure(e) => println!("failed: {}", e),
/// }
///
/// assert_eq!(bad.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The success variant
    Success(T),
    /// The failure variant
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a `Success` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let o: Outcome<i32, String> = Outcome::success(1);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a `Failure` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Create from a standard library `Result` (`Ok` becomes `Success`, `Err`
    /// becomes `Failure`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// assert_eq!(Outcome::from_result(Ok::<_, ()>(1)), Outcome::success(1));
    /// assert_eq!(Outcome::from_result(Err::<(), _>("e")), Outcome::failure("e"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    ///
    /// The predicate is not called on `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::success(2);
    /// assert!(x.is_success_and(|v| *v > 1));
    ///
    /// let y: Outcome<u32, &str> = Outcome::failure("hey");
    /// assert!(!y.is_success_and(|v| *v > 1));
    /// ```
    #[inline]
    pub fn is_success_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Success(value) => predicate(value),
            Outcome::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns `true` if this is a `Failure` whose error satisfies `predicate`.
    ///
    /// The predicate is not called on `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::failure("timeout");
    /// assert!(x.is_failure_and(|e| e.starts_with("time")));
    ///
    /// let y: Outcome<u32, &str> = Outcome::success(1);
    /// assert!(!y.is_failure_and(|_| true));
    /// ```
    #[inline]
    pub fn is_failure_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => predicate(error),
        }
    }

    // ========== Borrowing ==========

    /// Convert from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let mut o: Outcome<i32, i32> = Outcome::failure(1);
    /// if let Outcome::Failure(e) = o.as_mut() {
    ///     *e += 10;
    /// }
    /// assert_eq!(o, Outcome::failure(11));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    // ========== Conversion to Optional ==========

    /// Keep the success value as an [`Optional`], discarding any error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, Outcome};
    ///
    /// assert_eq!(Outcome::<u32, &str>::success(2).ok(), Optional::present(2));
    /// assert_eq!(Outcome::<u32, &str>::failure("no").ok(), Optional::empty());
    /// ```
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Outcome::Success(value) => Optional::Present(value),
            Outcome::Failure(_) => Optional::Empty,
        }
    }

    /// Keep the error as an [`Optional`], discarding any success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, Outcome};
    ///
    /// assert_eq!(Outcome::<u32, &str>::success(2).err(), Optional::empty());
    /// assert_eq!(Outcome::<u32, &str>::failure("no").err(), Optional::present("no"));
    /// ```
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Outcome::Success(_) => Optional::Empty,
            Outcome::Failure(error) => Optional::Present(error),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value, passing failures through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(21);
    /// let err: Outcome<i32, &str> = Outcome::failure("bad");
    ///
    /// assert_eq!(ok.map(|v| v * 2), Outcome::success(42));
    /// assert_eq!(err.map(|v| v * 2), Outcome::failure("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error, passing successes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let err: Outcome<i32, i32> = Outcome::failure(13);
    /// assert_eq!(err.map_err(|code| format!("error code {}", code)),
    ///            Outcome::failure("error code 13".to_string()));
    /// ```
    #[inline]
    pub fn map_err<F2, O>(self, op: O) -> Outcome<T, F2>
    where
        O: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Apply `f` to the success value, or return `default` on failure.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(_) => default,
        }
    }

    /// Fold both variants into a single value: `f` for the success value,
    /// `default` for the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let ok: Outcome<&str, &str> = Outcome::success("foo");
    /// let err: Outcome<&str, &str> = Outcome::failure("longer error");
    ///
    /// assert_eq!(ok.map_or_else(|e| e.len() * 100, |v| v.len()), 3);
    /// assert_eq!(err.map_or_else(|e| e.len() * 100, |v| v.len()), 1200);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => default(error),
        }
    }

    /// Call `f` with the success value, then return `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Call `f` with the error, then return `self` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let o: Outcome<i32, &str> = Outcome::failure("disk full");
    /// let o = o.inspect_err(|e| log.push(e.to_string()));
    ///
    /// assert_eq!(o, Outcome::failure("disk full"));
    /// assert_eq!(log, vec!["disk full".to_string()]);
    /// ```
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }

    // ========== Extractors ==========

    /// Return the success value, panicking with `"{msg}: {error:?}"` on failure.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust,should_panic
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::failure("emergency failure");
    /// x.expect("Testing expect"); // panics with `Testing expect: "emergency failure"`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    /// Return the success value, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Outcome::unwrap()` on a `Failure` value: {error:?}``.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// assert_eq!(Outcome::<u32, &str>::success(2).unwrap(), 2);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    /// Return the success value, or an [`UnwrapError`] with the message
    /// [`expect`](Outcome::expect) would panic with.
    #[inline]
    pub fn try_expect(self, msg: &str) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(UnwrapError::new(format!("{}: {:?}", msg, error))),
        }
    }

    /// Return the success value, or an [`UnwrapError`] with the message
    /// [`unwrap`](Outcome::unwrap) would panic with.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let err = Outcome::<u32, &str>::failure("gone").try_unwrap().unwrap_err();
    /// assert_eq!(
    ///     err.message(),
    ///     "called `Outcome::unwrap()` on a `Failure` value: \"gone\""
    /// );
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        self.try_expect("called `Outcome::unwrap()` on a `Failure` value")
    }

    /// Return the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success value or compute one from the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let count = |e: &str| e.len();
    /// assert_eq!(Outcome::<usize, &str>::success(2).unwrap_or_else(count), 2);
    /// assert_eq!(Outcome::<usize, &str>::failure("foo").unwrap_or_else(count), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => op(error),
        }
    }

    /// Return the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Return the error, panicking with `"{msg}: {value:?}"` on success.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self.try_expect_err(msg) {
            Ok(error) => error,
            Err(err) => err.raise(),
        }
    }

    /// Return the error, panicking on success.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Outcome::unwrap_err()` on a `Success` value: {value:?}``.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// assert_eq!(Outcome::<u32, &str>::failure("emergency").unwrap_err(), "emergency");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(err) => err.raise(),
        }
    }

    /// Return the error, or an [`UnwrapError`] with the message
    /// [`expect_err`](Outcome::expect_err) would panic with.
    #[inline]
    pub fn try_expect_err(self, msg: &str) -> Result<E, UnwrapError>
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => Err(UnwrapError::new(format!("{}: {:?}", msg, value))),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// Return the error, or an [`UnwrapError`] with the message
    /// [`unwrap_err`](Outcome::unwrap_err) would panic with.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: fmt::Debug,
    {
        self.try_expect_err("called `Outcome::unwrap_err()` on a `Success` value")
    }

    /// Infallible extraction of the success value.
    ///
    /// Not supported: there is no way to state that the failure side can never
    /// occur, so this always panics.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn into_ok(self) -> T {
        unimplemented!("`Outcome::into_ok()` is not supported")
    }

    /// Infallible extraction of the error.
    ///
    /// Not supported: there is no way to state that the success side can never
    /// occur, so this always panics.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn into_err(self) -> E {
        unimplemented!("`Outcome::into_err()` is not supported")
    }

    // ========== Chaining ==========

    /// Return `res` if this is a `Success`, otherwise pass the failure through.
    ///
    /// `res` is evaluated eagerly; use [`and_then`](Outcome::and_then) to defer it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::success(2);
    /// let y: Outcome<&str, &str> = Outcome::failure("late error");
    /// assert_eq!(x.and(y), Outcome::failure("late error"));
    ///
    /// let x: Outcome<u32, &str> = Outcome::failure("early error");
    /// let y: Outcome<&str, &str> = Outcome::success("foo");
    /// assert_eq!(x.and(y), Outcome::failure("early error"));
    /// ```
    #[inline]
    pub fn and<U>(self, res: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => res,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a fallible computation on the success value.
    ///
    /// `op` is never called on `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// fn sq_then_to_string(x: u32) -> Outcome<String, &'static str> {
    ///     match x.checked_mul(x) {
    ///         Some(sq) => Outcome::success(sq.to_string()),
    ///         None => Outcome::failure("overflowed"),
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(2).and_then(sq_then_to_string), Outcome::success("4".to_string()));
    /// assert_eq!(Outcome::success(1_000_000).and_then(sq_then_to_string), Outcome::failure("overflowed"));
    /// assert_eq!(Outcome::failure("not a number").and_then(sq_then_to_string), Outcome::failure("not a number"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => op(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Return `res` if this is a `Failure`, otherwise pass the success through.
    ///
    /// `res` is evaluated eagerly; use [`or_else`](Outcome::or_else) to defer it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::success(2);
    /// let y: Outcome<u32, &str> = Outcome::failure("late error");
    /// assert_eq!(x.or(y), Outcome::success(2));
    ///
    /// let x: Outcome<u32, &str> = Outcome::failure("early error");
    /// let y: Outcome<u32, &str> = Outcome::success(2);
    /// assert_eq!(x.or(y), Outcome::success(2));
    /// ```
    #[inline]
    pub fn or<F2>(self, res: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => res,
        }
    }

    /// Recover from a failure with a fallible computation on the error.
    ///
    /// `op` is never called on `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// fn retry_local(e: &'static str) -> Outcome<u32, String> {
    ///     if e == "remote down" {
    ///         Outcome::success(0)
    ///     } else {
    ///         Outcome::failure(e.to_uppercase())
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(7).or_else(retry_local), Outcome::success(7));
    /// assert_eq!(Outcome::failure("remote down").or_else(retry_local), Outcome::success(0));
    /// assert_eq!(Outcome::failure("bad").or_else(retry_local), Outcome::failure("BAD".to_string()));
    /// ```
    #[inline]
    pub fn or_else<F2, O>(self, op: O) -> Outcome<T, F2>
    where
        O: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => op(error),
        }
    }

    // ========== Iterator Support ==========

    /// Returns an iterator over the success value, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(7);
    /// let err: Outcome<i32, &str> = Outcome::failure("nothing");
    ///
    /// assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&7]);
    /// assert_eq!(err.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().ok().into_iter()
    }

    /// Returns a mutable iterator over the success value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.as_mut().ok().into_iter()
    }
}

impl<T, E> Outcome<&T, E> {
    /// Map an `Outcome<&T, E>` to an `Outcome<T, E>` by cloning the success value.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E>
    where
        T: Clone,
    {
        self.map(T::clone)
    }

    /// Map an `Outcome<&T, E>` to an `Outcome<T, E>` by copying the success value.
    #[inline]
    pub fn copied(self) -> Outcome<T, E>
    where
        T: Copy,
    {
        self.map(|value| *value)
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swap an `Outcome` of an `Optional` into an `Optional` of an `Outcome`.
    ///
    /// `Success(Empty)` collapses to `Empty`, `Success(Present(v))` becomes
    /// `Present(Success(v))` and `Failure(e)` becomes `Present(Failure(e))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, Outcome};
    ///
    /// let x: Outcome<Optional<i32>, &str> = Outcome::success(Optional::present(5));
    /// assert_eq!(x.transpose(), Optional::present(Outcome::success(5)));
    ///
    /// let y: Outcome<Optional<i32>, &str> = Outcome::success(Optional::empty());
    /// assert_eq!(y.transpose(), Optional::empty());
    ///
    /// let z: Outcome<Optional<i32>, &str> = Outcome::failure("e");
    /// assert_eq!(z.transpose(), Optional::present(Outcome::failure("e")));
    /// ```
    #[inline]
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        match self {
            Outcome::Success(Optional::Present(value)) => Optional::Present(Outcome::Success(value)),
            Outcome::Success(Optional::Empty) => Optional::Empty,
            Outcome::Failure(error) => Optional::Present(Outcome::Failure(error)),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    ///
    /// Only nested outcomes with the same error type can be flattened; anything
    /// else is rejected at compile time:
    ///
    /// ```rust,compile_fail
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<u32, &str> = Outcome::success(1);
    /// let flat = x.flatten();
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let x: Outcome<Outcome<&str, u32>, u32> = Outcome::success(Outcome::success("hello"));
    /// assert_eq!(x.flatten(), Outcome::success("hello"));
    ///
    /// let y: Outcome<Outcome<&str, u32>, u32> = Outcome::success(Outcome::failure(6));
    /// assert_eq!(y.flatten(), Outcome::failure(6));
    ///
    /// let z: Outcome<Outcome<&str, u32>, u32> = Outcome::failure(6);
    /// assert_eq!(z.flatten(), Outcome::failure(6));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Outcome::Success(inner) => inner,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    /// Hashes exactly like whichever payload is active.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Outcome::Success(value) => value.hash(state),
            Outcome::Failure(error) => error.hash(state),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({})", value),
            Outcome::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = std::option::IntoIter<&'a mut T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut().ok().into_iter()
    }
}

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    /// Collect the success values, stopping at the first failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Outcome;
    ///
    /// let items: Vec<Outcome<u8, &str>> = vec![Outcome::success(1), Outcome::failure("bad"), Outcome::failure("worse")];
    /// let collected: Outcome<Vec<u8>, &str> = items.into_iter().collect();
    /// assert_eq!(collected, Outcome::failure("bad"));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

#[cfg(feature = "try_trait")]
impl<T, E> std::ops::Try for Outcome<T, E> {
    type Output = T;
    type Residual = Outcome<std::convert::Infallible, E>;

    fn from_output(output: Self::Output) -> Self {
        Outcome::Success(output)
    }

    fn branch(self) -> std::ops::ControlFlow<Self::Residual, Self::Output> {
        match self {
            Outcome::Success(value) => std::ops::ControlFlow::Continue(value),
            Outcome::Failure(error) => std::ops::ControlFlow::Break(Outcome::Failure(error)),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T, E, F: From<E>> std::ops::FromResidual<Outcome<std::convert::Infallible, E>>
    for Outcome<T, F>
{
    fn from_residual(residual: Outcome<std::convert::Infallible, E>) -> Self {
        match residual {
            Outcome::Failure(error) => Outcome::Failure(From::from(error)),
            Outcome::Success(never) => match never {},
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T, E, F: From<E>> std::ops::FromResidual<Result<std::convert::Infallible, E>>
    for Outcome<T, F>
{
    fn from_residual(residual: Result<std::convert::Infallible, E>) -> Self {
        match residual {
            Err(error) => Outcome::Failure(From::from(error)),
            Ok(never) => match never {},
        }
    }
}
