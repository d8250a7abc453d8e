//! A container holding zero or one value.
//!
//! `Optional<T>` is either `Present(T)` or `Empty`. It carries the full combinator
//! surface needed to work with absent values without ad-hoc checks: mapping,
//! filtering, default substitution, side-effect inspection, in-place mutation
//! and conversion to and from [`Outcome`].
//!
//! # Short-circuiting
//!
//! Combinators that take a closure (`and_then`, `or_else`, `unwrap_or_else`,
//! `get_or_insert_with`, ...) only call it when the receiver's variant does not
//! already decide the result. Their eager counterparts (`and`, `or`,
//! `unwrap_or`, `get_or_insert`) take an already-computed value, so the argument
//! is always evaluated by the caller.
//!
//! # Examples
//!
//! ```rust
//! use shoal::{Optional, Outcome};
//!
//! fn find_port(key: &str) -> Optional<u16> {
//!     match key {
//!         "http" => Optional::present(80),
//!         "https" => Optional::present(443),
//!         _ => Optional::empty(),
//!     }
//! }
//!
//! let port = find_port("https")
//!     .filter(|p| *p != 0)
//!     .map(|p| p + 8000)
//!     .unwrap_or(8080);
//! assert_eq!(port, 8443);
//!
//! let missing: Outcome<u16, &str> = find_port("gopher").ok_or("unknown scheme");
//! assert_eq!(missing, Outcome::failure("unknown scheme"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::error::UnwrapError;
use crate::Outcome;

/// A value that is either `Present(T)` or `Empty`.
///
/// Exactly one variant is active at a time, and `Present` never wraps a null
/// sentinel: absence is always spelled `Empty`.
///
/// # Example
///
/// ```rust
/// use shoal::Optional;
///
/// let name: Optional<&str> = Optional::present("ferris");
/// let nobody: Optional<&str> = Optional::empty();
///
/// match name {
///     Optional::Present(n) => println!("hello, {}", n),
///     Optional::Empty => println!("hello, stranger"),
/// }
///
/// assert_eq!(nobody.map_or(0, |n| n.len()), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Optional<T> {
    /// A contained value
    Present(T),
    /// No value
    Empty,
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create a `Present` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let o = Optional::present(42);
    /// assert!(o.is_present());
    /// ```
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Create an `Empty` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let o: Optional<i32> = Optional::empty();
    /// assert!(o.is_empty());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Optional::Empty
    }

    /// Convert from a standard library `Option`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Present(value),
            None => Optional::Empty,
        }
    }

    /// Convert into a standard library `Option`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present(3).into_option(), Some(3));
    /// assert_eq!(Optional::<i32>::empty().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if this is `Present` and the value satisfies `predicate`.
    ///
    /// The predicate is not called on `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert!(Optional::present(4).is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::present(3).is_present_and(|n| n % 2 == 0));
    /// assert!(!Optional::<i32>::empty().is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) => predicate(value),
            Optional::Empty => false,
        }
    }

    /// Returns `true` if this is an `Empty` value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    /// Returns `true` if this is `Empty`, or if the contained value satisfies
    /// `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert!(Optional::<i32>::empty().is_empty_or(|_| false));
    /// assert!(Optional::present(10).is_empty_or(|n| *n > 5));
    /// assert!(!Optional::present(1).is_empty_or(|n| *n > 5));
    /// ```
    #[inline]
    pub fn is_empty_or<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) => predicate(value),
            Optional::Empty => true,
        }
    }

    // ========== Borrowing ==========

    /// Convert from `&Optional<T>` to `Optional<&T>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let text: Optional<String> = Optional::present("hello".to_string());
    /// let len = text.as_ref().map(|s| s.len());
    /// assert_eq!(len, Optional::present(5));
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Convert from `&mut Optional<T>` to `Optional<&mut T>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut o = Optional::present(2);
    /// if let Optional::Present(v) = o.as_mut() {
    ///     *v = 42;
    /// }
    /// assert_eq!(o, Optional::present(42));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Convert from `&Optional<T>` to `Optional<&T::Target>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let owned: Optional<String> = Optional::present("abc".to_string());
    /// let borrowed: Optional<&str> = owned.as_deref();
    /// assert_eq!(borrowed, Optional::present("abc"));
    /// ```
    #[inline]
    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|value| value.deref())
    }

    /// Convert from `&mut Optional<T>` to `Optional<&mut T::Target>`.
    #[inline]
    pub fn as_deref_mut(&mut self) -> Optional<&mut T::Target>
    where
        T: DerefMut,
    {
        self.as_mut().map(|value| value.deref_mut())
    }

    // ========== Extractors ==========

    /// Return the contained value, panicking with `msg` if `Empty`.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] message equal to `msg` if the value is `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present("value").expect("value must be set"), "value");
    /// ```
    ///
    /// ```rust,should_panic
    /// use shoal::Optional;
    ///
    /// Optional::<i32>::empty().expect("the world is ending");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => UnwrapError::new(msg).raise(),
        }
    }

    /// Return the contained value, panicking if `Empty`.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Optional::unwrap()` on an `Empty` value``.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present(7).unwrap(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => {
                UnwrapError::new("called `Optional::unwrap()` on an `Empty` value").raise()
            }
        }
    }

    /// Return the contained value, or an [`UnwrapError`] carrying `msg`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, UnwrapError};
    ///
    /// assert_eq!(Optional::present(1).try_expect("needed"), Ok(1));
    /// assert_eq!(
    ///     Optional::<i32>::empty().try_expect("needed"),
    ///     Err(UnwrapError::new("needed"))
    /// );
    /// ```
    #[inline]
    pub fn try_expect(self, msg: &str) -> Result<T, UnwrapError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(UnwrapError::new(msg)),
        }
    }

    /// Return the contained value, or an [`UnwrapError`] with the same message
    /// [`unwrap`](Optional::unwrap) panics with.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        self.try_expect("called `Optional::unwrap()` on an `Empty` value")
    }

    /// Return the contained value or `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present("car").unwrap_or("bike"), "car");
    /// assert_eq!(Optional::empty().unwrap_or("bike"), "bike");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => default,
        }
    }

    /// Return the contained value or compute it from `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let k = 10;
    /// assert_eq!(Optional::present(4).unwrap_or_else(|| 2 * k), 4);
    /// assert_eq!(Optional::empty().unwrap_or_else(|| 2 * k), 20);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => f(),
        }
    }

    /// Return the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // ========== Transformations ==========

    /// Transform the contained value, leaving `Empty` untouched.
    ///
    /// `f` is never called on `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present("hello").map(|s| s.len()), Optional::present(5));
    /// assert_eq!(Optional::<&str>::empty().map(|s| s.len()), Optional::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Apply `f` to the contained value, or return `default` if `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present("foo").map_or(42, |s| s.len()), 3);
    /// assert_eq!(Optional::<&str>::empty().map_or(42, |s| s.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Empty => default,
        }
    }

    /// Apply `f` to the contained value, or compute a default with `default` if
    /// `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let k = 21;
    /// assert_eq!(Optional::present("foo").map_or_else(|| 2 * k, |s| s.len()), 3);
    /// assert_eq!(Optional::<&str>::empty().map_or_else(|| 2 * k, |s| s.len()), 42);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Empty => default(),
        }
    }

    /// Call `f` with a reference to the contained value, then return `self`
    /// unchanged.
    ///
    /// Useful for logging in the middle of a chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let doubled = Optional::present(4)
    ///     .inspect(|v| seen.push(*v))
    ///     .map(|v| v * 2);
    ///
    /// assert_eq!(doubled, Optional::present(8));
    /// assert_eq!(seen, vec![4]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    ///
    /// assert_eq!(Optional::empty().filter(is_even), Optional::empty());
    /// assert_eq!(Optional::present(3).filter(is_even), Optional::empty());
    /// assert_eq!(Optional::present(4).filter(is_even), Optional::present(4));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Optional::Present(value) = self {
            if predicate(&value) {
                return Optional::Present(value);
            }
        }
        Optional::Empty
    }

    // ========== Boolean Combinators ==========

    /// Return `other` if this is `Present`, otherwise `Empty`.
    ///
    /// `other` is evaluated eagerly; use [`and_then`](Optional::and_then) to defer it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present(2).and(Optional::present("foo")), Optional::present("foo"));
    /// assert_eq!(Optional::<i32>::empty().and(Optional::present("foo")), Optional::empty());
    /// assert_eq!(Optional::present(2).and(Optional::<&str>::empty()), Optional::empty());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(_) => other,
            Optional::Empty => Optional::Empty,
        }
    }

    /// Chain a computation that may itself produce `Empty`.
    ///
    /// `f` is never called on `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// fn checked_sqrt(n: i32) -> Optional<i32> {
    ///     if n < 0 {
    ///         Optional::empty()
    ///     } else {
    ///         Optional::present((n as f64).sqrt() as i32)
    ///     }
    /// }
    ///
    /// assert_eq!(Optional::present(16).and_then(checked_sqrt), Optional::present(4));
    /// assert_eq!(Optional::present(-4).and_then(checked_sqrt), Optional::empty());
    /// assert_eq!(Optional::empty().and_then(checked_sqrt), Optional::empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Return `self` if `Present`, otherwise `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present(2).or(Optional::present(100)), Optional::present(2));
    /// assert_eq!(Optional::empty().or(Optional::present(100)), Optional::present(100));
    /// assert_eq!(Optional::<i32>::empty().or(Optional::empty()), Optional::empty());
    /// ```
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => other,
        }
    }

    /// Return `self` if `Present`, otherwise the result of `f`.
    ///
    /// `f` is never called on `Present`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let fallback = || Optional::present("fallback");
    ///
    /// assert_eq!(Optional::present("primary").or_else(fallback), Optional::present("primary"));
    /// assert_eq!(Optional::empty().or_else(fallback), Optional::present("fallback"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => f(),
        }
    }

    /// Return whichever of `self` and `other` is `Present`, or `Empty` if both or
    /// neither are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present(2).xor(Optional::empty()), Optional::present(2));
    /// assert_eq!(Optional::empty().xor(Optional::present(2)), Optional::present(2));
    /// assert_eq!(Optional::present(2).xor(Optional::present(2)), Optional::empty());
    /// assert_eq!(Optional::<i32>::empty().xor(Optional::empty()), Optional::empty());
    /// ```
    #[inline]
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (Optional::Present(value), Optional::Empty)
            | (Optional::Empty, Optional::Present(value)) => Optional::Present(value),
            _ => Optional::Empty,
        }
    }

    // ========== In-Place Mutation ==========

    /// Store `value`, discarding any previous contents, and return a mutable
    /// reference to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut slot = Optional::empty();
    /// let v = slot.insert(1);
    /// *v += 1;
    /// assert_eq!(slot, Optional::present(2));
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Optional::Present(value);
        match self {
            Optional::Present(value) => value,
            Optional::Empty => unreachable!("slot was just filled"),
        }
    }

    /// Store `value` if `Empty`, then return a mutable reference to the contained
    /// value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut slot = Optional::empty();
    /// assert_eq!(*slot.get_or_insert(5), 5);
    /// assert_eq!(*slot.get_or_insert(7), 5);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Store `T::default()` if `Empty`, then return a mutable reference to the
    /// contained value.
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Store the result of `f` if `Empty`, then return a mutable reference to the
    /// contained value.
    ///
    /// `f` is only called when the container is `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut cache: Optional<Vec<u8>> = Optional::empty();
    /// cache.get_or_insert_with(Vec::new).push(1);
    /// cache.get_or_insert_with(|| unreachable!()).push(2);
    /// assert_eq!(cache, Optional::present(vec![1, 2]));
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Optional::Empty = self {
            *self = Optional::Present(f());
        }
        match self {
            Optional::Present(value) => value,
            Optional::Empty => unreachable!("slot was just filled"),
        }
    }

    /// Move the value out, leaving `Empty` in its place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut slot = Optional::present(2);
    /// assert_eq!(slot.take(), Optional::present(2));
    /// assert_eq!(slot, Optional::empty());
    /// assert_eq!(slot.take(), Optional::empty());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Optional<T> {
        std::mem::replace(self, Optional::Empty)
    }

    /// Move the value out only if `predicate` holds for it.
    ///
    /// The predicate receives a mutable reference, so it may also adjust the value
    /// it decides to keep.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut slot = Optional::present(42);
    ///
    /// assert_eq!(slot.take_if(|v| *v == 0), Optional::empty());
    /// assert_eq!(slot, Optional::present(42));
    ///
    /// assert_eq!(slot.take_if(|v| *v == 42), Optional::present(42));
    /// assert_eq!(slot, Optional::empty());
    /// ```
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&mut T) -> bool,
    {
        if self.as_mut().map_or(false, predicate) {
            self.take()
        } else {
            Optional::Empty
        }
    }

    /// Store `value` and return the previous contents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut slot = Optional::present(2);
    /// assert_eq!(slot.replace(5), Optional::present(2));
    /// assert_eq!(slot, Optional::present(5));
    ///
    /// let mut vacant = Optional::empty();
    /// assert_eq!(vacant.replace(3), Optional::empty());
    /// assert_eq!(vacant, Optional::present(3));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Optional<T> {
        std::mem::replace(self, Optional::Present(value))
    }

    // ========== Conversions ==========

    /// Turn `Present(v)` into `Success(v)` and `Empty` into `Failure(error)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::present("foo").ok_or(0), Outcome::success("foo"));
    /// assert_eq!(Optional::<&str>::empty().ok_or(0), Outcome::failure(0));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Empty => Outcome::Failure(error),
        }
    }

    /// Turn `Present(v)` into `Success(v)` and `Empty` into `Failure(f())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, Outcome};
    ///
    /// let missing = || "not configured".to_string();
    /// assert_eq!(Optional::present(1).ok_or_else(missing), Outcome::success(1));
    /// assert_eq!(
    ///     Optional::<i32>::empty().ok_or_else(missing),
    ///     Outcome::failure("not configured".to_string())
    /// );
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Empty => Outcome::Failure(f()),
        }
    }

    /// Pair up two values if both are `Present`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let x = Optional::present(1);
    /// let y = Optional::present("hi");
    /// let z = Optional::<u8>::empty();
    ///
    /// assert_eq!(x.zip(y), Optional::present((1, "hi")));
    /// assert_eq!(x.zip(z), Optional::empty());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Optional::Present(a), Optional::Present(b)) => Optional::Present((a, b)),
            _ => Optional::Empty,
        }
    }

    /// Combine two values with `f` if both are `Present`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let width = Optional::present(3);
    /// let height = Optional::present(4);
    ///
    /// assert_eq!(width.zip_with(height, |w, h| w * h), Optional::present(12));
    /// assert_eq!(width.zip_with(Optional::empty(), |w, h: i32| w * h), Optional::empty());
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Optional::Present(a), Optional::Present(b)) => Optional::Present(f(a, b)),
            _ => Optional::Empty,
        }
    }

    // ========== Iterator Support ==========

    /// Returns an iterator over the contained value, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(Optional::present(4).iter().collect::<Vec<_>>(), vec![&4]);
    /// assert_eq!(Optional::<i32>::empty().iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_iter()
    }

    /// Returns a mutable iterator over the contained value, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let mut o = Optional::present(4);
    /// for v in o.iter_mut() {
    ///     *v *= 10;
    /// }
    /// assert_eq!(o, Optional::present(40));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.as_mut().into_iter()
    }
}

impl<T> Optional<&T> {
    /// Map an `Optional<&T>` to an `Optional<T>` by cloning the contents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let name = Optional::present("ada".to_string());
    /// let copy: Optional<String> = name.as_ref().cloned();
    /// assert_eq!(copy, name);
    /// ```
    #[inline]
    pub fn cloned(self) -> Optional<T>
    where
        T: Clone,
    {
        self.map(T::clone)
    }

    /// Map an `Optional<&T>` to an `Optional<T>` by copying the contents.
    #[inline]
    pub fn copied(self) -> Optional<T>
    where
        T: Copy,
    {
        self.map(|value| *value)
    }
}

impl<A, B> Optional<(A, B)> {
    /// Split an optional pair into a pair of optionals.
    ///
    /// Only pairs can be unzipped; any other payload is rejected at compile time:
    ///
    /// ```rust,compile_fail
    /// use shoal::Optional;
    ///
    /// let (a, b) = Optional::present(5).unzip();
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// assert_eq!(
    ///     Optional::present((1, "hi")).unzip(),
    ///     (Optional::present(1), Optional::present("hi"))
    /// );
    /// assert_eq!(
    ///     Optional::<(u8, u32)>::empty().unzip(),
    ///     (Optional::empty(), Optional::empty())
    /// );
    /// ```
    #[inline]
    pub fn unzip(self) -> (Optional<A>, Optional<B>) {
        match self {
            Optional::Present((a, b)) => (Optional::Present(a), Optional::Present(b)),
            Optional::Empty => (Optional::Empty, Optional::Empty),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting.
    ///
    /// Only nested optionals can be flattened; any other payload is rejected at
    /// compile time:
    ///
    /// ```rust,compile_fail
    /// use shoal::Optional;
    ///
    /// let flat = Optional::present(6).flatten();
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let nested = Optional::present(Optional::present(6));
    /// assert_eq!(nested.flatten(), Optional::present(6));
    ///
    /// let inner_empty: Optional<Optional<i32>> = Optional::present(Optional::empty());
    /// assert_eq!(inner_empty.flatten(), Optional::empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Optional::Present(inner) => inner,
            Optional::Empty => Optional::Empty,
        }
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swap an `Optional` of an `Outcome` into an `Outcome` of an `Optional`.
    ///
    /// `Empty` becomes `Success(Empty)`, `Present(Success(v))` becomes
    /// `Success(Present(v))`, and `Present(Failure(e))` becomes `Failure(e)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::{Optional, Outcome};
    ///
    /// let x: Optional<Outcome<i32, &str>> = Optional::present(Outcome::success(5));
    /// assert_eq!(x.transpose(), Outcome::success(Optional::present(5)));
    ///
    /// let y: Optional<Outcome<i32, &str>> = Optional::empty();
    /// assert_eq!(y.transpose(), Outcome::success(Optional::empty()));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        match self {
            Optional::Present(Outcome::Success(value)) => Outcome::Success(Optional::Present(value)),
            Optional::Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Optional::Empty => Outcome::Success(Optional::Empty),
        }
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Optional<T> {
    /// Returns `Optional::Empty`.
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        Optional::from_option(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T: Hash> Hash for Optional<T> {
    /// `Present(v)` hashes exactly like `v`; `Empty` hashes as the sentinel `0u64`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Optional::Present(value) => value.hash(state),
            Optional::Empty => state.write_u64(0),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Present({})", value),
            Optional::Empty => f.write_str("Empty"),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = std::option::IntoIter<&'a mut T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut().into_option().into_iter()
    }
}

impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    /// Collect the values, stopping at the first `Empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shoal::Optional;
    ///
    /// let all: Optional<Vec<i32>> = vec![Optional::present(1), Optional::present(2)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(all, Optional::present(vec![1, 2]));
    ///
    /// let gap: Optional<Vec<i32>> = vec![Optional::present(1), Optional::empty()]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(gap, Optional::empty());
    /// ```
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Optional::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::Try for Optional<T> {
    type Output = T;
    type Residual = Optional<std::convert::Infallible>;

    fn from_output(output: Self::Output) -> Self {
        Optional::Present(output)
    }

    fn branch(self) -> std::ops::ControlFlow<Self::Residual, Self::Output> {
        match self {
            Optional::Present(value) => std::ops::ControlFlow::Continue(value),
            Optional::Empty => std::ops::ControlFlow::Break(Optional::Empty),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::FromResidual<Optional<std::convert::Infallible>> for Optional<T> {
    fn from_residual(_residual: Optional<std::convert::Infallible>) -> Self {
        Optional::Empty
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::FromResidual<Option<std::convert::Infallible>> for Optional<T> {
    fn from_residual(_residual: Option<std::convert::Infallible>) -> Self {
        Optional::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_constructors() {
        assert!(Optional::present(1).is_present());
        assert!(Optional::<i32>::empty().is_empty());
        assert_eq!(Optional::<i32>::default(), Optional::empty());
    }

    #[test]
    fn test_predicates_short_circuit() {
        let calls = Cell::new(0);
        let counting = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };

        assert!(!Optional::empty().is_present_and(counting));
        assert_eq!(calls.get(), 0);

        assert!(Optional::empty().is_empty_or(counting));
        assert_eq!(calls.get(), 0);

        assert!(Optional::present(3).is_present_and(counting));
        assert!(Optional::present(3).is_empty_or(counting));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_unwrap_present() {
        assert_eq!(Optional::present("v").unwrap(), "v");
        assert_eq!(Optional::present("v").expect("msg"), "v");
    }

    #[test]
    #[should_panic(expected = "called `Optional::unwrap()` on an `Empty` value")]
    fn test_unwrap_empty_panics() {
        Optional::<i32>::empty().unwrap();
    }

    #[test]
    #[should_panic(expected = "expected a configured port")]
    fn test_expect_empty_panics_with_message() {
        Optional::<u16>::empty().expect("expected a configured port");
    }

    #[test]
    fn test_try_unwrap() {
        assert_eq!(Optional::present(9).try_unwrap(), Ok(9));
        let err = Optional::<i32>::empty().try_unwrap().unwrap_err();
        assert_eq!(
            err.message(),
            "called `Optional::unwrap()` on an `Empty` value"
        );
    }

    #[test]
    fn test_unwrap_or_variants() {
        assert_eq!(Optional::present(1).unwrap_or(5), 1);
        assert_eq!(Optional::empty().unwrap_or(5), 5);
        assert_eq!(Optional::present(1).unwrap_or_else(|| panic!("lazy")), 1);
        assert_eq!(Optional::empty().unwrap_or_else(|| 5), 5);
        assert_eq!(Optional::<String>::empty().unwrap_or_default(), "");
    }

    #[test]
    fn test_map_never_calls_f_on_empty() {
        let called = Cell::new(false);
        let mapped = Optional::<i32>::empty().map(|v| {
            called.set(true);
            v + 1
        });
        assert_eq!(mapped, Optional::empty());
        assert!(!called.get());
    }

    #[test]
    fn test_map_or_else() {
        assert_eq!(Optional::present(2).map_or_else(|| -1, |v| v * 2), 4);
        assert_eq!(Optional::<i32>::empty().map_or_else(|| -1, |v| v * 2), -1);
    }

    #[test]
    fn test_inspect_only_on_present() {
        let seen = Cell::new(0);
        let o = Optional::present(7).inspect(|v| seen.set(*v));
        assert_eq!(o, Optional::present(7));
        assert_eq!(seen.get(), 7);

        let e = Optional::<i32>::empty().inspect(|_| seen.set(-1));
        assert_eq!(e, Optional::empty());
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_filter() {
        assert_eq!(Optional::present(4).filter(|v| *v > 3), Optional::present(4));
        assert_eq!(Optional::present(2).filter(|v| *v > 3), Optional::empty());
        assert_eq!(Optional::<i32>::empty().filter(|_| true), Optional::empty());
    }

    #[test]
    fn test_and_then_short_circuits() {
        let called = Cell::new(false);
        let result = Optional::<i32>::empty().and_then(|v| {
            called.set(true);
            Optional::present(v)
        });
        assert_eq!(result, Optional::empty());
        assert!(!called.get());
    }

    #[test]
    fn test_or_else_short_circuits() {
        let called = Cell::new(false);
        let result = Optional::present(1).or_else(|| {
            called.set(true);
            Optional::present(2)
        });
        assert_eq!(result, Optional::present(1));
        assert!(!called.get());
    }

    #[test]
    fn test_and_or() {
        assert_eq!(Optional::present(1).and(Optional::present('a')), Optional::present('a'));
        assert_eq!(Optional::<i32>::empty().and(Optional::present('a')), Optional::empty());
        assert_eq!(Optional::present(1).or(Optional::present(2)), Optional::present(1));
        assert_eq!(Optional::empty().or(Optional::present(2)), Optional::present(2));
    }

    #[test]
    fn test_xor() {
        assert_eq!(Optional::present(1).xor(Optional::empty()), Optional::present(1));
        assert_eq!(Optional::empty().xor(Optional::present(2)), Optional::present(2));
        assert_eq!(Optional::present(1).xor(Optional::present(2)), Optional::empty());
        assert_eq!(Optional::<i32>::empty().xor(Optional::empty()), Optional::empty());
    }

    #[test]
    fn test_insert_replaces_contents() {
        let mut o = Optional::present(1);
        *o.insert(2) += 10;
        assert_eq!(o, Optional::present(12));
    }

    #[test]
    fn test_get_or_insert_keeps_existing() {
        let mut o = Optional::present(1);
        assert_eq!(*o.get_or_insert(5), 1);

        let mut e = Optional::empty();
        assert_eq!(*e.get_or_insert(5), 5);
        assert_eq!(e, Optional::present(5));
    }

    #[test]
    fn test_get_or_insert_with_is_lazy() {
        let calls = Cell::new(0);
        let mut o = Optional::empty();
        o.get_or_insert_with(|| {
            calls.set(calls.get() + 1);
            3
        });
        o.get_or_insert_with(|| {
            calls.set(calls.get() + 1);
            4
        });
        assert_eq!(o, Optional::present(3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_get_or_insert_default() {
        let mut o: Optional<Vec<i32>> = Optional::empty();
        o.get_or_insert_default().push(1);
        assert_eq!(o, Optional::present(vec![1]));
    }

    #[test]
    fn test_take_twice_yields_empty() {
        let mut o = Optional::present("once");
        assert_eq!(o.take(), Optional::present("once"));
        assert_eq!(o.take(), Optional::empty());
        assert!(o.is_empty());
    }

    #[test]
    fn test_take_if() {
        let mut o = Optional::present(10);
        assert_eq!(o.take_if(|v| *v > 100), Optional::empty());
        assert_eq!(o, Optional::present(10));

        assert_eq!(
            o.take_if(|v| {
                *v += 1;
                false
            }),
            Optional::empty()
        );
        assert_eq!(o, Optional::present(11));

        assert_eq!(o.take_if(|v| *v == 11), Optional::present(11));
        assert_eq!(o, Optional::empty());
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut o = Optional::present(1);
        assert_eq!(o.replace(2), Optional::present(1));
        assert_eq!(o, Optional::present(2));
    }

    #[test]
    fn test_ok_or_roundtrip() {
        assert_eq!(Optional::present(3).ok_or("e").ok(), Optional::present(3));
        assert_eq!(Optional::<i32>::empty().ok_or("e").ok(), Optional::empty());
        assert_eq!(Optional::<i32>::empty().ok_or("e").err(), Optional::present("e"));
    }

    #[test]
    fn test_ok_or_else_is_lazy() {
        let called = Cell::new(false);
        let out: Outcome<i32, &str> = Optional::present(1).ok_or_else(|| {
            called.set(true);
            "unused"
        });
        assert_eq!(out, Outcome::success(1));
        assert!(!called.get());
    }

    #[test]
    fn test_zip_and_zip_with() {
        assert_eq!(Optional::present(1).zip(Optional::present('x')), Optional::present((1, 'x')));
        assert_eq!(Optional::present(1).zip(Optional::<char>::empty()), Optional::empty());
        assert_eq!(
            Optional::present(2).zip_with(Optional::present(3), |a, b| a + b),
            Optional::present(5)
        );
        assert_eq!(
            Optional::<i32>::empty().zip_with(Optional::present(3), |a, b| a + b),
            Optional::empty()
        );
    }

    #[test]
    fn test_unzip() {
        assert_eq!(
            Optional::present((1, 2)).unzip(),
            (Optional::present(1), Optional::present(2))
        );
        assert_eq!(
            Optional::<(i32, i32)>::empty().unzip(),
            (Optional::empty(), Optional::empty())
        );
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Optional::present(Optional::present(1)).flatten(), Optional::present(1));
        assert_eq!(Optional::present(Optional::<i32>::empty()).flatten(), Optional::empty());
        assert_eq!(Optional::<Optional<i32>>::empty().flatten(), Optional::empty());
    }

    #[test]
    fn test_transpose() {
        let ok: Optional<Outcome<i32, &str>> = Optional::present(Outcome::success(1));
        assert_eq!(ok.transpose(), Outcome::success(Optional::present(1)));

        let err: Optional<Outcome<i32, &str>> = Optional::present(Outcome::failure("bad"));
        assert_eq!(err.transpose(), Outcome::failure("bad"));

        let none: Optional<Outcome<i32, &str>> = Optional::empty();
        assert_eq!(none.transpose(), Outcome::success(Optional::empty()));
    }

    #[test]
    fn test_hash_delegates_to_payload() {
        assert_eq!(hash_of(&Optional::present("key")), hash_of(&"key"));
        assert_eq!(hash_of(&Optional::<&str>::empty()), hash_of(&0u64));
    }

    #[test]
    fn test_display() {
        assert_eq!(Optional::present(5).to_string(), "Present(5)");
        assert_eq!(Optional::<i32>::empty().to_string(), "Empty");
    }

    #[test]
    fn test_iteration() {
        let collected: Vec<_> = Optional::present(1).into_iter().collect();
        assert_eq!(collected, vec![1]);

        let mut it = Optional::<i32>::empty().into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        let mut o = Optional::present(2);
        for v in &mut o {
            *v += 1;
        }
        let borrowed: Vec<_> = (&o).into_iter().collect();
        assert_eq!(borrowed, vec![&3]);
    }

    #[test]
    fn test_option_conversions() {
        let o: Optional<i32> = Some(4).into();
        assert_eq!(o, Optional::present(4));
        let back: Option<i32> = o.into();
        assert_eq!(back, Some(4));
        assert_eq!(Optional::<i32>::from(None), Optional::empty());
    }

    #[test]
    fn test_cloned_and_copied() {
        let owned = Optional::present(String::from("x"));
        assert_eq!(owned.as_ref().cloned(), owned);
        assert_eq!(Optional::present(&5).copied(), Optional::present(5));
    }

    #[test]
    fn test_as_deref_mut() {
        let mut o = Optional::present(String::from("abc"));
        if let Optional::Present(s) = o.as_deref_mut() {
            s.make_ascii_uppercase();
        }
        assert_eq!(o.as_deref(), Optional::present("ABC"));
    }

    #[test]
    fn test_collect() {
        let parsed: Optional<Vec<u8>> = ["1", "2", "3"]
            .iter()
            .map(|s| Optional::from(s.parse().ok()))
            .collect();
        assert_eq!(parsed, Optional::present(vec![1, 2, 3]));

        let broken: Optional<Vec<u8>> = ["1", "x"]
            .iter()
            .map(|s| Optional::from(s.parse().ok()))
            .collect();
        assert_eq!(broken, Optional::empty());
    }

    // Property-like tests
    #[test]
    fn test_functor_identity() {
        assert_eq!(Optional::present(42).map(|v| v), Optional::present(42));
    }

    #[test]
    fn test_functor_composition() {
        let f = |v: i32| v + 1;
        let g = |v: i32| v * 2;

        let o = Optional::present(10);
        assert_eq!(o.map(f).map(g), o.map(|v| g(f(v))));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn optional_i32() -> impl Strategy<Value = Optional<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Optional::from)
    }

    proptest! {
        #[test]
        fn prop_unwrap_returns_value(x: i32) {
            prop_assert_eq!(Optional::present(x).unwrap(), x);
        }

        #[test]
        fn prop_map_matches_direct_application(x: i32) {
            let f = |v: i32| v.wrapping_mul(3);
            prop_assert_eq!(Optional::present(x).map(f), Optional::present(f(x)));
        }

        #[test]
        fn prop_xor_is_symmetric(a in optional_i32(), b in optional_i32()) {
            prop_assert_eq!(a.xor(b), b.xor(a));
        }

        #[test]
        fn prop_replace_returns_previous(a in optional_i32(), v: i32) {
            let mut slot = a;
            prop_assert_eq!(slot.replace(v), a);
            prop_assert_eq!(slot, Optional::present(v));
        }

        #[test]
        fn prop_take_leaves_empty(a in optional_i32()) {
            let mut slot = a;
            prop_assert_eq!(slot.take(), a);
            prop_assert_eq!(slot.take(), Optional::empty());
        }

        #[test]
        fn prop_zip_unzip_roundtrip(a: i32, b: i32) {
            prop_assert_eq!(
                Optional::present(a).zip(Optional::present(b)).unzip(),
                (Optional::present(a), Optional::present(b))
            );
        }
    }
}
