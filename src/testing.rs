//! Testing utilities for code built on `Optional` and `Outcome`
//!
//! This module provides assertion macros that print the unexpected payload on
//! failure, and (behind the `proptest` feature) `Arbitrary` implementations so
//! both containers can be generated directly in property tests.
//!
//! # Examples
//!
//! ```rust
//! use shoal::{Optional, Outcome, assert_present, assert_empty, assert_success, assert_failure};
//!
//! assert_present!(Optional::present(1));
//! assert_empty!(Optional::<i32>::empty());
//!
//! assert_success!(Outcome::<_, String>::success(42));
//! assert_failure!(Outcome::<i32, _>::failure("error"));
//! ```

/// Assert that an optional is `Present`.
///
/// # Example
///
/// ```rust
/// use shoal::{Optional, assert_present};
///
/// assert_present!(Optional::present("value"));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Present(_) => {}
            $crate::Optional::Empty => {
                panic!("Expected Present, got Empty");
            }
        }
    };
}

/// Assert that an optional is `Empty`.
///
/// # Example
///
/// ```rust
/// use shoal::{Optional, assert_empty};
///
/// assert_empty!(Optional::<u8>::empty());
/// ```
#[macro_export]
macro_rules! assert_empty {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Empty => {}
            $crate::Optional::Present(v) => {
                panic!("Expected Empty, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome succeeds.
///
/// This macro will panic if the outcome is a `Failure`.
///
/// # Example
///
/// ```rust
/// use shoal::{Outcome, assert_success};
///
/// let o = Outcome::<_, Vec<String>>::success(42);
/// assert_success!(o);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome fails.
///
/// This macro will panic if the outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use shoal::{Outcome, assert_failure};
///
/// let o = Outcome::<i32, _>::failure("error".to_string());
/// assert_failure!(o);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome fails with a specific error.
///
/// This macro will panic if the outcome is a `Success` or if the error
/// doesn't match the expected one.
///
/// # Example
///
/// ```rust
/// use shoal::{Outcome, assert_failure_eq};
///
/// let o = Outcome::<i32, _>::failure("timeout");
/// assert_failure_eq!(o, "timeout");
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Optional, Outcome};
#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Optional::present),
            LazyJust::new(Optional::empty),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::failure),
        ]
        .boxed()
    }
}
