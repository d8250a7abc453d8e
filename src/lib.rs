//! # Shoal
//!
//! Two sum-type containers with a complete, chainable combinator surface:
//!
//! - [`Optional<T>`]: a value of type `T`, or nothing
//! - [`Outcome<T, E>`]: a success value `T`, or a failure value `E`
//!
//! They compose with each other (`ok_or`, `ok`/`err`, `transpose`), so code can
//! move between "maybe absent" and "maybe failed" without ad-hoc checks, and
//! the [`adapt`] module lifts ordinary panicking or `None`-returning functions
//! into the same algebra.
//!
//! ## Quick Example
//!
//! ```rust
//! use shoal::{Optional, Outcome};
//!
//! fn lookup_user(id: u32) -> Optional<&'static str> {
//!     match id {
//!         1 => Optional::present("ada"),
//!         2 => Optional::present("grace"),
//!         _ => Optional::empty(),
//!     }
//! }
//!
//! fn greet(id: u32) -> Outcome<String, String> {
//!     lookup_user(id)
//!         .filter(|name| !name.is_empty())
//!         .ok_or_else(|| format!("no user with id {}", id))
//!         .map(|name| format!("hello, {}", name))
//! }
//!
//! assert_eq!(greet(1), Outcome::success("hello, ada".to_string()));
//! assert_eq!(greet(9).err(), Optional::present("no user with id 9".to_string()));
//! ```
//!
//! ## Extraction
//!
//! `unwrap`/`expect` style methods panic with an [`UnwrapError`] message when
//! called on the wrong variant, just like their std counterparts. Every one of
//! them has a `try_` twin that returns `Result<_, UnwrapError>` instead.
//!
//! ## Features
//!
//! - `tracing`: log captured panics in the [`adapt`] module
//! - `proptest`: `Arbitrary` implementations for both containers
//! - `try_trait` (nightly): use `?` on `Optional` and `Outcome`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod adapt;
pub mod error;
pub mod optional;
pub mod outcome;
pub mod testing;

// Re-exports
pub use adapt::{optionalify, resultify};
pub use error::{PanicError, UnwrapError};
pub use optional::Optional;
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapt::{optionalify, resultify, Callable, Nullable};
    pub use crate::error::{PanicError, UnwrapError};
    pub use crate::optional::Optional;
    pub use crate::outcome::Outcome;
}
