//! Error types raised by extraction and captured by the adapters
//!
//! Two error values live at this layer:
//!
//! - [`UnwrapError`] signals that an extraction was attempted against the variant
//!   that does not hold the requested payload (`unwrap()` on `Empty`,
//!   `unwrap_err()` on `Success`, ...). The panicking extractors panic with its
//!   message; the `try_*` extractors return it.
//! - [`PanicError`] is the value [`resultify`](crate::adapt::resultify) produces
//!   when the wrapped function panics.
//!
//! # Examples
//!
//! ```
//! use shoal::{Optional, UnwrapError};
//!
//! let empty: Optional<i32> = Optional::empty();
//! let err = empty.try_expect("config value missing").unwrap_err();
//!
//! assert_eq!(err, UnwrapError::new("config value missing"));
//! assert_eq!(err.to_string(), "config value missing");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// Extraction attempted against the wrong variant.
///
/// Always caller-induced. The message is human readable and, for
/// [`Outcome`](crate::Outcome), includes the debug form of the payload that was
/// actually present.
///
/// # Examples
///
/// ```
/// use shoal::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::failure("disk full");
/// let err = failed.try_expect("writing snapshot").unwrap_err();
///
/// assert_eq!(err.message(), "writing snapshot: \"disk full\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Create an unwrap error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        UnwrapError {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Panic with this error's message.
    ///
    /// The payload is a plain `String`, so the message shows up in test output and
    /// in `#[should_panic(expected = ...)]` exactly as it does for std's `unwrap`.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self.message)
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for UnwrapError {}

/// A panic captured by an adapted function.
///
/// Produced by [`Resultified::call`](crate::adapt::Resultified::call). String
/// panic payloads (`panic!("...")`, arithmetic overflow, division by zero, ...)
/// are preserved verbatim; any other payload type is reported as
/// `"Box<dyn Any>"`, matching what the default panic hook prints.
///
/// # Examples
///
/// ```
/// use shoal::adapt::resultify;
///
/// let explode = resultify(|| -> i32 { panic!("boom") });
/// let err = explode.call(()).unwrap_err();
///
/// assert_eq!(err.message(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Create a panic error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        PanicError {
            message: message.into(),
        }
    }

    /// Build a panic error from a payload returned by `std::panic::catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "Box<dyn Any>".to_string(),
            },
        };
        PanicError { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for PanicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_error_message() {
        let err = UnwrapError::new("missing value");
        assert_eq!(err.message(), "missing value");
        assert_eq!(err.to_string(), "missing value");
        assert_eq!(err.into_message(), "missing value".to_string());
    }

    #[test]
    #[should_panic(expected = "nothing here")]
    fn test_unwrap_error_raise_panics_with_message() {
        UnwrapError::new("nothing here").raise();
    }

    #[test]
    fn test_unwrap_error_is_std_error() {
        let err: Box<dyn StdError> = Box::new(UnwrapError::new("oops"));
        assert_eq!(err.to_string(), "oops");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_panic_error_from_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("formatted 42"));
        assert_eq!(PanicError::from_payload(payload).message(), "formatted 42");
    }

    #[test]
    fn test_panic_error_from_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(PanicError::from_payload(payload).message(), "static message");
    }

    #[test]
    fn test_panic_error_from_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(17_u32);
        assert_eq!(PanicError::from_payload(payload).message(), "Box<dyn Any>");
    }

    #[test]
    fn test_panic_error_display() {
        assert_eq!(PanicError::new("boom").to_string(), "panicked: boom");
    }
}
