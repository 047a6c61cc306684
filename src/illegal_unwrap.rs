//! IllegalUnwrap - the misuse failure raised by wrong-variant extraction.
//!
//! Calling [`Outcome::unwrap`](crate::Outcome::unwrap) on an `Err` or
//! [`Outcome::unwrap_err`](crate::Outcome::unwrap_err) on an `Ok` is a
//! programming error, not a represented failure. It panics with an
//! [`IllegalUnwrap`] payload carrying the mismatched value, so callers that
//! intercept the unwind can recover a typed diagnostic instead of a bare
//! string.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{IllegalUnwrap, Outcome};
//! use std::panic;
//!
//! let unwound = panic::catch_unwind(|| {
//!     Outcome::<i32, String>::Err("out of cheese".to_string()).unwrap()
//! });
//! let payload = unwound
//!     .expect_err("unwrap on Err must panic")
//!     .downcast::<IllegalUnwrap<String>>()
//!     .expect("payload is a typed IllegalUnwrap");
//!
//! assert_eq!(payload.to_string(), "out of cheese");
//! assert_eq!(payload.value(), "out of cheese");
//! ```

use std::error::Error;
use std::fmt;

/// The failure raised when an [`Outcome`](crate::Outcome) extractor is
/// called on the wrong variant.
///
/// The mismatched value is moved into the payload unchanged, so its
/// identity is preserved for diagnostics. The `Display` form of an
/// `IllegalUnwrap` is the wrapped value's own description, verbatim.
///
/// When the wrapped value is itself an error, `IllegalUnwrap` implements
/// [`std::error::Error`] and reports that value as its
/// [`source`](std::error::Error::source), preserving the causal chain.
pub struct IllegalUnwrap<V> {
    value: V,
}

impl<V> IllegalUnwrap<V> {
    /// Wraps the mismatched value.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self { value }
    }

    /// Returns a reference to the mismatched value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns the mismatched value, consuming the payload.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<V: fmt::Display> fmt::Display for IllegalUnwrap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.value)
    }
}

impl<V: fmt::Debug> fmt::Debug for IllegalUnwrap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("IllegalUnwrap")
            .field(&self.value)
            .finish()
    }
}

// =============================================================================
// Cause Chaining
// =============================================================================

impl<V: Error + 'static> Error for IllegalUnwrap<V> {
    /// The mismatched value is the underlying cause when it is itself an
    /// error.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.value)
    }
}
