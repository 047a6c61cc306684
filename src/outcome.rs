//! Outcome type - a computation result that is either a success or a failure.
//!
//! This module provides the `Outcome<T, E>` type, which represents the
//! result of a computation that may fail: either an `Ok(T)` carrying the
//! success value, or an `Err(E)` carrying the failure value. Failure flows
//! through the combinators as ordinary data, so fallible steps compose
//! without exceptions standing in for control flow.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Outcome;
//!
//! // Creating outcomes
//! let success: Outcome<i32, String> = Outcome::Ok(42);
//! let failure: Outcome<i32, String> = Outcome::Err("no such entry".to_string());
//!
//! // Pattern matching
//! match success {
//!     Outcome::Ok(value) => println!("Got value: {}", value),
//!     Outcome::Err(error) => println!("Got error: {}", error),
//! }
//!
//! // Chaining fallible steps
//! let outcome = Outcome::<i32, String>::Ok(40)
//!     .map(|n| n + 2)
//!     .and_then(|n| {
//!         if n == 42 {
//!             Outcome::Ok(n)
//!         } else {
//!             Outcome::Err("not the answer".to_string())
//!         }
//!     });
//! assert_eq!(outcome, Outcome::Ok(42));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic;

use crate::illegal_unwrap::IllegalUnwrap;

/// The result of a computation that may fail.
///
/// `Outcome<T, E>` is always exactly one of `Ok(T)` or `Err(E)`; there is
/// no "neither" or "both" state. Values are immutable once constructed:
/// every combinator consumes its receiver and either forwards the payload
/// unchanged or builds a new outcome, never mutating in place.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Hashing
///
/// The hash of an outcome is the hash of its wrapped value alone; the
/// variant tag does not participate. `Ok(x)` and `Err(x)` therefore
/// collide in hash-based containers even though they are never equal.
/// This is a deliberate trade-off, not a defect: equal outcomes still hash
/// equally, so `HashMap`/`HashSet` remain correct, but callers should
/// expect the extra collision when both variants of the same payload are
/// stored together.
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// let failure: Outcome<i32, String> = Outcome::Err("overflow".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Outcome::Ok(84));
/// assert_eq!(failure.map(|x| x * 2), Outcome::Err("overflow".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The success variant, wrapping the computed value.
    Ok(T),
    /// The failure variant, wrapping the failure value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs a fallible computation immediately and captures its outcome.
    ///
    /// The computation is invoked synchronously on the caller's thread. A
    /// returned `Ok(value)` becomes `Outcome::Ok(value)` and a returned
    /// `Err(error)` becomes `Outcome::Err(error)`. This is the sole seam
    /// where uncontrolled failure signals enter the algebra; panics are
    /// unrecoverable faults and are deliberately not converted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let parsed = Outcome::of(|| "5".parse::<i32>());
    /// assert_eq!(parsed, Outcome::Ok(5));
    ///
    /// let failed = Outcome::of(|| "five".parse::<i32>());
    /// assert!(failed.is_err());
    /// ```
    #[inline]
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        computation().into()
    }

    // =========================================================================
    // Variant Inspection
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(success.is_ok());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("overflow".to_string());
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// Exactly one of [`is_ok`](Self::is_ok) and `is_err` is true for any
    /// outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("overflow".to_string());
    /// assert!(failure.is_err());
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(!success.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Option Conversion
    // =========================================================================

    /// Converts the outcome into an `Option<T>`, consuming the outcome.
    ///
    /// Returns `Some(value)` if this is `Ok(value)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.ok(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("overflow".to_string());
    /// assert_eq!(failure.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, consuming the outcome.
    ///
    /// Returns `Some(error)` if this is `Err(error)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("overflow".to_string());
    /// assert_eq!(failure.err(), Some("overflow".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.err(), None);
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving a failure untouched.
    ///
    /// If this is `Ok(value)`, returns `Ok(function(value))`. If this is
    /// `Err(error)`, returns `Err(error)` unchanged and `function` is never
    /// invoked. If `function` itself panics, the panic propagates to the
    /// caller unshielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<&str, String> = Outcome::Ok("foo");
    /// assert_eq!(success.map(str::len), Outcome::Ok(3));
    ///
    /// let failure: Outcome<&str, String> = Outcome::Err("overflow".to_string());
    /// assert_eq!(failure.map(str::len), Outcome::Err("overflow".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the failure value, leaving a success untouched.
    ///
    /// The dual of [`map`](Self::map): `function` is invoked only on the
    /// `Err` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("foo");
    /// assert_eq!(failure.map_err(str::len), Outcome::Err(3));
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(42);
    /// assert_eq!(success.map_err(str::len), Outcome::Ok(42));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a fallible step onto a success, short-circuiting on failure.
    ///
    /// If this is `Ok(value)`, invokes `function` with the value; the
    /// outcome it returns becomes the new outcome (the success type and
    /// even the variant may change). If this is `Err(error)`, returns
    /// `Err(error)` unchanged and `function` is never invoked.
    ///
    /// This is left-to-right sequential composition: each step runs only
    /// if every previous step succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(84).and_then(halve), Outcome::Ok(42));
    /// assert_eq!(Outcome::Ok(7).and_then(halve), Outcome::Err("7 is odd".to_string()));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("upstream".to_string());
    /// assert_eq!(failure.and_then(halve), Outcome::Err("upstream".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery step onto a failure, short-circuiting on success.
    ///
    /// The dual of [`and_then`](Self::and_then): if this is `Err(error)`,
    /// invokes `function` with the error and returns the outcome it
    /// produces; if this is `Ok(value)`, returns `Ok(value)` unchanged and
    /// `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failure.or_else(|e| Outcome::<_, i32>::Ok(e * 2)), Outcome::Ok(6));
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.or_else(|e| Outcome::<_, i32>::Ok(e * 2)), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn or_else<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Boolean-like Combinators
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise the original failure.
    ///
    /// Mirrors logical AND: the first failure wins, and a success value is
    /// discarded in favor of `other`. `other` is eagerly constructed by
    /// the caller; use [`and_then`](Self::and_then) when the second step
    /// should only run on success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let a: Outcome<i32, i32> = Outcome::Ok(2);
    /// let b: Outcome<i32, i32> = Outcome::Err(7);
    /// assert_eq!(a.and(b), Outcome::Err(7));
    ///
    /// let c: Outcome<i32, i32> = Outcome::Err(2);
    /// let d: Outcome<i32, i32> = Outcome::Ok(7);
    /// assert_eq!(c.and(d), Outcome::Err(2));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the original success, otherwise `other`.
    ///
    /// Mirrors logical OR: the first success wins. `other` is eagerly
    /// constructed by the caller; use [`or_else`](Self::or_else) when the
    /// fallback should only be built on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let a: Outcome<i32, i32> = Outcome::Ok(2);
    /// let b: Outcome<i32, i32> = Outcome::Err(7);
    /// assert_eq!(a.or(b), Outcome::Ok(2));
    ///
    /// let c: Outcome<i32, i32> = Outcome::Err(2);
    /// let d: Outcome<i32, i32> = Outcome::Ok(7);
    /// assert_eq!(c.or(d), Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics on an `Err` value, with an
    /// [`IllegalUnwrap`](crate::IllegalUnwrap) payload wrapping the failure
    /// value. The payload's message is the failure value's own description,
    /// and when the failure value is itself an error it is reported as the
    /// payload's [`source`](std::error::Error::source), preserving the
    /// causal chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(2);
    /// assert_eq!(success.unwrap(), 2);
    /// ```
    ///
    /// ```rust,should_panic
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("denied".to_string());
    /// failure.unwrap(); // panics with IllegalUnwrap("denied")
    /// ```
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: fmt::Display + Send + 'static,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic::panic_any(IllegalUnwrap::new(error)),
        }
    }

    /// Returns the failure value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics on an `Ok` value, with an
    /// [`IllegalUnwrap`](crate::IllegalUnwrap) payload wrapping the success
    /// value; the payload's message is that value's plain description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("denied".to_string());
    /// assert_eq!(failure.unwrap_err(), "denied".to_string());
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Display + Send + 'static,
    {
        match self {
            Self::Ok(value) => panic::panic_any(IllegalUnwrap::new(value)),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, or `default` on failure. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.unwrap_or(5), 2);
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(2);
    /// assert_eq!(failure.unwrap_or(5), 5);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure value.
    ///
    /// `function` is invoked only on the `Err` path. Never fails unless
    /// `function` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(2);
    /// assert_eq!(failure.unwrap_or_else(|error| error + 5), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Invokes a hook with the whole outcome, then returns it unchanged.
    ///
    /// The hook receives the outcome itself, not the wrapped payload, and
    /// fires exactly once on both variants alike. The hook is for side
    /// effects only (logging, metrics, diagnostics); its return value, if
    /// any, is ignored. Because the original outcome is handed back as-is,
    /// `inspect` can be dropped into the middle of a pipeline without
    /// disturbing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let mut seen = String::new();
    /// let outcome = Outcome::<i32, String>::Ok(2)
    ///     .inspect(|observed| seen = observed.to_string())
    ///     .map(|n| n * 2);
    ///
    /// assert_eq!(seen, "Ok(2)");
    /// assert_eq!(outcome, Outcome::Ok(4));
    /// ```
    #[inline]
    pub fn inspect<F>(self, hook: F) -> Self
    where
        F: FnOnce(&Self),
    {
        hook(&self);
        self
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

/// Hashes the wrapped value only; the variant tag is excluded.
///
/// `Ok(x)` and `Err(x)` share a hash but are never equal, so they occupy
/// distinct slots in hash-based containers at the cost of one collision.
impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Ok(value) => value.hash(state),
            Self::Err(error) => error.hash(state),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// The observable string contract: `Ok({value})` or `Err({value})`, with
/// the payload's own `Display` form embedded verbatim.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `std::result::Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, Outcome::Ok(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` into a `std::result::Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("overflow".to_string());
    /// let result: Result<i32, String> = failure.into();
    /// assert_eq!(result, Err("overflow".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

// Outcomes are immutable after construction, so sharing across threads
// needs nothing beyond the payloads themselves being shareable.
static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String, std::io::Error>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<i32, u8>: Copy);
