//! # outcomes
//!
//! A Result algebra for Rust: a closed two-variant value type that
//! represents either a successful or a failed computation, together with
//! a combinator set for transforming, chaining, and extracting that
//! outcome as ordinary data.
//!
//! ## Overview
//!
//! The whole library is one type, [`Outcome<T, E>`], with exactly two
//! variants:
//!
//! - [`Outcome::Ok`] wraps a success value
//! - [`Outcome::Err`] wraps a failure value
//!
//! Every operation is a pure, synchronous variant dispatch: mapping
//! ([`map`](Outcome::map), [`map_err`](Outcome::map_err)), chaining
//! ([`and_then`](Outcome::and_then), [`or_else`](Outcome::or_else)),
//! boolean-style combination ([`and`](Outcome::and), [`or`](Outcome::or)),
//! extraction ([`unwrap`](Outcome::unwrap), [`unwrap_or`](Outcome::unwrap_or),
//! [`unwrap_or_else`](Outcome::unwrap_or_else)), and observation
//! ([`inspect`](Outcome::inspect)).
//!
//! Misusing an extractor on the wrong variant fails with a distinct
//! [`IllegalUnwrap`] payload that carries the mismatched value, preserving
//! the causal chain when that value is itself an error.
//!
//! ## Example
//!
//! ```rust
//! use outcomes::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::of(|| input.trim().parse::<i32>().map_err(|e| e.to_string()))
//! }
//!
//! let total = parse(" 20 ")
//!     .and_then(|n| parse("22").map(move |m| n + m))
//!     .unwrap_or(0);
//! assert_eq!(total, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::illegal_unwrap::IllegalUnwrap;
    pub use crate::outcome::Outcome;
}

pub mod illegal_unwrap;
pub mod outcome;

pub use illegal_unwrap::IllegalUnwrap;
pub use outcome::Outcome;
