//! Character-order text reversal with an explicit absent-value convention.
//!
//! The core is a single total operation: [`reverse`] produces a new string
//! whose chars appear in opposite order, and [`reverse_opt`] lifts it over
//! an optional value so that absent input passes through as absent. The
//! [`ReversePayload`]/[`ReverseResult`] pair gives the same contract a JSON
//! surface, where `null` is the wire form of the absent value.
//!
//! Reversal operates on Unicode scalar values, so byte length and char
//! count are both preserved and the operation is an involution: applying it
//! twice returns the original value.
//!
//! # Usage
//!
//! ```
//! use verso::{reverse, reverse_opt};
//!
//! assert_eq!(reverse("stressed"), "desserts");
//! assert_eq!(reverse_opt(Some("ab")), Some("ba".to_string()));
//! assert_eq!(reverse_opt(None), None);
//! ```

// Module declarations
mod reverse;
mod types;

// Re-exports for public API
pub use reverse::{reverse, reverse_opt};
pub use types::{ReversePayload, ReverseResult};
