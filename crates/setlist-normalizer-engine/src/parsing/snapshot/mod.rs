//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `ParseResult` to a compact, stable `Snap` for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (line accounting,
//!   line ordering, encore section numbering)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
