//! # Block Assembly
//!
//! Normalized lines are folded, strictly in input order, into a list of
//! [`SetlistBlock`]s plus [`ParseMetadata`].
//!
//! ## Modules
//!
//! - **`types`**: Output types (`SetlistBlock`, `ParseMetadata`, `ParseResult`)
//! - **`builder`**: `BlockBuilder`, the left fold that applies the inclusion rules
//!
//! ## Key Invariants
//!
//! - `total_lines == tracks + encore_count + skipped_lines`, whatever the options
//! - The Nth encore marker is named `Encore` for N = 1 and `Encore N` otherwise
//! - Encore markers are never skipped and never become tracks

pub mod builder;
pub mod types;

pub use builder::BlockBuilder;
pub use types::{ParseMetadata, ParseResult, SetlistBlock, SkipReason};
