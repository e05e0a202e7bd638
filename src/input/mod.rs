//! Raw input validation
//!
//! This module turns the raw text a user types into a typed [`Dataset`] that
//! the runners can trust completely:
//! - [`dataset`]: validated dataset types ([`Dataset`], [`SeqValue`], ...)
//! - [`validate`]: the parsing/validation functions, one per input format
//! - [`errors`]: the user-facing [`ValidateError`] type
//!
//! # Input formats
//!
//! - Sequences: comma-separated tokens, 2–30 items, each either an integer in
//!   `[1, 999]` or a string token of at most 12 characters.
//! - Graphs: a node count in `[3, 20]` plus comma-separated `"a-b"` edge
//!   tokens. Indices may be 0- or 1-based but must be consistent; self-loops
//!   and duplicate edges are rejected.
//! - Knapsack: `name:weight:value` item tokens plus a capacity.
//! - Fibonacci: an integer `n` in `[0, 20]` plus a method selector.
//!
//! Every function here is total over arbitrary input text: bad input produces
//! a [`ValidateError`], never a panic. Runners treat a dataset that slipped
//! past validation as a fatal contract violation, so all range checks live
//! here and nowhere else.
//!
//! [`Dataset`]: dataset::Dataset
//! [`SeqValue`]: dataset::SeqValue
//! [`ValidateError`]: errors::ValidateError

pub mod dataset;
pub mod errors;
pub mod validate;

pub use dataset::{Dataset, GraphInput, KnapsackInput, KnapsackItem, SeqValue};
pub use errors::ValidateError;
