//! User-facing validation errors
//!
//! [`ValidateError`] covers everything a user can get wrong in the raw input.
//! These are recoverable: the caller shows the message and asks again. They
//! are deliberately a separate type from the runner's internal
//! `InvariantError` so the two can never be confused.

use std::fmt;

/// A problem with the raw textual input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The input was empty where tokens were required.
    EmptyInput { what: &'static str },

    /// Wrong number of items (sequences need 2–30, BST keys 1–20, ...).
    CountOutOfRange {
        what: &'static str,
        count: usize,
        min: usize,
        max: usize,
    },

    /// A token that should have been an integer was not.
    BadNumber { token: String },

    /// A numeric token outside its allowed range.
    NumberOutOfRange { token: String, min: i64, max: i64 },

    /// A string token longer than the allowed length.
    TokenTooLong { token: String, max: usize },

    /// Duplicate value where values must be unique (BST keys).
    DuplicateValue { token: String },

    /// Graph node count outside [3, 20].
    NodeCountOutOfRange { count: usize },

    /// An edge token that is not of the form `a-b`.
    BadEdgeToken { token: String },

    /// An edge endpoint that no node index scheme can satisfy.
    EdgeIndexOutOfRange { token: String, nodes: usize },

    /// Edge tokens mix 0-based and 1-based indices.
    InconsistentIndexBase,

    /// An edge from a node to itself.
    SelfLoop { token: String },

    /// The same edge given twice (either direction, for undirected graphs).
    DuplicateEdge { token: String },

    /// A start node outside the graph.
    StartOutOfRange { start: usize, nodes: usize },

    /// A knapsack item token that is not `name:weight:value`.
    BadItemToken { token: String },

    /// An unrecognized method or operation selector.
    BadSelector {
        what: &'static str,
        token: String,
        allowed: &'static str,
    },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::EmptyInput { what } => {
                write!(f, "No {} given", what)
            }
            ValidateError::CountOutOfRange {
                what,
                count,
                min,
                max,
            } => {
                write!(
                    f,
                    "Expected between {} and {} {}, got {}",
                    min, max, what, count
                )
            }
            ValidateError::BadNumber { token } => {
                write!(f, "'{}' is not a whole number", token)
            }
            ValidateError::NumberOutOfRange { token, min, max } => {
                write!(f, "'{}' is outside the allowed range [{}, {}]", token, min, max)
            }
            ValidateError::TokenTooLong { token, max } => {
                write!(f, "'{}' is longer than {} characters", token, max)
            }
            ValidateError::DuplicateValue { token } => {
                write!(f, "Duplicate value '{}'", token)
            }
            ValidateError::NodeCountOutOfRange { count } => {
                write!(f, "Node count must be between 3 and 20, got {}", count)
            }
            ValidateError::BadEdgeToken { token } => {
                write!(f, "Edge '{}' is not of the form a-b", token)
            }
            ValidateError::EdgeIndexOutOfRange { token, nodes } => {
                write!(
                    f,
                    "Edge '{}' names a node outside the {}-node graph",
                    token, nodes
                )
            }
            ValidateError::InconsistentIndexBase => {
                write!(f, "Edge list mixes 0-based and 1-based node indices")
            }
            ValidateError::SelfLoop { token } => {
                write!(f, "Edge '{}' is a self-loop", token)
            }
            ValidateError::DuplicateEdge { token } => {
                write!(f, "Edge '{}' appears more than once", token)
            }
            ValidateError::StartOutOfRange { start, nodes } => {
                write!(
                    f,
                    "Start node {} is outside the {}-node graph",
                    start, nodes
                )
            }
            ValidateError::BadItemToken { token } => {
                write!(f, "Item '{}' is not of the form name:weight:value", token)
            }
            ValidateError::BadSelector {
                what,
                token,
                allowed,
            } => {
                write!(f, "Unknown {} '{}' (expected one of: {})", what, token, allowed)
            }
        }
    }
}

impl std::error::Error for ValidateError {}
