//! # Introduction
//!
//! Algotty runs a classic algorithm against user-supplied input, capturing a
//! snapshot of its full state at every semantically meaningful moment. The
//! snapshot sequence is then replayed forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui), with a
//! pseudocode line highlight kept in sync with the step on screen.
//!
//! ## Execution pipeline
//!
//! ```text
//! Raw input → Validator → Dataset → Runner → StepSequence → Playback → TUI
//! ```
//!
//! 1. [`input`] — validates raw text into a typed [`input::Dataset`].
//! 2. [`runner`] — executes the selected algorithm to completion, emitting
//!    one immutable [`step::Step`] per comparison, swap, visit, cell fill,
//!    or phase boundary. Identical input always yields an identical
//!    sequence.
//! 3. [`step`] — the shared step model and its invariants (contiguous
//!    indices, single terminal step, monotone metrics).
//! 4. [`playback`] — replays a sequence under transport control (play,
//!    pause, step, step back, reset, variable speed) with a single pending
//!    auto-advance tick.
//! 5. [`code`] — fixed pseudocode listings plus the step→line projection.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, quick, merge, heap (ascending or descending, numbers or
//! strings). Graphs: BFS with distances, DFS with discovery/finish times and
//! cycle detection (directed or undirected). Trees: BST insert and search.
//! Dynamic programming: 0/1 knapsack with item reconstruction. Fibonacci:
//! iterative, naive recursive, memoized, bottom-up.

pub mod code;
pub mod input;
pub mod playback;
pub mod runner;
pub mod step;
pub mod ui;
