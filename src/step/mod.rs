//! The step model shared by every runner and the playback layer
//!
//! A [`Step`] is one immutable snapshot of algorithm state plus metadata; a
//! [`StepSequence`] is the full ordered output of one run. Sequences are
//! built once, verified once, and never mutated afterward — playback only
//! moves an index over them.
//!
//! # Invariants
//!
//! - `steps[i].index == i` for all `i`
//! - exactly the last step has `terminal == true`
//! - every metric counter is monotonically non-decreasing across the sequence
//! - every step owns a full copy of its payload; nothing aliases the
//!   runner's working state
//!
//! [`StepSequence::from_steps`] checks all of these and reports a violation
//! as an [`InvariantError`] — a fatal defect in the emitting runner, kept
//! strictly apart from user-facing validation errors.

pub mod payload;

use rustc_hash::FxHashMap;
use std::fmt;

pub use payload::{
    ArraySnapshot, BstOutcome, CallsSnapshot, EdgeClass, EdgeView, GraphSnapshot, StepPayload,
    TableDecision, TableSnapshot, TreeNodeView, TreeSnapshot,
};

/// Counter name → running total. Counters are fixed per algorithm family.
pub type Metrics = FxHashMap<&'static str, u64>;

/// One immutable snapshot of algorithm state, the unit of playback.
#[derive(Debug, Clone)]
pub struct Step {
    /// Position in the sequence, starting at 0.
    pub index: usize,
    /// Human-readable account of what just happened.
    pub description: String,
    /// 1-based line in the algorithm's pseudocode listing, if any.
    pub code_line: Option<usize>,
    /// Counter totals as of this step.
    pub metrics: Metrics,
    /// Algorithm-specific state, fully owned by this step.
    pub payload: StepPayload,
    /// True only on the last step of the sequence.
    pub terminal: bool,
}

/// Internal invariant violations: a runner produced something the step
/// model forbids, or was handed a dataset the validator should have caught.
///
/// These are defects, not user conditions. Generation is pure and
/// deterministic, so no retry is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A dataset emptied of the elements the runner requires.
    EmptyDataset { runner: &'static str },

    /// Dataset variant and algorithm family do not match.
    DatasetMismatch {
        algorithm: &'static str,
        dataset: &'static str,
    },

    /// A traversal start node outside the graph reached a runner.
    BadStartNode { start: usize, nodes: usize },

    /// A runner emitted no steps at all.
    EmptySequence,

    /// `steps[position].index` was not `position`.
    IndexMismatch { position: usize, found: usize },

    /// A non-final step was marked terminal.
    StrayTerminal { index: usize },

    /// The final step was not marked terminal.
    MissingTerminal,

    /// A counter decreased between consecutive steps.
    MetricDecreased {
        counter: &'static str,
        index: usize,
        previous: u64,
        current: u64,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyDataset { runner } => {
                write!(f, "{} runner received an empty dataset", runner)
            }
            InvariantError::DatasetMismatch { algorithm, dataset } => {
                write!(
                    f,
                    "{} cannot run on a {} dataset",
                    algorithm, dataset
                )
            }
            InvariantError::BadStartNode { start, nodes } => {
                write!(
                    f,
                    "start node {} is outside the {}-node graph",
                    start, nodes
                )
            }
            InvariantError::EmptySequence => {
                write!(f, "runner emitted an empty step sequence")
            }
            InvariantError::IndexMismatch { position, found } => {
                write!(
                    f,
                    "step at position {} carries index {}",
                    position, found
                )
            }
            InvariantError::StrayTerminal { index } => {
                write!(f, "non-final step {} is marked terminal", index)
            }
            InvariantError::MissingTerminal => {
                write!(f, "final step is not marked terminal")
            }
            InvariantError::MetricDecreased {
                counter,
                index,
                previous,
                current,
            } => {
                write!(
                    f,
                    "counter '{}' decreased at step {} ({} -> {})",
                    counter, index, previous, current
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// The finite, ordered, immutable output of one algorithm run.
#[derive(Debug, Clone)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Wraps a finished step list, verifying every step-model invariant.
    pub fn from_steps(steps: Vec<Step>) -> Result<Self, InvariantError> {
        Self::verify_steps(&steps)?;
        Ok(StepSequence { steps })
    }

    /// Checks the step-model invariants over a raw step list.
    pub fn verify_steps(steps: &[Step]) -> Result<(), InvariantError> {
        if steps.is_empty() {
            return Err(InvariantError::EmptySequence);
        }
        let last = steps.len() - 1;
        for (position, step) in steps.iter().enumerate() {
            if step.index != position {
                return Err(InvariantError::IndexMismatch {
                    position,
                    found: step.index,
                });
            }
            if step.terminal && position != last {
                return Err(InvariantError::StrayTerminal { index: position });
            }
        }
        if !steps[last].terminal {
            return Err(InvariantError::MissingTerminal);
        }
        for pair in steps.windows(2) {
            for (&counter, &previous) in &pair[0].metrics {
                let current = pair[1].metrics.get(counter).copied().unwrap_or(0);
                if current < previous {
                    return Err(InvariantError::MetricDecreased {
                        counter,
                        index: pair[1].index,
                        previous,
                        current,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a verified sequence has at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The terminal step.
    pub fn last(&self) -> &Step {
        // Non-emptiness is established at construction.
        &self.steps[self.steps.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(index: usize, terminal: bool, comparisons: u64) -> Step {
        let mut metrics = Metrics::default();
        metrics.insert("comparisons", comparisons);
        Step {
            index,
            description: format!("step {}", index),
            code_line: None,
            metrics,
            payload: StepPayload::Calls(CallsSnapshot::default()),
            terminal,
        }
    }

    #[test]
    fn verify_accepts_a_minimal_sequence() {
        let steps = vec![step(0, false, 0), step(1, true, 2)];
        assert!(StepSequence::from_steps(steps).is_ok());
    }

    #[test]
    fn verify_rejects_empty() {
        assert_eq!(
            StepSequence::verify_steps(&[]),
            Err(InvariantError::EmptySequence)
        );
    }

    #[test]
    fn verify_rejects_index_gaps() {
        let steps = vec![step(0, false, 0), step(2, true, 0)];
        assert!(matches!(
            StepSequence::from_steps(steps),
            Err(InvariantError::IndexMismatch {
                position: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn verify_rejects_misplaced_terminal() {
        let steps = vec![step(0, true, 0), step(1, true, 0)];
        assert!(matches!(
            StepSequence::from_steps(steps),
            Err(InvariantError::StrayTerminal { index: 0 })
        ));

        let steps = vec![step(0, false, 0), step(1, false, 0)];
        assert_eq!(
            StepSequence::verify_steps(&steps),
            Err(InvariantError::MissingTerminal)
        );
    }

    #[test]
    fn verify_rejects_decreasing_metrics() {
        let steps = vec![step(0, false, 3), step(1, true, 2)];
        assert!(matches!(
            StepSequence::from_steps(steps),
            Err(InvariantError::MetricDecreased {
                counter: "comparisons",
                index: 1,
                previous: 3,
                current: 2,
            })
        ));
    }
}
