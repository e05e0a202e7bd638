//! Instrumented algorithm runners
//!
//! One runner per algorithm family, all behind [`run`]: execute the
//! algorithm to completion against a validated [`Dataset`] and emit a
//! [`StepSequence`] capturing every semantically meaningful moment.
//!
//! # Execution model
//!
//! Runners are pure and deterministic — the same `(dataset, algorithm)` pair
//! always produces an identical sequence. No runner drives emission through
//! host-language recursion: quicksort keeps an explicit range stack, merge
//! sort iterates bottom-up over run widths, BFS owns a real queue, DFS and
//! the recursive Fibonacci variants own explicit frame stacks, and the DP
//! fills are plain loops. Step order is therefore fixed by the algorithm,
//! not by the call mechanism, and memory stays proportional to the number
//! of steps.
//!
//! Every step snapshot is a full copy taken through [`Recorder`]; nothing in
//! a finished sequence aliases a runner's working state.

pub mod bst;
pub mod fibonacci;
pub mod graph;
pub mod knapsack;
pub mod sorting;

use crate::input::dataset::Dataset;
use crate::step::{InvariantError, Metrics, Step, StepPayload, StepSequence};

/// Which sort to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Quick,
    Merge,
    Heap,
}

/// Sort direction; applied through the comparator, never hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// BST operation plus its target key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BstOp {
    Insert(i64),
    Search(i64),
}

/// Which Fibonacci runner to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibMethod {
    Iterative,
    Recursive,
    Memoized,
    Tabulated,
}

/// A fully configured algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sort {
        kind: SortKind,
        direction: SortDirection,
    },
    Bfs {
        start: usize,
    },
    Dfs {
        start: usize,
    },
    Bst {
        op: BstOp,
    },
    Knapsack,
    Fibonacci {
        method: FibMethod,
    },
}

impl Algorithm {
    /// Display name, also used in contract-violation diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sort { kind: SortKind::Bubble, .. } => "bubble sort",
            Algorithm::Sort { kind: SortKind::Quick, .. } => "quicksort",
            Algorithm::Sort { kind: SortKind::Merge, .. } => "merge sort",
            Algorithm::Sort { kind: SortKind::Heap, .. } => "heap sort",
            Algorithm::Bfs { .. } => "BFS",
            Algorithm::Dfs { .. } => "DFS",
            Algorithm::Bst { op: BstOp::Insert(_) } => "BST insert",
            Algorithm::Bst { op: BstOp::Search(_) } => "BST search",
            Algorithm::Knapsack => "0/1 knapsack",
            Algorithm::Fibonacci { method: FibMethod::Iterative } => "Fibonacci (iterative)",
            Algorithm::Fibonacci { method: FibMethod::Recursive } => "Fibonacci (recursive)",
            Algorithm::Fibonacci { method: FibMethod::Memoized } => "Fibonacci (memoized)",
            Algorithm::Fibonacci { method: FibMethod::Tabulated } => "Fibonacci (bottom-up)",
        }
    }
}

/// Runs the selected algorithm against the dataset.
///
/// Total over every dataset the validator can produce. A dataset/algorithm
/// mismatch or a dataset that defeats a validator guarantee is a contract
/// violation reported as [`InvariantError`], distinct from any user-facing
/// validation failure.
pub fn run(dataset: &Dataset, algorithm: Algorithm) -> Result<StepSequence, InvariantError> {
    match (algorithm, dataset) {
        (Algorithm::Sort { kind, direction }, Dataset::Sequence(values)) => {
            sorting::run(kind, direction, values)
        }
        (Algorithm::Bfs { start }, Dataset::Graph(graph)) => graph::bfs(graph, start),
        (Algorithm::Dfs { start }, Dataset::Graph(graph)) => graph::dfs(graph, start),
        (Algorithm::Bst { op }, Dataset::BstKeys(keys)) => bst::run(keys, op),
        (Algorithm::Knapsack, Dataset::Knapsack(input)) => knapsack::run(input),
        (Algorithm::Fibonacci { method }, Dataset::Fib { n }) => fibonacci::run(method, *n),
        (algorithm, dataset) => Err(InvariantError::DatasetMismatch {
            algorithm: algorithm.name(),
            dataset: dataset.kind(),
        }),
    }
}

/// Shared step emitter.
///
/// Owns the growing step list and the metric counters, stamps indices, and
/// snapshots the counters into every step. `finish` marks the terminal step
/// and runs the full invariant check, so a buggy runner fails loudly at
/// generation time instead of confusing playback later.
pub(crate) struct Recorder {
    steps: Vec<Step>,
    metrics: Metrics,
}

impl Recorder {
    /// A recorder with the family's counters pre-seeded to zero, so every
    /// step carries every counter from the start.
    pub fn new(counters: &[&'static str]) -> Self {
        let mut metrics = Metrics::default();
        for &counter in counters {
            metrics.insert(counter, 0);
        }
        Recorder {
            steps: Vec::new(),
            metrics,
        }
    }

    /// Increments one counter.
    pub fn bump(&mut self, counter: &'static str) {
        *self.metrics.entry(counter).or_insert(0) += 1;
    }

    /// Emits a non-terminal step.
    pub fn record(
        &mut self,
        description: impl Into<String>,
        code_line: usize,
        payload: StepPayload,
    ) {
        self.push(description.into(), Some(code_line), payload, false);
    }

    /// Emits the terminal step and seals the sequence.
    pub fn finish(
        mut self,
        description: impl Into<String>,
        code_line: usize,
        payload: StepPayload,
    ) -> Result<StepSequence, InvariantError> {
        self.push(description.into(), Some(code_line), payload, true);
        StepSequence::from_steps(self.steps)
    }

    fn push(
        &mut self,
        description: String,
        code_line: Option<usize>,
        payload: StepPayload,
        terminal: bool,
    ) {
        self.steps.push(Step {
            index: self.steps.len(),
            description,
            code_line,
            metrics: self.metrics.clone(),
            payload,
            terminal,
        });
    }
}
