//! Validated dataset types consumed by the runners
//!
//! A [`Dataset`] is immutable once constructed: runners clone whatever they
//! need to mutate, so the caller's copy is never touched and every step
//! snapshot owns its own data.

use std::cmp::Ordering;
use std::fmt;

/// One element of a sequence dataset.
///
/// Sequences are homogeneous — the validator only ever produces all-`Int` or
/// all-`Text` vectors — so the cross-variant ordering below is unreachable in
/// practice but still total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqValue {
    Int(i64),
    Text(String),
}

impl SeqValue {
    /// Compares two values: numeric order for ints, lexicographic for text.
    pub fn compare(&self, other: &SeqValue) -> Ordering {
        match (self, other) {
            (SeqValue::Int(a), SeqValue::Int(b)) => a.cmp(b),
            (SeqValue::Text(a), SeqValue::Text(b)) => a.cmp(b),
            (SeqValue::Int(_), SeqValue::Text(_)) => Ordering::Less,
            (SeqValue::Text(_), SeqValue::Int(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for SeqValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqValue::Int(n) => write!(f, "{}", n),
            SeqValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A validated graph: `nodes` vertices labelled `0..nodes`, plus an edge
/// list already normalized to 0-based indices.
#[derive(Debug, Clone)]
pub struct GraphInput {
    pub nodes: usize,
    pub edges: Vec<(usize, usize)>,
    pub directed: bool,
}

impl GraphInput {
    /// Builds the adjacency list the traversal runners iterate over.
    ///
    /// Neighbors appear in edge-list order; undirected graphs get both
    /// directions. The order is part of the deterministic step contract.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.nodes];
        for &(a, b) in &self.edges {
            adj[a].push(b);
            if !self.directed {
                adj[b].push(a);
            }
        }
        adj
    }
}

/// One knapsack item.
#[derive(Debug, Clone)]
pub struct KnapsackItem {
    pub name: String,
    pub weight: u64,
    pub value: u64,
}

/// A validated knapsack instance.
#[derive(Debug, Clone)]
pub struct KnapsackInput {
    pub items: Vec<KnapsackItem>,
    pub capacity: u64,
}

/// The validated input to a runner.
#[derive(Debug, Clone)]
pub enum Dataset {
    /// Ordered values for the sorting family.
    Sequence(Vec<SeqValue>),
    /// Node count plus edge list for BFS/DFS.
    Graph(GraphInput),
    /// Initial key set for the BST operations.
    BstKeys(Vec<i64>),
    /// Items plus capacity for 0/1 knapsack.
    Knapsack(KnapsackInput),
    /// The `n` for the Fibonacci runners.
    Fib { n: u32 },
}

impl Dataset {
    /// Short name used in contract-violation diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Dataset::Sequence(_) => "sequence",
            Dataset::Graph(_) => "graph",
            Dataset::BstKeys(_) => "bst-keys",
            Dataset::Knapsack(_) => "knapsack",
            Dataset::Fib { .. } => "fibonacci",
        }
    }
}
