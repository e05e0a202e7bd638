//! Pseudocode listings and the step→line projection
//!
//! Every algorithm has one fixed [`Listing`] — the "source code" the UI
//! displays. Runners stamp each step with a 1-based line number into their
//! listing; [`synced_line`] is the stateless projection the code pane and any
//! other renderer share, so both always highlight the same line for the same
//! step.

use crate::runner::{Algorithm, BstOp, FibMethod, SortKind};
use crate::step::Step;

/// A fixed pseudocode listing for one algorithm.
pub struct Listing {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

impl Listing {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Projects a step onto the line to highlight, or `None`.
///
/// Out-of-range lines are treated as no highlight rather than a panic; the
/// runner test suite keeps them from occurring in the first place.
pub fn synced_line(step: &Step, listing: &Listing) -> Option<usize> {
    match step.code_line {
        Some(line) if line >= 1 && line <= listing.len() => Some(line),
        _ => None,
    }
}

/// The listing for a configured algorithm.
pub fn listing_for(algorithm: &Algorithm) -> &'static Listing {
    match algorithm {
        Algorithm::Sort { kind: SortKind::Bubble, .. } => &BUBBLE_SORT,
        Algorithm::Sort { kind: SortKind::Quick, .. } => &QUICK_SORT,
        Algorithm::Sort { kind: SortKind::Merge, .. } => &MERGE_SORT,
        Algorithm::Sort { kind: SortKind::Heap, .. } => &HEAP_SORT,
        Algorithm::Bfs { .. } => &BFS,
        Algorithm::Dfs { .. } => &DFS,
        Algorithm::Bst { op: BstOp::Insert(_) } => &BST_INSERT,
        Algorithm::Bst { op: BstOp::Search(_) } => &BST_SEARCH,
        Algorithm::Knapsack => &KNAPSACK,
        Algorithm::Fibonacci { method: FibMethod::Iterative } => &FIB_ITERATIVE,
        Algorithm::Fibonacci { method: FibMethod::Recursive } => &FIB_RECURSIVE,
        Algorithm::Fibonacci { method: FibMethod::Memoized } => &FIB_MEMOIZED,
        Algorithm::Fibonacci { method: FibMethod::Tabulated } => &FIB_TABULATED,
    }
}

pub static BUBBLE_SORT: Listing = Listing {
    title: "Bubble sort",
    lines: &[
        "procedure bubbleSort(a)",              // 1
        "  for pass = 1 .. n-1",                // 2
        "    for j = 0 .. n-pass-1",            // 3
        "      compare a[j] with a[j+1]",       // 4
        "      if out of order, swap them",     // 5
        "    if no swaps this pass, stop",      // 6
        "  done: array is sorted",              // 7
    ],
};

pub static QUICK_SORT: Listing = Listing {
    title: "Quicksort",
    lines: &[
        "procedure quickSort(a)",                          // 1
        "  push range [0, n-1]",                           // 2
        "  while ranges remain, pop [low, high]",          // 3
        "    choose a[high] as the pivot",                 // 4
        "    for j = low .. high-1",                       // 5
        "      compare a[j] with the pivot",               // 6
        "      if a[j] belongs first, swap it left",       // 7
        "    place the pivot after the left part",         // 8
        "    push both subranges",                         // 9
        "  done: array is sorted",                         // 10
    ],
};

pub static MERGE_SORT: Listing = Listing {
    title: "Merge sort",
    lines: &[
        "procedure mergeSort(a)",                          // 1
        "  for width = 1, 2, 4, ...",                      // 2
        "    for each pair of adjacent runs",              // 3
        "      compare the front elements",                // 4
        "      copy the winner into the buffer",           // 5
        "      write the buffer back into a",              // 6
        "  done: array is sorted",                         // 7
    ],
};

pub static HEAP_SORT: Listing = Listing {
    title: "Heap sort",
    lines: &[
        "procedure heapSort(a)",                           // 1
        "  build phase: sift down each parent",            // 2
        "    compare parent with its children",            // 3
        "    swap parent with the dominant child",         // 4
        "  swap the root into the last open slot",         // 5
        "  sift the new root down",                        // 6
        "    compare parent with its children",            // 7
        "    swap parent with the dominant child",         // 8
        "  done: array is sorted",                         // 9
    ],
};

pub static BFS: Listing = Listing {
    title: "Breadth-first search",
    lines: &[
        "procedure BFS(start)",                            // 1
        "  enqueue start with distance 0",                 // 2
        "  while the queue is not empty",                  // 3
        "    dequeue u",                                   // 4
        "    mark u visited",                              // 5
        "    for each neighbor v of u",                    // 6
        "      new v: enqueue with distance d(u)+1",       // 7
        "      otherwise skip v",                          // 8
        "  done: every reachable node visited",            // 9
    ],
};

pub static DFS: Listing = Listing {
    title: "Depth-first search",
    lines: &[
        "procedure DFS(start)",                            // 1
        "  push start, record discovery time",             // 2
        "  while the stack is not empty",                  // 3
        "    take the next neighbor v of the top node",    // 4
        "    unvisited v: tree edge, push v",              // 5
        "    v still on the stack: back edge (cycle)",     // 6
        "    otherwise skip v",                            // 7
        "    no neighbors left: record finish, pop",       // 8
        "  done: traversal complete",                      // 9
    ],
};

pub static BST_INSERT: Listing = Listing {
    title: "BST insert",
    lines: &[
        "procedure insert(key)",                           // 1
        "  start at the root",                             // 2
        "  compare key with the current node",             // 3
        "  key smaller: descend left",                     // 4
        "  key larger: descend right",                     // 5
        "  empty slot found: attach the new node",         // 6
        "  equal key: already present, stop",              // 7
    ],
};

pub static BST_SEARCH: Listing = Listing {
    title: "BST search",
    lines: &[
        "procedure search(key)",                           // 1
        "  start at the root",                             // 2
        "  compare key with the current node",             // 3
        "  key smaller: descend left",                     // 4
        "  key larger: descend right",                     // 5
        "  equal: found it",                               // 6
        "  empty subtree: key is not present",             // 7
    ],
};

pub static KNAPSACK: Listing = Listing {
    title: "0/1 knapsack",
    lines: &[
        "procedure knapsack(items, W)",                    // 1
        "  row 0: value 0 at every capacity",              // 2
        "  for each item i and capacity w",                // 3
        "    too heavy: copy the value from above",        // 4
        "    else take max(include, exclude)",             // 5
        "  best value is table[n][W]",                     // 6
        "  walk the table back to list the items",         // 7
    ],
};

pub static FIB_ITERATIVE: Listing = Listing {
    title: "Fibonacci, iterative",
    lines: &[
        "procedure fib(n)",                                // 1
        "  if n < 2, the answer is n",                     // 2
        "  (a, b) = (0, 1)",                               // 3
        "  for i = 2 .. n",                                // 4
        "    (a, b) = (b, a + b)",                         // 5
        "  the answer is b",                               // 6
    ],
};

pub static FIB_RECURSIVE: Listing = Listing {
    title: "Fibonacci, recursive",
    lines: &[
        "procedure fib(n)",                                // 1
        "  if n < 2, return n",                            // 2
        "  call fib(n-1)",                                 // 3
        "  call fib(n-2)",                                 // 4
        "  return fib(n-1) + fib(n-2)",                    // 5
    ],
};

pub static FIB_MEMOIZED: Listing = Listing {
    title: "Fibonacci, memoized",
    lines: &[
        "procedure fib(n)",                                // 1
        "  if memo holds n, return memo[n]",               // 2
        "  if n < 2, return n",                            // 3
        "  call fib(n-1)",                                 // 4
        "  call fib(n-2)",                                 // 5
        "  memo[n] = fib(n-1) + fib(n-2)",                 // 6
        "  return memo[n]",                                // 7
    ],
};

pub static FIB_TABULATED: Listing = Listing {
    title: "Fibonacci, bottom-up",
    lines: &[
        "procedure fib(n)",                                // 1
        "  table[0] = 0, table[1] = 1",                    // 2
        "  for i = 2 .. n",                                // 3
        "    table[i] = table[i-1] + table[i-2]",          // 4
        "  the answer is table[n]",                        // 5
    ],
};
