//! BST insert and search runners
//!
//! The tree is built silently from the validated key set, then the requested
//! operation walks it with an explicit loop — one comparison step per node on
//! the path, plus a final step attaching the new node or reporting
//! found/not-found. The arena layout (indices instead of boxed children)
//! makes each snapshot a flat copy.

use crate::runner::{BstOp, Recorder};
use crate::step::{BstOutcome, InvariantError, StepPayload, StepSequence, TreeNodeView, TreeSnapshot};

pub(super) fn run(keys: &[i64], op: BstOp) -> Result<StepSequence, InvariantError> {
    if keys.is_empty() {
        return Err(InvariantError::EmptyDataset { runner: "bst" });
    }
    let mut nodes: Vec<TreeNodeView> = Vec::new();
    for &key in keys {
        attach_silent(&mut nodes, key);
    }
    match op {
        BstOp::Insert(key) => insert(nodes, key),
        BstOp::Search(key) => search(nodes, key),
    }
}

/// Standard BST insert without step emission, used to build the initial tree.
fn attach_silent(nodes: &mut Vec<TreeNodeView>, key: i64) {
    if nodes.is_empty() {
        nodes.push(TreeNodeView {
            key,
            left: None,
            right: None,
        });
        return;
    }
    let mut cur = 0;
    loop {
        if key < nodes[cur].key {
            match nodes[cur].left {
                Some(child) => cur = child,
                None => {
                    let idx = nodes.len();
                    nodes.push(TreeNodeView {
                        key,
                        left: None,
                        right: None,
                    });
                    nodes[cur].left = Some(idx);
                    return;
                }
            }
        } else if key > nodes[cur].key {
            match nodes[cur].right {
                Some(child) => cur = child,
                None => {
                    let idx = nodes.len();
                    nodes.push(TreeNodeView {
                        key,
                        left: None,
                        right: None,
                    });
                    nodes[cur].right = Some(idx);
                    return;
                }
            }
        } else {
            // The validator rejects duplicate keys in the initial set.
            return;
        }
    }
}

fn snap(
    nodes: &[TreeNodeView],
    current: Option<usize>,
    path: &[i64],
    outcome: Option<BstOutcome>,
) -> TreeSnapshot {
    TreeSnapshot {
        nodes: nodes.to_vec(),
        current,
        path: path.to_vec(),
        outcome,
    }
}

fn insert(mut nodes: Vec<TreeNodeView>, key: i64) -> Result<StepSequence, InvariantError> {
    let mut rec = Recorder::new(&["comparisons"]);
    let mut path: Vec<i64> = Vec::new();

    rec.record(
        format!("Insert {}: start at root {}", key, nodes[0].key),
        2,
        StepPayload::Tree(snap(&nodes, Some(0), &path, None)),
    );

    let mut cur = 0;
    loop {
        let node_key = nodes[cur].key;
        rec.bump("comparisons");
        path.push(node_key);
        rec.record(
            format!("Compare {} with {}", key, node_key),
            3,
            StepPayload::Tree(snap(&nodes, Some(cur), &path, None)),
        );

        if key < node_key {
            match nodes[cur].left {
                Some(child) => {
                    rec.record(
                        format!("{} < {}: descend left", key, node_key),
                        4,
                        StepPayload::Tree(snap(&nodes, Some(child), &path, None)),
                    );
                    cur = child;
                }
                None => {
                    let idx = nodes.len();
                    nodes.push(TreeNodeView {
                        key,
                        left: None,
                        right: None,
                    });
                    nodes[cur].left = Some(idx);
                    let outcome = BstOutcome::Attached {
                        parent: cur,
                        left: true,
                    };
                    return rec.finish(
                        format!("Empty left slot under {}: attach {}", node_key, key),
                        6,
                        StepPayload::Tree(snap(&nodes, Some(idx), &path, Some(outcome))),
                    );
                }
            }
        } else if key > node_key {
            match nodes[cur].right {
                Some(child) => {
                    rec.record(
                        format!("{} > {}: descend right", key, node_key),
                        5,
                        StepPayload::Tree(snap(&nodes, Some(child), &path, None)),
                    );
                    cur = child;
                }
                None => {
                    let idx = nodes.len();
                    nodes.push(TreeNodeView {
                        key,
                        left: None,
                        right: None,
                    });
                    nodes[cur].right = Some(idx);
                    let outcome = BstOutcome::Attached {
                        parent: cur,
                        left: false,
                    };
                    return rec.finish(
                        format!("Empty right slot under {}: attach {}", node_key, key),
                        6,
                        StepPayload::Tree(snap(&nodes, Some(idx), &path, Some(outcome))),
                    );
                }
            }
        } else {
            return rec.finish(
                format!("{} is already in the tree: nothing to insert", key),
                7,
                StepPayload::Tree(snap(&nodes, Some(cur), &path, Some(BstOutcome::Duplicate))),
            );
        }
    }
}

fn search(nodes: Vec<TreeNodeView>, key: i64) -> Result<StepSequence, InvariantError> {
    let mut rec = Recorder::new(&["comparisons"]);
    let mut path: Vec<i64> = Vec::new();

    rec.record(
        format!("Search {}: start at root {}", key, nodes[0].key),
        2,
        StepPayload::Tree(snap(&nodes, Some(0), &path, None)),
    );

    let mut cur = 0;
    loop {
        let node_key = nodes[cur].key;
        rec.bump("comparisons");
        path.push(node_key);
        rec.record(
            format!("Compare {} with {}", key, node_key),
            3,
            StepPayload::Tree(snap(&nodes, Some(cur), &path, None)),
        );

        let child = if key < node_key {
            nodes[cur].left
        } else if key > node_key {
            nodes[cur].right
        } else {
            return rec.finish(
                format!("Found {} after {} comparisons", key, path.len()),
                6,
                StepPayload::Tree(snap(&nodes, Some(cur), &path, Some(BstOutcome::Found(cur)))),
            );
        };

        match child {
            Some(next) => {
                let (line, side) = if key < node_key { (4, "left") } else { (5, "right") };
                rec.record(
                    format!("Descend {} of {}", side, node_key),
                    line,
                    StepPayload::Tree(snap(&nodes, Some(next), &path, None)),
                );
                cur = next;
            }
            None => {
                return rec.finish(
                    format!("{} is not in the tree", key),
                    7,
                    StepPayload::Tree(snap(&nodes, Some(cur), &path, Some(BstOutcome::Missing))),
                );
            }
        }
    }
}
