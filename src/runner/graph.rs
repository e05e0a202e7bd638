//! Graph traversal runners: BFS and DFS
//!
//! BFS owns a real FIFO queue with a separate queued-set, so a node can
//! never be enqueued twice — the recorded distance map is the first-touch
//! one, which equals unweighted shortest paths. DFS owns an explicit frame
//! stack and classifies every examined edge: tree (first visit), back
//! (target still on the stack — a cycle witness), or skippable. Undirected
//! graphs get symmetric adjacency before traversal begins, and DFS skips the
//! single edge it arrived on rather than mistaking it for a cycle.

use crate::input::dataset::GraphInput;
use crate::runner::Recorder;
use crate::step::{EdgeClass, EdgeView, GraphSnapshot, InvariantError, StepPayload, StepSequence};
use std::collections::VecDeque;

fn check(graph: &GraphInput, start: usize) -> Result<(), InvariantError> {
    if graph.nodes == 0 {
        return Err(InvariantError::EmptyDataset { runner: "traversal" });
    }
    if start >= graph.nodes {
        return Err(InvariantError::BadStartNode {
            start,
            nodes: graph.nodes,
        });
    }
    Ok(())
}

fn unreachable_note(visited: &[bool]) -> String {
    let unreachable: Vec<String> = visited
        .iter()
        .enumerate()
        .filter(|(_, &v)| !v)
        .map(|(i, _)| i.to_string())
        .collect();
    if unreachable.is_empty() {
        String::new()
    } else {
        format!("; unreachable: {}", unreachable.join(", "))
    }
}

pub(super) fn bfs(graph: &GraphInput, start: usize) -> Result<StepSequence, InvariantError> {
    check(graph, start)?;
    let n = graph.nodes;
    let adj = graph.adjacency();
    let mut rec = Recorder::new(&["dequeues", "enqueues", "visits"]);

    let mut visited = vec![false; n];
    let mut queued = vec![false; n];
    let mut visit_order: Vec<usize> = Vec::new();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    // The queue carries each node's distance along with it, assigned once at
    // enqueue time.
    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();

    let snap = |visit_order: &[usize],
                queue: &VecDeque<(usize, u32)>,
                dist: &[Option<u32>]| {
        let mut p = GraphSnapshot::sized(n);
        p.visited = visit_order.to_vec();
        p.frontier = queue.iter().map(|&(v, _)| v).collect();
        p.distances = dist.to_vec();
        p
    };

    queued[start] = true;
    dist[start] = Some(0);
    queue.push_back((start, 0));
    rec.bump("enqueues");
    let mut p = snap(&visit_order, &queue, &dist);
    p.current = Some(start);
    rec.record(
        format!("Enqueue start node {} at distance 0", start),
        2,
        StepPayload::Graph(p),
    );

    while let Some((u, du)) = queue.pop_front() {
        rec.bump("dequeues");
        let mut p = snap(&visit_order, &queue, &dist);
        p.current = Some(u);
        rec.record(format!("Dequeue node {}", u), 4, StepPayload::Graph(p));

        visited[u] = true;
        visit_order.push(u);
        rec.bump("visits");
        let mut p = snap(&visit_order, &queue, &dist);
        p.current = Some(u);
        rec.record(format!("Mark node {} visited", u), 5, StepPayload::Graph(p));

        for &v in &adj[u] {
            if !visited[v] && !queued[v] {
                queued[v] = true;
                dist[v] = Some(du + 1);
                queue.push_back((v, du + 1));
                rec.bump("enqueues");
                let mut p = snap(&visit_order, &queue, &dist);
                p.current = Some(u);
                p.edge = Some(EdgeView {
                    from: u,
                    to: v,
                    class: EdgeClass::Enqueued,
                });
                rec.record(
                    format!("Enqueue node {} at distance {}", v, du + 1),
                    7,
                    StepPayload::Graph(p),
                );
            } else {
                let class = if visited[v] {
                    EdgeClass::AlreadyVisited
                } else {
                    EdgeClass::AlreadyQueued
                };
                let why = if visited[v] { "visited" } else { "queued" };
                let mut p = snap(&visit_order, &queue, &dist);
                p.current = Some(u);
                p.edge = Some(EdgeView { from: u, to: v, class });
                rec.record(
                    format!("Skip node {}: already {}", v, why),
                    8,
                    StepPayload::Graph(p),
                );
            }
        }
    }

    let p = snap(&visit_order, &queue, &dist);
    rec.finish(
        format!(
            "BFS complete: visited {} of {} nodes{}",
            visit_order.len(),
            n,
            unreachable_note(&visited)
        ),
        9,
        StepPayload::Graph(p),
    )
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    next: usize,
}

pub(super) fn dfs(graph: &GraphInput, start: usize) -> Result<StepSequence, InvariantError> {
    check(graph, start)?;
    let n = graph.nodes;
    let adj = graph.adjacency();
    let mut rec = Recorder::new(&["visits", "edges"]);

    let mut visited = vec![false; n];
    let mut finished = vec![false; n];
    let mut visit_order: Vec<usize> = Vec::new();
    let mut disc: Vec<Option<u32>> = vec![None; n];
    let mut fin: Vec<Option<u32>> = vec![None; n];
    let mut clock: u32 = 0;
    let mut cycle_found = false;
    let mut stack: Vec<Frame> = Vec::new();

    let snap = |visit_order: &[usize],
                stack: &[Frame],
                disc: &[Option<u32>],
                fin: &[Option<u32>],
                cycle_found: bool| {
        let mut p = GraphSnapshot::sized(n);
        p.visited = visit_order.to_vec();
        p.frontier = stack.iter().map(|f| f.node).collect();
        p.discovery = disc.to_vec();
        p.finish = fin.to_vec();
        p.cycle_found = cycle_found;
        p
    };

    visited[start] = true;
    disc[start] = Some(clock);
    clock += 1;
    visit_order.push(start);
    rec.bump("visits");
    stack.push(Frame {
        node: start,
        parent: None,
        next: 0,
    });
    let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
    p.current = Some(start);
    rec.record(
        format!("Enter node {} (discovery time 0)", start),
        2,
        StepPayload::Graph(p),
    );

    loop {
        let (u, parent, next) = match stack.last() {
            Some(f) => (f.node, f.parent, f.next),
            None => break,
        };

        if next >= adj[u].len() {
            let t = clock;
            clock += 1;
            fin[u] = Some(t);
            finished[u] = true;
            stack.pop();
            let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
            p.current = Some(u);
            rec.record(
                format!("Exit node {} (finish time {})", u, t),
                8,
                StepPayload::Graph(p),
            );
            continue;
        }
        if let Some(f) = stack.last_mut() {
            f.next += 1;
        }

        let v = adj[u][next];
        rec.bump("edges");

        if !visited[v] {
            let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
            p.current = Some(u);
            p.edge = Some(EdgeView {
                from: u,
                to: v,
                class: EdgeClass::Tree,
            });
            rec.record(
                format!("Tree edge {}-{}: descend", u, v),
                5,
                StepPayload::Graph(p),
            );

            let t = clock;
            clock += 1;
            visited[v] = true;
            disc[v] = Some(t);
            visit_order.push(v);
            rec.bump("visits");
            stack.push(Frame {
                node: v,
                parent: Some(u),
                next: 0,
            });
            let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
            p.current = Some(v);
            rec.record(
                format!("Enter node {} (discovery time {})", v, t),
                5,
                StepPayload::Graph(p),
            );
        } else if !graph.directed && parent == Some(v) {
            let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
            p.current = Some(u);
            p.edge = Some(EdgeView {
                from: u,
                to: v,
                class: EdgeClass::Arrival,
            });
            rec.record(
                format!("Skip the edge back to parent {}", v),
                7,
                StepPayload::Graph(p),
            );
        } else if !finished[v] {
            cycle_found = true;
            let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
            p.current = Some(u);
            p.edge = Some(EdgeView {
                from: u,
                to: v,
                class: EdgeClass::Back,
            });
            rec.record(
                format!("Back edge {}-{}: node {} is still on the stack (cycle)", u, v, v),
                6,
                StepPayload::Graph(p),
            );
        } else {
            let mut p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
            p.current = Some(u);
            p.edge = Some(EdgeView {
                from: u,
                to: v,
                class: EdgeClass::Finished,
            });
            rec.record(
                format!("Node {} already finished: skip", v),
                7,
                StepPayload::Graph(p),
            );
        }
    }

    let cycle_note = if cycle_found {
        "; cycle detected"
    } else {
        "; no cycle found"
    };
    let p = snap(&visit_order, &stack, &disc, &fin, cycle_found);
    rec.finish(
        format!(
            "DFS complete: visited {} of {} nodes{}{}",
            visit_order.len(),
            n,
            cycle_note,
            unreachable_note(&visited)
        ),
        9,
        StepPayload::Graph(p),
    )
}
