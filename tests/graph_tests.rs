use algotty::input::validate::parse_graph;
use algotty::input::Dataset;
use algotty::runner::{self, Algorithm, SortDirection, SortKind};
use algotty::step::{EdgeClass, GraphSnapshot, InvariantError, Step, StepPayload, StepSequence};

fn graph_dataset(nodes: usize, edges: &str, directed: bool) -> Dataset {
    Dataset::Graph(parse_graph(nodes, edges, directed).expect("valid graph"))
}

fn run_bfs(nodes: usize, edges: &str, directed: bool, start: usize) -> StepSequence {
    runner::run(&graph_dataset(nodes, edges, directed), Algorithm::Bfs { start })
        .expect("runner failed")
}

fn run_dfs(nodes: usize, edges: &str, directed: bool, start: usize) -> StepSequence {
    runner::run(&graph_dataset(nodes, edges, directed), Algorithm::Dfs { start })
        .expect("runner failed")
}

fn graph_snap(step: &Step) -> &GraphSnapshot {
    match &step.payload {
        StepPayload::Graph(snapshot) => snapshot,
        other => panic!("expected graph payload, got {:?}", other),
    }
}

#[test]
fn bfs_distances_on_a_path_graph() {
    // Undirected 0-1,1-2,2-3 from 0: distances 0,1,2,3
    let seq = run_bfs(4, "0-1,1-2,2-3", false, 0);
    let last = graph_snap(seq.last());
    assert_eq!(
        last.distances,
        vec![Some(0), Some(1), Some(2), Some(3)]
    );
}

#[test]
fn bfs_visits_every_reachable_node_exactly_once() {
    let seq = run_bfs(5, "0-1,0-2,1-3,2-3,3-4", false, 0);
    let last = graph_snap(seq.last());
    let mut visited = last.visited.clone();
    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
}

#[test]
fn bfs_distance_map_is_shortest_paths() {
    // Node 2 is reachable in two hops both ways around the diamond
    let seq = run_bfs(4, "0-1,1-2,0-3,3-2", false, 0);
    let last = graph_snap(seq.last());
    assert_eq!(last.distances, vec![Some(0), Some(1), Some(2), Some(1)]);
}

#[test]
fn bfs_never_enqueues_a_node_twice() {
    // The cycle gives several chances to re-enqueue an already-queued node
    let seq = run_bfs(4, "0-1,0-2,1-2,2-3", false, 0);
    let last = seq.last();
    assert_eq!(last.metrics["enqueues"], 4, "one enqueue per reachable node");
    assert_eq!(last.metrics["dequeues"], 4);
    assert!(seq
        .iter()
        .any(|s| graph_snap(s).edge.is_some_and(|e| e.class == EdgeClass::AlreadyQueued)));
}

#[test]
fn bfs_reports_unreachable_nodes() {
    let seq = run_bfs(4, "0-1", false, 0);
    let last = graph_snap(seq.last());
    assert_eq!(last.distances[2], None);
    assert_eq!(last.distances[3], None);
    assert_eq!(last.visited.len(), 2);
    assert!(seq.last().description.contains("unreachable"));
}

#[test]
fn bfs_respects_direction() {
    // Directed edges all point away from 3; nothing is reachable from it
    let seq = run_bfs(4, "0-1,1-2,2-3", true, 3);
    let last = graph_snap(seq.last());
    assert_eq!(last.visited, vec![3]);
    assert_eq!(last.distances, vec![None, None, None, Some(0)]);
}

#[test]
fn dfs_finds_the_back_edge_in_a_directed_cycle() {
    let seq = run_dfs(3, "0-1,1-2,2-0", true, 0);
    let last = graph_snap(seq.last());
    assert!(last.cycle_found);
    assert!(seq
        .iter()
        .any(|s| graph_snap(s).edge.is_some_and(|e| e.class == EdgeClass::Back)));
}

#[test]
fn dfs_does_not_call_the_arrival_edge_a_cycle() {
    // An undirected path has no cycle; the edge back to the parent must not
    // be classified as one
    let seq = run_dfs(4, "0-1,1-2,2-3", false, 0);
    let last = graph_snap(seq.last());
    assert!(!last.cycle_found);
    assert!(!seq
        .iter()
        .any(|s| graph_snap(s).edge.is_some_and(|e| e.class == EdgeClass::Back)));
}

#[test]
fn dfs_undirected_cycle_is_still_detected() {
    let seq = run_dfs(3, "0-1,1-2,2-0", false, 0);
    assert!(graph_snap(seq.last()).cycle_found);
}

#[test]
fn dfs_discovery_and_finish_intervals_nest() {
    let seq = run_dfs(6, "0-1,1-2,0-3,3-4,0-5", false, 0);
    let last = graph_snap(seq.last());

    let spans: Vec<(u32, u32)> = (0..6)
        .map(|node| {
            let d = last.discovery[node].expect("discovered");
            let f = last.finish[node].expect("finished");
            assert!(d < f, "node {} has inverted times", node);
            (d, f)
        })
        .collect();

    // Any two intervals are either disjoint or nested
    for (i, &(d1, f1)) in spans.iter().enumerate() {
        for &(d2, f2) in spans.iter().skip(i + 1) {
            let disjoint = f1 < d2 || f2 < d1;
            let nested = (d1 < d2 && f2 < f1) || (d2 < d1 && f1 < f2);
            assert!(disjoint || nested, "intervals ({},{}) and ({},{}) cross", d1, f1, d2, f2);
        }
    }
}

#[test]
fn dfs_visits_each_reachable_node_once() {
    let seq = run_dfs(5, "0-1,1-2,2-0,3-4", false, 0);
    let last = graph_snap(seq.last());
    let mut visited = last.visited.clone();
    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2], "only the component of the start");
}

#[test]
fn traversals_are_deterministic() {
    let a = run_bfs(5, "0-1,0-2,1-3,2-3,3-4", false, 0);
    let b = run_bfs(5, "0-1,0-2,1-3,2-3,3-4", false, 0);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.description, y.description);
        assert_eq!(x.metrics, y.metrics);
    }
}

#[test]
fn contract_violations_are_invariant_errors() {
    let dataset = graph_dataset(4, "0-1,1-2", false);

    // Start node outside the graph
    let err = runner::run(&dataset, Algorithm::Bfs { start: 10 }).unwrap_err();
    assert!(matches!(err, InvariantError::BadStartNode { start: 10, nodes: 4 }));

    // Dataset/algorithm mismatch
    let err = runner::run(
        &dataset,
        Algorithm::Sort {
            kind: SortKind::Bubble,
            direction: SortDirection::Ascending,
        },
    )
    .unwrap_err();
    assert!(matches!(err, InvariantError::DatasetMismatch { .. }));
}
