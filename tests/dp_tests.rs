use algotty::input::validate::{parse_fib_n, parse_knapsack};
use algotty::input::Dataset;
use algotty::runner::{self, Algorithm, FibMethod};
use algotty::step::{CallsSnapshot, Step, StepPayload, StepSequence, TableSnapshot};

fn run_knapsack(items: &str, capacity: &str) -> StepSequence {
    let dataset = Dataset::Knapsack(parse_knapsack(items, capacity).expect("valid knapsack"));
    runner::run(&dataset, Algorithm::Knapsack).expect("runner failed")
}

fn run_fib(n: u32, method: FibMethod) -> StepSequence {
    runner::run(&Dataset::Fib { n }, Algorithm::Fibonacci { method }).expect("runner failed")
}

fn table_snap(step: &Step) -> &TableSnapshot {
    match &step.payload {
        StepPayload::Table(snapshot) => snapshot,
        other => panic!("expected table payload, got {:?}", other),
    }
}

fn calls_snap(step: &Step) -> &CallsSnapshot {
    match &step.payload {
        StepPayload::Calls(snapshot) => snapshot,
        other => panic!("expected calls payload, got {:?}", other),
    }
}

const ITEMS: &str = "gold:10:60,silver:20:100,bronze:30:120";

#[test]
fn knapsack_concrete_scenario() {
    // (10,60), (20,100), (30,120) at capacity 50: best value 220
    let seq = run_knapsack(ITEMS, "50");
    let last = table_snap(seq.last());

    assert_eq!(last.cells[3][50], Some(220));
    assert_eq!(last.selected, vec![1, 2], "silver and bronze");
    assert!(seq.last().description.contains("220"));
}

#[test]
fn knapsack_selection_obeys_the_capacity_and_matches_the_table() {
    let weights = [10u64, 20, 100];
    let values = [60u64, 100, 120];
    let seq = run_knapsack("a:10:60,b:20:100,c:100:120", "50");
    let last = table_snap(seq.last());

    let total_weight: u64 = last.selected.iter().map(|&i| weights[i]).sum();
    let total_value: u64 = last.selected.iter().map(|&i| values[i]).sum();
    assert!(total_weight <= 50);
    assert_eq!(Some(total_value), last.cells[3][50], "selection reproduces dp[n][W]");
}

#[test]
fn knapsack_fills_row_major_with_one_step_per_cell() {
    let seq = run_knapsack(ITEMS, "50");
    let cells: Vec<(usize, usize)> = seq
        .iter()
        .filter_map(|s| table_snap(s).active)
        .collect();

    assert_eq!(cells.len(), 3 * 51, "one step per (item, capacity) cell");
    assert_eq!(seq.last().metrics["cells"], 3 * 51);
    let mut expected = Vec::new();
    for i in 1..=3 {
        for w in 0..=50 {
            expected.push((i, w));
        }
    }
    assert_eq!(cells, expected, "row-major fill order");
}

#[test]
fn knapsack_too_heavy_cells_copy_from_above() {
    let seq = run_knapsack("boulder:100:500,pebble:1:1", "3");
    let last = table_snap(seq.last());
    assert_eq!(last.cells[2][3], Some(1), "only the pebble fits");
    assert_eq!(last.selected, vec![1]);
    assert!(seq.iter().any(|s| s.description.contains("too heavy")));
}

#[test]
fn fib_iterative_carries_the_rolling_pair() {
    let seq = run_fib(10, FibMethod::Iterative);
    let last = calls_snap(seq.last());

    assert_eq!(last.returned, Some((10, 55)));
    assert_eq!(last.pair, Some((34, 55)));
    assert_eq!(seq.last().metrics["additions"], 9);
}

#[test]
fn fib_naive_recursion_counts_every_call() {
    let seq = run_fib(5, FibMethod::Recursive);
    let last = seq.last();

    assert_eq!(calls_snap(last).returned, Some((5, 5)));
    assert_eq!(last.metrics["calls"], 15, "call-tree size of fib(5)");
    assert_eq!(last.metrics["additions"], 7, "one per composite call");
    // Every call enters and returns, plus the summary step
    assert_eq!(seq.len(), 31);
}

#[test]
fn fib_memoized_collapses_the_call_tree() {
    let seq = run_fib(10, FibMethod::Memoized);
    let last = seq.last();

    assert_eq!(calls_snap(last).returned, Some((10, 55)));
    assert_eq!(last.metrics["additions"], 9, "each value computed once");
    assert!(last.metrics["memo_hits"] > 0);
    assert!(
        last.metrics["calls"] < 177,
        "far fewer calls than the naive tree for n=10"
    );
    assert_eq!(calls_snap(last).memo[10], Some(55));
}

#[test]
fn fib_tabulated_fills_every_cell() {
    let seq = run_fib(10, FibMethod::Tabulated);
    let last = calls_snap(seq.last());

    assert_eq!(last.returned, Some((10, 55)));
    assert_eq!(
        last.table,
        vec![
            Some(0),
            Some(1),
            Some(1),
            Some(2),
            Some(3),
            Some(5),
            Some(8),
            Some(13),
            Some(21),
            Some(34),
            Some(55)
        ]
    );
    assert_eq!(seq.last().metrics["cells"], 11);
}

#[test]
fn fib_base_cases() {
    assert_eq!(parse_fib_n("0").unwrap(), 0);

    let seq = run_fib(0, FibMethod::Iterative);
    assert_eq!(calls_snap(seq.last()).returned, Some((0, 0)));
    assert_eq!(seq.len(), 2, "an initial and a terminal step");

    let seq = run_fib(1, FibMethod::Recursive);
    assert_eq!(calls_snap(seq.last()).returned, Some((1, 1)));

    let seq = run_fib(1, FibMethod::Tabulated);
    assert_eq!(calls_snap(seq.last()).table, vec![Some(0), Some(1)]);
}

#[test]
fn fib_methods_agree_with_each_other() {
    for n in [2, 7, 12] {
        let reference = calls_snap(run_fib(n, FibMethod::Iterative).last())
            .returned
            .map(|(_, v)| v);
        for method in [FibMethod::Recursive, FibMethod::Memoized, FibMethod::Tabulated] {
            let value = calls_snap(run_fib(n, method).last()).returned.map(|(_, v)| v);
            assert_eq!(value, reference, "{:?} disagrees at n={}", method, n);
        }
    }
}

#[test]
fn dp_runs_are_deterministic() {
    let a = run_knapsack(ITEMS, "50");
    let b = run_knapsack(ITEMS, "50");
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.description, y.description);
        assert_eq!(x.code_line, y.code_line);
        assert_eq!(x.metrics, y.metrics);
    }
}
