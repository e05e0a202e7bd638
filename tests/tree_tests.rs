use algotty::input::validate::parse_bst_keys;
use algotty::input::Dataset;
use algotty::runner::{self, Algorithm, BstOp};
use algotty::step::{BstOutcome, Step, StepPayload, StepSequence, TreeSnapshot};

fn run_bst(keys: &str, op: BstOp) -> StepSequence {
    let dataset = Dataset::BstKeys(parse_bst_keys(keys).expect("valid keys"));
    runner::run(&dataset, Algorithm::Bst { op }).expect("runner failed")
}

fn tree_snap(step: &Step) -> &TreeSnapshot {
    match &step.payload {
        StepPayload::Tree(snapshot) => snapshot,
        other => panic!("expected tree payload, got {:?}", other),
    }
}

const KEYS: &str = "8,3,10,1,6,14";

#[test]
fn search_records_the_comparison_path() {
    let seq = run_bst(KEYS, BstOp::Search(6));
    let last = tree_snap(seq.last());

    assert_eq!(last.path, vec![8, 3, 6]);
    assert!(matches!(last.outcome, Some(BstOutcome::Found(_))));
    assert_eq!(seq.last().metrics["comparisons"], 3);
}

#[test]
fn search_miss_reports_not_found() {
    let seq = run_bst(KEYS, BstOp::Search(7));
    let last = tree_snap(seq.last());

    assert_eq!(last.path, vec![8, 3, 6]);
    assert_eq!(last.outcome, Some(BstOutcome::Missing));
    assert!(seq.last().description.contains("not in the tree"));
}

#[test]
fn insert_attaches_at_the_empty_slot() {
    let seq = run_bst(KEYS, BstOp::Insert(7));
    let last = tree_snap(seq.last());

    let Some(BstOutcome::Attached { parent, left }) = last.outcome else {
        panic!("expected an attach outcome, got {:?}", last.outcome);
    };
    assert_eq!(last.nodes[parent].key, 6, "7 attaches under 6");
    assert!(!left, "7 goes to the right of 6");
    assert_eq!(last.nodes.len(), 7);
    assert!(last.nodes.iter().any(|n| n.key == 7));
}

#[test]
fn insert_of_an_existing_key_changes_nothing() {
    let seq = run_bst(KEYS, BstOp::Insert(10));
    let last = tree_snap(seq.last());

    assert_eq!(last.outcome, Some(BstOutcome::Duplicate));
    assert_eq!(last.nodes.len(), 6);
}

#[test]
fn earlier_steps_do_not_see_the_inserted_node() {
    // Payload snapshots are copies: the attach on the final step must not
    // leak backward into earlier steps
    let seq = run_bst(KEYS, BstOp::Insert(7));
    for step in seq.iter() {
        if !step.terminal {
            assert_eq!(tree_snap(step).nodes.len(), 6, "step {} aliases the working tree", step.index);
        }
    }
}

#[test]
fn single_key_tree_operations() {
    let seq = run_bst("5", BstOp::Search(5));
    assert!(matches!(
        tree_snap(seq.last()).outcome,
        Some(BstOutcome::Found(0))
    ));

    let seq = run_bst("5", BstOp::Insert(3));
    let last = tree_snap(seq.last());
    assert!(matches!(
        last.outcome,
        Some(BstOutcome::Attached { parent: 0, left: true })
    ));
}
