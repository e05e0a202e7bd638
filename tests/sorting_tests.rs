use algotty::code;
use algotty::input::validate::{parse_sequence, DataType};
use algotty::input::{Dataset, SeqValue};
use algotty::runner::{self, Algorithm, SortDirection, SortKind};
use algotty::step::{Step, StepPayload, StepSequence};

const ALL_KINDS: [SortKind; 4] = [
    SortKind::Bubble,
    SortKind::Quick,
    SortKind::Merge,
    SortKind::Heap,
];

fn number_dataset(raw: &str) -> Dataset {
    Dataset::Sequence(parse_sequence(raw, DataType::Number).expect("valid sequence"))
}

fn run_sort(kind: SortKind, direction: SortDirection, raw: &str) -> StepSequence {
    runner::run(&number_dataset(raw), Algorithm::Sort { kind, direction }).expect("runner failed")
}

fn array_values(step: &Step) -> Vec<SeqValue> {
    match &step.payload {
        StepPayload::Array(snapshot) => snapshot.values.clone(),
        other => panic!("expected array payload, got {:?}", other),
    }
}

fn as_ints(values: &[SeqValue]) -> Vec<i64> {
    values
        .iter()
        .map(|v| match v {
            SeqValue::Int(n) => *n,
            SeqValue::Text(s) => panic!("expected int, got '{}'", s),
        })
        .collect()
}

#[test]
fn bubble_concrete_scenario() {
    // "5,3,8,1" ascending: 6 comparisons, 4 swaps, sorted payload
    let seq = run_sort(SortKind::Bubble, SortDirection::Ascending, "5,3,8,1");
    let last = seq.last();

    assert!(last.terminal);
    assert_eq!(last.index, seq.len() - 1);
    assert_eq!(as_ints(&array_values(last)), vec![1, 3, 5, 8]);
    assert_eq!(last.metrics["comparisons"], 6);
    assert_eq!(last.metrics["swaps"], 4);
}

#[test]
fn only_the_last_step_is_terminal() {
    let seq = run_sort(SortKind::Bubble, SortDirection::Ascending, "5,3,8,1");
    for step in seq.iter() {
        assert_eq!(step.terminal, step.index == seq.len() - 1);
    }
}

#[test]
fn every_step_is_a_permutation_of_the_input() {
    let raw = "7,2,9,4,1,8,3";
    let mut reference = as_ints(&parse_sequence(raw, DataType::Number).unwrap());
    reference.sort_unstable();

    for kind in ALL_KINDS {
        let seq = run_sort(kind, SortDirection::Ascending, raw);
        for step in seq.iter() {
            let mut now = as_ints(&array_values(step));
            now.sort_unstable();
            assert_eq!(now, reference, "{:?} step {} lost or invented elements", kind, step.index);
        }
    }
}

#[test]
fn all_kinds_sort_both_directions() {
    let raw = "7,2,9,4,1,8,3,6";
    let mut ascending = as_ints(&parse_sequence(raw, DataType::Number).unwrap());
    ascending.sort_unstable();
    let mut descending = ascending.clone();
    descending.reverse();

    for kind in ALL_KINDS {
        let seq = run_sort(kind, SortDirection::Ascending, raw);
        assert_eq!(as_ints(&array_values(seq.last())), ascending, "{:?} ascending", kind);

        let seq = run_sort(kind, SortDirection::Descending, raw);
        assert_eq!(as_ints(&array_values(seq.last())), descending, "{:?} descending", kind);
    }
}

#[test]
fn string_sequences_sort_lexicographically() {
    let values = parse_sequence("pear,apple,fig,banana", DataType::Text).unwrap();
    let dataset = Dataset::Sequence(values);
    let seq = runner::run(
        &dataset,
        Algorithm::Sort {
            kind: SortKind::Merge,
            direction: SortDirection::Ascending,
        },
    )
    .expect("runner failed");

    let sorted: Vec<String> = array_values(seq.last())
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(sorted, vec!["apple", "banana", "fig", "pear"]);
}

#[test]
fn metrics_never_decrease() {
    for kind in ALL_KINDS {
        let seq = run_sort(kind, SortDirection::Ascending, "9,1,8,2,7,3");
        let steps: Vec<&Step> = seq.iter().collect();
        for pair in steps.windows(2) {
            for (counter, &before) in &pair[0].metrics {
                let after = pair[1].metrics[counter];
                assert!(
                    after >= before,
                    "{:?}: counter {} decreased at step {}",
                    kind,
                    counter,
                    pair[1].index
                );
            }
        }
    }
}

#[test]
fn identical_input_yields_identical_sequences() {
    for kind in ALL_KINDS {
        let a = run_sort(kind, SortDirection::Ascending, "6,5,4,3,2,1");
        let b = run_sort(kind, SortDirection::Ascending, "6,5,4,3,2,1");
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.index, y.index);
            assert_eq!(x.description, y.description);
            assert_eq!(x.code_line, y.code_line);
            assert_eq!(x.metrics, y.metrics);
            assert_eq!(x.terminal, y.terminal);
        }
    }
}

#[test]
fn bubble_early_exit_still_emits_the_deciding_steps() {
    // Already sorted: one full pass of comparisons, then the early stop
    let seq = run_sort(SortKind::Bubble, SortDirection::Ascending, "1,2,3,4");
    let last = seq.last();
    assert_eq!(last.metrics["comparisons"], 3);
    assert_eq!(last.metrics["swaps"], 0);
    assert!(
        seq.iter().any(|s| s.description.contains("already sorted")),
        "missing the early-exit step"
    );
}

#[test]
fn sort_code_lines_stay_inside_their_listings() {
    for kind in ALL_KINDS {
        let algorithm = Algorithm::Sort {
            kind,
            direction: SortDirection::Ascending,
        };
        let listing = code::listing_for(&algorithm);
        let seq = runner::run(&number_dataset("5,3,8,1,9,2"), algorithm).expect("runner failed");
        for step in seq.iter() {
            if let Some(line) = step.code_line {
                assert!(
                    line >= 1 && line <= listing.len(),
                    "{:?} step {} points at line {} of a {}-line listing",
                    kind,
                    step.index,
                    line,
                    listing.len()
                );
            }
        }
    }
}

/// Reference counts for a bottom-up merge sort, computed without any step
/// machinery.
fn reference_merge_counts(mut v: Vec<i64>) -> (u64, u64) {
    let n = v.len();
    let (mut comparisons, mut placements) = (0u64, 0u64);
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            if mid < hi {
                let mut buffer = Vec::with_capacity(hi - lo);
                let (mut i, mut j) = (lo, mid);
                while i < mid && j < hi {
                    comparisons += 1;
                    if v[i] <= v[j] {
                        buffer.push(v[i]);
                        i += 1;
                    } else {
                        buffer.push(v[j]);
                        j += 1;
                    }
                }
                buffer.extend_from_slice(&v[i..mid]);
                buffer.extend_from_slice(&v[j..hi]);
                placements += buffer.len() as u64;
                v[lo..hi].copy_from_slice(&buffer);
            }
            lo += 2 * width;
        }
        width *= 2;
    }
    (comparisons, placements)
}

#[test]
fn merge_counters_match_an_independent_reference() {
    let raw = "9,4,7,1,8,2,6,3,5";
    let input = as_ints(&parse_sequence(raw, DataType::Number).unwrap());
    let (comparisons, placements) = reference_merge_counts(input);

    let seq = run_sort(SortKind::Merge, SortDirection::Ascending, raw);
    assert_eq!(seq.last().metrics["comparisons"], comparisons);
    assert_eq!(seq.last().metrics["merges"], placements);
}

#[test]
fn two_element_sequences_sort() {
    for kind in ALL_KINDS {
        let seq = run_sort(kind, SortDirection::Ascending, "2,1");
        assert_eq!(as_ints(&array_values(seq.last())), vec![1, 2], "{:?}", kind);
    }
}
