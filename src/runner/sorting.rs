//! The sorting family: bubble, quick, merge, heap
//!
//! All four emit a step for every comparison, every swap or placement, and
//! every phase boundary (pass, partition, merge, heap phase). Direction and
//! element type are configuration: the comparator is the only place order is
//! decided, and it delegates to [`SeqValue::compare`] for numeric versus
//! lexicographic semantics.
//!
//! Quicksort runs over an explicit range stack and merge sort iterates
//! bottom-up over run widths, so neither leans on call-stack recursion.

use crate::input::dataset::SeqValue;
use crate::runner::{Recorder, SortDirection, SortKind};
use crate::step::{ArraySnapshot, InvariantError, StepPayload, StepSequence};
use std::cmp::Ordering;

pub(super) fn run(
    kind: SortKind,
    direction: SortDirection,
    values: &[SeqValue],
) -> Result<StepSequence, InvariantError> {
    if values.is_empty() {
        return Err(InvariantError::EmptyDataset { runner: "sort" });
    }
    match kind {
        SortKind::Bubble => bubble(values, direction),
        SortKind::Quick => quick(values, direction),
        SortKind::Merge => merge(values, direction),
        SortKind::Heap => heap(values, direction),
    }
}

/// True when `a` may not stay in front of `b` for the given direction.
fn misordered(a: &SeqValue, b: &SeqValue, direction: SortDirection) -> bool {
    match direction {
        SortDirection::Ascending => a.compare(b) == Ordering::Greater,
        SortDirection::Descending => a.compare(b) == Ordering::Less,
    }
}

/// True when `a` should win a heap comparison against `b`: heap sort keeps a
/// max-heap when ascending and a min-heap when descending.
fn dominates(a: &SeqValue, b: &SeqValue, direction: SortDirection) -> bool {
    match direction {
        SortDirection::Ascending => a.compare(b) == Ordering::Greater,
        SortDirection::Descending => a.compare(b) == Ordering::Less,
    }
}

fn snap(values: &[SeqValue], settled: &[bool]) -> ArraySnapshot {
    ArraySnapshot {
        values: values.to_vec(),
        comparing: None,
        swapped: None,
        placed: None,
        region: None,
        settled: settled
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
            .collect(),
    }
}

fn join(values: &[SeqValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn bubble(values: &[SeqValue], direction: SortDirection) -> Result<StepSequence, InvariantError> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut rec = Recorder::new(&["comparisons", "swaps"]);
    let mut settled = vec![false; n];

    rec.record(
        format!("Start bubble sort on {} elements, {}", n, direction.label()),
        1,
        StepPayload::Array(snap(&a, &settled)),
    );

    for pass in 1..n {
        let mut swapped = false;
        rec.record(
            format!("Pass {}: bubble through the unsettled prefix", pass),
            2,
            StepPayload::Array(snap(&a, &settled)),
        );
        for j in 0..n - pass {
            rec.bump("comparisons");
            let mut p = snap(&a, &settled);
            p.comparing = Some((j, j + 1));
            rec.record(
                format!("Compare {} with {}", a[j], a[j + 1]),
                4,
                StepPayload::Array(p),
            );
            if misordered(&a[j], &a[j + 1], direction) {
                let desc = format!("Out of order: swap {} and {}", a[j], a[j + 1]);
                a.swap(j, j + 1);
                rec.bump("swaps");
                swapped = true;
                let mut p = snap(&a, &settled);
                p.swapped = Some((j, j + 1));
                rec.record(desc, 5, StepPayload::Array(p));
            }
        }
        settled[n - pass] = true;
        if !swapped {
            settled.iter_mut().for_each(|s| *s = true);
            rec.record(
                "No swaps this pass: the array is already sorted",
                6,
                StepPayload::Array(snap(&a, &settled)),
            );
            break;
        }
    }

    settled.iter_mut().for_each(|s| *s = true);
    rec.finish(
        format!("Sorted: {}", join(&a)),
        7,
        StepPayload::Array(snap(&a, &settled)),
    )
}

fn quick(values: &[SeqValue], direction: SortDirection) -> Result<StepSequence, InvariantError> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut rec = Recorder::new(&["comparisons", "swaps"]);
    let mut settled = vec![false; n];
    // Explicit range stack instead of recursion; the left subrange is pushed
    // last so it is partitioned first.
    let mut ranges: Vec<(usize, usize)> = vec![(0, n - 1)];

    rec.record(
        format!(
            "Start quicksort on {} elements, {}",
            n,
            direction.label()
        ),
        2,
        StepPayload::Array(snap(&a, &settled)),
    );

    while let Some((low, high)) = ranges.pop() {
        if low == high {
            settled[low] = true;
            continue;
        }

        let mut p = snap(&a, &settled);
        p.region = Some((low, high));
        rec.record(
            format!("Partition [{}..{}] with pivot {}", low, high, a[high]),
            4,
            StepPayload::Array(p),
        );

        let mut i = low;
        for j in low..high {
            rec.bump("comparisons");
            let mut p = snap(&a, &settled);
            p.comparing = Some((j, high));
            p.region = Some((low, high));
            rec.record(
                format!("Compare {} with pivot {}", a[j], a[high]),
                6,
                StepPayload::Array(p),
            );
            if !misordered(&a[j], &a[high], direction) {
                if i != j {
                    let desc = format!("Move {} into the left part", a[j]);
                    a.swap(i, j);
                    rec.bump("swaps");
                    let mut p = snap(&a, &settled);
                    p.swapped = Some((i, j));
                    p.region = Some((low, high));
                    rec.record(desc, 7, StepPayload::Array(p));
                }
                i += 1;
            }
        }

        let desc = format!("Place pivot {} at position {}", a[high], i);
        let moved = i != high;
        if moved {
            a.swap(i, high);
            rec.bump("swaps");
        }
        settled[i] = true;
        let mut p = snap(&a, &settled);
        p.swapped = moved.then_some((i, high));
        p.region = Some((low, high));
        rec.record(desc, 8, StepPayload::Array(p));

        if i < high {
            ranges.push((i + 1, high));
        }
        if i > low {
            ranges.push((low, i - 1));
        }
    }

    settled.iter_mut().for_each(|s| *s = true);
    rec.finish(
        format!("Sorted: {}", join(&a)),
        10,
        StepPayload::Array(snap(&a, &settled)),
    )
}

fn merge(values: &[SeqValue], direction: SortDirection) -> Result<StepSequence, InvariantError> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut rec = Recorder::new(&["comparisons", "merges"]);
    let mut settled = vec![false; n];

    rec.record(
        format!("Start merge sort on {} elements, {}", n, direction.label()),
        1,
        StepPayload::Array(snap(&a, &settled)),
    );

    let mut width = 1;
    while width < n {
        rec.record(
            format!("Merge adjacent runs of width {}", width),
            2,
            StepPayload::Array(snap(&a, &settled)),
        );
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            if mid < hi {
                let mut p = snap(&a, &settled);
                p.region = Some((lo, hi - 1));
                rec.record(
                    format!("Merge [{}..{}] with [{}..{}]", lo, mid - 1, mid, hi - 1),
                    3,
                    StepPayload::Array(p),
                );

                let mut buffer: Vec<SeqValue> = Vec::with_capacity(hi - lo);
                let (mut i, mut j) = (lo, mid);
                while i < mid && j < hi {
                    rec.bump("comparisons");
                    let mut p = snap(&a, &settled);
                    p.comparing = Some((i, j));
                    p.region = Some((lo, hi - 1));
                    rec.record(
                        format!("Compare {} with {}", a[i], a[j]),
                        4,
                        StepPayload::Array(p),
                    );
                    // Ties take the left run, keeping the sort stable.
                    if !misordered(&a[i], &a[j], direction) {
                        buffer.push(a[i].clone());
                        i += 1;
                    } else {
                        buffer.push(a[j].clone());
                        j += 1;
                    }
                }
                while i < mid {
                    buffer.push(a[i].clone());
                    i += 1;
                }
                while j < hi {
                    buffer.push(a[j].clone());
                    j += 1;
                }

                for (offset, value) in buffer.into_iter().enumerate() {
                    a[lo + offset] = value;
                    rec.bump("merges");
                    let mut p = snap(&a, &settled);
                    p.placed = Some(lo + offset);
                    p.region = Some((lo, hi - 1));
                    rec.record(
                        format!("Write {} back at position {}", a[lo + offset], lo + offset),
                        6,
                        StepPayload::Array(p),
                    );
                }

                let mut p = snap(&a, &settled);
                p.region = Some((lo, hi - 1));
                rec.record(
                    format!("Runs merged into [{}..{}]", lo, hi - 1),
                    6,
                    StepPayload::Array(p),
                );
            }
            lo += 2 * width;
        }
        width *= 2;
    }

    settled.iter_mut().for_each(|s| *s = true);
    rec.finish(
        format!("Sorted: {}", join(&a)),
        7,
        StepPayload::Array(snap(&a, &settled)),
    )
}

fn heap(values: &[SeqValue], direction: SortDirection) -> Result<StepSequence, InvariantError> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut rec = Recorder::new(&["comparisons", "swaps"]);
    let mut settled = vec![false; n];

    rec.record(
        format!(
            "Start heap sort on {} elements, {}: build the heap",
            n,
            direction.label()
        ),
        2,
        StepPayload::Array(snap(&a, &settled)),
    );
    for parent in (0..n / 2).rev() {
        sift_down(&mut a, parent, n, direction, &mut rec, &settled, true);
    }

    rec.record(
        "Extraction phase: repeatedly move the root into place",
        5,
        StepPayload::Array(snap(&a, &settled)),
    );
    for end in (1..n).rev() {
        let desc = format!("Move {} into settled position {}", a[0], end);
        a.swap(0, end);
        rec.bump("swaps");
        settled[end] = true;
        let mut p = snap(&a, &settled);
        p.swapped = Some((0, end));
        rec.record(desc, 5, StepPayload::Array(p));
        sift_down(&mut a, 0, end, direction, &mut rec, &settled, false);
    }

    settled.iter_mut().for_each(|s| *s = true);
    rec.finish(
        format!("Sorted: {}", join(&a)),
        9,
        StepPayload::Array(snap(&a, &settled)),
    )
}

/// Restores the heap property below `parent` within `heap_len`.
///
/// `building` only selects which listing lines the emitted steps point at:
/// the build phase and the extraction phase show the same mechanics on
/// different lines.
#[allow(clippy::too_many_arguments)]
fn sift_down(
    a: &mut [SeqValue],
    mut parent: usize,
    heap_len: usize,
    direction: SortDirection,
    rec: &mut Recorder,
    settled: &[bool],
    building: bool,
) {
    let (compare_line, swap_line) = if building { (3, 4) } else { (7, 8) };
    loop {
        let left = 2 * parent + 1;
        let right = left + 1;
        if left >= heap_len {
            break;
        }
        let mut child = left;
        if right < heap_len {
            rec.bump("comparisons");
            let mut p = snap(a, settled);
            p.comparing = Some((left, right));
            rec.record(
                format!("Compare children {} and {}", a[left], a[right]),
                compare_line,
                StepPayload::Array(p),
            );
            if dominates(&a[right], &a[left], direction) {
                child = right;
            }
        }
        rec.bump("comparisons");
        let mut p = snap(a, settled);
        p.comparing = Some((parent, child));
        rec.record(
            format!("Compare parent {} with child {}", a[parent], a[child]),
            compare_line,
            StepPayload::Array(p),
        );
        if dominates(&a[child], &a[parent], direction) {
            let desc = format!("Swap {} and {}", a[parent], a[child]);
            a.swap(parent, child);
            rec.bump("swaps");
            let mut p = snap(a, settled);
            p.swapped = Some((parent, child));
            rec.record(desc, swap_line, StepPayload::Array(p));
            parent = child;
        } else {
            break;
        }
    }
}
