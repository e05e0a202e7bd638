//! 0/1 knapsack runner
//!
//! Fills the DP table in row-major order over (item, residual capacity),
//! emitting one step per cell with the decision that produced it. The
//! selected item set is reconstructed by walking the finished table back
//! from `dp[n][W]` — a deterministic function of the table alone, so it adds
//! no steps and rides on the terminal one.

use crate::input::dataset::KnapsackInput;
use crate::runner::Recorder;
use crate::step::{InvariantError, StepPayload, StepSequence, TableDecision, TableSnapshot};

pub(super) fn run(input: &KnapsackInput) -> Result<StepSequence, InvariantError> {
    if input.items.is_empty() {
        return Err(InvariantError::EmptyDataset { runner: "knapsack" });
    }
    let n = input.items.len();
    let capacity = input.capacity as usize;
    let rows = n + 1;
    let cols = capacity + 1;
    let mut rec = Recorder::new(&["cells", "comparisons"]);

    // dp holds the working values; cells mirrors them as the display copy
    // with unfilled positions still None.
    let mut dp: Vec<Vec<u64>> = vec![vec![0; cols]; rows];
    let mut cells: Vec<Vec<Option<u64>>> = vec![vec![None; cols]; rows];

    let snap = |cells: &[Vec<Option<u64>>],
                active: Option<(usize, usize)>,
                decision: Option<TableDecision>,
                selected: &[usize]| {
        TableSnapshot {
            rows,
            cols,
            cells: cells.to_vec(),
            active,
            decision,
            selected: selected.to_vec(),
        }
    };

    for w in 0..cols {
        cells[0][w] = Some(0);
    }
    rec.record(
        "Row 0: with no items, every capacity is worth 0",
        2,
        StepPayload::Table(snap(&cells, None, None, &[])),
    );

    for i in 1..=n {
        let item = &input.items[i - 1];
        let weight = item.weight as usize;
        for w in 0..cols {
            rec.bump("cells");
            let (value, decision, desc) = if weight > w {
                let value = dp[i - 1][w];
                (
                    value,
                    TableDecision::TooHeavy,
                    format!(
                        "{} (weight {}) is too heavy for capacity {}: copy {} from above",
                        item.name, item.weight, w, value
                    ),
                )
            } else {
                rec.bump("comparisons");
                let exclude = dp[i - 1][w];
                let include = dp[i - 1][w - weight] + item.value;
                if include > exclude {
                    (
                        include,
                        TableDecision::Include,
                        format!(
                            "Include {}: {} beats {} at capacity {}",
                            item.name, include, exclude, w
                        ),
                    )
                } else {
                    (
                        exclude,
                        TableDecision::Exclude,
                        format!(
                            "Exclude {}: {} is no better than {} at capacity {}",
                            item.name, include, exclude, w
                        ),
                    )
                }
            };
            dp[i][w] = value;
            cells[i][w] = Some(value);
            let line = if decision == TableDecision::TooHeavy { 4 } else { 5 };
            rec.record(
                desc,
                line,
                StepPayload::Table(snap(&cells, Some((i, w)), Some(decision), &[])),
            );
        }
    }

    // Backtrack: an item was taken exactly when its row differs from the row
    // above at the same capacity.
    let mut selected: Vec<usize> = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if dp[i][w] != dp[i - 1][w] {
            selected.push(i - 1);
            w -= input.items[i - 1].weight as usize;
        }
    }
    selected.reverse();

    let total_weight: u64 = selected.iter().map(|&i| input.items[i].weight).sum();
    let names: Vec<&str> = selected.iter().map(|&i| input.items[i].name.as_str()).collect();
    rec.finish(
        format!(
            "Best value {}: take {} (total weight {} of {})",
            dp[n][capacity],
            if names.is_empty() {
                "nothing".to_string()
            } else {
                names.join(", ")
            },
            total_weight,
            input.capacity
        ),
        7,
        StepPayload::Table(snap(&cells, None, None, &selected)),
    )
}
