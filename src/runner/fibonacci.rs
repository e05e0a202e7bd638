//! Fibonacci runners: iterative, recursive (naive and memoized), bottom-up
//!
//! Four independent runners sharing only the step contract. The recursive
//! variants drive an explicit frame stack through a small phase machine, so
//! every call's entry and return is observable without host recursion. The
//! naive variant legitimately emits O(2^n) steps; the validator's n ≤ 20 cap
//! keeps that displayable.

use crate::runner::{FibMethod, Recorder};
use crate::step::{CallsSnapshot, InvariantError, StepPayload, StepSequence};

pub(super) fn run(method: FibMethod, n: u32) -> Result<StepSequence, InvariantError> {
    match method {
        FibMethod::Iterative => iterative(n),
        FibMethod::Recursive => recursive(n, false),
        FibMethod::Memoized => recursive(n, true),
        FibMethod::Tabulated => tabulated(n),
    }
}

fn pair_snap(pair: Option<(u64, u64)>, returned: Option<(u32, u64)>) -> CallsSnapshot {
    CallsSnapshot {
        pair,
        returned,
        ..Default::default()
    }
}

fn iterative(n: u32) -> Result<StepSequence, InvariantError> {
    let mut rec = Recorder::new(&["additions"]);
    rec.record(
        format!("Compute fib({}) iteratively", n),
        1,
        StepPayload::Calls(pair_snap(None, None)),
    );

    if n < 2 {
        return rec.finish(
            format!("n < 2: fib({}) = {}", n, n),
            2,
            StepPayload::Calls(pair_snap(None, Some((n, n as u64)))),
        );
    }

    let (mut a, mut b) = (0u64, 1u64);
    rec.record(
        "Start with (a, b) = (0, 1)",
        3,
        StepPayload::Calls(pair_snap(Some((a, b)), None)),
    );
    for i in 2..=n {
        rec.bump("additions");
        let next = a + b;
        a = b;
        b = next;
        rec.record(
            format!("i = {}: the pair becomes ({}, {})", i, a, b),
            5,
            StepPayload::Calls(pair_snap(Some((a, b)), None)),
        );
    }

    rec.finish(
        format!("fib({}) = {}", n, b),
        6,
        StepPayload::Calls(pair_snap(Some((a, b)), Some((n, b)))),
    )
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Entered,
    AwaitFirst,
    AwaitSecond(u64),
}

struct Frame {
    n: u32,
    phase: Phase,
}

fn call_snap(stack: &[Frame], memo: &[Option<u64>], returned: Option<(u32, u64)>) -> CallsSnapshot {
    CallsSnapshot {
        frames: stack.iter().map(|f| f.n).collect(),
        memo: memo.to_vec(),
        returned,
        ..Default::default()
    }
}

/// The explicit-stack recursion shared by the naive and memoized variants.
///
/// Listing lines differ between the two (the memoized listing has the memo
/// check on line 2), so each emission picks its line from `memoize`.
fn recursive(n: u32, memoize: bool) -> Result<StepSequence, InvariantError> {
    let counters: &[&'static str] = if memoize {
        &["calls", "additions", "memo_hits"]
    } else {
        &["calls", "additions"]
    };
    let mut rec = Recorder::new(counters);
    let mut memo: Vec<Option<u64>> = if memoize {
        vec![None; n as usize + 1]
    } else {
        Vec::new()
    };

    let (call_first_line, call_second_line, base_line, return_line) =
        if memoize { (4, 5, 3, 6) } else { (3, 4, 2, 5) };

    let mut stack = vec![Frame {
        n,
        phase: Phase::Entered,
    }];
    rec.bump("calls");
    rec.record(
        format!("Call fib({})", n),
        1,
        StepPayload::Calls(call_snap(&stack, &memo, None)),
    );

    let mut result: u64 = 0;
    loop {
        let (k, phase) = match stack.last() {
            Some(f) => (f.n, f.phase),
            None => break,
        };

        match phase {
            Phase::Entered => {
                if memoize {
                    if let Some(hit) = memo[k as usize] {
                        rec.bump("memo_hits");
                        result = hit;
                        stack.pop();
                        rec.record(
                            format!("Memo hit: fib({}) = {}", k, hit),
                            2,
                            StepPayload::Calls(call_snap(&stack, &memo, Some((k, hit)))),
                        );
                        continue;
                    }
                }
                if k < 2 {
                    result = k as u64;
                    stack.pop();
                    rec.record(
                        format!("Base case: fib({}) = {}", k, k),
                        base_line,
                        StepPayload::Calls(call_snap(&stack, &memo, Some((k, result)))),
                    );
                    continue;
                }
                if let Some(f) = stack.last_mut() {
                    f.phase = Phase::AwaitFirst;
                }
                stack.push(Frame {
                    n: k - 1,
                    phase: Phase::Entered,
                });
                rec.bump("calls");
                rec.record(
                    format!("Call fib({})", k - 1),
                    call_first_line,
                    StepPayload::Calls(call_snap(&stack, &memo, None)),
                );
            }
            Phase::AwaitFirst => {
                if let Some(f) = stack.last_mut() {
                    f.phase = Phase::AwaitSecond(result);
                }
                stack.push(Frame {
                    n: k - 2,
                    phase: Phase::Entered,
                });
                rec.bump("calls");
                rec.record(
                    format!("Call fib({})", k - 2),
                    call_second_line,
                    StepPayload::Calls(call_snap(&stack, &memo, None)),
                );
            }
            Phase::AwaitSecond(first) => {
                rec.bump("additions");
                let total = first + result;
                if memoize {
                    memo[k as usize] = Some(total);
                }
                result = total;
                stack.pop();
                let desc = if memoize {
                    format!("memo[{}] = {}: return it", k, total)
                } else {
                    format!("Return fib({}) = {}", k, total)
                };
                rec.record(
                    desc,
                    return_line,
                    StepPayload::Calls(call_snap(&stack, &memo, Some((k, total)))),
                );
            }
        }
    }

    let done_line = if memoize { 7 } else { 5 };
    rec.finish(
        format!("Done: fib({}) = {}", n, result),
        done_line,
        StepPayload::Calls(call_snap(&stack, &memo, Some((n, result)))),
    )
}

fn tabulated(n: u32) -> Result<StepSequence, InvariantError> {
    let size = n as usize + 1;
    let mut rec = Recorder::new(&["cells", "additions"]);
    let mut vals = vec![0u64; size];

    let table_view = |vals: &[u64], filled: usize| -> CallsSnapshot {
        CallsSnapshot {
            table: vals
                .iter()
                .enumerate()
                .map(|(i, &v)| (i < filled).then_some(v))
                .collect(),
            ..Default::default()
        }
    };

    rec.record(
        format!("Compute fib({}) bottom-up", n),
        1,
        StepPayload::Calls(table_view(&vals, 0)),
    );

    vals[0] = 0;
    rec.bump("cells");
    rec.record("table[0] = 0", 2, StepPayload::Calls(table_view(&vals, 1)));
    if n >= 1 {
        vals[1] = 1;
        rec.bump("cells");
        rec.record("table[1] = 1", 2, StepPayload::Calls(table_view(&vals, 2)));
    }

    for i in 2..=n as usize {
        rec.bump("cells");
        rec.bump("additions");
        vals[i] = vals[i - 1] + vals[i - 2];
        rec.record(
            format!("table[{}] = {} + {} = {}", i, vals[i - 1], vals[i - 2], vals[i]),
            4,
            StepPayload::Calls(table_view(&vals, i + 1)),
        );
    }

    let result = vals[size - 1];
    let mut view = table_view(&vals, size);
    view.returned = Some((n, result));
    rec.finish(
        format!("fib({}) = {}", n, result),
        5,
        StepPayload::Calls(view),
    )
}
