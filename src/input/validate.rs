//! Validation functions, one per raw input format
//!
//! Each function takes raw text and produces a validated value or a
//! [`ValidateError`]. The size caps here are what keep `generate()` fast and
//! the step counts displayable, so runners never re-check them.

use crate::input::dataset::{GraphInput, KnapsackInput, KnapsackItem, SeqValue};
use crate::input::errors::ValidateError;
use crate::playback::{SPEED_MAX_MS, SPEED_MIN_MS};
use crate::runner::{BstOp, FibMethod};
use rustc_hash::FxHashSet;

/// How sequence tokens are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Number,
    Text,
}

const SEQ_MIN_ITEMS: usize = 2;
const SEQ_MAX_ITEMS: usize = 30;
const VALUE_MIN: i64 = 1;
const VALUE_MAX: i64 = 999;
const TOKEN_MAX_LEN: usize = 12;
const NODE_MIN: usize = 3;
const NODE_MAX: usize = 20;
const BST_MIN_KEYS: usize = 1;
const BST_MAX_KEYS: usize = 20;
const KNAP_MAX_ITEMS: usize = 15;
const KNAP_MAX_CAPACITY: i64 = 100;
const FIB_MAX_N: i64 = 20;

/// Splits a comma-separated list into trimmed, non-empty tokens.
fn split_tokens(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parses one integer token within an inclusive range.
fn parse_int(token: &str, min: i64, max: i64) -> Result<i64, ValidateError> {
    let n: i64 = token.parse().map_err(|_| ValidateError::BadNumber {
        token: token.to_string(),
    })?;
    if n < min || n > max {
        return Err(ValidateError::NumberOutOfRange {
            token: token.to_string(),
            min,
            max,
        });
    }
    Ok(n)
}

/// Parses a sequence input: 2–30 comma-separated values.
///
/// With [`DataType::Number`] every token must be an integer in `[1, 999]`;
/// with [`DataType::Text`] tokens are taken verbatim up to 12 characters.
pub fn parse_sequence(raw: &str, data_type: DataType) -> Result<Vec<SeqValue>, ValidateError> {
    let tokens = split_tokens(raw);
    if tokens.is_empty() {
        return Err(ValidateError::EmptyInput { what: "values" });
    }
    if tokens.len() < SEQ_MIN_ITEMS || tokens.len() > SEQ_MAX_ITEMS {
        return Err(ValidateError::CountOutOfRange {
            what: "values",
            count: tokens.len(),
            min: SEQ_MIN_ITEMS,
            max: SEQ_MAX_ITEMS,
        });
    }

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        match data_type {
            DataType::Number => {
                values.push(SeqValue::Int(parse_int(token, VALUE_MIN, VALUE_MAX)?));
            }
            DataType::Text => {
                if token.chars().count() > TOKEN_MAX_LEN {
                    return Err(ValidateError::TokenTooLong {
                        token: token.to_string(),
                        max: TOKEN_MAX_LEN,
                    });
                }
                values.push(SeqValue::Text(token.to_string()));
            }
        }
    }
    Ok(values)
}

/// Parses a graph input: node count plus `"a-b"` edge tokens.
///
/// Edge indices may be 0- or 1-based. The base is detected from the tokens
/// themselves: an index equal to 0 forces 0-based, an index equal to `nodes`
/// forces 1-based, and seeing both is an error. With no evidence either way
/// the list is taken as 0-based. Self-loops and duplicate edges (in either
/// direction, for undirected graphs) are rejected.
pub fn parse_graph(
    nodes: usize,
    raw_edges: &str,
    directed: bool,
) -> Result<GraphInput, ValidateError> {
    if !(NODE_MIN..=NODE_MAX).contains(&nodes) {
        return Err(ValidateError::NodeCountOutOfRange { count: nodes });
    }

    let tokens = split_tokens(raw_edges);
    let mut raw_pairs: Vec<(usize, usize, &str)> = Vec::with_capacity(tokens.len());
    let mut saw_zero = false;
    let mut saw_count = false;

    for token in tokens {
        let mut parts = token.splitn(2, '-');
        let (a, b) = match (parts.next(), parts.next()) {
            (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
                (a.trim(), b.trim())
            }
            _ => {
                return Err(ValidateError::BadEdgeToken {
                    token: token.to_string(),
                })
            }
        };
        let parse_endpoint = |s: &str| -> Result<usize, ValidateError> {
            let n: usize = s.parse().map_err(|_| ValidateError::BadEdgeToken {
                token: token.to_string(),
            })?;
            if n > nodes {
                return Err(ValidateError::EdgeIndexOutOfRange {
                    token: token.to_string(),
                    nodes,
                });
            }
            Ok(n)
        };
        let a = parse_endpoint(a)?;
        let b = parse_endpoint(b)?;
        saw_zero |= a == 0 || b == 0;
        saw_count |= a == nodes || b == nodes;
        raw_pairs.push((a, b, token));
    }

    if saw_zero && saw_count {
        return Err(ValidateError::InconsistentIndexBase);
    }
    let base = usize::from(saw_count);

    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut edges = Vec::with_capacity(raw_pairs.len());
    for (a, b, token) in raw_pairs {
        // With a 1-based list, an endpoint of `nodes` is legal and 0 is not;
        // the subtraction below cannot underflow because saw_zero was false.
        let (a, b) = (a - base, b - base);
        if a >= nodes || b >= nodes {
            return Err(ValidateError::EdgeIndexOutOfRange {
                token: token.to_string(),
                nodes,
            });
        }
        if a == b {
            return Err(ValidateError::SelfLoop {
                token: token.to_string(),
            });
        }
        let key = if directed || a < b { (a, b) } else { (b, a) };
        if !seen.insert(key) {
            return Err(ValidateError::DuplicateEdge {
                token: token.to_string(),
            });
        }
        edges.push((a, b));
    }

    Ok(GraphInput {
        nodes,
        edges,
        directed,
    })
}

/// Checks a traversal start node against the graph size.
pub fn validate_start(start: usize, nodes: usize) -> Result<(), ValidateError> {
    if start >= nodes {
        return Err(ValidateError::StartOutOfRange { start, nodes });
    }
    Ok(())
}

/// Parses the BST initial key set: 1–20 unique integers in `[1, 999]`.
pub fn parse_bst_keys(raw: &str) -> Result<Vec<i64>, ValidateError> {
    let tokens = split_tokens(raw);
    if tokens.is_empty() {
        return Err(ValidateError::EmptyInput { what: "keys" });
    }
    if tokens.len() < BST_MIN_KEYS || tokens.len() > BST_MAX_KEYS {
        return Err(ValidateError::CountOutOfRange {
            what: "keys",
            count: tokens.len(),
            min: BST_MIN_KEYS,
            max: BST_MAX_KEYS,
        });
    }
    let mut seen: FxHashSet<i64> = FxHashSet::default();
    let mut keys = Vec::with_capacity(tokens.len());
    for token in tokens {
        let key = parse_int(token, VALUE_MIN, VALUE_MAX)?;
        if !seen.insert(key) {
            return Err(ValidateError::DuplicateValue {
                token: token.to_string(),
            });
        }
        keys.push(key);
    }
    Ok(keys)
}

/// Parses a knapsack instance: `name:weight:value` item tokens plus a
/// capacity in `[1, 100]`. Weights and values are integers in `[1, 999]`.
pub fn parse_knapsack(raw_items: &str, capacity_token: &str) -> Result<KnapsackInput, ValidateError> {
    let capacity = parse_int(capacity_token, 1, KNAP_MAX_CAPACITY)? as u64;

    let tokens = split_tokens(raw_items);
    if tokens.is_empty() {
        return Err(ValidateError::EmptyInput { what: "items" });
    }
    if tokens.len() > KNAP_MAX_ITEMS {
        return Err(ValidateError::CountOutOfRange {
            what: "items",
            count: tokens.len(),
            min: 1,
            max: KNAP_MAX_ITEMS,
        });
    }

    let mut items = Vec::with_capacity(tokens.len());
    for token in tokens {
        let parts: Vec<&str> = token.split(':').map(str::trim).collect();
        let [name, weight, value] = parts.as_slice() else {
            return Err(ValidateError::BadItemToken {
                token: token.to_string(),
            });
        };
        if name.is_empty() {
            return Err(ValidateError::BadItemToken {
                token: token.to_string(),
            });
        }
        if name.chars().count() > TOKEN_MAX_LEN {
            return Err(ValidateError::TokenTooLong {
                token: name.to_string(),
                max: TOKEN_MAX_LEN,
            });
        }
        items.push(KnapsackItem {
            name: name.to_string(),
            weight: parse_int(weight, VALUE_MIN, VALUE_MAX)? as u64,
            value: parse_int(value, VALUE_MIN, VALUE_MAX)? as u64,
        });
    }

    Ok(KnapsackInput { items, capacity })
}

/// Parses the Fibonacci `n`: an integer in `[0, 20]`.
pub fn parse_fib_n(token: &str) -> Result<u32, ValidateError> {
    Ok(parse_int(token.trim(), 0, FIB_MAX_N)? as u32)
}

/// Parses the BST operation selector together with its target key.
pub fn parse_bst_op(token: &str, key_token: &str) -> Result<BstOp, ValidateError> {
    let key = parse_int(key_token.trim(), VALUE_MIN, VALUE_MAX)?;
    match token.trim() {
        "insert" => Ok(BstOp::Insert(key)),
        "search" => Ok(BstOp::Search(key)),
        other => Err(ValidateError::BadSelector {
            what: "operation",
            token: other.to_string(),
            allowed: "insert, search",
        }),
    }
}

/// Parses the Fibonacci method selector.
pub fn parse_fib_method(token: &str) -> Result<FibMethod, ValidateError> {
    match token.trim() {
        "iterative" => Ok(FibMethod::Iterative),
        "recursive" => Ok(FibMethod::Recursive),
        "memoized" => Ok(FibMethod::Memoized),
        "dp" => Ok(FibMethod::Tabulated),
        other => Err(ValidateError::BadSelector {
            what: "method",
            token: other.to_string(),
            allowed: "iterative, recursive, memoized, dp",
        }),
    }
}

/// Parses a playback speed in milliseconds, `[100, 2000]`.
pub fn parse_speed(token: &str) -> Result<u64, ValidateError> {
    Ok(parse_int(token.trim(), SPEED_MIN_MS as i64, SPEED_MAX_MS as i64)? as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_accepts_numbers_in_range() {
        let values = parse_sequence("5, 3, 8, 1", DataType::Number).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], SeqValue::Int(5));
        assert_eq!(values[3], SeqValue::Int(1));
    }

    #[test]
    fn sequence_rejects_out_of_range_and_garbage() {
        assert!(matches!(
            parse_sequence("5,1000", DataType::Number),
            Err(ValidateError::NumberOutOfRange { .. })
        ));
        assert!(matches!(
            parse_sequence("5,x", DataType::Number),
            Err(ValidateError::BadNumber { .. })
        ));
        assert!(matches!(
            parse_sequence("5", DataType::Number),
            Err(ValidateError::CountOutOfRange { .. })
        ));
        assert!(matches!(
            parse_sequence("", DataType::Number),
            Err(ValidateError::EmptyInput { .. })
        ));
    }

    #[test]
    fn sequence_strings_are_length_bounded() {
        let values = parse_sequence("pear,apple", DataType::Text).unwrap();
        assert_eq!(values[1], SeqValue::Text("apple".to_string()));
        assert!(matches!(
            parse_sequence("ok,averylongtokenindeed", DataType::Text),
            Err(ValidateError::TokenTooLong { .. })
        ));
    }

    #[test]
    fn graph_detects_one_based_edges() {
        let g = parse_graph(4, "1-2,2-3,3-4", false).unwrap();
        assert_eq!(g.edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn graph_defaults_to_zero_based() {
        let g = parse_graph(4, "0-1,1-2,2-3", false).unwrap();
        assert_eq!(g.edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn graph_rejects_mixed_base_self_loops_and_duplicates() {
        assert!(matches!(
            parse_graph(4, "0-1,2-4", false),
            Err(ValidateError::InconsistentIndexBase)
        ));
        assert!(matches!(
            parse_graph(4, "1-1", false),
            Err(ValidateError::SelfLoop { .. })
        ));
        assert!(matches!(
            parse_graph(4, "0-1,1-0", false),
            Err(ValidateError::DuplicateEdge { .. })
        ));
        // Reversed duplicates are fine when the graph is directed.
        assert!(parse_graph(4, "0-1,1-0", true).is_ok());
    }

    #[test]
    fn graph_rejects_bad_node_counts() {
        assert!(matches!(
            parse_graph(2, "0-1", false),
            Err(ValidateError::NodeCountOutOfRange { .. })
        ));
        assert!(matches!(
            parse_graph(21, "0-1", false),
            Err(ValidateError::NodeCountOutOfRange { .. })
        ));
    }

    #[test]
    fn bst_keys_must_be_unique() {
        assert_eq!(parse_bst_keys("8,3,10").unwrap(), vec![8, 3, 10]);
        assert!(matches!(
            parse_bst_keys("8,3,8"),
            Err(ValidateError::DuplicateValue { .. })
        ));
    }

    #[test]
    fn knapsack_items_parse() {
        let input = parse_knapsack("gold:10:60, silver:20:100", "50").unwrap();
        assert_eq!(input.items.len(), 2);
        assert_eq!(input.items[0].name, "gold");
        assert_eq!(input.items[0].weight, 10);
        assert_eq!(input.items[1].value, 100);
        assert_eq!(input.capacity, 50);
        assert!(matches!(
            parse_knapsack("gold:10", "50"),
            Err(ValidateError::BadItemToken { .. })
        ));
    }

    #[test]
    fn fib_bounds_and_selectors() {
        assert_eq!(parse_fib_n("20").unwrap(), 20);
        assert!(parse_fib_n("21").is_err());
        assert!(parse_fib_method("dp").is_ok());
        assert!(matches!(
            parse_fib_method("magic"),
            Err(ValidateError::BadSelector { .. })
        ));
    }

    #[test]
    fn bst_op_selector() {
        assert_eq!(parse_bst_op("insert", "7").unwrap(), BstOp::Insert(7));
        assert_eq!(parse_bst_op("search", "7").unwrap(), BstOp::Search(7));
        assert!(parse_bst_op("delete", "7").is_err());
        assert!(parse_bst_op("insert", "0").is_err());
    }
}
