use std::collections::HashMap;

use crate::ast::Expr;
use crate::atom::Atom;

/// Maps an atom's normalized text to its sorted-ascending occurrence
/// positions in a document. Absence of a key means "no match".
pub type PositionIndex = HashMap<String, Vec<usize>>;

/// A node's evaluation: whether it matched, and — only for nodes inside an
/// `INORD` scope — the residual sorted position list threaded up to the
/// enclosing `Inord`. External callers never see the residual; use
/// [`matches`] for the common case.
pub type NodeResult = (bool, Option<Vec<usize>>);

/// Evaluates `expr` against `index`, returning only whether it matched.
pub fn matches(expr: &Expr, index: &PositionIndex) -> bool {
    solve(expr, index).0
}

/// Recursive bottom-up fold over the AST. Straightforward to read;
/// [`solve_iterative`] computes identical results without recursion, for
/// callers worried about stack depth on very deep trees.
pub fn solve(expr: &Expr, index: &PositionIndex) -> NodeResult {
    match expr {
        Expr::Unit { atom, inord } => unit_value(atom, *inord, index),
        Expr::And { left, right, inord } => {
            let l = solve(left, index);
            let r = solve(right, index);
            and_value(&l, &r, *inord)
        }
        Expr::Or { left, right, inord } => {
            let l = solve(left, index);
            let r = solve(right, index);
            or_value(&l, &r, *inord)
        }
        Expr::Not { child } => {
            let c = solve(child, index);
            (!c.0, None)
        }
        Expr::Inord { child } => {
            let c = solve(child, index);
            (inord_value(&c), None)
        }
    }
}

/// Iterative evaluator using a reverse-preorder linearization so children
/// are always evaluated before the parent that depends on them. Node
/// identity (pointer address) keys the side table rather than mutating the
/// (immutable) AST.
pub fn solve_iterative(root: &Expr, index: &PositionIndex) -> NodeResult {
    let mut preorder: Vec<&Expr> = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        preorder.push(node);
        match node {
            Expr::Unit { .. } => {}
            Expr::And { left, right, .. } | Expr::Or { left, right, .. } => {
                stack.push(right);
                stack.push(left);
            }
            Expr::Not { child } | Expr::Inord { child } => stack.push(child),
        }
    }

    let mut results: HashMap<usize, NodeResult> = HashMap::with_capacity(preorder.len());
    for node in preorder.into_iter().rev() {
        let key = node_key(node);
        let value = match node {
            Expr::Unit { atom, inord } => unit_value(atom, *inord, index),
            Expr::And { left, right, inord } => {
                let l = results.get(&node_key(left)).expect("left evaluated first");
                let r = results.get(&node_key(right)).expect("right evaluated first");
                and_value(l, r, *inord)
            }
            Expr::Or { left, right, inord } => {
                let l = results.get(&node_key(left)).expect("left evaluated first");
                let r = results.get(&node_key(right)).expect("right evaluated first");
                or_value(l, r, *inord)
            }
            Expr::Not { child } => {
                let c = results.get(&node_key(child)).expect("child evaluated first");
                (!c.0, None)
            }
            Expr::Inord { child } => {
                let c = results.get(&node_key(child)).expect("child evaluated first");
                (inord_value(c), None)
            }
        };
        results.insert(key, value);
    }
    results.remove(&node_key(root)).expect("root was evaluated")
}

fn node_key(node: &Expr) -> usize {
    node as *const Expr as usize
}

fn unit_value(atom: &Atom, inord: bool, index: &PositionIndex) -> NodeResult {
    match index.get(&atom.text) {
        Some(positions) => (true, inord.then(|| positions.clone())),
        None => (false, inord.then(Vec::new)),
    }
}

fn and_value(left: &NodeResult, right: &NodeResult, inord: bool) -> NodeResult {
    let value = left.0 && right.0;
    let residual = inord.then(|| {
        and_residual(
            left.1.as_deref().unwrap_or(&[]),
            right.1.as_deref().unwrap_or(&[]),
        )
    });
    (value, residual)
}

fn or_value(left: &NodeResult, right: &NodeResult, inord: bool) -> NodeResult {
    let value = left.0 || right.0;
    let residual = inord.then(|| {
        merge_sorted(
            left.1.as_deref().unwrap_or(&[]),
            right.1.as_deref().unwrap_or(&[]),
        )
    });
    (value, residual)
}

fn inord_value(child: &NodeResult) -> bool {
    child.0 && child.1.as_ref().is_some_and(|positions| !positions.is_empty())
}

/// The `AND` ordering operator: the suffix of `right` starting at the
/// smallest position strictly greater than `left`'s first (smallest)
/// position. `left` and `right` must already be sorted ascending. Empty
/// when either side has no positions, or when no position in `right`
/// qualifies.
fn and_residual(left: &[usize], right: &[usize]) -> Vec<usize> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }
    let threshold = left[0];
    let cut = right.partition_point(|&pos| pos <= threshold);
    right[cut..].to_vec()
}

/// Ascending merge of two sorted lists, duplicates preserved (the `OR`
/// ordering operator).
fn merge_sorted(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomKind;

    fn unit(text: &str, inord: bool) -> Expr {
        Expr::Unit {
            atom: Atom::new(AtomKind::Literal, text.to_string()),
            inord,
        }
    }

    fn index_from(pairs: &[(&str, &[usize])]) -> PositionIndex {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_vec()))
            .collect()
    }

    #[test]
    fn unit_absent_is_false() {
        let index = PositionIndex::new();
        assert!(!matches(&unit("a", false), &index));
    }

    #[test]
    fn and_requires_both() {
        let index = index_from(&[("a", &[0])]);
        let expr = Expr::And {
            left: Box::new(unit("a", false)),
            right: Box::new(unit("b", false)),
            inord: false,
        };
        assert!(!matches(&expr, &index));
    }

    #[test]
    fn inord_three_atoms_in_order_matches() {
        // "acabXaXcb": a=[0,2,5], b=[3,8], c=[1,7]
        let index = index_from(&[("a", &[0, 2, 5]), ("b", &[3, 8]), ("c", &[1, 7])]);
        let ab = Expr::And {
            left: Box::new(unit("a", true)),
            right: Box::new(unit("b", true)),
            inord: true,
        };
        let abc = Expr::And {
            left: Box::new(ab),
            right: Box::new(unit("c", true)),
            inord: true,
        };
        let expr = Expr::Inord { child: Box::new(abc) };
        assert!(matches(&expr, &index));
        assert_eq!(solve(&expr, &index), solve_iterative(&expr, &index));
    }

    #[test]
    fn inord_out_of_order_fails() {
        // "bacb": a=[1], b=[0,3], c=[2]
        let index = index_from(&[("a", &[1]), ("b", &[0, 3]), ("c", &[2])]);
        let ab = Expr::And {
            left: Box::new(unit("a", true)),
            right: Box::new(unit("b", true)),
            inord: true,
        };
        let abc = Expr::And {
            left: Box::new(ab),
            right: Box::new(unit("c", true)),
            inord: true,
        };
        let expr = Expr::Inord { child: Box::new(abc) };
        assert!(!matches(&expr, &index));
    }

    #[test]
    fn inord_or_merges_residuals() {
        let index = index_from(&[("a", &[1, 5]), ("b", &[3])]);
        let expr = Expr::Inord {
            child: Box::new(Expr::Or {
                left: Box::new(unit("a", true)),
                right: Box::new(unit("b", true)),
                inord: true,
            }),
        };
        assert!(matches(&expr, &index));
    }

    #[test]
    fn not_has_no_residual_and_cannot_poison_inord() {
        let index = index_from(&[("a", &[0])]);
        let expr = Expr::Not {
            child: Box::new(unit("a", false)),
        };
        assert_eq!(solve(&expr, &index), (false, None));
    }

    #[test]
    fn recursive_and_iterative_agree_on_mixed_tree() {
        let index = index_from(&[("a", &[0, 4]), ("b", &[2]), ("c", &[9])]);
        let expr = Expr::Or {
            left: Box::new(Expr::And {
                left: Box::new(unit("a", false)),
                right: Box::new(unit("b", false)),
                inord: false,
            }),
            right: Box::new(Expr::Not {
                child: Box::new(unit("c", false)),
            }),
            inord: false,
        };
        assert_eq!(solve(&expr, &index), solve_iterative(&expr, &index));
    }
}
