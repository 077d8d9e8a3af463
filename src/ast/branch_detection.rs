//! Detect whether two statements sit on mutually exclusive branches of the same
//! `if`/`try`, so a checker like `function-redefined` (E0102) can tell a guarded
//! redefinition (`if sys.version_info >= (3, 8): def f(): ... else: def f(): ...`)
//! from a genuine duplicate definition.
//!
//! Uses this crate's own [`RefEquality`] wrapper (see `crate::scope::types`) for
//! statement/parent identity. The algorithm: walk up to a common ancestor, then check which
//! alternative of that ancestor each side descends from.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use rustpython_parser::ast::{ExcepthandlerKind, Stmt, StmtKind};

use crate::scope::types::RefEquality;

fn common_ancestor<'a>(
    left: &RefEquality<'a, Stmt>,
    right: &RefEquality<'a, Stmt>,
    stop: Option<&RefEquality<'a, Stmt>>,
    depths: &FxHashMap<RefEquality<'a, Stmt>, usize>,
    child_to_parent: &FxHashMap<RefEquality<'a, Stmt>, RefEquality<'a, Stmt>>,
) -> Option<RefEquality<'a, Stmt>> {
    if let Some(stop) = stop {
        if *left == *stop || *right == *stop {
            return None;
        }
    }
    if left == right {
        return Some(*left);
    }

    let left_depth = *depths.get(left)?;
    let right_depth = *depths.get(right)?;
    match left_depth.cmp(&right_depth) {
        Ordering::Less => {
            common_ancestor(left, child_to_parent.get(right)?, stop, depths, child_to_parent)
        }
        Ordering::Equal => common_ancestor(
            child_to_parent.get(left)?,
            child_to_parent.get(right)?,
            stop,
            depths,
            child_to_parent,
        ),
        Ordering::Greater => {
            common_ancestor(child_to_parent.get(left)?, right, stop, depths, child_to_parent)
        }
    }
}

fn alternatives<'a>(stmt: &RefEquality<'a, Stmt>) -> Vec<Vec<RefEquality<'a, Stmt>>> {
    match &stmt.0.node {
        StmtKind::If { body, .. } => vec![body.iter().map(RefEquality).collect()],
        StmtKind::Try { body, handlers, orelse, .. } => {
            vec![body.iter().chain(orelse.iter()).map(RefEquality).collect()]
                .into_iter()
                .chain(handlers.iter().map(|handler| {
                    let ExcepthandlerKind::ExceptHandler { body, .. } = &handler.node;
                    body.iter().map(RefEquality).collect()
                }))
                .collect()
        }
        _ => vec![],
    }
}

fn descendant_of<'a>(
    stmt: &RefEquality<'a, Stmt>,
    ancestors: &[RefEquality<'a, Stmt>],
    stop: &RefEquality<'a, Stmt>,
    depths: &FxHashMap<RefEquality<'a, Stmt>, usize>,
    child_to_parent: &FxHashMap<RefEquality<'a, Stmt>, RefEquality<'a, Stmt>>,
) -> bool {
    ancestors
        .iter()
        .any(|ancestor| common_ancestor(stmt, ancestor, Some(stop), depths, child_to_parent).is_some())
}

/// `true` if `left` and `right` sit on different, mutually exclusive branches of a
/// shared `if` or `try` ancestor.
pub fn different_forks<'a>(
    left: &RefEquality<'a, Stmt>,
    right: &RefEquality<'a, Stmt>,
    depths: &FxHashMap<RefEquality<'a, Stmt>, usize>,
    child_to_parent: &FxHashMap<RefEquality<'a, Stmt>, RefEquality<'a, Stmt>>,
) -> bool {
    if let Some(ancestor) = common_ancestor(left, right, None, depths, child_to_parent) {
        for items in alternatives(&ancestor) {
            let l = descendant_of(left, &items, &ancestor, depths, child_to_parent);
            let r = descendant_of(right, &items, &ancestor, depths, child_to_parent);
            if l ^ r {
                return true;
            }
        }
    }
    false
}
