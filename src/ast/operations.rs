//! Small, stateless tree queries used by several checkers and by the resolver.
//!
//! `on_conditional_branch` backs E0102's redefinition guard detection. `count_top_level_starred`
//! counts starred targets at one assignment level for E0112 (too-many-star-expressions); this
//! engine has no need for a fuller unpacking-vs-plain-assignment classification beyond that.

use rustpython_parser::ast::{Expr, ExprKind, Stmt, StmtKind};

/// `true` if any statement in `parents` is an `if`/`while`/conditional-expression
/// statement — used by E0102 to tell a version-guarded redefinition from a genuine
/// duplicate definition.
pub fn on_conditional_branch<'a>(mut parents: impl Iterator<Item = &'a Stmt>) -> bool {
    parents.any(|parent| {
        if matches!(parent.node, StmtKind::If { .. } | StmtKind::While { .. }) {
            return true;
        }
        if let StmtKind::Expr { value } = &parent.node {
            if matches!(value.node, ExprKind::IfExp { .. }) {
                return true;
            }
        }
        false
    })
}

/// Count starred elements directly at the top level of an assignment target (not inside a
/// nested tuple/list), for E0112 (too-many-star-expressions): `a, *b, *c = ...` has two,
/// `a, (*b, c) = ...` has one at this level.
pub fn count_top_level_starred(target: &Expr) -> usize {
    match &target.node {
        ExprKind::Tuple { elts, .. } | ExprKind::List { elts, .. } => elts
            .iter()
            .filter(|elt| matches!(elt.node, ExprKind::Starred { .. }))
            .count(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use rustpython_parser::parser;

    use super::*;

    fn parse(src: &str) -> Vec<Stmt> {
        parser::parse_program(src, "<test>").unwrap()
    }

    #[test]
    fn starred_count_ignores_nested_level() {
        let stmts = parse("a, (*b, c) = 1, (2, 3)\n");
        let StmtKind::Assign { targets, .. } = &stmts[0].node else { unreachable!() };
        let ExprKind::Tuple { elts, .. } = &targets[0].node else { unreachable!() };
        assert_eq!(count_top_level_starred(&elts[0]), 0);
    }

    #[test]
    fn starred_count_at_top_level() {
        let stmts = parse("a, *b, *c = 1, 2, 3\n");
        let StmtKind::Assign { targets, .. } = &stmts[0].node else { unreachable!() };
        assert_eq!(count_top_level_starred(&targets[0]), 2);
    }
}
