//! E0109 duplicate-key: two literal keys in the same dict display compare equal. Only
//! literal keys are checked; a key built from an expression can't be compared without
//! evaluating it, so it is silently skipped rather than guessed at.

use rustpython_parser::ast::{Constant, Expr, ExprKind};

use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

fn literal(expr: &Expr) -> Option<&Constant> {
    match &expr.node {
        ExprKind::Constant { value, .. } => Some(value),
        _ => None,
    }
}

pub fn check(keys: &[Expr], _values: &[Expr]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen: Vec<&Constant> = Vec::new();
    for key in keys.iter() {
        let Some(constant) = literal(key) else { continue };
        if seen.contains(&constant) {
            diagnostics.push(Diagnostic::new(
                Rule::DuplicateKey,
                "duplicate key in dict literal".to_string(),
                Range::from_located(key),
            ));
        } else {
            seen.push(constant);
        }
    }
    diagnostics
}
