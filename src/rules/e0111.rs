//! E0111 bad-reversed-sequence: `reversed(...)` called with a literal argument of a kind
//! that can never be a sequence (an integer, `None`, a boolean, or a function/lambda
//! definition written inline).

use rustpython_parser::ast::{Constant, Expr, ExprKind};

use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

fn is_non_sequence_literal(arg: &Expr) -> bool {
    match &arg.node {
        ExprKind::Constant { value, .. } => {
            matches!(value, Constant::Int(_) | Constant::None | Constant::Bool(_) | Constant::Float(_))
        }
        ExprKind::Lambda { .. } => true,
        _ => false,
    }
}

pub fn check(func: &Expr, args: &[Expr], call_range: Range) -> Option<Diagnostic> {
    let ExprKind::Name { id, .. } = &func.node else { return None };
    if id != "reversed" || args.len() != 1 {
        return None;
    }
    if is_non_sequence_literal(&args[0]) {
        return Some(Diagnostic::new(
            Rule::BadReversedSequence,
            "argument to reversed() must be a sequence",
            call_range,
        ));
    }
    None
}
