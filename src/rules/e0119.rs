//! E0119 misplaced-format-function: `.format(...)` called on a literal known not to be a
//! string.

use rustpython_parser::ast::{Constant, Expr, ExprKind};

use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(func: &Expr, call_range: Range) -> Option<Diagnostic> {
    let ExprKind::Attribute { value, attr, .. } = &func.node else { return None };
    if attr != "format" {
        return None;
    }
    let ExprKind::Constant { value: constant, .. } = &value.node else { return None };
    if matches!(constant, Constant::Str(_)) {
        return None;
    }
    Some(Diagnostic::new(
        Rule::MisplacedFormatFunction,
        "format function is not called on str",
        call_range,
    ))
}
