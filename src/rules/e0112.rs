//! E0112 too-many-star-expressions: more than one starred element at the same level of an
//! assignment target (`a, *b, *c = ...`).

use rustpython_parser::ast::Expr;

use crate::ast::operations::count_top_level_starred;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(target: &Expr) -> Option<Diagnostic> {
    if count_top_level_starred(target) > 1 {
        return Some(Diagnostic::new(
            Rule::TooManyStarExpressions,
            "two starred expressions in assignment",
            Range::from_located(target),
        ));
    }
    None
}
