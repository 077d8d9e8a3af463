//! E0101 return-in-init: a constructor `return`s a non-`None` value.

use rustpython_parser::ast::Stmt;

use crate::control_flow::contains_direct_return_with_value;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(name: &str, body: &[Stmt], def_range: Range) -> Option<Diagnostic> {
    if name != "__init__" || !contains_direct_return_with_value(body) {
        return None;
    }
    Some(Diagnostic::new(
        Rule::ReturnInInit,
        "explicit return in __init__",
        def_range,
    ))
}
