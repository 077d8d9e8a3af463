//! E0100 init-is-generator: a constructor directly `yield`s.

use rustpython_parser::ast::Stmt;

use crate::control_flow::contains_direct_yield;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(name: &str, body: &[Stmt], def_range: Range) -> Option<Diagnostic> {
    if name != "__init__" || !contains_direct_yield(body) {
        return None;
    }
    Some(Diagnostic::new(
        Rule::InitIsGenerator,
        "__init__ method is a generator",
        def_range,
    ))
}
