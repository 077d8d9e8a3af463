//! E0704 misplaced-bare-raise (a bare `raise` outside an `except` handler) and E0711
//! notimplemented-raised (`raise NotImplemented` instead of `raise NotImplementedError`).

use rustpython_parser::ast::{Expr, ExprKind};

use crate::control_flow::Frame;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check_bare_raise(frame: Frame, exc: Option<&Expr>, range: Range) -> Option<Diagnostic> {
    if exc.is_some() || frame.in_except() {
        return None;
    }
    Some(Diagnostic::new(
        Rule::MisplacedBareRaise,
        "misplaced bare raise (not inside an except handler)",
        range,
    ))
}

pub fn check_notimplemented(exc: Option<&Expr>, range: Range) -> Option<Diagnostic> {
    let exc = exc?;
    let ExprKind::Name { id, .. } = &exc.node else { return None };
    if id != "NotImplemented" {
        return None;
    }
    Some(Diagnostic::new(
        Rule::NotimplementedRaised,
        "NotImplemented raised - should raise NotImplementedError",
        range,
    ))
}
