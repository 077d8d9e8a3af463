//! The control-flow context carried alongside the scope resolver's traversal.
//!
//! Rather than scattering loop/function/except depth across a handful of fields on the
//! resolver itself, this state lives in its own small `Copy` frame so `crate::resolver` can
//! thread it through the traversal by value instead of mutating-and-restoring shared fields
//! at every push/pop.

use rustpython_parser::ast::{ExprKind, Stmt, StmtKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    /// Not directly inside any function (module or class body).
    None,
    Function,
    Coroutine,
}

#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub scope_id: usize,
    pub loop_depth: usize,
    pub function_kind: FunctionKind,
    pub except_depth: usize,
    pub finally_depth: usize,
    pub in_class_body: bool,
}

impl Frame {
    pub const fn module(scope_id: usize) -> Self {
        Self {
            scope_id,
            loop_depth: 0,
            function_kind: FunctionKind::None,
            except_depth: 0,
            finally_depth: 0,
            in_class_body: false,
        }
    }

    pub const fn for_function(scope_id: usize, is_async: bool) -> Self {
        Self {
            scope_id,
            loop_depth: 0,
            function_kind: if is_async { FunctionKind::Coroutine } else { FunctionKind::Function },
            except_depth: 0,
            finally_depth: 0,
            in_class_body: false,
        }
    }

    pub const fn for_class(scope_id: usize) -> Self {
        Self {
            scope_id,
            loop_depth: 0,
            function_kind: FunctionKind::None,
            except_depth: 0,
            finally_depth: 0,
            in_class_body: true,
        }
    }

    pub fn entering_loop(self) -> Self {
        Self { loop_depth: self.loop_depth + 1, ..self }
    }

    pub fn entering_except(self) -> Self {
        Self { except_depth: self.except_depth + 1, ..self }
    }

    pub fn entering_finally(self) -> Self {
        Self { finally_depth: self.finally_depth + 1, ..self }
    }

    pub const fn in_loop(self) -> bool {
        self.loop_depth > 0
    }

    pub const fn in_function(self) -> bool {
        !matches!(self.function_kind, FunctionKind::None)
    }

    pub const fn in_coroutine(self) -> bool {
        matches!(self.function_kind, FunctionKind::Coroutine)
    }

    pub const fn in_except(self) -> bool {
        self.except_depth > 0
    }
}

/// `true` if `body` contains a `yield`/`yield from` directly (not inside a nested
/// function/lambda/class), which is what makes the *enclosing* scope a generator.
pub fn contains_direct_yield(body: &[Stmt]) -> bool {
    body.iter().any(stmt_has_direct_yield)
}

fn stmt_has_direct_yield(stmt: &Stmt) -> bool {
    match &stmt.node {
        StmtKind::FunctionDef { .. } | StmtKind::AsyncFunctionDef { .. } | StmtKind::ClassDef { .. } => {
            false
        }
        StmtKind::Expr { value } => expr_has_direct_yield(value),
        StmtKind::Return { value } => value.as_deref().is_some_and(expr_has_direct_yield),
        StmtKind::Assign { value, .. } => expr_has_direct_yield(value),
        StmtKind::AugAssign { value, .. } => expr_has_direct_yield(value),
        StmtKind::AnnAssign { value: Some(value), .. } => expr_has_direct_yield(value),
        StmtKind::If { test, body, orelse } => {
            expr_has_direct_yield(test) || contains_direct_yield(body) || contains_direct_yield(orelse)
        }
        StmtKind::While { test, body, orelse } => {
            expr_has_direct_yield(test) || contains_direct_yield(body) || contains_direct_yield(orelse)
        }
        StmtKind::For { iter, body, orelse, .. } | StmtKind::AsyncFor { iter, body, orelse, .. } => {
            expr_has_direct_yield(iter) || contains_direct_yield(body) || contains_direct_yield(orelse)
        }
        StmtKind::With { body, .. } | StmtKind::AsyncWith { body, .. } => contains_direct_yield(body),
        StmtKind::Try { body, handlers, orelse, finalbody } => {
            contains_direct_yield(body)
                || contains_direct_yield(orelse)
                || contains_direct_yield(finalbody)
                || handlers.iter().any(|h| {
                    let rustpython_parser::ast::ExcepthandlerKind::ExceptHandler { body, .. } = &h.node;
                    contains_direct_yield(body)
                })
        }
        _ => false,
    }
}

fn expr_has_direct_yield(expr: &rustpython_parser::ast::Expr) -> bool {
    matches!(expr.node, ExprKind::Yield { .. } | ExprKind::YieldFrom { .. })
}

/// `true` if `body` contains a `return` with a non-`None` value, directly (not inside a
/// nested function/class) — used by E0101 (return-in-init).
pub fn contains_direct_return_with_value(body: &[Stmt]) -> bool {
    body.iter().any(|stmt| match &stmt.node {
        StmtKind::FunctionDef { .. } | StmtKind::AsyncFunctionDef { .. } | StmtKind::ClassDef { .. } => {
            false
        }
        StmtKind::Return { value: Some(v) } => !matches!(
            v.node,
            ExprKind::Constant { value: rustpython_parser::ast::Constant::None, .. }
        ),
        StmtKind::If { body, orelse, .. } => {
            contains_direct_return_with_value(body) || contains_direct_return_with_value(orelse)
        }
        StmtKind::While { body, orelse, .. } => {
            contains_direct_return_with_value(body) || contains_direct_return_with_value(orelse)
        }
        StmtKind::For { body, orelse, .. } | StmtKind::AsyncFor { body, orelse, .. } => {
            contains_direct_return_with_value(body) || contains_direct_return_with_value(orelse)
        }
        StmtKind::With { body, .. } | StmtKind::AsyncWith { body, .. } => {
            contains_direct_return_with_value(body)
        }
        StmtKind::Try { body, handlers, orelse, finalbody } => {
            contains_direct_return_with_value(body)
                || contains_direct_return_with_value(orelse)
                || contains_direct_return_with_value(finalbody)
                || handlers.iter().any(|h| {
                    let rustpython_parser::ast::ExcepthandlerKind::ExceptHandler { body, .. } = &h.node;
                    contains_direct_return_with_value(body)
                })
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use rustpython_parser::parser;

    use super::*;

    #[test]
    fn yield_inside_nested_def_does_not_count() {
        let body = parser::parse_program("def outer():\n    def inner():\n        yield 1\n", "<t>").unwrap();
        let StmtKind::FunctionDef { body, .. } = &body[0].node else { unreachable!() };
        assert!(!contains_direct_yield(body));
    }

    #[test]
    fn direct_yield_is_detected() {
        let body = parser::parse_program("def f():\n    yield 1\n", "<t>").unwrap();
        let StmtKind::FunctionDef { body, .. } = &body[0].node else { unreachable!() };
        assert!(contains_direct_yield(body));
    }
}
