//! A generic pre-order AST walk.
//!
//! A `Visitor` trait with one method per node category, each defaulting to calling the
//! matching `walk_*` free function, so an implementor only has to override the categories it
//! cares about and still gets full traversal for the rest. Built against the
//! `rustpython_parser` 0.3 AST (`StmtKind`/`ExprKind` enums wrapped in `Located<T>`) that the
//! rest of this crate's tree-consuming code uses.

use rustpython_parser::ast::{
    Excepthandler, ExcepthandlerKind, Expr, ExprKind, Stmt, StmtKind,
};

pub trait Visitor<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        walk_expr(self, expr);
    }

    fn visit_body(&mut self, body: &'a [Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_excepthandler(&mut self, handler: &'a Excepthandler) {
        walk_excepthandler(self, handler);
    }
}

pub fn walk_stmt<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, stmt: &'a Stmt) {
    match &stmt.node {
        StmtKind::FunctionDef { args, body, decorator_list, returns, .. }
        | StmtKind::AsyncFunctionDef { args, body, decorator_list, returns, .. } => {
            for expr in decorator_list {
                visitor.visit_expr(expr);
            }
            for default in args.defaults.iter().chain(args.kw_defaults.iter()) {
                visitor.visit_expr(default);
            }
            if let Some(returns) = returns {
                visitor.visit_expr(returns);
            }
            visitor.visit_body(body);
        }
        StmtKind::ClassDef { bases, keywords, body, decorator_list, .. } => {
            for expr in decorator_list {
                visitor.visit_expr(expr);
            }
            for base in bases {
                visitor.visit_expr(base);
            }
            for keyword in keywords {
                visitor.visit_expr(&keyword.node.value);
            }
            visitor.visit_body(body);
        }
        StmtKind::Return { value } => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        StmtKind::Delete { targets } => {
            for target in targets {
                visitor.visit_expr(target);
            }
        }
        StmtKind::Assign { targets, value, .. } => {
            for target in targets {
                visitor.visit_expr(target);
            }
            visitor.visit_expr(value);
        }
        StmtKind::AugAssign { target, value, .. } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        StmtKind::AnnAssign { target, annotation, value, .. } => {
            visitor.visit_expr(target);
            visitor.visit_expr(annotation);
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        StmtKind::For { target, iter, body, orelse, .. }
        | StmtKind::AsyncFor { target, iter, body, orelse, .. } => {
            visitor.visit_expr(target);
            visitor.visit_expr(iter);
            visitor.visit_body(body);
            visitor.visit_body(orelse);
        }
        StmtKind::While { test, body, orelse } => {
            visitor.visit_expr(test);
            visitor.visit_body(body);
            visitor.visit_body(orelse);
        }
        StmtKind::If { test, body, orelse } => {
            visitor.visit_expr(test);
            visitor.visit_body(body);
            visitor.visit_body(orelse);
        }
        StmtKind::With { items, body, .. } | StmtKind::AsyncWith { items, body, .. } => {
            for item in items {
                visitor.visit_expr(&item.context_expr);
                if let Some(vars) = &item.optional_vars {
                    visitor.visit_expr(vars);
                }
            }
            visitor.visit_body(body);
        }
        StmtKind::Raise { exc, cause } => {
            if let Some(exc) = exc {
                visitor.visit_expr(exc);
            }
            if let Some(cause) = cause {
                visitor.visit_expr(cause);
            }
        }
        StmtKind::Try { body, handlers, orelse, finalbody } => {
            visitor.visit_body(body);
            for handler in handlers {
                visitor.visit_excepthandler(handler);
            }
            visitor.visit_body(orelse);
            visitor.visit_body(finalbody);
        }
        StmtKind::Assert { test, msg } => {
            visitor.visit_expr(test);
            if let Some(msg) = msg {
                visitor.visit_expr(msg);
            }
        }
        StmtKind::Import { .. } | StmtKind::ImportFrom { .. } => {}
        StmtKind::Global { .. } | StmtKind::Nonlocal { .. } => {}
        StmtKind::Expr { value } => visitor.visit_expr(value),
        StmtKind::Pass | StmtKind::Break | StmtKind::Continue => {}
        StmtKind::Match { subject, cases } => {
            visitor.visit_expr(subject);
            for case in cases {
                if let Some(guard) = &case.guard {
                    visitor.visit_expr(guard);
                }
                visitor.visit_body(&case.body);
            }
        }
    }
}

pub fn walk_expr<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    match &expr.node {
        ExprKind::BoolOp { values, .. } => {
            for value in values {
                visitor.visit_expr(value);
            }
        }
        ExprKind::NamedExpr { target, value } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        ExprKind::BinOp { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        ExprKind::UnaryOp { operand, .. } => visitor.visit_expr(operand),
        ExprKind::Lambda { body, .. } => {
            // Default arguments live in the enclosing scope; the lambda body is a
            // separate scope handled by the resolver, not walked generically here.
            visitor.visit_expr(body);
        }
        ExprKind::IfExp { test, body, orelse } => {
            visitor.visit_expr(test);
            visitor.visit_expr(body);
            visitor.visit_expr(orelse);
        }
        ExprKind::Dict { keys, values } => {
            for key in keys.iter() {
                visitor.visit_expr(key);
            }
            for value in values {
                visitor.visit_expr(value);
            }
        }
        ExprKind::Set { elts } | ExprKind::List { elts, .. } | ExprKind::Tuple { elts, .. } => {
            for elt in elts {
                visitor.visit_expr(elt);
            }
        }
        ExprKind::ListComp { elt, generators } | ExprKind::SetComp { elt, generators } => {
            visitor.visit_expr(elt);
            for generator in generators {
                visitor.visit_expr(&generator.iter);
                for if_ in &generator.ifs {
                    visitor.visit_expr(if_);
                }
            }
        }
        ExprKind::DictComp { key, value, generators } => {
            visitor.visit_expr(key);
            visitor.visit_expr(value);
            for generator in generators {
                visitor.visit_expr(&generator.iter);
                for if_ in &generator.ifs {
                    visitor.visit_expr(if_);
                }
            }
        }
        ExprKind::GeneratorExp { elt, generators } => {
            visitor.visit_expr(elt);
            for generator in generators {
                visitor.visit_expr(&generator.iter);
                for if_ in &generator.ifs {
                    visitor.visit_expr(if_);
                }
            }
        }
        ExprKind::Await { value }
        | ExprKind::YieldFrom { value }
        | ExprKind::Starred { value, .. }
        | ExprKind::Attribute { value, .. } => visitor.visit_expr(value),
        ExprKind::Yield { value } => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        ExprKind::Compare { left, comparators, .. } => {
            visitor.visit_expr(left);
            for comparator in comparators {
                visitor.visit_expr(comparator);
            }
        }
        ExprKind::Call { func, args, keywords } => {
            visitor.visit_expr(func);
            for arg in args {
                visitor.visit_expr(arg);
            }
            for keyword in keywords {
                visitor.visit_expr(&keyword.node.value);
            }
        }
        ExprKind::FormattedValue { value, format_spec, .. } => {
            visitor.visit_expr(value);
            if let Some(format_spec) = format_spec {
                visitor.visit_expr(format_spec);
            }
        }
        ExprKind::JoinedStr { values } => {
            for value in values {
                visitor.visit_expr(value);
            }
        }
        ExprKind::Constant { .. } => {}
        ExprKind::Subscript { value, slice, .. } => {
            visitor.visit_expr(value);
            visitor.visit_expr(slice);
        }
        ExprKind::Name { .. } => {}
        ExprKind::Slice { lower, upper, step } => {
            for e in [lower, upper, step].into_iter().flatten() {
                visitor.visit_expr(e);
            }
        }
    }
}

pub fn walk_excepthandler<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, handler: &'a Excepthandler) {
    let ExcepthandlerKind::ExceptHandler { type_, body, .. } = &handler.node;
    if let Some(type_) = type_ {
        visitor.visit_expr(type_);
    }
    visitor.visit_body(body);
}
