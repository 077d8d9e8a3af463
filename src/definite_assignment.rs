//! E0606 possibly-used-before-assignment: a per-function definite-assignment lattice.
//!
//! Implemented with plain `FxHashSet<String>` set operations rather than a generic lattice
//! abstraction, since there is exactly one lattice in this crate and a framework for it would
//! be premature.
//!
//! Only names in `locals` (the function's own local bindings, see
//! `crate::scope::Scope::local_names`) are tracked; every other reference is left entirely
//! to the scope resolver.

use rustc_hash::FxHashSet;
use rustpython_parser::ast::{Excepthandler, ExcepthandlerKind, Expr, ExprContext, ExprKind, Stmt, StmtKind};

use crate::position::Range;

pub struct Violation {
    pub name: String,
    pub range: Range,
}

type Bindings = FxHashSet<String>;

struct Analysis<'a> {
    locals: &'a FxHashSet<String>,
    violations: Vec<Violation>,
}

pub fn analyze(body: &[Stmt], locals: &FxHashSet<String>, params: &FxHashSet<String>) -> Vec<Violation> {
    let mut analysis = Analysis { locals, violations: Vec::new() };
    let def: Bindings = params.clone();
    let maybe: Bindings = params.clone();
    analysis.walk_body(body, def, maybe);
    analysis.violations
}

impl<'a> Analysis<'a> {
    fn walk_body(&mut self, body: &[Stmt], mut def: Bindings, mut maybe: Bindings) -> (Bindings, Bindings) {
        for stmt in body {
            (def, maybe) = self.walk_stmt(stmt, def, maybe);
        }
        (def, maybe)
    }

    fn record_use(&mut self, name: &str, range: Range, def: &Bindings, maybe: &Bindings) {
        if !self.locals.contains(name) {
            return;
        }
        if def.contains(name) {
            return;
        }
        if maybe.contains(name) {
            self.violations.push(Violation { name: name.to_string(), range });
        }
    }

    fn walk_expr(&mut self, expr: &Expr, def: &Bindings, maybe: &Bindings) {
        match &expr.node {
            ExprKind::Name { id, ctx } => {
                if matches!(ctx, ExprContext::Load) {
                    self.record_use(id, Range::from_located(expr), def, maybe);
                }
            }
            ExprKind::NamedExpr { value, .. } => self.walk_expr(value, def, maybe),
            _ => crate::ast::visitor::walk_expr(&mut ExprUseCollector { inner: self, def, maybe }, expr),
        }
    }

    fn walk_stmt(&mut self, stmt: &Stmt, mut def: Bindings, mut maybe: Bindings) -> (Bindings, Bindings) {
        match &stmt.node {
            StmtKind::Assign { targets, value, .. } => {
                self.walk_expr(value, &def, &maybe);
                for target in targets {
                    let mut names = Vec::new();
                    collect_targets(target, &mut names);
                    for name in names {
                        def.insert(name.clone());
                        maybe.insert(name);
                    }
                }
            }
            StmtKind::AugAssign { target, value, .. } => {
                self.walk_expr(target, &def, &maybe);
                self.walk_expr(value, &def, &maybe);
                let mut names = Vec::new();
                collect_targets(target, &mut names);
                for name in names {
                    def.insert(name.clone());
                    maybe.insert(name);
                }
            }
            StmtKind::AnnAssign { target, annotation, value, .. } => {
                self.walk_expr(annotation, &def, &maybe);
                if let Some(value) = value {
                    self.walk_expr(value, &def, &maybe);
                    let mut names = Vec::new();
                    collect_targets(target, &mut names);
                    for name in names {
                        def.insert(name.clone());
                        maybe.insert(name);
                    }
                }
            }
            StmtKind::For { target, iter, body, orelse, .. } | StmtKind::AsyncFor { target, iter, body, orelse, .. } => {
                self.walk_expr(iter, &def, &maybe);
                let mut names = Vec::new();
                collect_targets(target, &mut names);
                let mut body_def = def.clone();
                let mut body_maybe = maybe.clone();
                for name in &names {
                    body_def.insert(name.clone());
                    body_maybe.insert(name.clone());
                }
                let (body_def_after, body_maybe_after) = self.walk_body(body, body_def, body_maybe);
                for name in names {
                    maybe.insert(name);
                }
                maybe.extend(body_maybe_after);
                maybe.extend(body_def_after.difference(&def).cloned());
                (def, maybe) = self.walk_body(orelse, def, maybe);
            }
            StmtKind::While { test, body, orelse } => {
                self.walk_expr(test, &def, &maybe);
                let (body_def_after, body_maybe_after) = self.walk_body(body, def.clone(), maybe.clone());
                maybe.extend(body_maybe_after);
                maybe.extend(body_def_after.difference(&def).cloned());
                (def, maybe) = self.walk_body(orelse, def, maybe);
            }
            StmtKind::If { test, body, orelse } => {
                self.walk_expr(test, &def, &maybe);
                let (def_then, maybe_then) = self.walk_body(body, def.clone(), maybe.clone());
                let (def_else, maybe_else) = self.walk_body(orelse, def.clone(), maybe.clone());
                def = def_then.intersection(&def_else).cloned().collect();
                maybe = maybe_then.union(&maybe_else).cloned().collect();
            }
            StmtKind::With { items, body, .. } | StmtKind::AsyncWith { items, body, .. } => {
                for item in items {
                    self.walk_expr(&item.context_expr, &def, &maybe);
                    if let Some(vars) = &item.optional_vars {
                        let mut names = Vec::new();
                        collect_targets(vars, &mut names);
                        for name in names {
                            def.insert(name.clone());
                            maybe.insert(name);
                        }
                    }
                }
                (def, maybe) = self.walk_body(body, def, maybe);
            }
            StmtKind::Try { body, handlers, orelse, finalbody } => {
                let def_in = def.clone();
                let (def_t, maybe_t) = self.walk_body(body, def.clone(), maybe.clone());
                let handler_entry_maybe: Bindings =
                    maybe_t.union(&def_t).cloned().collect::<Bindings>().union(&maybe).cloned().collect();

                let mut handler_defs = Vec::new();
                let mut combined_maybe = handler_entry_maybe.clone();
                for handler in handlers {
                    let (hdef, hmaybe) = self.walk_handler(handler, def_in.clone(), handler_entry_maybe.clone());
                    combined_maybe.extend(hmaybe);
                    handler_defs.push(hdef);
                }

                let (def_success, maybe_success) = if orelse.is_empty() {
                    (def_t.clone(), maybe_t.clone())
                } else {
                    self.walk_body(orelse, def_t.clone(), maybe_t.clone())
                };
                combined_maybe.extend(maybe_success.clone());

                let mut combined_def = def_success;
                for hdef in &handler_defs {
                    combined_def = combined_def.intersection(hdef).cloned().collect();
                }
                if handlers.is_empty() {
                    combined_def = def_t;
                }

                if finalbody.is_empty() {
                    def = combined_def;
                    maybe = combined_maybe;
                } else {
                    let (def_f, maybe_f) = self.walk_body(finalbody, def_in.clone(), combined_maybe.clone());
                    combined_def.extend(def_f.difference(&def_in).cloned());
                    combined_maybe.extend(maybe_f);
                    def = combined_def;
                    maybe = combined_maybe;
                }
            }
            StmtKind::FunctionDef { name, args, decorator_list, .. }
            | StmtKind::AsyncFunctionDef { name, args, decorator_list, .. } => {
                for expr in decorator_list.iter().chain(args.defaults.iter()).chain(args.kw_defaults.iter()) {
                    self.walk_expr(expr, &def, &maybe);
                }
                def.insert(name.clone());
                maybe.insert(name.clone());
            }
            StmtKind::ClassDef { name, bases, keywords, decorator_list, .. } => {
                for expr in decorator_list.iter().chain(bases.iter()) {
                    self.walk_expr(expr, &def, &maybe);
                }
                for keyword in keywords {
                    self.walk_expr(&keyword.node.value, &def, &maybe);
                }
                def.insert(name.clone());
                maybe.insert(name.clone());
            }
            StmtKind::Return { value } => {
                if let Some(value) = value {
                    self.walk_expr(value, &def, &maybe);
                }
            }
            StmtKind::Delete { targets } => {
                for target in targets {
                    self.walk_expr(target, &def, &maybe);
                }
            }
            StmtKind::Raise { exc, cause } => {
                if let Some(exc) = exc {
                    self.walk_expr(exc, &def, &maybe);
                }
                if let Some(cause) = cause {
                    self.walk_expr(cause, &def, &maybe);
                }
            }
            StmtKind::Assert { test, msg } => {
                self.walk_expr(test, &def, &maybe);
                if let Some(msg) = msg {
                    self.walk_expr(msg, &def, &maybe);
                }
            }
            StmtKind::Expr { value } => self.walk_expr(value, &def, &maybe),
            StmtKind::Import { .. } | StmtKind::ImportFrom { .. } => {
                // Import targets are always definite; the resolver owns binding them, this
                // lattice only needs to know they're bound before anything downstream reads
                // them, which holds unconditionally here.
            }
            StmtKind::Global { .. } | StmtKind::Nonlocal { .. } | StmtKind::Pass | StmtKind::Break | StmtKind::Continue => {}
            StmtKind::Match { subject, cases } => {
                self.walk_expr(subject, &def, &maybe);
                let mut combined_def = def.clone();
                let mut combined_maybe = maybe.clone();
                for case in cases {
                    if let Some(guard) = &case.guard {
                        self.walk_expr(guard, &def, &maybe);
                    }
                    let (case_def, case_maybe) = self.walk_body(&case.body, def.clone(), maybe.clone());
                    combined_def = combined_def.intersection(&case_def).cloned().collect();
                    combined_maybe.extend(case_maybe);
                }
                def = combined_def;
                maybe = combined_maybe;
            }
        }
        (def, maybe)
    }

    fn walk_handler(&mut self, handler: &Excepthandler, def_in: Bindings, maybe_in: Bindings) -> (Bindings, Bindings) {
        let ExcepthandlerKind::ExceptHandler { type_, name, body } = &handler.node;
        let mut def = def_in;
        let mut maybe = maybe_in;
        if let Some(type_) = type_ {
            self.walk_expr(type_, &def, &maybe);
        }
        if let Some(name) = name {
            def.insert(name.clone());
            maybe.insert(name.clone());
        }
        self.walk_body(body, def, maybe)
    }
}

/// Helper visitor so `Analysis::walk_expr`'s `Name`/`NamedExpr` special cases can delegate
/// everything else to the shared `ast::visitor` walk instead of duplicating it.
struct ExprUseCollector<'a, 'b> {
    inner: &'b mut Analysis<'a>,
    def: &'b Bindings,
    maybe: &'b Bindings,
}

impl<'a, 'b, 'expr> crate::ast::visitor::Visitor<'expr> for ExprUseCollector<'a, 'b> {
    fn visit_expr(&mut self, expr: &'expr Expr) {
        self.inner.walk_expr(expr, self.def, self.maybe);
    }
}

fn collect_targets(target: &Expr, out: &mut Vec<String>) {
    match &target.node {
        ExprKind::Name { id, ctx } if matches!(ctx, ExprContext::Store) => out.push(id.clone()),
        ExprKind::Tuple { elts, .. } | ExprKind::List { elts, .. } => {
            for elt in elts {
                collect_targets(elt, out);
            }
        }
        ExprKind::Starred { value, .. } => collect_targets(value, out),
        _ => {}
    }
}
