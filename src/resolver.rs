//! The scope resolver and checker driver: one traversal that builds the scope tree, runs
//! every node-local rule as it goes, and resolves every name reference once every scope's
//! bindings are final.
//!
//! A single struct drives the whole walk, pushing/popping scopes, with
//! function/lambda/class/comprehension bodies deferred into a queue
//! (`deferred_functions`/`deferred_lambdas`) rather than visited inline, so that by the time a
//! nested scope's own statements are visited, every ancestor scope already has its complete
//! binding set (forward references).

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use rustpython_parser::ast::{
    Excepthandler, ExcepthandlerKind, Expr, ExprContext, ExprKind, Stmt, StmtKind,
};

use crate::ast::function_type;
use crate::ast::operations;
use crate::builtins::is_builtin;
use crate::control_flow::{contains_direct_yield, Frame};
use crate::definite_assignment;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};
use crate::rules;
use crate::scope::types::{BindingKind, RefEquality, ScopeKind, StmtRef};
use crate::scope::Scope;

const MODULE_SCOPE: usize = 0;

/// `true` for `locals()` itself, so `locals()[name] = value` can be recognized as a dynamic
/// binding of unknown names into the enclosing scope.
fn is_locals_call(expr: &Expr) -> bool {
    matches!(&expr.node, ExprKind::Call { func, .. } if matches!(&func.node, ExprKind::Name { id, .. } if id == "locals"))
}

enum Deferred<'a> {
    Function { scope_id: usize, body: &'a [Stmt], frame: Frame },
    Class { scope_id: usize, body: &'a [Stmt], frame: Frame },
    Lambda { scope_id: usize, body: &'a Expr, frame: Frame },
    Comprehension {
        scope_id: usize,
        generators: &'a [rustpython_parser::ast::Comprehension],
        elt: ComprehensionElt<'a>,
        frame: Frame,
    },
}

enum ComprehensionElt<'a> {
    Single(&'a Expr),
    KeyValue(&'a Expr, &'a Expr),
}

struct Checker<'a> {
    scopes: Vec<Scope>,
    deferred: VecDeque<Deferred<'a>>,
    diagnostics: Vec<Diagnostic>,
    stmt_parents: FxHashMap<StmtRef<'a>, StmtRef<'a>>,
    stmt_depths: FxHashMap<StmtRef<'a>, usize>,
    class_defs: FxHashMap<(usize, String), Vec<StmtRef<'a>>>,
}

pub fn analyze(program: &'_ [Stmt], source: &str) -> Vec<Diagnostic> {
    let mut checker = Checker {
        scopes: Vec::new(),
        deferred: VecDeque::new(),
        diagnostics: Vec::new(),
        stmt_parents: FxHashMap::default(),
        stmt_depths: FxHashMap::default(),
        class_defs: FxHashMap::default(),
    };
    checker.diagnostics.extend(rules::e0107::check(source));

    let module_scope = checker.push_scope(None, ScopeKind::Module);
    assert_eq!(module_scope, MODULE_SCOPE);
    checker.visit_body(program, Frame::module(MODULE_SCOPE), None, 0);

    while let Some(item) = checker.deferred.pop_front() {
        match item {
            Deferred::Function { scope_id, body, frame } => {
                checker.scopes[scope_id].is_generator = contains_direct_yield(body);
                checker.visit_body(body, frame, None, 0);
                checker.run_definite_assignment(scope_id, body);
            }
            Deferred::Class { scope_id, body, frame } => {
                checker.visit_body(body, frame, None, 0);
            }
            Deferred::Lambda { scope_id: _, body, frame } => {
                checker.visit_expr(body, frame);
            }
            Deferred::Comprehension { scope_id, generators, elt, frame } => {
                for (i, generator) in generators.iter().enumerate() {
                    if i > 0 {
                        checker.visit_expr(&generator.iter, frame);
                    }
                    checker.bind_target(scope_id, &generator.target, BindingKind::ComprehensionTarget, frame);
                    for if_ in &generator.ifs {
                        checker.visit_expr(if_, frame);
                    }
                }
                match elt {
                    ComprehensionElt::Single(e) => checker.visit_expr(e, frame),
                    ComprehensionElt::KeyValue(k, v) => {
                        checker.visit_expr(k, frame);
                        checker.visit_expr(v, frame);
                    }
                }
            }
        }
    }

    checker.resolve_references();
    checker.diagnostics
}

impl<'a> Checker<'a> {
    fn push_scope(&mut self, parent: Option<usize>, kind: ScopeKind) -> usize {
        let id = self.scopes.len();
        self.scopes.push(Scope::new(id, parent, kind));
        id
    }

    fn current_in_class(&self, scope_id: usize) -> bool {
        matches!(self.scopes[scope_id].kind, ScopeKind::Class)
    }

    /// Binds `name` in `scope_id`, and — if `scope_id` has declared `name` `global` — also
    /// into the module scope, since that's the binding a `global` assignment actually creates.
    fn bind_name(&mut self, scope_id: usize, name: &str, kind: BindingKind, range: Range) {
        self.scopes[scope_id].bind(name, kind, range);
        if scope_id != MODULE_SCOPE && self.scopes[scope_id].global_names.contains(name) {
            self.scopes[MODULE_SCOPE].bind(name, kind, range);
        }
    }

    fn record_parent(&mut self, parent: Option<&'a Stmt>, stmt: &'a Stmt) {
        if let Some(parent) = parent {
            let depth = *self.stmt_depths.get(&RefEquality(parent)).unwrap_or(&0) + 1;
            self.stmt_depths.insert(RefEquality(stmt), depth);
            self.stmt_parents.insert(RefEquality(stmt), RefEquality(parent));
        } else {
            self.stmt_depths.insert(RefEquality(stmt), 0);
        }
    }

    fn visit_body(&mut self, body: &'a [Stmt], frame: Frame, parent: Option<&'a Stmt>, _depth: usize) {
        for stmt in body {
            self.record_parent(parent, stmt);
            self.visit_stmt(stmt, frame);
        }
    }

    fn visit_stmt(&mut self, stmt: &'a Stmt, frame: Frame) {
        let scope_id = frame.scope_id;
        match &stmt.node {
            StmtKind::FunctionDef { name, args, body, decorator_list, .. }
            | StmtKind::AsyncFunctionDef { name, args, body, decorator_list, .. } => {
                let is_async = matches!(stmt.node, StmtKind::AsyncFunctionDef { .. });
                self.check_redefinition(scope_id, name, stmt);
                self.scopes[scope_id].bind(name, BindingKind::FunctionDef, Range::from_located(stmt));
                self.class_defs
                    .entry((scope_id, name.clone()))
                    .or_default()
                    .push(RefEquality(stmt));

                for expr in decorator_list.iter().chain(args.defaults.iter()).chain(args.kw_defaults.iter()) {
                    self.visit_expr(expr, frame);
                }
                if let StmtKind::FunctionDef { returns: Some(r), .. } | StmtKind::AsyncFunctionDef { returns: Some(r), .. } = &stmt.node {
                    self.visit_expr(r, frame);
                }

                self.diagnostics.extend(rules::e0108::check(args));
                let in_class = self.current_in_class(scope_id);
                let def_range = Range::from_located(stmt);
                if let Some(d) = rules::e0100::check(name, body, def_range) {
                    self.diagnostics.push(d);
                }
                if let Some(d) = rules::e0101::check(name, body, def_range) {
                    self.diagnostics.push(d);
                }
                let function_type = function_type::classify(name, decorator_list, in_class);
                if let Some(d) = crate::rules::e0211_e0213::check(function_type, args, def_range) {
                    self.diagnostics.push(d);
                }

                let new_scope = self.push_scope(Some(scope_id), ScopeKind::Function { is_async });
                self.bind_params(new_scope, args);
                let new_frame = Frame::for_function(new_scope, is_async);
                self.deferred.push_back(Deferred::Function { scope_id: new_scope, body, frame: new_frame });
            }
            StmtKind::ClassDef { name, bases, keywords, body, decorator_list, .. } => {
                self.check_redefinition(scope_id, name, stmt);
                self.scopes[scope_id].bind(name, BindingKind::ClassDef, Range::from_located(stmt));
                for expr in decorator_list.iter().chain(bases.iter()) {
                    self.visit_expr(expr, frame);
                }
                for keyword in keywords {
                    self.visit_expr(&keyword.node.value, frame);
                }
                let new_scope = self.push_scope(Some(scope_id), ScopeKind::Class);
                let new_frame = Frame::for_class(new_scope);
                self.deferred.push_back(Deferred::Class { scope_id: new_scope, body, frame: new_frame });
            }
            StmtKind::Return { value } => {
                if let Some(value) = value {
                    self.visit_expr(value, frame);
                }
                let is_generator = self.scopes[scope_id].is_generator;
                if let Some(d) =
                    rules::e0104_e0106::check_return(frame, value.is_some(), is_generator, Range::from_located(stmt))
                {
                    self.diagnostics.push(d);
                }
            }
            StmtKind::Delete { targets } => {
                for target in targets {
                    self.visit_expr(target, frame);
                }
            }
            StmtKind::Assign { targets, value, .. } => {
                self.visit_expr(value, frame);
                for target in targets {
                    if let Some(d) = rules::e0112::check(target) {
                        self.diagnostics.push(d);
                    }
                    self.bind_target(scope_id, target, BindingKind::Assignment, frame);
                }
            }
            StmtKind::AugAssign { target, value, .. } => {
                self.visit_expr(target, frame);
                self.visit_expr(value, frame);
                self.bind_target(scope_id, target, BindingKind::Assignment, frame);
            }
            StmtKind::AnnAssign { target, annotation, value, .. } => {
                self.visit_expr(annotation, frame);
                if let Some(value) = value {
                    self.visit_expr(value, frame);
                    self.bind_target(scope_id, target, BindingKind::Assignment, frame);
                }
            }
            StmtKind::For { target, iter, body, orelse, .. } | StmtKind::AsyncFor { target, iter, body, orelse, .. } => {
                self.visit_expr(iter, frame);
                if let Some(d) = rules::e0112::check(target) {
                    self.diagnostics.push(d);
                }
                self.bind_target(scope_id, target, BindingKind::ForTarget, frame);
                self.visit_body(body, frame.entering_loop(), Some(stmt), 0);
                self.visit_body(orelse, frame, Some(stmt), 0);
            }
            StmtKind::While { test, body, orelse } => {
                self.visit_expr(test, frame);
                self.visit_body(body, frame.entering_loop(), Some(stmt), 0);
                self.visit_body(orelse, frame, Some(stmt), 0);
            }
            StmtKind::If { test, body, orelse } => {
                self.visit_expr(test, frame);
                self.visit_body(body, frame, Some(stmt), 0);
                self.visit_body(orelse, frame, Some(stmt), 0);
            }
            StmtKind::With { items, body, .. } | StmtKind::AsyncWith { items, body, .. } => {
                for item in items {
                    self.visit_expr(&item.context_expr, frame);
                    if let Some(vars) = &item.optional_vars {
                        self.bind_target(scope_id, vars, BindingKind::WithTarget, frame);
                    }
                }
                self.visit_body(body, frame, Some(stmt), 0);
            }
            StmtKind::Raise { exc, cause } => {
                if let Some(exc) = exc {
                    self.visit_expr(exc, frame);
                }
                if let Some(cause) = cause {
                    self.visit_expr(cause, frame);
                }
                let range = Range::from_located(stmt);
                if let Some(d) = rules::e0704_e0711::check_bare_raise(frame, exc.as_deref(), range) {
                    self.diagnostics.push(d);
                }
                if let Some(d) = rules::e0704_e0711::check_notimplemented(exc.as_deref(), range) {
                    self.diagnostics.push(d);
                }
            }
            StmtKind::Try { body, handlers, orelse, finalbody } => {
                self.visit_body(body, frame, Some(stmt), 0);
                for handler in handlers {
                    self.visit_excepthandler(handler, frame, stmt);
                }
                self.visit_body(orelse, frame, Some(stmt), 0);
                self.visit_body(finalbody, frame.entering_finally(), Some(stmt), 0);
            }
            StmtKind::Assert { test, msg } => {
                self.visit_expr(test, frame);
                if let Some(msg) = msg {
                    self.visit_expr(msg, frame);
                }
            }
            StmtKind::Import { names } => {
                for alias in names {
                    let bound = alias.node.asname.as_ref().unwrap_or(&alias.node.name);
                    let bound = bound.split('.').next().unwrap_or(bound);
                    self.scopes[scope_id].bind(bound, BindingKind::Import, Range::from_located(stmt));
                }
            }
            StmtKind::ImportFrom { names, .. } => {
                for alias in names {
                    if alias.node.name == "*" {
                        self.scopes[scope_id].resolution_uncertain = true;
                        continue;
                    }
                    let bound = alias.node.asname.as_ref().unwrap_or(&alias.node.name);
                    self.scopes[scope_id].bind(bound, BindingKind::Import, Range::from_located(stmt));
                }
            }
            StmtKind::Global { names } => {
                self.record_decl(scope_id, names, stmt, true);
            }
            StmtKind::Nonlocal { names } => {
                self.record_decl(scope_id, names, stmt, false);
                for name in names {
                    if !self.nonlocal_target_exists(scope_id, name) {
                        self.diagnostics.push(Diagnostic::new(
                            Rule::NonlocalWithoutBinding,
                            format!("no binding for nonlocal '{name}' found"),
                            Range::from_located(stmt),
                        ));
                    }
                }
            }
            StmtKind::Expr { value } => self.visit_expr(value, frame),
            StmtKind::Break => {
                if let Some(d) = rules::e0103_e0116::check_break(frame, Range::from_located(stmt)) {
                    self.diagnostics.push(d);
                }
            }
            StmtKind::Continue => {
                self.diagnostics.extend(rules::e0103_e0116::check_continue(frame, Range::from_located(stmt)));
            }
            StmtKind::Pass => {}
            StmtKind::Match { subject, cases } => {
                self.visit_expr(subject, frame);
                for case in cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard, frame);
                    }
                    self.visit_body(&case.body, frame, Some(stmt), 0);
                }
            }
        }
    }

    fn visit_excepthandler(&mut self, handler: &'a Excepthandler, frame: Frame, _parent: &'a Stmt) {
        let ExcepthandlerKind::ExceptHandler { type_, name, body } = &handler.node;
        if let Some(type_) = type_ {
            self.visit_expr(type_, frame);
        }
        if let Some(name) = name {
            self.scopes[frame.scope_id].bind(name, BindingKind::ExceptTarget, Range::from_located(handler));
        }
        self.visit_body(body, frame.entering_except(), None, 0);
    }

    fn visit_expr(&mut self, expr: &'a Expr, frame: Frame) {
        let scope_id = frame.scope_id;
        match &expr.node {
            ExprKind::Name { id, ctx } => match ctx {
                ExprContext::Load => {
                    let sequence = self.scopes[scope_id].references.len() + self.scopes[scope_id].decl_events.len();
                    self.scopes[scope_id].references.push(crate::scope::types::ReferenceSite {
                        name: id.clone(),
                        range: Range::from_located(expr),
                        sequence,
                    });
                }
                ExprContext::Store => {
                    self.bind_name(scope_id, id, BindingKind::Assignment, Range::from_located(expr));
                }
                ExprContext::Del => {}
            },
            ExprKind::NamedExpr { target, value } => {
                self.visit_expr(value, frame);
                self.bind_target(scope_id, target, BindingKind::Assignment, frame);
            }
            ExprKind::Lambda { args, body } => {
                for default in args.defaults.iter().chain(args.kw_defaults.iter()) {
                    self.visit_expr(default, frame);
                }
                self.diagnostics.extend(rules::e0108::check(args));
                let new_scope = self.push_scope(Some(scope_id), ScopeKind::Lambda);
                self.bind_params(new_scope, args);
                let new_frame = Frame::for_function(new_scope, false);
                self.deferred.push_back(Deferred::Lambda { scope_id: new_scope, body, frame: new_frame });
            }
            ExprKind::ListComp { elt, generators } | ExprKind::SetComp { elt, generators } => {
                self.push_comprehension(scope_id, generators, ComprehensionElt::Single(elt), frame);
            }
            ExprKind::GeneratorExp { elt, generators } => {
                self.push_comprehension(scope_id, generators, ComprehensionElt::Single(elt), frame);
            }
            ExprKind::DictComp { key, value, generators } => {
                self.push_comprehension(scope_id, generators, ComprehensionElt::KeyValue(key, value), frame);
            }
            ExprKind::Await { value } => {
                self.visit_expr(value, frame);
                if let Some(d) = rules::e1142::check(frame, Range::from_located(expr)) {
                    self.diagnostics.push(d);
                }
            }
            ExprKind::Yield { value } => {
                if let Some(value) = value {
                    self.visit_expr(value, frame);
                }
                if let Some(d) = rules::e0104_e0106::check_yield(frame, Range::from_located(expr)) {
                    self.diagnostics.push(d);
                }
            }
            ExprKind::YieldFrom { value } => {
                self.visit_expr(value, frame);
                if let Some(d) = rules::e0104_e0106::check_yield(frame, Range::from_located(expr)) {
                    self.diagnostics.push(d);
                }
            }
            ExprKind::Call { func, args, keywords } => {
                self.visit_expr(func, frame);
                for arg in args {
                    self.visit_expr(arg, frame);
                }
                for keyword in keywords {
                    self.visit_expr(&keyword.node.value, frame);
                }
                let range = Range::from_located(expr);
                if let Some(d) = rules::e0111::check(func, args, range) {
                    self.diagnostics.push(d);
                }
                if let Some(d) = rules::e0119::check(func, range) {
                    self.diagnostics.push(d);
                }
                if matches!(&func.node, ExprKind::Name { id, .. } if id == "exec") {
                    self.scopes[scope_id].resolution_uncertain = true;
                }
            }
            ExprKind::Dict { keys, values } => {
                self.diagnostics.extend(rules::e0109::check(keys, values));
                for key in keys.iter() {
                    self.visit_expr(key, frame);
                }
                for value in values {
                    self.visit_expr(value, frame);
                }
            }
            _ => crate::ast::visitor::walk_expr(&mut ExprDelegate { checker: self, frame }, expr),
        }
    }

    fn push_comprehension(
        &mut self,
        scope_id: usize,
        generators: &'a [rustpython_parser::ast::Comprehension],
        elt: ComprehensionElt<'a>,
        frame: Frame,
    ) {
        let Some(first) = generators.first() else { return };
        self.visit_expr(&first.iter, frame);
        let new_scope = self.push_scope(Some(scope_id), ScopeKind::Comprehension);
        self.bind_target(new_scope, &first.target, BindingKind::ComprehensionTarget, frame);
        let new_frame = Frame { scope_id: new_scope, ..frame };
        self.deferred.push_back(Deferred::Comprehension { scope_id: new_scope, generators, elt, frame: new_frame });
    }

    fn bind_params(&mut self, scope_id: usize, args: &'a rustpython_parser::ast::Arguments) {
        for arg in args
            .posonlyargs
            .iter()
            .chain(args.args.iter())
            .chain(args.kwonlyargs.iter())
            .chain(args.vararg.iter().map(std::convert::AsRef::as_ref))
            .chain(args.kwarg.iter().map(std::convert::AsRef::as_ref))
        {
            self.scopes[scope_id].bind(&arg.node.arg, BindingKind::Parameter, Range::from_located(arg));
        }
    }

    fn bind_target(&mut self, scope_id: usize, target: &'a Expr, kind: BindingKind, frame: Frame) {
        match &target.node {
            ExprKind::Name { id, .. } => self.bind_name(scope_id, id, kind, Range::from_located(target)),
            ExprKind::Tuple { elts, .. } | ExprKind::List { elts, .. } => {
                for elt in elts {
                    self.bind_target(scope_id, elt, kind, frame);
                }
            }
            ExprKind::Starred { value, .. } => self.bind_target(scope_id, value, kind, frame),
            ExprKind::Subscript { value, .. } => {
                if is_locals_call(value) {
                    self.scopes[scope_id].resolution_uncertain = true;
                }
                self.visit_expr(value, frame);
            }
            ExprKind::Attribute { value, .. } => {
                self.visit_expr(value, frame);
            }
            _ => {}
        }
    }

    fn record_decl(&mut self, scope_id: usize, names: &[String], stmt: &'a Stmt, is_global: bool) {
        for name in names {
            let sequence = self.scopes[scope_id].references.len() + self.scopes[scope_id].decl_events.len();
            self.scopes[scope_id].decl_events.push(crate::scope::types::DeclEvent {
                name: name.clone(),
                sequence,
                range: Range::from_located(stmt),
            });
            if is_global {
                self.scopes[scope_id].global_names.insert(name.clone());
            } else {
                self.scopes[scope_id].nonlocal_names.insert(name.clone());
            }
            if self.scopes[scope_id].global_names.contains(name) && self.scopes[scope_id].nonlocal_names.contains(name)
            {
                self.diagnostics.push(Diagnostic::new(
                    Rule::NonlocalAndGlobal,
                    format!("name '{name}' is nonlocal and global"),
                    Range::from_located(stmt),
                ));
            }
        }
    }

    fn nonlocal_target_exists(&self, scope_id: usize, name: &str) -> bool {
        let mut cur = self.scopes[scope_id].parent;
        while let Some(id) = cur {
            let scope = &self.scopes[id];
            if scope.kind.accepts_nonlocal() && scope.is_bound(name) {
                return true;
            }
            if matches!(scope.kind, ScopeKind::Module) {
                break;
            }
            cur = scope.parent;
        }
        false
    }

    fn check_redefinition(&mut self, scope_id: usize, name: &str, stmt: &'a Stmt) {
        let key = (scope_id, name.to_string());
        let Some(previous) = self.class_defs.get(&key).and_then(|v| v.last()).copied() else { return };
        let current = RefEquality(stmt);
        if operations::on_conditional_branch(self.ancestors(&current)) || operations::on_conditional_branch(self.ancestors(&previous)) {
            if crate::ast::branch_detection::different_forks(&previous, &current, &self.stmt_depths, &self.stmt_parents) {
                return;
            }
        }
        self.diagnostics.push(Diagnostic::new(
            Rule::FunctionRedefined,
            format!("function already defined line {}", previous.location.row()),
            Range::from_located(stmt),
        ));
    }

    fn ancestors(&self, stmt: &StmtRef<'a>) -> impl Iterator<Item = &'a Stmt> + '_ {
        let mut cur = self.stmt_parents.get(stmt).copied();
        std::iter::from_fn(move || {
            let next = cur?;
            cur = self.stmt_parents.get(&next).copied();
            Some(next.0)
        })
    }

    fn run_definite_assignment(&mut self, scope_id: usize, body: &[Stmt]) {
        let scope = &self.scopes[scope_id];
        let locals: FxHashSet<String> = scope.local_names().map(String::from).collect();
        let params: FxHashSet<String> = scope
            .bindings
            .iter()
            .filter(|(_, sites)| sites.iter().any(|s| matches!(s.kind, BindingKind::Parameter)))
            .map(|(name, _)| name.clone())
            .collect();
        if scope.resolution_uncertain {
            return;
        }
        for violation in definite_assignment::analyze(body, &locals, &params) {
            self.diagnostics.push(Diagnostic::new(
                Rule::PossiblyUsedBeforeAssignment,
                format!("possibly using variable '{}' before assignment", violation.name),
                violation.range,
            ));
        }
    }

    /// `true` if `scope_id` or any enclosing scope has dynamic, unanalyzable name binding
    /// (a star-import, `exec`, or a `locals()` mutation) — resolution from `scope_id` can't be
    /// trusted even if the name itself isn't bound anywhere in the chain this engine sees.
    fn resolution_uncertain(&self, scope_id: usize) -> bool {
        let mut cur = Some(scope_id);
        while let Some(id) = cur {
            if self.scopes[id].resolution_uncertain {
                return true;
            }
            cur = self.scopes[id].parent;
        }
        false
    }

    fn resolve_references(&mut self) {
        for scope_id in 0..self.scopes.len() {
            if self.resolution_uncertain(scope_id) {
                continue;
            }
            let references = self.scopes[scope_id].references.clone();
            let decl_events = self.scopes[scope_id].decl_events.clone();
            for reference in &references {
                if let Some(event) = decl_events.iter().find(|e| e.name == reference.name) {
                    if reference.sequence < event.sequence {
                        self.diagnostics.push(Diagnostic::new(
                            Rule::UsedPriorGlobalDeclaration,
                            format!("name '{}' is used prior to global/nonlocal declaration", reference.name),
                            reference.range,
                        ));
                    }
                }
                if !self.resolves(scope_id, &reference.name) && !is_builtin(&reference.name) {
                    self.diagnostics.push(Diagnostic::new(
                        Rule::UndefinedVariable,
                        format!("undefined variable '{}'", reference.name),
                        reference.range,
                    ));
                }
            }
        }
    }

    fn resolves(&self, scope_id: usize, name: &str) -> bool {
        let scope = &self.scopes[scope_id];
        if scope.global_names.contains(name) {
            return self.scopes[MODULE_SCOPE].is_bound(name) || scope.is_bound(name);
        }
        if scope.nonlocal_names.contains(name) {
            return self.nonlocal_target_exists(scope_id, name);
        }
        if scope.is_bound(name) {
            return true;
        }
        let mut cur = scope.parent;
        while let Some(id) = cur {
            let ancestor = &self.scopes[id];
            if !ancestor.kind.is_lookup_transparent() && ancestor.is_bound(name) {
                return true;
            }
            cur = ancestor.parent;
        }
        false
    }
}

/// Delegates the generic parts of the expression walk back into `Checker::visit_expr` so the
/// shared `ast::visitor::walk_expr` doesn't need a bespoke copy of the dispatch table; only
/// the arms `Checker::visit_expr` matches explicitly above are *not* reached through here.
struct ExprDelegate<'a, 'b> {
    checker: &'b mut Checker<'a>,
    frame: Frame,
}

impl<'a, 'b> crate::ast::visitor::Visitor<'a> for ExprDelegate<'a, 'b> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        self.checker.visit_expr(expr, self.frame);
    }
}
