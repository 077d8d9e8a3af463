//! Scope and binding types: the product of the resolver's traversal.
//!
//! One deliberate simplification: bindings could borrow their names as `&'a str` straight out
//! of the source tree, but this resolver instead clones names into owned `String`s. The
//! multi-phase deferred-queue traversal (see `crate::resolver`) holds many scopes alive at
//! once across queue drains; modelling that with borrowed `&'a str` keys produces
//! self-referential lifetime knots that aren't worth fighting for identifiers that are a
//! handful of bytes each. `RefEquality` still identifies statements/expressions by pointer,
//! not by value, since two syntactically identical nodes are not the same binding site.

use std::hash::{Hash, Hasher};
use std::ops::Deref;

use rustc_hash::{FxHashMap, FxHashSet};
use rustpython_parser::ast::Stmt;

use crate::position::Range;

#[derive(Debug)]
pub struct RefEquality<'a, T>(pub &'a T);

impl<'a, T> Copy for RefEquality<'a, T> {}

impl<'a, T> Clone for RefEquality<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Hash for RefEquality<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 as *const T).hash(state);
    }
}

impl<'a, 'b, T> PartialEq<RefEquality<'b, T>> for RefEquality<'a, T> {
    fn eq(&self, other: &RefEquality<'b, T>) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<'a, T> Eq for RefEquality<'a, T> {}

impl<'a, T> Deref for RefEquality<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

pub type StmtRef<'a> = RefEquality<'a, Stmt>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    Function { is_async: bool },
    Lambda,
    Class,
    Comprehension,
}

impl ScopeKind {
    /// `true` for scopes the lookup chain (as opposed to the lexical chain) skips over:
    /// classes never lexically enclose nested functions.
    pub const fn is_lookup_transparent(self) -> bool {
        matches!(self, ScopeKind::Class)
    }

    /// `true` for scopes `nonlocal` may bind through — function and lambda scopes only;
    /// module and class scopes are never a valid `nonlocal` target.
    pub const fn accepts_nonlocal(self) -> bool {
        matches!(self, ScopeKind::Function { .. } | ScopeKind::Lambda)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    Parameter,
    Assignment,
    ForTarget,
    WithTarget,
    ExceptTarget,
    Import,
    FunctionDef,
    ClassDef,
    ComprehensionTarget,
    GlobalDecl,
    NonlocalDecl,
}

#[derive(Clone, Debug)]
pub struct BindingSite {
    pub kind: BindingKind,
    pub range: Range,
}

/// A name reference recorded during the scope's own direct-statement pass, resolved later
/// in a dedicated final pass once every scope's bindings are final.
#[derive(Clone, Debug)]
pub struct ReferenceSite {
    pub name: String,
    pub range: Range,
    /// Sequence number within the owning scope's own event stream; used by E0118 to decide
    /// whether a use precedes a `global`/`nonlocal` declaration of the same name in the same
    /// scope.
    pub sequence: usize,
}

#[derive(Clone, Debug)]
pub struct DeclEvent {
    pub name: String,
    pub sequence: usize,
    pub range: Range,
}

#[derive(Debug)]
pub struct Scope {
    pub id: usize,
    pub parent: Option<usize>,
    pub kind: ScopeKind,
    pub bindings: FxHashMap<String, Vec<BindingSite>>,
    pub global_names: FxHashSet<String>,
    pub nonlocal_names: FxHashSet<String>,
    pub is_generator: bool,
    /// Set when the scope contains a star-import, `exec`, or `locals()` mutation; suppresses
    /// E0602/E0606 for this scope's free names.
    pub resolution_uncertain: bool,
    /// Ordered reference events, used for forward-reference resolution (Pass C) and E0118.
    pub references: Vec<ReferenceSite>,
    /// Ordered `global`/`nonlocal` declaration events, used for E0118.
    pub decl_events: Vec<DeclEvent>,
}

impl Scope {
    pub fn new(id: usize, parent: Option<usize>, kind: ScopeKind) -> Self {
        Self {
            id,
            parent,
            kind,
            bindings: FxHashMap::default(),
            global_names: FxHashSet::default(),
            nonlocal_names: FxHashSet::default(),
            is_generator: false,
            resolution_uncertain: false,
            references: Vec::new(),
            decl_events: Vec::new(),
        }
    }

    pub fn bind(&mut self, name: &str, kind: BindingKind, range: Range) {
        self.bindings
            .entry(name.to_string())
            .or_default()
            .push(BindingSite { kind, range });
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Names bound locally in this scope, excluding ones only present via a
    /// `global`/`nonlocal` declaration — the domain the definite-assignment lattice tracks.
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.bindings
            .keys()
            .filter(|name| !self.global_names.contains(*name) && !self.nonlocal_names.contains(*name))
            .map(String::as_str)
    }
}
