pub mod types;

pub use types::{BindingKind, BindingSite, DeclEvent, ReferenceSite, Scope, ScopeKind};
