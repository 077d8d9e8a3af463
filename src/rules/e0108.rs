//! E0108 duplicate-argument-name: two parameters of the same function share a name.

use rustc_hash::FxHashSet;
use rustpython_parser::ast::Arguments;

use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(args: &Arguments) -> Vec<Diagnostic> {
    let mut seen = FxHashSet::default();
    let mut diagnostics = Vec::new();
    let all = args
        .posonlyargs
        .iter()
        .chain(args.args.iter())
        .chain(args.kwonlyargs.iter())
        .chain(args.vararg.iter().map(std::convert::AsRef::as_ref))
        .chain(args.kwarg.iter().map(std::convert::AsRef::as_ref));
    for arg in all {
        if !seen.insert(arg.node.arg.as_str()) {
            diagnostics.push(Diagnostic::new(
                Rule::DuplicateArgumentName,
                format!("duplicate argument '{}' in function definition", arg.node.arg),
                Range::from_located(arg),
            ));
        }
    }
    diagnostics
}
