//! E0211 no-method-argument and E0213 no-self-argument: instance methods must take at
//! least one positional parameter, conventionally named `self`.

use rustpython_parser::ast::Arguments;

use crate::ast::function_type::FunctionType;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(function_type: FunctionType, args: &Arguments, def_range: Range) -> Option<Diagnostic> {
    if !matches!(function_type, FunctionType::Method) {
        return None;
    }
    let first = args.posonlyargs.iter().chain(args.args.iter()).next();
    match first {
        None => Some(Diagnostic::new(
            Rule::NoMethodArgument,
            "method has no argument",
            def_range,
        )),
        Some(arg) if arg.node.arg != "self" => Some(Diagnostic::new(
            Rule::NoSelfArgument,
            format!("method should have \"self\" as first argument, found \"{}\"", arg.node.arg),
            def_range,
        )),
        Some(_) => None,
    }
}
