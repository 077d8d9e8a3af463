//! E0104 return-outside-function, E0105 yield-outside-function, E0106
//! return-arg-in-generator.

use crate::control_flow::Frame;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check_return(frame: Frame, has_value: bool, is_generator: bool, range: Range) -> Option<Diagnostic> {
    if !frame.in_function() {
        return Some(Diagnostic::new(
            Rule::ReturnOutsideFunction,
            "'return' outside function",
            range,
        ));
    }
    if is_generator && has_value {
        return Some(Diagnostic::new(
            Rule::ReturnArgInGenerator,
            "'return' with argument inside generator",
            range,
        ));
    }
    None
}

pub fn check_yield(frame: Frame, range: Range) -> Option<Diagnostic> {
    if frame.in_function() {
        return None;
    }
    Some(Diagnostic::new(Rule::YieldOutsideFunction, "'yield' outside function", range))
}
