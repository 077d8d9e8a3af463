//! E1142 await-outside-async: `await` used outside a coroutine function.

use crate::control_flow::Frame;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check(frame: Frame, range: Range) -> Option<Diagnostic> {
    if frame.in_coroutine() {
        return None;
    }
    Some(Diagnostic::new(Rule::AwaitOutsideAsync, "'await' outside async function", range))
}
