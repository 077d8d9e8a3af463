//! E0103 not-in-loop (`break`) and E0116 continue-not-in-loop (`continue`).
//!
//! These are separate codes covering the same guard, so both live in one module rather than
//! forcing an artificial split.

use crate::control_flow::Frame;
use crate::position::Range;
use crate::registry::{Diagnostic, Rule};

pub fn check_break(frame: Frame, range: Range) -> Option<Diagnostic> {
    if frame.in_loop() {
        return None;
    }
    Some(Diagnostic::new(Rule::NotInLoop, "'break' not properly in loop", range))
}

/// `continue` outside a loop triggers both codes, unlike `break`, which only ever triggers
/// E0103.
pub fn check_continue(frame: Frame, range: Range) -> Vec<Diagnostic> {
    if frame.in_loop() {
        return Vec::new();
    }
    vec![
        Diagnostic::new(Rule::NotInLoop, "'continue' not properly in loop", range),
        Diagnostic::new(Rule::ContinueNotInLoop, "'continue' not properly in loop", range),
    ]
}
