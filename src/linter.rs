//! Per-file driver: parses one file's source text, then hands the resulting tree to the
//! resolver. A parse failure is not a crash — it becomes a single `E0001` diagnostic and the
//! rest of the analysis is skipped for that file.

use std::path::Path;

use rustpython_parser::parser;

use crate::position::{Position, Range};
use crate::registry::{Diagnostic, Rule};
use crate::resolver;

/// The result of linting one file: the diagnostics produced, and whether the file parsed at
/// all. Data is always present, even on failure.
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    pub parsed: bool,
}

pub fn lint_source(path: &Path, source: &str) -> LintResult {
    match parser::parse_program(source, &path.to_string_lossy()) {
        Ok(program) => LintResult { diagnostics: resolver::analyze(&program, source), parsed: true },
        Err(err) => {
            let position = Position::from(err.location);
            let range = Range::new(position, position);
            LintResult {
                diagnostics: vec![Diagnostic::new(Rule::UnparsableFile, format!("{err}"), range)],
                parsed: false,
            }
        }
    }
}
