//! Multi-file fan-out: each path is analyzed independently with `rayon`, one layer above
//! `linter.rs`'s "analyze one file". Reads happen here, not in `linter.rs`, so that an
//! unreadable path becomes a single `E0002` message rather than aborting the whole sweep.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::EngineError;
use crate::linter;
use crate::message::Message;
use crate::position::{Position, Range};
use crate::registry::{Diagnostic, Rule};

pub struct RunResult {
    pub messages: Vec<Message>,
    pub errors: Vec<EngineError>,
}

pub fn run(paths: &[PathBuf]) -> RunResult {
    let per_file: Vec<(Vec<Message>, Option<EngineError>)> = paths.par_iter().map(|path| lint_one(path)).collect();

    let mut messages = Vec::new();
    let mut errors = Vec::new();
    for (file_messages, error) in per_file {
        messages.extend(file_messages);
        errors.extend(error);
    }
    RunResult { messages: crate::message::finalize(messages), errors }
}

fn lint_one(path: &Path) -> (Vec<Message>, Option<EngineError>) {
    match std::fs::read_to_string(path) {
        Ok(source) => {
            let result = linter::lint_source(path, &source);
            (result.diagnostics.into_iter().map(|diagnostic| Message::new(path.to_path_buf(), diagnostic)).collect(), None)
        }
        Err(source) => {
            let message = unreadable_file_message(path, &source);
            (vec![message], Some(EngineError::Io { path: path.to_path_buf(), source }))
        }
    }
}

/// Builds the `E0002 unreadable-file` message for a path `run` could not even open.
fn unreadable_file_message(path: &Path, error: &std::io::Error) -> Message {
    let position = Position::new(1, 0);
    Message::new(
        path.to_path_buf(),
        Diagnostic::new(Rule::UnreadableFile, format!("could not read file: {error}"), Range::new(position, position)),
    )
}
