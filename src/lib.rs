//! The engine as a library: everything `main.rs` does is call [`run`] once and map its
//! [`ExitStatus`] onto the process exit code.

pub mod args;
pub mod ast;
pub mod builtins;
pub mod control_flow;
pub mod definite_assignment;
pub mod diagnostics;
pub mod error;
pub mod linter;
pub mod logging;
pub mod message;
pub mod position;
pub mod registry;
pub mod resolver;
pub mod rules;
pub mod scope;

use std::process::ExitCode;

use anyhow::Result;
use log::error;

use crate::args::Args;

#[derive(Copy, Clone)]
pub enum ExitStatus {
    /// Analysis succeeded and no diagnostics were emitted.
    Success,
    /// Analysis succeeded but diagnostics were emitted.
    Failure,
    /// The engine itself failed (e.g. an unreadable path).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn run(args: Args) -> Result<ExitStatus> {
    let result = diagnostics::run(&args.paths);

    for err in &result.errors {
        error!("{err}");
    }

    if !args.quiet {
        let rendered = if args.json {
            message::json::render(&result.messages)?
        } else {
            message::text::render(&result.messages)
        };
        print!("{rendered}");
    }

    if !args.paths.is_empty() && result.errors.len() == args.paths.len() {
        return Ok(ExitStatus::Error);
    }
    if !result.messages.is_empty() {
        return Ok(ExitStatus::Failure);
    }
    Ok(ExitStatus::Success)
}
