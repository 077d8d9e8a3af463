//! Typed engine errors, distinct from the `Diagnostic`s the engine reports about the source it
//! analyzes. `main`/`diagnostics.rs` convert I/O failures into `anyhow::Error` at the CLI
//! boundary; this enum is the structured contract library embedders see instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },
}
