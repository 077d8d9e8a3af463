//! Minimal CLI surface: input paths plus an output-format and verbosity knob. No config
//! resolution or subcommands — just enough for a single run over a list of files.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "pyrint", about = "Static analysis engine for a dynamically-typed, indentation-structured scripting language")]
pub struct Args {
    /// Files to analyze.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Emit a single JSON document instead of line-oriented text.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity; may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-diagnostic output.
    #[arg(short, long)]
    pub quiet: bool,
}
