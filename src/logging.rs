//! Logging setup: a verbosity-driven filter backed by `env_logger`, with no decorated or
//! colored log output to build.

use log::LevelFilter;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Quiet,
    #[default]
    Default,
    Verbose,
}

impl LogLevel {
    /// Builds a level from `-v`/`-q` flag counts; `-q` wins if both are somehow given.
    pub fn from_counts(verbose: u8, quiet: u8) -> Self {
        if quiet > 0 {
            LogLevel::Quiet
        } else if verbose > 0 {
            LogLevel::Verbose
        } else {
            LogLevel::Default
        }
    }

    const fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::Error,
            LogLevel::Default => LevelFilter::Info,
            LogLevel::Verbose => LevelFilter::Debug,
        }
    }
}

pub fn init_logging(level: LogLevel) {
    env_logger::Builder::new().filter_level(level.level_filter()).format_timestamp(None).init();
}
