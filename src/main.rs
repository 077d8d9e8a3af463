use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use pyrint::args::Args;
use pyrint::logging::{init_logging, LogLevel};
use pyrint::{run, ExitStatus};

pub fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(LogLevel::from_counts(args.verbose, args.quiet as u8));

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            for cause in err.chain() {
                if let Some(ioerr) = cause.downcast_ref::<std::io::Error>() {
                    if ioerr.kind() == std::io::ErrorKind::BrokenPipe {
                        return ExitCode::from(0);
                    }
                }
            }

            let mut stderr = std::io::stderr().lock();
            writeln!(stderr, "pyrint failed").ok();
            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }
            ExitStatus::Error.into()
        }
    }
}
