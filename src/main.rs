//! psconv command-line interface.
//!
//! Thin shell around [`psconv::rewrite_file`]: argument parsing, the
//! file existence check, and exit-status mapping. All rewriting logic
//! lives in the library.
//!
//! Exit status is 0 on success, 1 for usage errors or a missing input
//! file, and 2 when conversion fails (allocation or I/O); conversion
//! failures happen before write-back, so the input file keeps its
//! original contents.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Rewrite pascal-string markers in a source file in place
#[derive(Parser, Debug)]
#[command(
    name = "psconv",
    about = "Convert pascal-string markers in C-family sources to octal length escapes",
    version
)]
struct Args {
    /// File to convert in place
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too and are not failures
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if !args.file.exists() {
        eprintln!("psconv: error: file not found '{}'", args.file.display());
        return ExitCode::from(1);
    }

    match psconv::rewrite_file(&args.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("psconv: error: {err}");
            ExitCode::from(2)
        }
    }
}
