use anyhow::Result;
use clap::Parser;
use exalt_tools::cli::{init_tracing, FibCli};
use exalt_tools::fibonacci::{self, Reporting, SequenceError};
use std::io::{self, Write};
use std::process::ExitCode;

fn run(args: &FibCli) -> Result<Vec<u128>, SequenceError> {
    // Both operands are optional for clap so that a missing one exits with status 1
    let (Some(count), Some(order)) = (args.count, args.order) else {
        return Err(SequenceError::NotEnoughParameters);
    };

    let reporting = if args.include_seeds {
        Reporting::FromFirstSeed
    } else {
        Reporting::Lagged
    };

    fibonacci::generate(count, order, reporting)
}

fn main() -> Result<ExitCode> {
    let args = FibCli::parse();

    init_tracing(args.debug);

    let mut stdout = io::stdout().lock();
    match run(&args) {
        Ok(terms) => {
            fibonacci::write_terms(&mut stdout, &terms)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            // Validation failures are reported on stdout, like the sequence itself
            writeln!(stdout, "{}", err)?;
            stdout.flush()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
