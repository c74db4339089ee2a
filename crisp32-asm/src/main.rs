mod cli;
mod driver;
mod error;
mod operand;
mod report;
mod symbol;
mod token;

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Args;
use crate::error::AsmError;

fn run(args: Args) -> Result<(), AsmError> {
    let source = fs::read_to_string(&args.input).map_err(|source| AsmError::OpenInput {
        path: args.input.display().to_string(),
        source,
    })?;

    let (bytes, symbols) = driver::assemble(&source)?;

    fs::write(&args.output, &bytes).map_err(|source| AsmError::CreateOutput {
        path: args.output.display().to_string(),
        source,
    })?;

    report::print_success(&args.input, &args.output, &bytes, &symbols);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(line) = err.offending_line() {
                eprintln!("Error: {err}: {line}");
            } else {
                eprintln!("Error: {err}");
            }
            eprintln!("Assembly failed.");
            ExitCode::FAILURE
        }
    }
}
