mod cli;
mod error;
mod loader;
mod report;

use std::process::ExitCode;

use clap::Parser;
use log::info;

use cli::Args;
use crisp32_core::{RunOutcome, Vm};
use error::RunnerError;

fn run(args: &Args) -> Result<(), RunnerError> {
    let load_addr = args.load_addr();
    let mut vm = Vm::new(cli::MEMORY_SIZE);

    let bytes_read = loader::load_binary_file(&mut vm.memory, &args.binary, load_addr)?;
    println!(
        "Loaded {} bytes from '{}' at address 0x{:08x}",
        bytes_read,
        args.binary.display(),
        load_addr
    );

    vm.pc = load_addr;
    vm.running = true;

    info!("starting execution at 0x{load_addr:08x}");
    println!("\nStarting execution at 0x{load_addr:08x}...");

    match vm.run(args.step_limit) {
        RunOutcome::Halted { steps } => {
            println!("\nProgram halted after {steps} steps");
            report::print_registers(&vm);
            Ok(())
        }
        RunOutcome::StepLimitReached { steps } => {
            eprintln!("\nWarning: Program did not halt within {steps} steps");
            report::print_registers(&vm);
            Ok(())
        }
        RunOutcome::Error { error, .. } => {
            report::print_registers(&vm);
            Err(RunnerError::Step { pc: vm.pc, source: error })
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
