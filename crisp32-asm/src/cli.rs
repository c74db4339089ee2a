use clap::Parser;
use std::path::PathBuf;

/// CRISP-32 two-pass assembler: translates mnemonic source into a flat
/// binary image.
#[derive(Debug, Parser)]
#[command(name = "crisp32-asm", version, about)]
pub struct Args {
    /// Path to the assembly source file
    pub input: PathBuf,

    /// Path to the binary image to write
    pub output: PathBuf,
}
