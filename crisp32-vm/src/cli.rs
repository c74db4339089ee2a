use clap::Parser;
use std::path::PathBuf;

/// Default load address used when none is given on the command line.
pub const DEFAULT_LOAD_ADDR: u32 = 0x1000;

/// Guest memory size for the standalone runner.
pub const MEMORY_SIZE: usize = 65536;

/// Step cap applied when the program does not halt on its own.
pub const DEFAULT_STEP_LIMIT: u64 = 1_000_000;

/// CRISP-32 virtual machine: loads a flat binary image and runs it to
/// completion or to the step limit.
#[derive(Debug, Parser)]
#[command(name = "crisp32-vm", version, about)]
pub struct Args {
    /// Path to the binary program image to load
    pub binary: PathBuf,

    /// Memory address to load the program at, hex with or without a
    /// leading `0x` (default: 0x1000)
    #[arg(value_parser = parse_load_addr)]
    pub load_addr: Option<u32>,

    /// Maximum number of steps to execute before giving up
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    pub step_limit: u64,
}

impl Args {
    pub fn load_addr(&self) -> u32 {
        self.load_addr.unwrap_or(DEFAULT_LOAD_ADDR)
    }
}

fn parse_load_addr(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|_| format!("invalid load address '{s}'"))
}
