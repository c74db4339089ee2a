use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("cannot open binary file '{path}': {source}")]
    OpenBinary {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("load address 0x{addr:08x} exceeds memory size")]
    LoadAddrOutOfRange { addr: u32 },
    #[error("binary '{path}' is {size} bytes, which does not fit in the {available} bytes available at load address 0x{addr:08x}")]
    BinaryTooLarge {
        path: String,
        size: usize,
        available: usize,
        addr: u32,
    },
    #[error("failed to read binary file '{path}': {source}")]
    ReadBinary {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("VM execution failed at PC=0x{pc:08x}: {source}")]
    Step {
        pc: u32,
        #[source]
        source: crisp32_core::StepError,
    },
}
