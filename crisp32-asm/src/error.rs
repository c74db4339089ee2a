use thiserror::Error;

/// Which pass an assembly error was detected in — surfaced to the user
/// exactly as spec §7 requires ("identify phase, line number, and the
/// offending source line").
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pass {
    One,
    Two,
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::One => write!(f, "pass 1"),
            Pass::Two => write!(f, "pass 2"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LineError {
    #[error("unknown instruction mnemonic '{0}'")]
    UnknownMnemonic(String),
    #[error("invalid register '{0}'")]
    InvalidRegister(String),
    #[error("malformed immediate '{0}'")]
    MalformedImmediate(String),
    #[error("expected {expected} operands, found {found}")]
    OperandArity { expected: usize, found: usize },
    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),
    #[error("undefined symbol '{0}'")]
    UndefinedSymbol(String),
    #[error("label name '{0}' is too long")]
    LabelTooLong(String),
    #[error("generated output exceeds the maximum image size")]
    OutputTooLarge,
}

#[derive(Debug, Error)]
pub enum AsmError {
    #[error("cannot open input file '{path}': {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot create output file '{path}': {source}")]
    CreateOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    #[error("{pass}, line {line}: {source}")]
    Line {
        pass: Pass,
        line: usize,
        text: String,
        #[source]
        source: LineError,
    },
}

impl AsmError {
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            AsmError::Line { text, .. } => Some(text),
            _ => None,
        }
    }
}
