//! Typed failures at the host boundary.
//!
//! Everything the executing guest can go wrong in is expressed as an
//! interrupt (§7) — it never surfaces as a Rust `Err`. The errors here are
//! the small set of conditions that terminate the step loop itself: a
//! translation or bounds failure during instruction fetch for which there is
//! no further instruction to execute. The interrupt that explains *why* has
//! already been raised by the time one of these is returned; the error
//! exists only to stop the run loop and let the host report PC and a
//! register dump.

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum StepError {
    #[error("program counter {0:#010x} is not 8-byte aligned")]
    MisalignedFetch(u32),

    #[error("instruction fetch at virtual address {0:#010x} faulted")]
    FetchTranslationFault(u32),

    #[error("instruction fetch at physical address {0:#010x} exceeds memory bounds")]
    FetchOutOfBounds(u32),
}
