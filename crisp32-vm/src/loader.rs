use std::fs;
use std::path::Path;

use crate::error::RunnerError;

/// Read `path` and copy it into `memory` starting at `load_addr`. A load
/// address beyond the end of memory, or a binary that does not fit in the
/// space remaining after it, is an error — both are host-boundary
/// conditions that must be reported and cause a non-zero exit, not silently
/// truncated.
///
/// Returns the number of bytes copied.
pub fn load_binary_file(
    memory: &mut [u8],
    path: &Path,
    load_addr: u32,
) -> Result<usize, RunnerError> {
    let load_addr_usize = load_addr as usize;
    if load_addr_usize >= memory.len() {
        return Err(RunnerError::LoadAddrOutOfRange { addr: load_addr });
    }

    let bytes = fs::read(path).map_err(|source| {
        // fs::read() already covers both "cannot open" and "cannot read";
        // distinguish by whether the file could be opened at all.
        if source.kind() == std::io::ErrorKind::NotFound {
            RunnerError::OpenBinary {
                path: path.display().to_string(),
                source,
            }
        } else {
            RunnerError::ReadBinary {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let available = memory.len() - load_addr_usize;
    if bytes.len() > available {
        return Err(RunnerError::BinaryTooLarge {
            path: path.display().to_string(),
            size: bytes.len(),
            available,
            addr: load_addr,
        });
    }

    memory[load_addr_usize..load_addr_usize + bytes.len()].copy_from_slice(&bytes);
    Ok(bytes.len())
}
