use std::path::Path;

use crate::symbol::SymbolTable;

/// Print the one-paragraph success report spec §6 requires: byte count,
/// instruction count, symbol count.
pub fn print_success(input: &Path, output: &Path, bytes: &[u8], symbols: &SymbolTable) {
    println!("Assembly successful:");
    println!("  Input:   {}", input.display());
    println!("  Output:  {}", output.display());
    println!(
        "  Size:    {} bytes ({} instructions)",
        bytes.len(),
        bytes.len() / 8
    );
    println!("  Symbols: {}", symbols.len());
}
