//! Symbol table: label definitions and forward-reference resolution.
//!
//! Grounded in `examples/original_source/src/asm/c32_symbols.c`; the 1024
//! / 64-character limits of the original are not reproduced verbatim — a
//! `Vec`-backed table has no natural size cap — but the label-length limit
//! still applies, since it bounds what the tokenizer will hand back.

use crate::error::LineError;
use crate::token::MAX_LABEL_LEN;

#[derive(Debug, Clone)]
struct Symbol {
    name: String,
    address: u32,
    defined: bool,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<u32> {
        self.symbols
            .iter()
            .find(|s| s.name == name && s.defined)
            .map(|s| s.address)
    }

    /// Define `name` at `address`. Errors if the name is too long or already
    /// defined — the original restricts a name only being definable once.
    pub fn define(&mut self, name: &str, address: u32) -> Result<(), LineError> {
        if name.is_empty() || name.len() >= MAX_LABEL_LEN {
            return Err(LineError::LabelTooLong(name.to_string()));
        }
        if let Some(existing) = self.symbols.iter_mut().find(|s| s.name == name) {
            if existing.defined {
                return Err(LineError::DuplicateLabel(name.to_string()));
            }
            existing.address = address;
            existing.defined = true;
            return Ok(());
        }
        self.symbols.push(Symbol {
            name: name.to_string(),
            address,
            defined: true,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_then_find_round_trips() {
        let mut table = SymbolTable::new();
        table.define("loop", 0x1008).unwrap();
        assert_eq!(table.find("loop"), Some(0x1008));
    }

    #[test]
    fn redefining_a_label_is_an_error() {
        let mut table = SymbolTable::new();
        table.define("loop", 0x1000).unwrap();
        assert!(table.define("loop", 0x1008).is_err());
    }

    #[test]
    fn unknown_symbol_is_not_found() {
        let table = SymbolTable::new();
        assert_eq!(table.find("nowhere"), None);
    }
}
