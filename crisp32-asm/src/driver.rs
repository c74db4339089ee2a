//! Two-pass assembly driver: pass 1 assigns addresses and defines labels,
//! pass 2 resolves symbols and encodes instructions.
//!
//! Grounded in `examples/original_source/src/asm/c32_parser.c`'s
//! `c32_asm_assemble_line` — the per-mnemonic operand shape table below is
//! the same grouping as that function's `if`/`else if` chain.

use log::{debug, trace};

use crisp32_core::decode::{Instruction, WORD_LEN};
use crisp32_core::encode::encode;
use crisp32_core::isa::Opcode;

use crate::error::{LineError, Pass};
use crate::operand::{parse_immediate, parse_register};
use crate::symbol::SymbolTable;
use crate::token::{tokenize, Line};

/// The conventional load address jump targets are biased by at assembly
/// time, per spec §4.8 / §9 ("Jump absolute target convention").
pub const DEFAULT_LOAD_ADDR: u32 = 0x1000;

/// Maximum size of a generated image — mirrors `MAX_OUTPUT_SIZE` in
/// `examples/original_source/include/c32_asm.h`.
pub const MAX_OUTPUT_SIZE: usize = 64 * 1024;

#[derive(Debug, Copy, Clone)]
enum Shape {
    NoOperands,
    Rrr,
    RtRsImm,
    RtImm,
    RdRtShamt,
    RsRtTarget,
    RsTarget,
    Target,
    Rs,
    RdRs,
    RtRsOffset,
}

fn mnemonic(token: &str) -> Option<(Opcode, Shape)> {
    use Opcode::*;
    use Shape::*;
    Some(match token {
        "ADD" => (Add, Rrr),
        "ADDU" => (Addu, Rrr),
        "SUB" => (Sub, Rrr),
        "SUBU" => (Subu, Rrr),
        "ADDI" => (Addi, RtRsImm),
        "ADDIU" => (Addiu, RtRsImm),

        "AND" => (And, Rrr),
        "OR" => (Or, Rrr),
        "XOR" => (Xor, Rrr),
        "NOR" => (Nor, Rrr),
        "ANDI" => (Andi, RtRsImm),
        "ORI" => (Ori, RtRsImm),
        "XORI" => (Xori, RtRsImm),
        "LUI" => (Lui, RtImm),

        "SLL" => (Sll, RdRtShamt),
        "SRL" => (Srl, RdRtShamt),
        "SRA" => (Sra, RdRtShamt),
        "SLLV" => (Sllv, Rrr),
        "SRLV" => (Srlv, Rrr),
        "SRAV" => (Srav, Rrr),

        "SLT" => (Slt, Rrr),
        "SLTU" => (Sltu, Rrr),
        "SLTI" => (Slti, RtRsImm),
        "SLTIU" => (Sltiu, RtRsImm),

        "MUL" => (Mul, Rrr),
        "MULH" => (Mulh, Rrr),
        "MULHU" => (Mulhu, Rrr),
        "DIV" => (Div, Rrr),
        "DIVU" => (Divu, Rrr),
        "REM" => (Rem, Rrr),
        "REMU" => (Remu, Rrr),

        "LW" => (Lw, RtRsOffset),
        "LH" => (Lh, RtRsOffset),
        "LHU" => (Lhu, RtRsOffset),
        "LB" => (Lb, RtRsOffset),
        "LBU" => (Lbu, RtRsOffset),
        "SW" => (Sw, RtRsOffset),
        "SH" => (Sh, RtRsOffset),
        "SB" => (Sb, RtRsOffset),

        "BEQ" => (Beq, RsRtTarget),
        "BNE" => (Bne, RsRtTarget),
        "BLEZ" => (Blez, RsTarget),
        "BGTZ" => (Bgtz, RsTarget),
        "BLTZ" => (Bltz, RsTarget),
        "BGEZ" => (Bgez, RsTarget),

        "J" => (J, Target),
        "JAL" => (Jal, Target),
        "JR" => (Jr, Rs),
        "JALR" => (Jalr, RdRs),

        "SYSCALL" => (Syscall, NoOperands),
        "BREAK" => (Break, NoOperands),
        "NOP" => (Nop, NoOperands),

        "EI" => (Ei, NoOperands),
        "DI" => (Di, NoOperands),
        "IRET" => (Iret, NoOperands),
        "RAISE" => (Raise, NoOperands),
        "GETPC" => (Getpc, NoOperands),

        "ENABLE_PAGING" => (EnablePaging, NoOperands),
        "DISABLE_PAGING" => (DisablePaging, NoOperands),
        "SET_PTBR" => (SetPtbr, NoOperands),
        "ENTER_USER" => (EnterUser, NoOperands),
        "GETMODE" => (Getmode, NoOperands),

        _ => return None,
    })
}

fn shape_arity(shape: Shape) -> usize {
    match shape {
        Shape::NoOperands => 0,
        Shape::Rs => 1,
        Shape::Target => 1,
        Shape::RtImm => 2,
        Shape::RdRs => 2,
        Shape::RsTarget => 2,
        Shape::Rrr => 3,
        Shape::RtRsImm => 3,
        Shape::RdRtShamt => 3,
        Shape::RsRtTarget => 3,
        Shape::RtRsOffset => 3,
    }
}

/// A freshly lexed line paired with its opcode/shape, or `None` for a blank
/// or label-only line.
struct Parsed<'a> {
    opcode: Opcode,
    shape: Shape,
    operands: &'a [String],
}

fn classify<'a>(line: &'a Line) -> Result<Option<Parsed<'a>>, LineError> {
    let Some(mnemonic_token) = line.tokens.first() else {
        return Ok(None);
    };
    let (opcode, shape) = mnemonic(mnemonic_token)
        .ok_or_else(|| LineError::UnknownMnemonic(mnemonic_token.clone()))?;
    let operands = &line.tokens[1..];
    let expected = shape_arity(shape);
    if operands.len() < expected {
        return Err(LineError::OperandArity {
            expected,
            found: operands.len(),
        });
    }
    Ok(Some(Parsed {
        opcode,
        shape,
        operands,
    }))
}

/// Result of processing one line: how far to advance `current_address`, and
/// (in pass 2) the encoded bytes.
pub struct LineOutcome {
    pub advance: u32,
    pub bytes: Option<[u8; WORD_LEN]>,
}

/// Process a single tokenized line for the given pass. `current_address` is
/// the address this line's instruction would occupy if it is one.
pub fn process_line(
    pass: Pass,
    line: &Line,
    current_address: u32,
    symbols: &mut SymbolTable,
) -> Result<LineOutcome, LineError> {
    if let Some(label) = &line.label {
        if pass == Pass::One {
            symbols.define(label, current_address)?;
        }
    }

    let Some(parsed) = classify(line)? else {
        return Ok(LineOutcome {
            advance: 0,
            bytes: None,
        });
    };

    let bytes = if pass == Pass::Two {
        Some(encode_instruction(&parsed, current_address, symbols)?)
    } else {
        None
    };

    Ok(LineOutcome {
        advance: WORD_LEN as u32,
        bytes,
    })
}

/// A branch/jump target operand, distinguishing a resolved label from a
/// literal immediate — branch opcodes only PC-rebias the former (§9 "branch
/// offset base"; see `c32_parser.c`'s BEQ/BLEZ handling).
enum TargetOperand {
    Symbol(u32),
    Literal(i32),
}

fn resolve_target(token: &str, symbols: &SymbolTable) -> Result<TargetOperand, LineError> {
    if let Some(addr) = symbols.find(token) {
        Ok(TargetOperand::Symbol(addr))
    } else if let Ok(imm) = parse_immediate(token) {
        Ok(TargetOperand::Literal(imm))
    } else {
        Err(LineError::UndefinedSymbol(token.to_string()))
    }
}

/// A resolved label is PC-rebased (`addr - (current_address + 8)`); a
/// literal operand is encoded exactly as written.
fn branch_offset(target: TargetOperand, current_address: u32) -> u32 {
    match target {
        TargetOperand::Symbol(addr) => {
            (addr as i64 - (current_address as i64 + WORD_LEN as i64)) as u32
        }
        TargetOperand::Literal(imm) => imm as u32,
    }
}

fn encode_instruction(
    parsed: &Parsed,
    current_address: u32,
    symbols: &SymbolTable,
) -> Result<[u8; WORD_LEN], LineError> {
    let ops = parsed.operands;
    let mut inst = Instruction {
        raw_opcode: parsed.opcode as u8,
        opcode: Some(parsed.opcode),
        rs: 0,
        rt: 0,
        rd: 0,
        imm: 0,
    };

    match parsed.shape {
        Shape::NoOperands => {}
        Shape::Rrr => {
            inst.rd = parse_register(&ops[0])?;
            inst.rs = parse_register(&ops[1])?;
            inst.rt = parse_register(&ops[2])?;
        }
        Shape::RtRsImm => {
            inst.rt = parse_register(&ops[0])?;
            inst.rs = parse_register(&ops[1])?;
            inst.imm = parse_immediate(&ops[2])? as u32;
        }
        Shape::RtImm => {
            inst.rt = parse_register(&ops[0])?;
            inst.imm = parse_immediate(&ops[1])? as u32;
        }
        Shape::RdRtShamt => {
            inst.rd = parse_register(&ops[0])?;
            inst.rt = parse_register(&ops[1])?;
            inst.imm = parse_immediate(&ops[2])? as u32;
        }
        Shape::RsRtTarget => {
            inst.rs = parse_register(&ops[0])?;
            inst.rt = parse_register(&ops[1])?;
            inst.imm = branch_offset(resolve_target(&ops[2], symbols)?, current_address);
        }
        Shape::RsTarget => {
            inst.rs = parse_register(&ops[0])?;
            inst.imm = branch_offset(resolve_target(&ops[1], symbols)?, current_address);
        }
        Shape::Target => {
            // J/JAL bias both label and literal operands by the load
            // address, unlike branches above.
            let biased = match resolve_target(&ops[0], symbols)? {
                TargetOperand::Symbol(addr) => addr as i64 + DEFAULT_LOAD_ADDR as i64,
                TargetOperand::Literal(imm) => imm as i64 + DEFAULT_LOAD_ADDR as i64,
            };
            inst.imm = biased as u32;
        }
        Shape::Rs => {
            inst.rs = parse_register(&ops[0])?;
        }
        Shape::RdRs => {
            inst.rd = parse_register(&ops[0])?;
            inst.rs = parse_register(&ops[1])?;
        }
        Shape::RtRsOffset => {
            inst.rt = parse_register(&ops[0])?;
            inst.rs = parse_register(&ops[1])?;
            inst.imm = parse_immediate(&ops[2])? as u32;
        }
    }

    Ok(encode(&inst))
}

/// Assemble complete source text, returning the binary image and the final
/// symbol table (for the success report).
pub fn assemble(source: &str) -> Result<(Vec<u8>, SymbolTable), crate::error::AsmError> {
    use crate::error::AsmError;

    debug!("pass 1: assigning addresses and defining labels");
    let mut symbols = SymbolTable::new();
    run_pass(Pass::One, source, &mut symbols)?;
    debug!("pass 1 complete: {} symbols defined", symbols.len());

    debug!("pass 2: resolving symbols and encoding instructions");
    let mut output = Vec::new();
    let mut address = 0u32;
    for (line_num, text) in source.lines().enumerate() {
        let tokenized = tokenize(text);
        let outcome = process_line(Pass::Two, &tokenized, address, &mut symbols).map_err(|e| {
            AsmError::Line {
                pass: Pass::Two,
                line: line_num + 1,
                text: text.to_string(),
                source: e,
            }
        })?;
        if let Some(bytes) = outcome.bytes {
            if output.len() + bytes.len() > MAX_OUTPUT_SIZE {
                return Err(AsmError::Line {
                    pass: Pass::Two,
                    line: line_num + 1,
                    text: text.to_string(),
                    source: LineError::OutputTooLarge,
                });
            }
            output.extend_from_slice(&bytes);
        }
        address += outcome.advance;
    }

    debug!("pass 2 complete: {} bytes encoded", output.len());
    Ok((output, symbols))
}

fn run_pass(
    pass: Pass,
    source: &str,
    symbols: &mut SymbolTable,
) -> Result<(), crate::error::AsmError> {
    use crate::error::AsmError;
    let mut address = 0u32;
    for (line_num, text) in source.lines().enumerate() {
        let tokenized = tokenize(text);
        let outcome =
            process_line(pass, &tokenized, address, symbols).map_err(|e| AsmError::Line {
                pass,
                line: line_num + 1,
                text: text.to_string(),
                source: e,
            })?;
        if tokenized.label.is_some() || !tokenized.tokens.is_empty() {
            trace!("{pass} line {}: address 0x{address:08x}: {text}", line_num + 1);
        }
        address += outcome.advance;
    }
    Ok(())
}
