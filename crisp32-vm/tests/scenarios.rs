//! End-to-end runs of the standalone binary against hand-encoded programs,
//! covering the scenarios in spec §8 that aren't already exercised by
//! `crisp32-core`'s unit tests: branch taken, load/store round trip,
//! JAL/JR return, and signed comparison.

use std::path::PathBuf;
use std::process::Command;

use crisp32_core::decode::Instruction;
use crisp32_core::encode::encode;
use crisp32_core::isa::Opcode;

fn vm_binary() -> &'static str {
    env!("CARGO_BIN_EXE_crisp32-vm")
}

fn tempdir() -> PathBuf {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    format!("{:?}", std::thread::current().id()).hash(&mut hasher);

    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "crisp32-vm-test-{}-{}",
        std::process::id(),
        hasher.finish()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn inst(opcode: Opcode, rs: u8, rt: u8, rd: u8, imm: u32) -> [u8; 8] {
    encode(&Instruction {
        raw_opcode: opcode as u8,
        opcode: Some(opcode),
        rs,
        rt,
        rd,
        imm,
    })
}

fn write_program(name: &str, words: &[[u8; 8]]) -> PathBuf {
    let dir = tempdir();
    let path = dir.join(name);
    let mut bytes = Vec::with_capacity(words.len() * 8);
    for word in words {
        bytes.extend_from_slice(word);
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

fn run_vm(path: &PathBuf) -> std::process::Output {
    Command::new(vm_binary())
        .arg(path)
        .output()
        .expect("failed to run crisp32-vm")
}

/// Scenario 2: a taken branch skips the instruction in its delay-free slot.
#[test]
fn branch_taken_skips_the_next_instruction() {
    let program = write_program(
        "branch.bin",
        &[
            inst(Opcode::Addi, 0, 1, 0, 5),          // R1 = 5
            inst(Opcode::Addi, 0, 2, 0, 5),          // R2 = 5
            inst(Opcode::Beq, 1, 2, 0, 8),           // taken: target = pc+8+8, skips next instr
            inst(Opcode::Addi, 0, 3, 0, 0xDEAD),     // skipped if branch taken
            inst(Opcode::Addi, 0, 3, 0, 99),         // executed instead
            inst(Opcode::Break, 0, 0, 0, 0),
        ],
    );

    let output = run_vm(&program);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("R3 : 0x00000063"), "{stdout}");
}

/// Scenario 3: a store followed by a load of the same word round-trips.
#[test]
fn store_then_load_round_trips() {
    let program = write_program(
        "loadstore.bin",
        &[
            inst(Opcode::Addi, 0, 1, 0, 0x1234),  // R1 = value
            inst(Opcode::Addi, 0, 2, 0, 0x2000),  // R2 = address
            inst(Opcode::Sw, 2, 1, 0, 0),          // mem[R2] = R1
            inst(Opcode::Lw, 2, 3, 0, 0),          // R3 = mem[R2]
            inst(Opcode::Break, 0, 0, 0, 0),
        ],
    );

    let output = run_vm(&program);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("R3 : 0x00001234"), "{stdout}");
}

/// Scenario 4: JAL records the return address and JR returns to it.
#[test]
fn jal_then_jr_returns_past_the_call_site() {
    // Layout at default load address 0x1000:
    //   0x1000  JAL  0x1010         (call the routine at 0x1010)
    //   0x1008  BREAK               (landed on after the routine returns)
    //   0x1010  ADDI R4, R0, 7      (routine body)
    //   0x1018  JR   R31            (return)
    //
    // J/JAL targets are absolute and biased by the conventional load
    // address at assembly time; here we encode the already-biased target
    // directly since we're building the image by hand.
    let program = write_program(
        "jal.bin",
        &[
            inst(Opcode::Jal, 0, 0, 0, 0x1010),
            inst(Opcode::Break, 0, 0, 0, 0),
            inst(Opcode::Addi, 0, 4, 0, 7),
            inst(Opcode::Jr, 31, 0, 0, 0),
        ],
    );

    let output = run_vm(&program);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("R4 : 0x00000007"), "{stdout}");
    // JAL saves the address of the instruction immediately after itself.
    assert!(stdout.contains("R31: 0x00001008"), "{stdout}");
}

/// Scenario 5: SLT treats its operands as signed.
#[test]
fn slt_is_a_signed_comparison() {
    let program = write_program(
        "slt.bin",
        &[
            inst(Opcode::Addi, 0, 1, 0, 0xFFFF_FFFF_u32), // R1 = -1 (sign-extended)
            inst(Opcode::Addi, 0, 2, 0, 1),                // R2 = 1
            inst(Opcode::Slt, 1, 2, 3, 0),                 // R3 = (R1 < R2) ? 1 : 0, signed
            inst(Opcode::Break, 0, 0, 0, 0),
        ],
    );

    let output = run_vm(&program);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("R3 : 0x00000001"), "{stdout}");
}
