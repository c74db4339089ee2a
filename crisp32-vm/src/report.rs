use crisp32_core::Vm;

/// Print the register file four-per-line followed by PC, matching the
/// original standalone runner's dump format exactly.
pub fn print_registers(vm: &Vm) {
    println!();
    println!("Register State:");
    println!("================");

    for (i, value) in vm.regs.as_slice().iter().enumerate() {
        print!("R{i:<2}: 0x{value:08x}");
        if i % 4 == 3 {
            println!();
        } else {
            print!("  ");
        }
    }

    println!("PC:  0x{:08x}", vm.pc);
    println!("================");
}
