use intel_8051::{EmulatorBuilder, Error};

fn new_emulator(mut pmem: Vec<u8>) -> intel_8051::Emulator {
    pmem.resize(1024, 0);
    EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .build()
        .expect("1024-byte pmem and 128-byte iram_lower/sfr are valid")
}

#[test]
fn nop_advances_pc_by_one_and_costs_one_cycle() {
    let mut emu = new_emulator(vec![0x00, 0x00, 0x00]);
    let cycles = emu.step().expect("NOP never fails");
    assert_eq!(emu.pc(), 1, "NOP is a one-byte instruction");
    assert_eq!(cycles, 1, "NOP costs a single machine cycle");
}

#[test]
fn reset_sets_pc_to_zero_and_sp_to_seven() {
    let mut emu = new_emulator(vec![0x00, 0x00, 0x02, 0x00, 0x00]);
    emu.step().unwrap();
    emu.step().unwrap();
    emu.reset();
    assert_eq!(emu.pc(), 0, "reset rewinds PC");
}

#[test]
fn stepping_past_the_end_of_pmem_is_an_error() {
    let pmem = vec![0x00; 1024];
    let mut emu = EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .build()
        .unwrap();
    // walk PC to the very last byte, then step once more
    for _ in 0..1024 {
        emu.step().unwrap();
    }
    assert_eq!(emu.step(), Err(Error::PmemOutOfRange));
}

#[test]
fn a_multi_byte_instruction_crossing_the_pmem_boundary_errors_without_advancing_pc() {
    // LJMP (0x02) is 3 bytes; place it at the last 2 bytes of a 1024-byte
    // pmem so its operands would read past the end.
    let mut pmem = vec![0x00; 1024];
    pmem[1022] = 0x02;
    let mut emu = EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .build()
        .unwrap();
    for _ in 0..1022 {
        emu.step().unwrap();
    }
    assert_eq!(emu.pc(), 1022);
    assert_eq!(emu.step(), Err(Error::PmemOutOfRange));
    assert_eq!(
        emu.pc(),
        1022,
        "a failed step must not leave PC advanced past the faulting instruction"
    );
}

#[test]
fn unimplemented_opcode_is_reported_with_its_byte_and_does_not_move_pc() {
    let mut emu = new_emulator(vec![0xA5]);
    assert_eq!(emu.step(), Err(Error::UnimplementedOpcode(0xA5)));
    assert_eq!(emu.pc(), 0, "an unimplemented opcode never advances PC");
}

#[test]
fn a_handler_error_restores_pc_to_its_value_on_entry() {
    // INDIRECT read through R0 when iram_upper is absent: R0 defaults to
    // 0, which is in-range, so drive R0 to 0x80 first via MOV R0,#data.
    let mut emu = new_emulator(vec![
        0x78, 0x80, // MOV R0,#0x80
        0xE6, // MOV A,@R0  -> IramOutOfRange, no iram_upper attached
    ]);
    emu.step().unwrap();
    assert_eq!(emu.pc(), 2);
    assert_eq!(emu.step(), Err(Error::IramOutOfRange));
    assert_eq!(emu.pc(), 2, "PC is restored to its pre-step value on error");
}
