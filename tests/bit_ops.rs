use intel_8051::{Emulator, EmulatorBuilder, Error};

fn new_emulator(mut pmem: Vec<u8>) -> Emulator {
    pmem.resize(1024, 0);
    EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .build()
        .expect("valid buffers")
}

const PSW: u8 = 0x50;
const PSW_C: u8 = 0x80;

#[test]
fn setb_and_clr_on_a_bit_address_round_trip() {
    let mut emu = new_emulator(vec![
        0xD2, 0x00, // SETB 0 (bit 0 -> byte 0x20 bit 0)
        0xC2, 0x00, // CLR 0
    ]);
    emu.step().unwrap();
    assert_eq!(emu.direct_read(0x20) & 0x01, 0x01);
    emu.step().unwrap();
    assert_eq!(emu.direct_read(0x20) & 0x01, 0x00);
}

#[test]
fn bit_address_at_or_above_128_is_out_of_range() {
    let mut emu = new_emulator(vec![0xD2, 128]); // SETB 128
    assert_eq!(emu.step(), Err(Error::BitOutOfRange));
}

#[test]
fn jb_branches_only_when_the_bit_is_set() {
    let mut emu = new_emulator(vec![
        0xD2, 0x07, // SETB 7 (last bit of byte 0x20)
        0x20, 0x07, 0x02, // JB 7,+2
    ]);
    emu.step().unwrap();
    emu.step().unwrap();
    assert_eq!(emu.direct_read(0x20) & 0x80, 0x80);
    // PC after fetch is 5; +2 => 7
    assert_eq!(emu.pc(), 7);
}

#[test]
fn jbc_clears_the_bit_when_it_branches() {
    let mut emu = new_emulator(vec![
        0xD2, 0x00, // SETB 0
        0x10, 0x00, 0x02, // JBC 0,+2
    ]);
    emu.step().unwrap();
    emu.step().unwrap();
    assert_eq!(emu.direct_read(0x20) & 0x01, 0, "JBC clears the bit before branching");
    assert_eq!(emu.pc(), 7);
}

#[test]
fn mov_c_bit_and_mov_bit_c_round_trip_through_the_carry_flag() {
    let mut emu = new_emulator(vec![
        0xD2, 0x05, // SETB 5
        0xA2, 0x05, // MOV C,5
        0xC2, 0x05, // CLR 5
        0x92, 0x05, // MOV 5,C (restores bit 5 from carry)
    ]);
    for _ in 0..4 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x20) & 0x20, 0x20, "bit 5 round-trips through C");
}

#[test]
fn anl_c_bit_ands_the_carry_flag_with_the_named_bit() {
    let mut emu = new_emulator(vec![
        0xD3, // SETB C
        0xC2, 0x01, // CLR 1 (bit 1 is 0)
        0x82, 0x01, // ANL C,1 -> C = C && bit1 = 0
    ]);
    for _ in 0..3 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x80 + PSW) & PSW_C, 0);
}
