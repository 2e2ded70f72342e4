use intel_8051::{Emulator, EmulatorBuilder};

fn new_emulator(mut pmem: Vec<u8>) -> Emulator {
    pmem.resize(1024, 0);
    EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .xram(vec![0u8; 1024])
        .build()
        .expect("valid buffers")
}

const ACC: u8 = 0x60;

#[test]
fn mov_direct_direct_reads_the_first_operand_and_writes_the_second() {
    // MOV 0x30,#0x42 ; MOV 0x31,0x30 (source=0x30, dest=0x31)
    let mut emu = new_emulator(vec![
        0x75, 0x30, 0x42, // MOV 0x30,#0x42
        0x85, 0x30, 0x31, // MOV 0x31,0x30  (operand order is source, dest)
    ]);
    emu.step().unwrap();
    emu.step().unwrap();
    assert_eq!(
        emu.direct_read(0x31),
        0x42,
        "the first operand byte names the source address, the second the destination"
    );
}

#[test]
fn mov_dptr_loads_high_byte_then_low_byte() {
    let mut emu = new_emulator(vec![0x90, 0x12, 0x34]); // MOV DPTR,#0x1234
    emu.step().unwrap();
    assert_eq!(emu.dptr(), 0x1234);
}

#[test]
fn movx_round_trips_through_external_ram_via_dptr() {
    let mut emu = new_emulator(vec![
        0x90, 0x00, 0x10, // MOV DPTR,#0x0010
        0x74, 0x99, // MOV A,#0x99
        0xF0, // MOVX @DPTR,A
        0x74, 0x00, // MOV A,#0
        0xE0, // MOVX A,@DPTR
    ]);
    for _ in 0..5 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x80 + ACC), 0x99);
}

#[test]
fn movx_over_absent_xram_reads_zero_and_discards_writes() {
    let mut pmem = vec![
        0x90, 0x00, 0x10, // MOV DPTR,#0x0010
        0x74, 0x99, // MOV A,#0x99
        0xF0, // MOVX @DPTR,A (discarded, no xram attached)
        0x74, 0x00, // MOV A,#0
        0xE0, // MOVX A,@DPTR (reads back as 0)
    ];
    pmem.resize(1024, 0);
    let mut emu = EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .build()
        .unwrap();
    for _ in 0..5 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x80 + ACC), 0);
}

#[test]
fn movc_at_a_plus_pc_reads_program_memory_relative_to_the_following_instruction() {
    let mut emu = new_emulator(vec![
        0x74, 0x01, // MOV A,#1
        0x83, // MOVC A,@A+PC  (PC after fetch is 3; 3+1=4)
        0x00, // index 3 (unused)
        0xAB, // index 4: the byte MOVC fetches
    ]);
    emu.step().unwrap();
    emu.step().unwrap();
    assert_eq!(emu.direct_read(0x80 + ACC), 0xAB);
}

#[test]
fn xch_swaps_accumulator_and_direct_byte() {
    let mut emu = new_emulator(vec![
        0x74, 0x01, // MOV A,#1
        0x75, 0x30, 0x02, // MOV 0x30,#2
        0xC5, 0x30, // XCH A,0x30
    ]);
    for _ in 0..3 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x80 + ACC), 2);
    assert_eq!(emu.direct_read(0x30), 1);
}

#[test]
fn xchd_exchanges_only_the_low_nibbles() {
    let mut emu = new_emulator(vec![
        0x74, 0xAB, // MOV A,#0xAB
        0x78, 0x20, // MOV R0,#0x20
        0x75, 0x20, 0xCD, // MOV 0x20,#0xCD
        0xD6, // XCHD A,@R0
    ]);
    for _ in 0..4 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x80 + ACC), 0xAD, "A keeps its high nibble, takes @R0's low");
    assert_eq!(emu.direct_read(0x20), 0xCB, "@R0 keeps its high nibble, takes A's low");
}

#[test]
fn push_then_pop_round_trips_a_direct_byte() {
    let mut emu = new_emulator(vec![
        0x75, 0x30, 0x55, // MOV 0x30,#0x55
        0xC0, 0x30, // PUSH 0x30
        0x75, 0x30, 0x00, // MOV 0x30,#0
        0xD0, 0x30, // POP 0x30
    ]);
    for _ in 0..4 {
        emu.step().unwrap();
    }
    assert_eq!(emu.direct_read(0x30), 0x55);
}

#[test]
fn push_past_absent_upper_iram_fails_without_firing_any_callback() {
    use intel_8051::{Error, Observer};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Log(Rc<RefCell<Vec<(u8, u8)>>>);
    impl Observer for Log {
        fn sfr_update(&mut self, index: u8, value: u8) {
            self.0.borrow_mut().push((index, value));
        }
        fn imem_update(&mut self, addr: u8, value: u8) {
            self.0.borrow_mut().push((addr, value));
        }
    }

    let events = Rc::new(RefCell::new(Vec::new()));
    let mut pmem = vec![0xC0, 0x00]; // PUSH 0x00
    pmem.resize(1024, 0);
    let mut emu = EmulatorBuilder::new(pmem, vec![0u8; 128], vec![0u8; 128])
        .observer(Log(Rc::clone(&events)))
        .build()
        .unwrap();

    // SP = 0x7F, so the push's pre-increment lands at 0x80: upper IRAM,
    // which this builder never attached.
    emu.direct_write(0x81, 0x7F);
    events.borrow_mut().clear();

    assert!(matches!(emu.step(), Err(Error::IramOutOfRange)));
    assert!(
        events.borrow().is_empty(),
        "a push that never commits its byte must not fire sfr_update or imem_update"
    );
}
