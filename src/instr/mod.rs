//! Per-opcode instruction handlers, grouped the way the MCS-51 ISA itself
//! groups them. `table.rs` wires each handler into the 256-entry dispatch
//! table; nothing outside this module calls a handler directly.

pub mod arithmetic;
pub mod bit_ops;
pub mod control_flow;
pub mod data_movement;
pub mod logical;
mod operand;

use crate::{Emulator, Error};

/// NOP — opcode `0x00`.
pub fn nop(_emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    Ok(())
}

/// Placeholder handler for reserved/unimplemented opcodes. The step
/// driver never calls this: it checks `InstrEntry::bytes == 0` before
/// dispatch and returns `Error::UnimplementedOpcode` itself (see
/// `crate::table`).
pub fn unimplemented(_emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    Err(Error::UnimplementedOpcode(code[0]))
}
