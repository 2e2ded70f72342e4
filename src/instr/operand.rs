//! Shared operand decoding for the `A, operand` instruction families
//! (ADD, ADDC, SUBB, ORL, ANL, XRL): the low nibble of the opcode selects
//! the addressing mode the same way across every one of these rows, so
//! one decoder serves all of them instead of six copies.

use crate::{Emulator, Error};

/// Reads the non-accumulator operand of an `A, operand` instruction whose
/// opcode's low nibble follows the standard pattern: `0x4` immediate (next
/// byte), `0x5` direct (next byte names an address), `0x6`/`0x7` indirect
/// through `R0`/`R1`, `0x8..=0xF` register `R0..=R7`.
pub fn read_src(emu: &mut Emulator, code: &[u8]) -> Result<u8, Error> {
    match code[0] & 0x0f {
        0x04 => Ok(code[1]),
        0x05 => Ok(emu.direct_read(code[1])),
        0x06 | 0x07 => {
            let addr = emu.register_read(code[0] & 0x01);
            emu.indirect_read(addr)
        }
        n => Ok(emu.register_read(n - 0x08)),
    }
}

/// Writes the accumulator for an `A, operand` instruction family, keeping
/// the write pathway uniform (through `direct_write`, firing
/// `sfr_update(ACC)`) for every family except ADD/ADDC, which instead pass
/// `skip_acc_callback = true` to preserve the one documented legacy quirk
/// (see `DESIGN.md`).
pub fn write_acc(emu: &mut Emulator, value: u8, skip_acc_callback: bool) {
    if skip_acc_callback {
        emu.poke_acc_raw(value);
    } else {
        emu.direct_write(0x80 + crate::sfr::ACC, value);
    }
}
