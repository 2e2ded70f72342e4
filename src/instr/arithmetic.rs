//! ADD, ADDC, SUBB, INC, DEC, MUL, DIV, DA.

use crate::instr::operand::{read_src, write_acc};
use crate::{flags, sfr, Emulator, Error};

fn psw_addr() -> u8 {
    0x80 + sfr::PSW
}
fn acc_addr() -> u8 {
    0x80 + sfr::ACC
}

/// Shared ADD/ADDC core. `with_carry` selects whether `PSW.C` feeds in as
/// the addition's carry-in (ADDC) or not (ADD).
///
/// Preserves the reference implementation's documented quirk: the
/// accumulator is written without firing `sfr_update(ACC)`, while `PSW` is
/// always updated through the normal callback path (see `DESIGN.md`, open
/// question on the ADD/ACC callback asymmetry).
fn general_add(emu: &mut Emulator, code: &[u8], with_carry: bool) -> Result<(), Error> {
    let acc = emu.direct_read(acc_addr());
    let operand = read_src(emu, code)?;
    let psw = emu.direct_read(psw_addr());
    let carry_in: u16 = if with_carry && flags::is_set(psw, flags::C) {
        1
    } else {
        0
    };

    let sum16 = u16::from(acc) + u16::from(operand) + carry_in;
    let result = sum16 as u8;
    let carry6 = (acc & 0x7F) as u16 + (operand & 0x7F) as u16 + carry_in > 0x7F;
    let carry7 = sum16 > 0xFF;
    let ac = (acc & 0x0F) as u16 + (operand & 0x0F) as u16 + carry_in > 0x0F;

    let mut new_psw = flags::set(psw, flags::C, carry7);
    new_psw = flags::set(new_psw, flags::AC, ac);
    new_psw = flags::set(new_psw, flags::OV, carry6 != carry7);
    emu.direct_write(psw_addr(), new_psw);

    write_acc(emu, result, true);
    Ok(())
}

/// ADD A,operand — opcodes `0x24..=0x2F`.
pub fn add(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    general_add(emu, code, false)
}

/// ADDC A,operand — opcodes `0x34..=0x3F`.
pub fn addc(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    general_add(emu, code, true)
}

/// SUBB A,operand — opcodes `0x94..=0x9F`. Unlike ADD/ADDC this writes
/// `ACC` (and `PSW`) through the normal callback path; the reference never
/// implements SUBB, so there is no legacy quirk to preserve for it.
pub fn subb(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let acc = emu.direct_read(acc_addr());
    let operand = read_src(emu, code)?;
    let psw = emu.direct_read(psw_addr());
    let carry_in: i16 = if flags::is_set(psw, flags::C) { 1 } else { 0 };

    let diff = i16::from(acc) - i16::from(operand) - carry_in;
    let result = diff as u8;
    let borrow7 = diff < 0;
    let borrow6 =
        i16::from(acc & 0x7F) - i16::from(operand & 0x7F) - carry_in < 0;
    let borrow4 = i16::from(acc & 0x0F) - i16::from(operand & 0x0F) - carry_in < 0;

    let mut new_psw = flags::set(psw, flags::C, borrow7);
    new_psw = flags::set(new_psw, flags::AC, borrow4);
    new_psw = flags::set(new_psw, flags::OV, borrow6 != borrow7);
    emu.direct_write(psw_addr(), new_psw);
    emu.direct_write(acc_addr(), result);
    Ok(())
}

fn inc_dec_target(emu: &mut Emulator, code: &[u8], delta: i8) -> Result<(), Error> {
    match code[0] & 0x0f {
        0x04 => {
            let v = emu.direct_read(acc_addr());
            emu.direct_write(acc_addr(), v.wrapping_add_signed(delta));
        }
        0x05 => {
            let v = emu.direct_read(code[1]);
            emu.direct_write(code[1], v.wrapping_add_signed(delta));
        }
        0x06 | 0x07 => {
            let addr = emu.register_read(code[0] & 0x01);
            let v = emu.indirect_read(addr)?;
            emu.indirect_write(addr, v.wrapping_add_signed(delta))?;
        }
        n => {
            let rn = n - 0x08;
            let v = emu.register_read(rn);
            emu.register_write(rn, v.wrapping_add_signed(delta));
        }
    }
    Ok(())
}

/// INC — A/direct/@Ri/Rn, opcodes `0x04..=0x0F`. Never touches `PSW`.
pub fn inc(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    inc_dec_target(emu, code, 1)
}

/// DEC — A/direct/@Ri/Rn, opcodes `0x14..=0x1F`. Never touches `PSW`.
pub fn dec(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    inc_dec_target(emu, code, -1)
}

/// INC DPTR — opcode `0xA3`.
pub fn inc_dptr(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let dptr = emu.dptr().wrapping_add(1);
    emu.set_dptr(dptr);
    Ok(())
}

/// MUL AB — opcode `0xA4`. `{B,A} <- A * B`; `PSW.C` is always cleared,
/// `PSW.OV` is set iff the product overflows a single byte.
pub fn mul(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let b = emu.direct_read(0x80 + sfr::B);
    let product = u16::from(a) * u16::from(b);
    emu.direct_write(acc_addr(), product as u8);
    emu.direct_write(0x80 + sfr::B, (product >> 8) as u8);

    let psw = emu.direct_read(psw_addr());
    let mut new_psw = flags::set(psw, flags::C, false);
    new_psw = flags::set(new_psw, flags::OV, product > 0xFF);
    emu.direct_write(psw_addr(), new_psw);
    Ok(())
}

/// DIV AB — opcode `0x84`. `A <- A / B`, `B <- A % B`. `PSW.C` is always
/// cleared; `PSW.OV` is set iff `B` was zero, in which case `A` and `B`
/// are left unchanged (the hardware leaves them undefined; SPEC_FULL
/// defines "unchanged" rather than leaving a real undefined state).
pub fn div(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let b = emu.direct_read(0x80 + sfr::B);

    let psw = emu.direct_read(psw_addr());
    let mut new_psw = flags::set(psw, flags::C, false);
    if b == 0 {
        new_psw = flags::set(new_psw, flags::OV, true);
    } else {
        new_psw = flags::set(new_psw, flags::OV, false);
        emu.direct_write(acc_addr(), a / b);
        emu.direct_write(0x80 + sfr::B, a % b);
    }
    emu.direct_write(psw_addr(), new_psw);
    Ok(())
}

/// DA A (decimal adjust) — opcode `0xD4`. Standard two-step BCD
/// correction following an ADD/ADDC on packed-BCD operands.
pub fn da(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let mut acc = emu.direct_read(acc_addr());
    let psw = emu.direct_read(psw_addr());
    let mut carry = flags::is_set(psw, flags::C);
    let mut ac = flags::is_set(psw, flags::AC);

    if (acc & 0x0F) > 9 || ac {
        let (sum, overflowed) = acc.overflowing_add(6);
        acc = sum;
        ac = true;
        if overflowed {
            carry = true;
        }
    }
    if acc > 0x9F || carry {
        acc = acc.wrapping_add(0x60);
        carry = true;
    }

    let mut new_psw = flags::set(psw, flags::C, carry);
    new_psw = flags::set(new_psw, flags::AC, ac);
    emu.direct_write(psw_addr(), new_psw);
    emu.direct_write(acc_addr(), acc);
    Ok(())
}
