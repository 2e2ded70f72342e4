//! MOV (all addressing-pair forms), MOVC, MOVX, PUSH, POP, XCH, XCHD.
//!
//! None of these touch `PSW`; that is the defining trait of the data
//! movement family on real MCS-51 silicon.

use crate::{sfr, Emulator, Error};

fn acc_addr() -> u8 {
    0x80 + sfr::ACC
}

fn rn_of(opcode: u8) -> u8 {
    opcode & 0x07
}

fn ri_addr(emu: &mut Emulator, opcode: u8) -> u8 {
    emu.register_read(opcode & 0x01)
}

/// MOV A,#data — opcode `0x74`.
pub fn mov_a_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    emu.direct_write(acc_addr(), code[1]);
    Ok(())
}

/// MOV direct,#data — opcode `0x75`.
pub fn mov_direct_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    emu.direct_write(code[1], code[2]);
    Ok(())
}

/// MOV @Ri,#data — opcodes `0x76..=0x77`.
pub fn mov_indirect_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    emu.indirect_write(addr, code[1])
}

/// MOV Rn,#data — opcodes `0x78..=0x7F`.
pub fn mov_rn_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    emu.register_write(rn_of(code[0]), code[1]);
    Ok(())
}

/// MOV direct,direct — opcode `0x85`. The one MCS-51 encoding with
/// reversed operand order: `code[1]` is the *source* address, `code[2]`
/// the destination.
pub fn mov_direct_direct(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.direct_read(code[1]);
    emu.direct_write(code[2], v);
    Ok(())
}

/// MOV direct,@Ri — opcodes `0x86..=0x87`.
pub fn mov_direct_indirect(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    let v = emu.indirect_read(addr)?;
    emu.direct_write(code[1], v);
    Ok(())
}

/// MOV direct,Rn — opcodes `0x88..=0x8F`.
pub fn mov_direct_rn(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.register_read(rn_of(code[0]));
    emu.direct_write(code[1], v);
    Ok(())
}

/// MOV DPTR,#data16 — opcode `0x90`. `code[1]` is the high byte,
/// `code[2]` the low byte.
pub fn mov_dptr_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    emu.set_dptr(u16::from(code[1]) << 8 | u16::from(code[2]));
    Ok(())
}

/// MOV bit,C — opcode `0x92`.
pub fn mov_bit_c(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let psw = emu.direct_read(0x80 + sfr::PSW);
    let c = crate::flags::is_set(psw, crate::flags::C);
    emu.bit_write(code[1], c)
}

/// MOV C,bit — opcode `0xA2`.
pub fn mov_c_bit(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let bit = emu.bit_read(code[1])?;
    let psw = emu.direct_read(0x80 + sfr::PSW);
    emu.direct_write(0x80 + sfr::PSW, crate::flags::set(psw, crate::flags::C, bit));
    Ok(())
}

/// MOV @Ri,direct — opcodes `0xA6..=0xA7`.
pub fn mov_indirect_direct(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    let v = emu.direct_read(code[1]);
    emu.indirect_write(addr, v)
}

/// MOV Rn,direct — opcodes `0xA8..=0xAF`.
pub fn mov_rn_direct(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.direct_read(code[1]);
    emu.register_write(rn_of(code[0]), v);
    Ok(())
}

/// MOV A,direct — opcode `0xE5`.
pub fn mov_a_direct(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.direct_read(code[1]);
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// MOV A,@Ri — opcodes `0xE6..=0xE7`.
pub fn mov_a_indirect(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    let v = emu.indirect_read(addr)?;
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// MOV A,Rn — opcodes `0xE8..=0xEF`.
pub fn mov_a_rn(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.register_read(rn_of(code[0]));
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// MOV direct,A — opcode `0xF5`.
pub fn mov_direct_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    emu.direct_write(code[1], a);
    Ok(())
}

/// MOV @Ri,A — opcodes `0xF6..=0xF7`.
pub fn mov_indirect_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    let a = emu.direct_read(acc_addr());
    emu.indirect_write(addr, a)
}

/// MOV Rn,A — opcodes `0xF8..=0xFF`.
pub fn mov_rn_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    emu.register_write(rn_of(code[0]), a);
    Ok(())
}

/// XCH A,direct — opcode `0xC5`.
pub fn xch_a_direct(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let v = emu.direct_read(code[1]);
    emu.direct_write(code[1], a);
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// XCH A,@Ri — opcodes `0xC6..=0xC7`.
pub fn xch_a_indirect(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    let a = emu.direct_read(acc_addr());
    let v = emu.indirect_read(addr)?;
    emu.indirect_write(addr, a)?;
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// XCH A,Rn — opcodes `0xC8..=0xCF`.
pub fn xch_a_rn(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let rn = rn_of(code[0]);
    let a = emu.direct_read(acc_addr());
    let v = emu.register_read(rn);
    emu.register_write(rn, a);
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// XCHD A,@Ri — opcodes `0xD6..=0xD7`. Exchanges only the low nibbles.
pub fn xchd(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = ri_addr(emu, code[0]);
    let a = emu.direct_read(acc_addr());
    let v = emu.indirect_read(addr)?;
    let new_a = (a & 0xF0) | (v & 0x0F);
    let new_v = (v & 0xF0) | (a & 0x0F);
    emu.direct_write(acc_addr(), new_a);
    emu.indirect_write(addr, new_v)?;
    Ok(())
}

/// PUSH direct — opcode `0xC0`.
pub fn push(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.direct_read(code[1]);
    emu.stack_push(v)
}

/// POP direct — opcode `0xD0`.
pub fn pop(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let v = emu.stack_pop()?;
    emu.direct_write(code[1], v);
    Ok(())
}

/// MOVC A,@A+PC — opcode `0x83`. `PC` here is the address of the
/// instruction *following* MOVC: the step driver has already advanced it
/// past this one-byte opcode before invoking the handler.
pub fn movc_pc(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let addr = emu.pc().wrapping_add(u16::from(a));
    movc_fetch(emu, addr)
}

/// MOVC A,@A+DPTR — opcode `0x93`.
pub fn movc_dptr(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let addr = emu.dptr().wrapping_add(u16::from(a));
    movc_fetch(emu, addr)
}

fn movc_fetch(emu: &mut Emulator, addr: u16) -> Result<(), Error> {
    let value = emu.pmem_byte(addr).ok_or(Error::PmemOutOfRange)?;
    // Unlike ADD/ADDC, MOVC writes the accumulator through the normal
    // path: the reference implementation fires `sfr_update(ACC)` here.
    emu.direct_write(acc_addr(), value);
    Ok(())
}

/// MOVX A,@DPTR — opcode `0xE0`.
pub fn movx_a_dptr(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let addr = emu.dptr();
    let v = emu.xram_read(addr);
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// MOVX A,@Ri — opcodes `0xE2..=0xE3`. `@Ri` addresses only the low 256
/// bytes of external RAM (see `DESIGN.md`).
pub fn movx_a_ri(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = u16::from(ri_addr(emu, code[0]));
    let v = emu.xram_read(addr);
    emu.direct_write(acc_addr(), v);
    Ok(())
}

/// MOVX @DPTR,A — opcode `0xF0`.
pub fn movx_dptr_a(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let addr = emu.dptr();
    let a = emu.direct_read(acc_addr());
    emu.xram_write(addr, a);
    Ok(())
}

/// MOVX @Ri,A — opcodes `0xF2..=0xF3`.
pub fn movx_ri_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    let addr = u16::from(ri_addr(emu, code[0]));
    let a = emu.direct_read(acc_addr());
    emu.xram_write(addr, a);
    Ok(())
}
