//! ANL, ORL, XRL, CLR A, CPL A, rotates, SWAP. None of these touch `PSW`
//! except the carry-threading rotates RLC/RRC.

use crate::instr::operand::read_src;
use crate::{flags, sfr, Emulator, Error};

fn acc_addr() -> u8 {
    0x80 + sfr::ACC
}

type BinOp = fn(u8, u8) -> u8;

fn bitor(a: u8, b: u8) -> u8 {
    a | b
}
fn bitand(a: u8, b: u8) -> u8 {
    a & b
}
fn bitxor(a: u8, b: u8) -> u8 {
    a ^ b
}

/// `direct,A` form (ORL `0x42`, ANL `0x52`, XRL `0x62`).
fn direct_a(emu: &mut Emulator, code: &[u8], op: BinOp) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let v = emu.direct_read(code[1]);
    emu.direct_write(code[1], op(v, a));
    Ok(())
}

/// `direct,#data` form (ORL `0x43`, ANL `0x53`, XRL `0x63`).
fn direct_imm(emu: &mut Emulator, code: &[u8], op: BinOp) -> Result<(), Error> {
    let v = emu.direct_read(code[1]);
    emu.direct_write(code[1], op(v, code[2]));
    Ok(())
}

/// `A,operand` family (ORL `0x44..=0x4F`, ANL `0x54..=0x5F`, XRL
/// `0x64..=0x6F`).
fn a_operand(emu: &mut Emulator, code: &[u8], op: BinOp) -> Result<(), Error> {
    let operand = read_src(emu, code)?;
    let a = emu.direct_read(acc_addr());
    emu.direct_write(acc_addr(), op(a, operand));
    Ok(())
}

pub fn orl_direct_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    direct_a(emu, code, bitor)
}
pub fn orl_direct_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    direct_imm(emu, code, bitor)
}
pub fn orl_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    a_operand(emu, code, bitor)
}

pub fn anl_direct_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    direct_a(emu, code, bitand)
}
pub fn anl_direct_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    direct_imm(emu, code, bitand)
}
pub fn anl_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    a_operand(emu, code, bitand)
}

pub fn xrl_direct_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    direct_a(emu, code, bitxor)
}
pub fn xrl_direct_imm(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    direct_imm(emu, code, bitxor)
}
pub fn xrl_a(emu: &mut Emulator, code: &[u8]) -> Result<(), Error> {
    a_operand(emu, code, bitxor)
}

/// CLR A — opcode `0xE4`.
pub fn clr_a(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    emu.direct_write(acc_addr(), 0);
    Ok(())
}

/// CPL A — opcode `0xF4`.
pub fn cpl_a(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    emu.direct_write(acc_addr(), !a);
    Ok(())
}

/// SWAP A — opcode `0xC4`.
pub fn swap(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    emu.direct_write(acc_addr(), a.rotate_left(4));
    Ok(())
}

/// RR A — opcode `0x03`. Does not touch `PSW.C`.
pub fn rr(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    emu.direct_write(acc_addr(), a.rotate_right(1));
    Ok(())
}

/// RL A — opcode `0x23`. Does not touch `PSW.C`.
pub fn rl(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    emu.direct_write(acc_addr(), a.rotate_left(1));
    Ok(())
}

/// RRC A — opcode `0x13`. Rotates through `PSW.C`.
pub fn rrc(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let psw = emu.direct_read(0x80 + sfr::PSW);
    let carry_in = flags::is_set(psw, flags::C);
    let carry_out = a & 0x01 != 0;
    let result = (a >> 1) | (u8::from(carry_in) << 7);
    emu.direct_write(acc_addr(), result);
    emu.direct_write(0x80 + sfr::PSW, flags::set(psw, flags::C, carry_out));
    Ok(())
}

/// RLC A — opcode `0x33`. Rotates through `PSW.C`.
pub fn rlc(emu: &mut Emulator, _code: &[u8]) -> Result<(), Error> {
    let a = emu.direct_read(acc_addr());
    let psw = emu.direct_read(0x80 + sfr::PSW);
    let carry_in = flags::is_set(psw, flags::C);
    let carry_out = a & 0x80 != 0;
    let result = (a << 1) | u8::from(carry_in);
    emu.direct_write(acc_addr(), result);
    emu.direct_write(0x80 + sfr::PSW, flags::set(psw, flags::C, carry_out));
    Ok(())
}
