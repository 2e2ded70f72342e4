//! Named indices into the 128-byte SFR buffer.
//!
//! Mirrors `enum emu51_sfr_index` from the C reference this core is modeled
//! after: every SFR the engine itself touches (ports, stack pointer, data
//! pointer, PSW, ACC, B) gets a name; unnamed indices are still valid SFR
//! addresses a program can read/write through `direct_read`/`direct_write`.

pub const P0: u8 = 0x00;
pub const SP: u8 = 0x01;
pub const DPL: u8 = 0x02;
pub const DPH: u8 = 0x03;
pub const PCON: u8 = 0x07;
pub const TCON: u8 = 0x08;
pub const TMOD: u8 = 0x09;
pub const TL0: u8 = 0x0A;
pub const TL1: u8 = 0x0B;
pub const TH0: u8 = 0x0C;
pub const TH1: u8 = 0x0D;
pub const P1: u8 = 0x10;
pub const SCON: u8 = 0x18;
pub const SBUF: u8 = 0x19;
pub const P2: u8 = 0x20;
pub const IE: u8 = 0x28;
pub const P3: u8 = 0x30;
pub const IP: u8 = 0x38;
pub const PSW: u8 = 0x50;
pub const ACC: u8 = 0x60;
pub const B: u8 = 0x70;
