//! The 256-entry opcode dispatch table. Built once as a `static` array
//! literal — there is no runtime construction step, and nothing in this
//! crate ever mutates it after compilation.
//!
//! Grounded on `original_source/src/instr.c`'s `_emu51_instr_table`: same
//! shape (opcode -> byte length, cycle count, handler function), extended
//! from the subset that file implements to the full MCS-51 opcode map
//! (see `SPEC_FULL.md` section 2).

use crate::instr;
use crate::{Emulator, Error};

pub type HandlerFn = fn(&mut Emulator, &[u8]) -> Result<(), Error>;

#[derive(Clone, Copy)]
pub struct InstrEntry {
    /// Total instruction length in bytes, including the opcode. `0` marks
    /// a reserved/unimplemented opcode.
    pub bytes: u8,
    /// Machine cycle count, reported back to the caller by `step`.
    pub cycles: u8,
    pub handler: HandlerFn,
}

const fn e(bytes: u8, cycles: u8, handler: HandlerFn) -> InstrEntry {
    InstrEntry {
        bytes,
        cycles,
        handler,
    }
}

const U: InstrEntry = InstrEntry {
    bytes: 0,
    cycles: 0,
    handler: instr::unimplemented,
};

use instr::arithmetic as ar;
use instr::bit_ops as bo;
use instr::control_flow as cf;
use instr::data_movement as dm;
use instr::logical as lg;

pub static TABLE: [InstrEntry; 256] = [
    // 0x00
    e(1, 1, instr::nop),
    e(2, 2, cf::ajmp),
    e(3, 2, cf::ljmp),
    e(1, 1, lg::rr),
    e(1, 1, ar::inc),
    e(2, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    e(1, 1, ar::inc),
    // 0x10
    e(3, 2, cf::jbc),
    e(2, 2, cf::acall),
    e(3, 2, cf::lcall),
    e(1, 1, lg::rrc),
    e(1, 1, ar::dec),
    e(2, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    e(1, 1, ar::dec),
    // 0x20
    e(3, 2, cf::jb),
    e(2, 2, cf::ajmp),
    e(1, 2, cf::ret),
    e(1, 1, lg::rl),
    e(2, 1, ar::add),
    e(2, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    e(1, 1, ar::add),
    // 0x30
    e(3, 2, cf::jnb),
    e(2, 2, cf::acall),
    e(1, 2, cf::reti),
    e(1, 1, lg::rlc),
    e(2, 1, ar::addc),
    e(2, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    e(1, 1, ar::addc),
    // 0x40
    e(2, 2, cf::jc),
    e(2, 2, cf::ajmp),
    e(2, 1, lg::orl_direct_a),
    e(3, 2, lg::orl_direct_imm),
    e(2, 1, lg::orl_a),
    e(2, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    e(1, 1, lg::orl_a),
    // 0x50
    e(2, 2, cf::jnc),
    e(2, 2, cf::acall),
    e(2, 1, lg::anl_direct_a),
    e(3, 2, lg::anl_direct_imm),
    e(2, 1, lg::anl_a),
    e(2, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    e(1, 1, lg::anl_a),
    // 0x60
    e(2, 2, cf::jz),
    e(2, 2, cf::ajmp),
    e(2, 1, lg::xrl_direct_a),
    e(3, 2, lg::xrl_direct_imm),
    e(2, 1, lg::xrl_a),
    e(2, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    e(1, 1, lg::xrl_a),
    // 0x70
    e(2, 2, cf::jnz),
    e(2, 2, cf::acall),
    e(2, 2, bo::orl_c_bit),
    e(1, 2, cf::jmp_a_dptr),
    e(2, 1, dm::mov_a_imm),
    e(3, 2, dm::mov_direct_imm),
    e(2, 1, dm::mov_indirect_imm),
    e(2, 1, dm::mov_indirect_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    e(2, 1, dm::mov_rn_imm),
    // 0x80
    e(2, 2, cf::sjmp),
    e(2, 2, cf::ajmp),
    e(2, 2, bo::anl_c_bit),
    e(1, 2, dm::movc_pc),
    e(1, 4, ar::div),
    e(3, 2, dm::mov_direct_direct),
    e(2, 2, dm::mov_direct_indirect),
    e(2, 2, dm::mov_direct_indirect),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    e(2, 2, dm::mov_direct_rn),
    // 0x90
    e(3, 2, dm::mov_dptr_imm),
    e(2, 2, cf::acall),
    e(2, 1, dm::mov_bit_c),
    e(1, 2, dm::movc_dptr),
    e(2, 1, ar::subb),
    e(2, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    e(1, 1, ar::subb),
    // 0xA0
    e(2, 2, bo::orl_c_not_bit),
    e(2, 2, cf::ajmp),
    e(2, 1, dm::mov_c_bit),
    e(1, 2, ar::inc_dptr),
    e(1, 4, ar::mul),
    U,
    e(2, 2, dm::mov_indirect_direct),
    e(2, 2, dm::mov_indirect_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    e(2, 2, dm::mov_rn_direct),
    // 0xB0
    e(2, 2, bo::anl_c_not_bit),
    e(2, 2, cf::acall),
    e(2, 1, bo::cpl_bit),
    e(1, 1, bo::cpl_c),
    e(3, 2, cf::cjne_a_imm),
    e(3, 2, cf::cjne_a_direct),
    e(3, 2, cf::cjne_indirect_imm),
    e(3, 2, cf::cjne_indirect_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    e(3, 2, cf::cjne_rn_imm),
    // 0xC0
    e(2, 2, dm::push),
    e(2, 2, cf::ajmp),
    e(2, 1, bo::clr_bit),
    e(1, 1, bo::clr_c),
    e(1, 1, lg::swap),
    e(2, 1, dm::xch_a_direct),
    e(1, 1, dm::xch_a_indirect),
    e(1, 1, dm::xch_a_indirect),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    e(1, 1, dm::xch_a_rn),
    // 0xD0
    e(2, 2, dm::pop),
    e(2, 2, cf::acall),
    e(2, 1, bo::setb_bit),
    e(1, 1, bo::setb_c),
    e(1, 1, ar::da),
    e(3, 2, cf::djnz_direct),
    e(1, 1, dm::xchd),
    e(1, 1, dm::xchd),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    e(2, 2, cf::djnz_rn),
    // 0xE0
    e(1, 2, dm::movx_a_dptr),
    e(2, 2, cf::ajmp),
    e(1, 2, dm::movx_a_ri),
    e(1, 2, dm::movx_a_ri),
    e(1, 1, lg::clr_a),
    e(2, 1, dm::mov_a_direct),
    e(1, 1, dm::mov_a_indirect),
    e(1, 1, dm::mov_a_indirect),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    e(1, 1, dm::mov_a_rn),
    // 0xF0
    e(1, 2, dm::movx_dptr_a),
    e(2, 2, cf::acall),
    e(1, 2, dm::movx_ri_a),
    e(1, 2, dm::movx_ri_a),
    e(1, 1, lg::cpl_a),
    e(2, 1, dm::mov_direct_a),
    e(1, 1, dm::mov_indirect_a),
    e(1, 1, dm::mov_indirect_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
    e(1, 1, dm::mov_rn_a),
];
