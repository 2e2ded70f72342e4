//! Instruction-accurate Intel MCS-51 (8051/8052) CPU core.
//!
//! Fetches, decodes, and executes one instruction per [`Emulator::step`]
//! call, reporting the instruction's machine cycle count back to the
//! caller rather than driving any notion of wall-clock time itself. The
//! engine owns no peripherals (timers, serial port, interrupt
//! controller): it is the addressing substrate, the 256-entry opcode
//! table, and the per-opcode handlers, and nothing else.
//!
//! Grounded on `cpu-6502`'s shape within the teacher workspace (a single
//! struct holding registers and buffers, a giant opcode-dispatch `match`,
//! flag/addressing helpers split into their own modules) and on
//! `libemu51`, the C library this core's addressing and callback
//! semantics are modeled after.

mod error;
mod flags;
mod instr;
mod memory;
mod observer;
mod sfr;
mod table;

pub use error::{BuildError, Error};
pub use observer::{NoopObserver, Observer};

use std::any::Any;

/// An Intel MCS-51 CPU core.
///
/// Constructed through [`EmulatorBuilder`], which validates buffer sizes
/// before any `Emulator` exists. All memory is caller-owned: this struct
/// does not allocate after construction.
pub struct Emulator {
    pmem: Vec<u8>,
    iram_lower: Vec<u8>,
    iram_upper: Option<Vec<u8>>,
    sfr: Vec<u8>,
    xram: Option<Vec<u8>>,
    pc: u16,
    observer: Box<dyn Observer>,
    userdata: Option<Box<dyn Any>>,
}

impl Emulator {
    /// Current program counter.
    #[must_use]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the program counter directly. Used by control-transfer
    /// handlers (jumps, calls, returns); not part of the normal
    /// increment-by-instruction-length path, which `step` drives itself.
    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    /// Reads a single byte of program memory, or `None` if `addr` is out
    /// of range. Used by MOVC; out-of-range PMEM anywhere else is caught
    /// by `step` itself before a handler ever runs.
    #[must_use]
    pub fn pmem_byte(&self, addr: u16) -> Option<u8> {
        self.pmem.get(addr as usize).copied()
    }

    /// Number of bytes in program memory.
    #[must_use]
    pub fn pmem_len(&self) -> usize {
        self.pmem.len()
    }

    /// Reference to the opaque userdata set on this emulator, if any and
    /// if it is of type `T`. The engine never interprets this value
    /// itself; it exists purely so an embedder's observer can recover
    /// context it attached at construction time.
    #[must_use]
    pub fn userdata<T: 'static>(&self) -> Option<&T> {
        self.userdata.as_ref().and_then(|u| u.downcast_ref())
    }

    /// Mutable reference to the opaque userdata, if any and if it is of
    /// type `T`.
    pub fn userdata_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.userdata.as_mut().and_then(|u| u.downcast_mut())
    }

    /// Resets the emulator: `PC <- 0`, `SFR::SP <- 0x07`. Does not fire
    /// any observer callback (reset is not a "write" from the bus's point
    /// of view, it is the engine coming back to its power-on state).
    pub fn reset(&mut self) {
        self.pc = 0;
        self.sfr[sfr::SP as usize] = 0x07;
    }

    /// Fetches, decodes, and executes exactly one instruction, returning
    /// its machine cycle count.
    ///
    /// Step contract:
    /// 1. `PC` must be within program memory, or this returns
    ///    [`Error::PmemOutOfRange`].
    /// 2. The opcode at `PC` is looked up in the dispatch table.
    /// 3. An entry with `bytes == 0` (reserved/unimplemented opcode)
    ///    returns [`Error::UnimplementedOpcode`] without touching `PC`.
    /// 4. If the instruction's full byte length would run past the end
    ///    of program memory, this returns [`Error::PmemOutOfRange`]
    ///    without touching `PC`.
    /// 5. `PC` is advanced past the instruction *before* the handler
    ///    runs, so relative jumps and `MOVC A,@A+PC` see the address of
    ///    the following instruction, matching real hardware.
    /// 6. If the handler returns an error, `PC` is restored to the value
    ///    it had when `step` was called, so a failed step leaves no
    ///    partial state change visible through `PC`.
    /// 7. On success, the instruction's cycle count is returned.
    pub fn step(&mut self) -> Result<u32, Error> {
        let pc_at_entry = self.pc;

        if (self.pc as usize) >= self.pmem.len() {
            return Err(Error::PmemOutOfRange);
        }

        let opcode = self.pmem[self.pc as usize];
        let entry = &table::TABLE[opcode as usize];

        if entry.bytes == 0 {
            return Err(Error::UnimplementedOpcode(opcode));
        }

        let end = self.pc as usize + entry.bytes as usize;
        if end > self.pmem.len() {
            return Err(Error::PmemOutOfRange);
        }

        let mut code = [0u8; 3];
        code[..entry.bytes as usize].copy_from_slice(&self.pmem[self.pc as usize..end]);

        self.pc = end as u16;
        let handler = entry.handler;
        let cycles = entry.cycles;

        match handler(self, &code[..entry.bytes as usize]) {
            Ok(()) => Ok(u32::from(cycles)),
            Err(err) => {
                self.pc = pc_at_entry;
                Err(err)
            }
        }
    }
}

/// Validates caller-supplied buffers and assembles an [`Emulator`].
///
/// Grounded on the "validate everything before the struct exists" shape a
/// builder gives over a fallible constructor: buffer-length mistakes are
/// reported as [`BuildError`] up front rather than surfacing as confusing
/// out-of-range errors the first time a program touches the wrong
/// address.
pub struct EmulatorBuilder {
    pmem: Vec<u8>,
    iram_lower: Vec<u8>,
    iram_upper: Option<Vec<u8>>,
    sfr: Vec<u8>,
    xram: Option<Vec<u8>>,
    observer: Box<dyn Observer>,
    userdata: Option<Box<dyn Any>>,
}

impl EmulatorBuilder {
    /// Starts a builder with the three buffers every emulator needs:
    /// program memory, internal RAM lower, and the SFR window.
    #[must_use]
    pub fn new(pmem: Vec<u8>, iram_lower: Vec<u8>, sfr: Vec<u8>) -> Self {
        EmulatorBuilder {
            pmem,
            iram_lower,
            iram_upper: None,
            sfr,
            xram: None,
            observer: Box::new(NoopObserver),
            userdata: None,
        }
    }

    /// Attaches internal RAM upper (8052-style 256-byte internal RAM).
    /// Without this, indirect/register-bank accesses to addresses
    /// `>= 0x80` fail with [`Error::IramOutOfRange`].
    #[must_use]
    pub fn iram_upper(mut self, iram_upper: Vec<u8>) -> Self {
        self.iram_upper = Some(iram_upper);
        self
    }

    /// Attaches external RAM, addressable only through `MOVX`.
    #[must_use]
    pub fn xram(mut self, xram: Vec<u8>) -> Self {
        self.xram = Some(xram);
        self
    }

    /// Attaches an observer. Defaults to [`NoopObserver`] if never
    /// called.
    #[must_use]
    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Attaches opaque userdata the engine never inspects, retrievable
    /// later through [`Emulator::userdata`].
    #[must_use]
    pub fn userdata(mut self, userdata: impl Any) -> Self {
        self.userdata = Some(Box::new(userdata));
        self
    }

    /// Validates every buffer and assembles the `Emulator`, or reports
    /// the first [`BuildError`] found.
    pub fn build(self) -> Result<Emulator, BuildError> {
        if !matches!(self.pmem.len(), 1024..=65536) || !self.pmem.len().is_power_of_two() {
            return Err(BuildError::InvalidPmemLen);
        }
        if self.iram_lower.len() != 128 {
            return Err(BuildError::InvalidIramLowerLen);
        }
        if let Some(upper) = &self.iram_upper {
            if upper.len() != 128 {
                return Err(BuildError::InvalidIramUpperLen);
            }
        }
        if self.sfr.len() != 128 {
            return Err(BuildError::InvalidSfrLen);
        }
        if let Some(xram) = &self.xram {
            if !matches!(xram.len(), 1024..=65536) || !xram.len().is_power_of_two() {
                return Err(BuildError::InvalidXramLen);
            }
        }

        Ok(Emulator {
            pmem: self.pmem,
            iram_lower: self.iram_lower,
            iram_upper: self.iram_upper,
            sfr: self.sfr,
            xram: self.xram,
            pc: 0,
            observer: self.observer,
            userdata: self.userdata,
        })
    }
}
