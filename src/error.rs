use std::fmt;

/// Runtime faults raised while stepping the emulator.
///
/// Distinct from [`crate::BuildError`]: these describe a program doing
/// something out of range at execution time, not a caller misconfiguring
/// the emulator's buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Program counter (or a multi-byte instruction spanning it) fell
    /// outside the bounds of program memory.
    PmemOutOfRange,
    /// An indirect or register-bank access touched the upper internal RAM
    /// region on an emulator built without `iram_upper`.
    IramOutOfRange,
    /// A bit-addressable operand named a bit address with no backing byte
    /// (bit address >= 128, the optional SFR bit-addressing extension).
    BitOutOfRange,
    /// The opcode has no defined handler.
    UnimplementedOpcode(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PmemOutOfRange => write!(f, "program memory access out of range"),
            Error::IramOutOfRange => write!(f, "internal RAM access out of range"),
            Error::BitOutOfRange => write!(f, "bit address out of range"),
            Error::UnimplementedOpcode(op) => write!(f, "unimplemented opcode 0x{op:02X}"),
        }
    }
}

impl std::error::Error for Error {}

/// Construction-time configuration faults raised by [`crate::EmulatorBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// `pmem` length must be a power of two in `1024..=65536`.
    InvalidPmemLen,
    /// `iram_lower` must be exactly 128 bytes.
    InvalidIramLowerLen,
    /// `iram_upper`, if present, must be exactly 128 bytes.
    InvalidIramUpperLen,
    /// `sfr` must be exactly 128 bytes.
    InvalidSfrLen,
    /// `xram`, if present, must be a power of two in `1024..=65536`.
    InvalidXramLen,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidPmemLen => {
                write!(f, "pmem length must be a power of two in 1024..=65536")
            }
            BuildError::InvalidIramLowerLen => write!(f, "iram_lower must be exactly 128 bytes"),
            BuildError::InvalidIramUpperLen => write!(f, "iram_upper must be exactly 128 bytes"),
            BuildError::InvalidSfrLen => write!(f, "sfr must be exactly 128 bytes"),
            BuildError::InvalidXramLen => {
                write!(f, "xram length must be a power of two in 1024..=65536")
            }
        }
    }
}

impl std::error::Error for BuildError {}
