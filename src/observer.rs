//! Mutation-notification callbacks.
//!
//! The C reference this core is modeled after passes a struct of nullable
//! function pointers; the idiomatic Rust rendering is a trait with default
//! no-op bodies, which gives every caller the "don't care about most of
//! these" behavior without a per-call null check anywhere in the hot path.

/// Notified of every state change an embedder might want to observe:
/// SFR writes, internal/external RAM writes, and port I/O.
///
/// All methods default to doing nothing; implement only the ones an
/// embedder cares about.
pub trait Observer {
    /// An SFR byte changed. `index` is relative to the SFR window
    /// (`direct_addr - 0x80`), matching `crate::sfr`'s constants.
    fn sfr_update(&mut self, index: u8, value: u8) {
        let _ = (index, value);
    }

    /// An internal RAM byte changed, addressed the same way `direct_read`/
    /// `indirect_read` address it (`0x00..=0xFF` across lower and upper).
    fn imem_update(&mut self, addr: u8, value: u8) {
        let _ = (addr, value);
    }

    /// An external RAM byte changed (`MOVX` write).
    fn xmem_update(&mut self, addr: u16, value: u8) {
        let _ = (addr, value);
    }

    /// A bit-addressable I/O port (`P0..=P3`) was written. `bitmask`
    /// indicates which bits of `value` are significant: `0xFF` for a
    /// byte-level port write. This engine does not implement the
    /// optional SFR bit-addressing extension (see `DESIGN.md`), so a
    /// single-bit mask never currently occurs, but the parameter is kept
    /// to match the documented callback shape.
    fn io_write(&mut self, port: u8, bitmask: u8, value: u8) {
        let _ = (port, bitmask, value);
    }

    /// A bit-addressable I/O port was read, with `bitmask` indicating
    /// which bits of the eventual value are significant (`0xFF` for a
    /// byte-level read). Returning `Some(v)` overrides the value read
    /// back from the SFR latch (modeling an input pin driven
    /// externally); returning `None` reads the latch as stored.
    fn io_read(&mut self, port: u8, bitmask: u8, latched: u8) -> Option<u8> {
        let _ = (port, bitmask, latched);
        None
    }
}

/// An [`Observer`] that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
