mod cartridge;
mod gameboy;
mod memory;

pub use cartridge::{CartridgeHeader, HEADER_END};
pub use gameboy::GameBoy;
pub use memory::FlatMemory;

/// Total addressable memory for the Game Boy (64 KiB).
///
/// The core sees a flat array; there is no banking, echo RAM mirroring or
/// access restriction behind it.
pub const MEMORY_SIZE: usize = 0x10000;

/// Largest ROM image mapped into the flat space (0x0000-0x7FFF).
pub const ROM_WINDOW: usize = 0x8000;
