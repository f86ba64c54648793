pub mod cpu;
pub mod machine;
pub mod timer;
pub mod trace;

pub use cpu::{Bus, Cpu, Flag, Registers};
pub use machine::{CartridgeHeader, FlatMemory, GameBoy};
pub use trace::{LogTraceSink, TraceEntry, TraceSink, WriterTraceSink};

/// T-cycles in one DMG video frame (154 lines of 456 dots).
pub const CYCLES_PER_FRAME: u32 = 70_224;
