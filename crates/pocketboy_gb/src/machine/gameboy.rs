use anyhow::{Context, Result};

use crate::cpu::Cpu;
use crate::trace::{TraceEntry, TraceSink};
use crate::CYCLES_PER_FRAME;

use super::{CartridgeHeader, FlatMemory};

/// Emulation session.
///
/// Owns the CPU core, the flat memory it runs against and an optional trace
/// sink. This is the entry point used by the `pocketboy` binary.
pub struct GameBoy {
    pub cpu: Cpu,
    pub memory: FlatMemory,
    header: Option<CartridgeHeader>,
    trace: Option<Box<dyn TraceSink>>,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    /// Power-on machine with empty memory.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            memory: FlatMemory::new(),
            header: None,
            trace: None,
        }
    }

    /// Build a session around a ROM image.
    ///
    /// On failure no session is returned, so nothing can step a machine
    /// with a missing or truncated ROM.
    pub fn from_rom(rom: &[u8]) -> Result<Self> {
        let mut gb = Self::new();
        gb.load_rom(rom).context("failed to load cartridge")?;
        Ok(gb)
    }

    /// Load a ROM image into the cartridge area and power-cycle the
    /// machine around it.
    ///
    /// A rejected image leaves the session as it was.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<&CartridgeHeader> {
        let header = self.memory.load_rom(rom)?;
        log::info!(
            "loaded cartridge \"{}\" ({} bytes, type 0x{:02X}, rom size code 0x{:02X}, checksum {})",
            header.title,
            rom.len(),
            header.cartridge_type,
            header.rom_size_code,
            if header.checksum_valid { "ok" } else { "BAD" },
        );
        self.reset();
        Ok(&*self.header.insert(header))
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.header.as_ref()
    }

    /// Attach a sink that receives a register snapshot before every step.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.trace = Some(sink);
    }

    pub fn clear_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.trace.take()
    }

    pub fn has_trace_sink(&self) -> bool {
        self.trace.is_some()
    }

    /// Run one CPU step and return the T-cycles it took.
    pub fn step(&mut self) -> u32 {
        if let Some(sink) = self.trace.as_mut() {
            sink.record(&TraceEntry::capture(&self.cpu));
            if !sink.is_active() {
                self.trace = None;
            }
        }
        self.cpu.step(&mut self.memory)
    }

    /// Step the machine for one frame worth of time (70224 T-cycles).
    ///
    /// Returns the cycles actually consumed, which may overshoot the frame
    /// by the tail of the last instruction.
    pub fn step_frame(&mut self) -> u32 {
        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            cycles = cycles.saturating_add(self.step());
        }
        cycles
    }

    /// Bytes the cartridge has sent over the serial port.
    pub fn serial_output(&self) -> &[u8] {
        self.memory.serial_output()
    }

    /// Return to the power-on state, keeping the loaded ROM.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.memory.reset();
    }
}
