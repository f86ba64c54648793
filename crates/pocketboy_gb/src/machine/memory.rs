use anyhow::Result;

use super::{CartridgeHeader, MEMORY_SIZE, ROM_WINDOW};
use crate::cpu::Bus;
use crate::timer::DIV_ADDR;

const SB_ADDR: u16 = 0xFF01;
const SC_ADDR: u16 = 0xFF02;

/// Flat 64 KiB memory behind the CPU.
///
/// Almost every address is plain storage. The exceptions are the ones the
/// core itself relies on: CPU writes to DIV reset it, and starting a serial
/// transfer on SC captures the byte in SB so test ROMs that print through
/// the link port can be observed.
#[derive(Clone)]
pub struct FlatMemory {
    memory: [u8; MEMORY_SIZE],
    serial_output: Vec<u8>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        let mut mem = Self {
            memory: [0; MEMORY_SIZE],
            serial_output: Vec::new(),
        };
        mem.apply_dmg_initial_io_state();
        mem
    }

    /// Copy a ROM image into 0x0000-0x7FFF and return its parsed header.
    ///
    /// Images shorter than the header are rejected and leave memory
    /// untouched. Only the first 32 KiB of larger images is mapped; the
    /// rest of the window past a short image reads as zero.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<CartridgeHeader> {
        let header = CartridgeHeader::parse(rom)?;

        if rom.len() > ROM_WINDOW {
            log::warn!(
                "ROM is {} bytes; only the first {} bytes are mapped (no bank switching)",
                rom.len(),
                ROM_WINDOW
            );
        }
        if !header.is_rom_only() {
            log::warn!(
                "cartridge type 0x{:02X} uses a memory controller; running it as a flat ROM",
                header.cartridge_type
            );
        }

        let len = rom.len().min(ROM_WINDOW);
        self.memory[..len].copy_from_slice(&rom[..len]);
        self.memory[len..ROM_WINDOW].fill(0);
        Ok(header)
    }

    /// Restore power-on contents outside the ROM window.
    pub fn reset(&mut self) {
        self.memory[ROM_WINDOW..].fill(0);
        self.serial_output.clear();
        self.apply_dmg_initial_io_state();
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial_output
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.serial_output)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.memory
    }

    /// Initialize I/O registers to match the DMG power-on state.
    fn apply_dmg_initial_io_state(&mut self) {
        // Divider / timer.
        self.memory[0xFF04] = 0x00;
        self.memory[0xFF05] = 0x00; // TIMA
        self.memory[0xFF06] = 0x00; // TMA
        self.memory[0xFF07] = 0x00; // TAC

        // Interrupt flags and enable. IF's upper 3 bits read as 1 and
        // VBlank is already requested when the boot ROM hands over.
        self.memory[0xFF0F] = 0xE1;
        self.memory[0xFFFF] = 0x00;

        // Sound registers.
        self.memory[0xFF10] = 0x80;
        self.memory[0xFF11] = 0xBF;
        self.memory[0xFF12] = 0xF3;
        self.memory[0xFF14] = 0xBF;
        self.memory[0xFF16] = 0x3F;
        self.memory[0xFF17] = 0x00;
        self.memory[0xFF19] = 0xBF;
        self.memory[0xFF1A] = 0x7F;
        self.memory[0xFF1B] = 0xFF;
        self.memory[0xFF1C] = 0x9F;
        self.memory[0xFF1E] = 0xBF;
        self.memory[0xFF20] = 0xFF;
        self.memory[0xFF21] = 0x00;
        self.memory[0xFF22] = 0x00;
        self.memory[0xFF23] = 0xBF;
        self.memory[0xFF24] = 0x77;
        self.memory[0xFF25] = 0xF3;
        self.memory[0xFF26] = 0xF1;

        // PPU registers.
        self.memory[0xFF40] = 0x91; // LCDC
        self.memory[0xFF42] = 0x00; // SCY
        self.memory[0xFF43] = 0x00; // SCX
        self.memory[0xFF45] = 0x00; // LYC
        self.memory[0xFF47] = 0xFC; // BGP
        self.memory[0xFF48] = 0xFF; // OBP0
        self.memory[0xFF49] = 0xFF; // OBP1
        self.memory[0xFF4A] = 0x00; // WY
        self.memory[0xFF4B] = 0x00; // WX
    }
}

impl Bus for FlatMemory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            // Any CPU write clears the divider.
            DIV_ADDR => self.memory[addr as usize] = 0,
            SC_ADDR => {
                self.memory[addr as usize] = value;
                // Internal clock and start bit set: the transfer completes
                // immediately with no link partner.
                if value & 0x81 == 0x81 {
                    let byte = self.memory[SB_ADDR as usize];
                    self.serial_output.push(byte);
                    self.memory[addr as usize] = value & !0x80;
                }
            }
            _ => self.memory[addr as usize] = value,
        }
    }

    #[inline]
    fn store(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}
