use crate::timer::Timer;

use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            cycles: 0,
            extended: false,
            ime_enable_pending: false,
            ime_enable_armed: false,
            undefined_reported: [0; 4],
            timer: Timer::new(),
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.halted = false;
        self.cycles = 0;
        self.extended = false;
        self.ime_enable_pending = false;
        self.ime_enable_armed = false;
        self.undefined_reported = [0; 4];
        self.timer = Timer::new();
        self.apply_dmg_boot_state();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.set_af(0x01B0); // Z, N, H, C = 1,0,1,1
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches the cartridge; software enables
        // interrupts via EI/RETI.
        self.ime = false;
    }
}
