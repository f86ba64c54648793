use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        // STOP is a 2-byte instruction; the second byte is padding. The
        // flat machine has no joypad wake-up line or speed switch, so STOP
        // otherwise behaves as a NOP.
        let _padding = self.fetch8(bus);
    }

    pub(in crate::cpu) fn exec_halt(&mut self) {
        self.halted = true;
    }

    /// Undefined opcodes run as NOPs. Each one is reported the first time
    /// it executes.
    pub(in crate::cpu) fn exec_undefined(&mut self, opcode: u8) {
        let word = &mut self.undefined_reported[usize::from(opcode >> 6)];
        let bit = 1u64 << (opcode & 0x3F);
        if *word & bit != 0 {
            return;
        }
        *word |= bit;
        log::warn!(
            "GB CPU: undefined opcode 0x{opcode:02X} at PC=0x{pc:04X} executed as NOP",
            pc = self.regs.pc.wrapping_sub(1),
        );
    }

    pub(in crate::cpu) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_armed = false;
    }

    pub(in crate::cpu) fn exec_ei(&mut self) {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
    }
}
