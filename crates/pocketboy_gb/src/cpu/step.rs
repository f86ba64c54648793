use super::{Bus, Cpu};

/// T-cycles charged for each step spent in HALT.
pub const HALT_IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// One step is fetch, execute, cycle accounting, interrupt dispatch and
    /// timer update, in that order. While halted the fetch is skipped and
    /// the step costs a fixed idle slice, so interrupts and the timer still
    /// make progress. A dispatched interrupt adds its entry cost to the
    /// returned delta, and the timer sees the combined delta.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.arm_ime_delay();

        let mut cycles = if self.halted {
            HALT_IDLE_CYCLES
        } else {
            let opcode = self.fetch8(bus);
            self.exec_opcode(bus, opcode)
        };

        self.apply_ime_delay();

        if let Some(entry) = self.service_interrupts(bus) {
            cycles += entry;
        }

        self.cycles = self.cycles.wrapping_add(cycles as u64);
        self.timer.advance(bus, cycles);
        cycles
    }
}
