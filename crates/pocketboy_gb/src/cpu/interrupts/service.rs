use super::super::{Bus, Cpu};
use super::{acknowledge_interrupt, enabled, requested, INTERRUPT_ENTRY_CYCLES};

impl Cpu {
    /// Dispatch the highest-priority pending interrupt if IME allows it.
    ///
    /// Entry clears the IF bit and IME, leaves HALT, pushes PC and jumps to
    /// the line's vector. Returns `Some(cycles)` when an interrupt was
    /// taken.
    pub fn service_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let irq = self.poll_pending_interrupt(bus)?;

        self.ime = false;
        self.halted = false;
        acknowledge_interrupt(bus, irq);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = irq.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            irq,
            irq.vector(),
            pc,
            self.regs.sp,
            requested(bus).bits(),
            enabled(bus).bits(),
        );

        Some(INTERRUPT_ENTRY_CYCLES)
    }
}
