use super::super::{Bus, Cpu};
use super::{pending, Interrupt};

impl Cpu {
    /// Pick the interrupt to dispatch now, if any.
    ///
    /// A halted CPU wakes as soon as a line is both requested and enabled,
    /// even with IME clear. The wake-up alone does not dispatch; that only
    /// happens while IME is set.
    pub(in crate::cpu) fn poll_pending_interrupt<B: Bus>(
        &mut self,
        bus: &mut B,
    ) -> Option<Interrupt> {
        let lines = pending(bus);
        if lines.is_empty() {
            return None;
        }

        if self.halted && !self.ime {
            log::trace!("GB CPU: HALT released with IME=0 (IE&IF=0x{:02X})", lines.bits());
            self.halted = false;
            return None;
        }

        if !self.ime {
            return None;
        }

        Interrupt::highest(lines)
    }
}
