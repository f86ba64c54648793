use super::super::Cpu;

impl Cpu {
    /// First half of the EI delay, run before the instruction body.
    ///
    /// An EI executed by the previous instruction is armed here so that
    /// the current instruction still runs with the old IME.
    #[inline]
    pub(in crate::cpu) fn arm_ime_delay(&mut self) {
        if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_armed = true;
        }
    }

    /// Second half of the EI delay, run after the instruction body.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_armed {
            self.ime_enable_armed = false;
            self.ime = true;
        }
    }
}
