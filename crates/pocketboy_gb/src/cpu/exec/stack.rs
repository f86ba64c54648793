use crate::cpu::{Bus, Cpu, Pair};

impl Cpu {
    pub(in crate::cpu) fn exec_push<B: Bus>(&mut self, bus: &mut B, pair: Pair) {
        let value = self.regs.pair(pair);
        self.push_u16(bus, value);
    }

    /// POP rr. `set_pair(AF)` masks F's low nibble.
    pub(in crate::cpu) fn exec_pop<B: Bus>(&mut self, bus: &mut B, pair: Pair) {
        let value = self.pop_u16(bus);
        self.regs.set_pair(pair, value);
    }
}
