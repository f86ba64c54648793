use crate::cpu::{Bus, Cpu, R16, R8};

impl Cpu {
    pub(in crate::cpu) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.read_r8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_r8(bus, reg, result);
    }

    pub(in crate::cpu) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: R8) {
        let value = self.read_r8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_r8(bus, reg, result);
    }

    pub(in crate::cpu) fn exec_inc16(&mut self, reg: R16) {
        let value = self.regs.r16(reg).wrapping_add(1);
        self.regs.set_r16(reg, value);
    }

    pub(in crate::cpu) fn exec_dec16(&mut self, reg: R16) {
        let value = self.regs.r16(reg).wrapping_sub(1);
        self.regs.set_r16(reg, value);
    }
}
