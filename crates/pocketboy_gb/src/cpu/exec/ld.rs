use crate::cpu::decode::Indirect;
use crate::cpu::{Bus, Cpu, R16, R8};

impl Cpu {
    pub(in crate::cpu) fn exec_ld_r8_r8<B: Bus>(&mut self, bus: &mut B, dst: R8, src: R8) {
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);
    }

    pub(in crate::cpu) fn exec_ld_r8_d8<B: Bus>(&mut self, bus: &mut B, dst: R8) {
        let value = self.fetch8(bus);
        self.write_r8(bus, dst, value);
    }

    pub(in crate::cpu) fn exec_ld_r16_d16<B: Bus>(&mut self, bus: &mut B, dst: R16) {
        let value = self.fetch16(bus);
        self.regs.set_r16(dst, value);
    }

    /// Resolve a register-indirect address, applying the HL post-increment
    /// or post-decrement.
    fn indirect_addr(&mut self, target: Indirect) -> u16 {
        match target {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, target: Indirect) {
        let addr = self.indirect_addr(target);
        bus.write8(addr, self.regs.a);
    }

    pub(in crate::cpu) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, source: Indirect) {
        let addr = self.indirect_addr(source);
        self.regs.a = bus.read8(addr);
    }

    pub(in crate::cpu) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let [hi, lo] = self.regs.sp.to_be_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    pub(in crate::cpu) fn exec_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | self.fetch8(bus) as u16;
        bus.write8(addr, self.regs.a);
    }

    pub(in crate::cpu) fn exec_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | self.fetch8(bus) as u16;
        self.regs.a = bus.read8(addr);
    }

    pub(in crate::cpu) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        bus.write8(0xFF00 | self.regs.c as u16, self.regs.a);
    }

    pub(in crate::cpu) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        self.regs.a = bus.read8(0xFF00 | self.regs.c as u16);
    }

    pub(in crate::cpu) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
    }

    pub(in crate::cpu) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }
}
