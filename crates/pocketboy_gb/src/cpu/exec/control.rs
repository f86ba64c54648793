use crate::cpu::decode::{
    Cond, CALL_TAKEN_EXTRA, JP_TAKEN_EXTRA, JR_TAKEN_EXTRA, RET_TAKEN_EXTRA,
};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. Returns the taken-branch extra cycles.
    pub(in crate::cpu) fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            JR_TAKEN_EXTRA
        } else {
            0
        }
    }

    /// JP cc,a16. The operand is always consumed, so a branch that is not
    /// taken resumes after the three instruction bytes.
    pub(in crate::cpu) fn jp_cond<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(cc) {
            self.regs.pc = addr;
            JP_TAKEN_EXTRA
        } else {
            0
        }
    }

    pub(in crate::cpu) fn exec_jp_a16<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.fetch16(bus);
    }

    /// CALL cc,a16. The pushed return address is the byte after the operand.
    pub(in crate::cpu) fn call_cond<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(cc) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            CALL_TAKEN_EXTRA
        } else {
            0
        }
    }

    pub(in crate::cpu) fn exec_call_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
    }

    pub(in crate::cpu) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        if self.condition(cc) {
            self.regs.pc = self.pop_u16(bus);
            RET_TAKEN_EXTRA
        } else {
            0
        }
    }

    pub(in crate::cpu) fn exec_ret<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
    }

    /// RETI re-enables IME immediately, unlike EI.
    pub(in crate::cpu) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
    }

    /// RST pushes the address of the next instruction and jumps to one of
    /// the eight vectors 0x00, 0x08, ..., 0x38.
    pub(in crate::cpu) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u16) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = vector;
    }
}
