mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::decode::{Op, BASE_CYCLES, BASE_OPS};
use super::{Bus, Cpu};

impl Cpu {
    /// Decode and execute a single base opcode and return the number of
    /// T-cycles it took.
    ///
    /// The cost comes from `BASE_CYCLES`; conditional branches add their
    /// taken-path extra on top. 0xCB hands over to the extended table.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let base = BASE_CYCLES[opcode as usize] as u32;

        match BASE_OPS[opcode as usize] {
            Op::Prefix => return self.step_cb(bus),

            Op::Nop => {}
            Op::Stop => self.exec_stop(bus),
            Op::Halt => self.exec_halt(),
            Op::Undefined(byte) => self.exec_undefined(byte),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),

            // Loads.
            Op::LdR8R8 { dst, src } => self.exec_ld_r8_r8(bus, dst, src),
            Op::LdR8Imm(dst) => self.exec_ld_r8_d8(bus, dst),
            Op::LdR16Imm(dst) => self.exec_ld_r16_d16(bus, dst),
            Op::LdIndirectA(target) => self.exec_ld_indirect_a(bus, target),
            Op::LdAIndirect(source) => self.exec_ld_a_indirect(bus, source),
            Op::LdA16Sp => self.exec_ld_a16_sp(bus),
            Op::LdhA8A => self.exec_ldh_a8_a(bus),
            Op::LdhAA8 => self.exec_ldh_a_a8(bus),
            Op::LdhCA => self.exec_ldh_c_a(bus),
            Op::LdhAC => self.exec_ldh_a_c(bus),
            Op::LdA16A => self.exec_ld_a16_a(bus),
            Op::LdAA16 => self.exec_ld_a_a16(bus),
            Op::LdSpHl => self.regs.sp = self.regs.hl(),
            Op::LdHlSpImm => self.exec_ld_hl_sp_r8(bus),
            Op::Push(pair) => self.exec_push(bus, pair),
            Op::Pop(pair) => self.exec_pop(bus, pair),

            // Arithmetic and logic.
            Op::Inc8(reg) => self.exec_inc8(bus, reg),
            Op::Dec8(reg) => self.exec_dec8(bus, reg),
            Op::Inc16(reg) => self.exec_inc16(reg),
            Op::Dec16(reg) => self.exec_dec16(reg),
            Op::AddHl(reg) => self.alu_add16_hl(self.regs.r16(reg)),
            Op::AddSpImm => self.exec_add_sp_r8(bus),
            Op::Alu(op, src) => {
                let value = self.read_r8(bus, src);
                self.alu(op, value);
            }
            Op::AluImm(op) => {
                let value = self.fetch8(bus);
                self.alu(op, value);
            }
            Op::RotateA(kind) => self.alu_rotate_a(kind),
            Op::Daa => self.alu_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            // Control flow.
            Op::Jp => self.exec_jp_a16(bus),
            Op::JpHl => self.regs.pc = self.regs.hl(),
            Op::Jr => {
                self.jr(bus, true);
            }
            Op::Call => self.exec_call_a16(bus),
            Op::Ret => self.exec_ret(bus),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(vector) => self.exec_rst(bus, vector),
            Op::JpCond(cc) => return base + self.jp_cond(bus, cc),
            Op::JrCond(cc) => return base + self.jr(bus, self.condition(cc)),
            Op::CallCond(cc) => return base + self.call_cond(bus, cc),
            Op::RetCond(cc) => return base + self.ret_cond(bus, cc),
        }

        base
    }
}
