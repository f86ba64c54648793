use super::decode::{CbOp, CB_CYCLES, CB_OPS};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// Called after the prefix byte has been fetched. Returns the full cost
    /// of the prefixed instruction.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.extended = true;
        let opcode = self.fetch8(bus);
        self.exec_cb(bus, CB_OPS[opcode as usize]);
        self.extended = false;
        CB_CYCLES[opcode as usize] as u32
    }

    fn exec_cb<B: Bus>(&mut self, bus: &mut B, op: CbOp) {
        match op {
            CbOp::Shift(kind, target) => {
                let value = self.read_r8(bus, target);
                let result = self.alu_shift(kind, value);
                self.write_r8(bus, target, result);
            }
            CbOp::Bit(bit, target) => {
                let value = self.read_r8(bus, target);
                self.set_flag(Flag::Z, !super::get_bit(value, bit));
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            CbOp::Res(bit, target) => {
                let value = self.read_r8(bus, target);
                self.write_r8(bus, target, super::clear_bit(value, bit));
            }
            CbOp::Set(bit, target) => {
                let value = self.read_r8(bus, target);
                self.write_r8(bus, target, super::set_bit(value, bit));
            }
        }
    }
}
