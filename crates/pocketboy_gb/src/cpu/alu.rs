use super::decode::{AluOp, ShiftOp};
use super::{Cpu, Flag};

impl Cpu {
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    #[inline]
    fn carry_in(&self, use_carry: bool) -> u8 {
        (use_carry && self.get_flag(Flag::C)) as u8
    }

    /// Overwrite all four flags at once.
    #[inline]
    pub(super) fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.f = (z as u8) << Flag::Z as u8
            | (n as u8) << Flag::N as u8
            | (h as u8) << Flag::H as u8
            | (c as u8) << Flag::C as u8;
    }

    /// 8-bit ADD/ADC into A.
    ///
    /// Half-carry is the carry into bit 4, recovered as `(a ^ b ^ result) & 0x10`.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let wide = a as u16 + value as u16 + self.carry_in(use_carry) as u16;
        let sum = wide as u8;

        self.regs.a = sum;
        self.set_flags(sum == 0, false, (a ^ value ^ sum) & 0x10 != 0, wide > 0xFF);
    }

    /// Subtract `value` (and optionally the carry) from A, set Z/N/H/C, and
    /// return the difference without storing it. Shared by SUB, SBC and CP.
    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let wide = a as i16 - value as i16 - self.carry_in(use_carry) as i16;
        let diff = wide as u8;

        self.set_flags(diff == 0, true, (a ^ value ^ diff) & 0x10 != 0, wide < 0);
        diff
    }

    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.sub_flags(value, use_carry);
    }

    /// Compare A with `value` as if `A - value` was performed. A is kept.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    /// Store a bitwise result in A. Only AND sets H; C is always cleared.
    #[inline]
    fn logic_result(&mut self, value: u8, half_carry: bool) {
        self.regs.a = value;
        self.set_flags(value == 0, false, half_carry, false);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.logic_result(self.regs.a & value, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.logic_result(self.regs.a | value, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.logic_result(self.regs.a ^ value, false);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// N, H and C from the previous operation pick a correction of 0x06
    /// (low digit) and/or 0x60 (high digit). After an addition the digits
    /// themselves can also call for a correction. N is left unchanged.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let subtract = self.get_flag(Flag::N);

        let mut correction = 0u8;
        let low_digit = self.get_flag(Flag::H) || (!subtract && (a & 0x0F) > 0x09);
        let high_digit = self.get_flag(Flag::C) || (!subtract && a > 0x99);
        if low_digit {
            correction |= 0x06;
        }
        if high_digit {
            correction |= 0x60;
        }

        let adjusted = if subtract {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };

        self.regs.a = adjusted;
        self.set_flags(adjusted == 0, subtract, false, high_digit);
    }

    /// 8-bit increment used by INC r and INC (HL). C is left alone.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is left alone.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: H from bit 11, C from bit 15, Z unaffected.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let low = (base & 0x00FF) as u8;
        let half = (low & 0x0F) + (imm8 & 0x0F) > 0x0F;
        let carry = low.checked_add(imm8).is_none();
        self.set_flags(false, false, half, carry);
        base.wrapping_add(offset)
    }

    /// Rotate/shift `value`, setting Z from the result, C from the bit
    /// shifted out, and clearing N and H.
    pub(super) fn alu_shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry_out) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.set_flags(result == 0, false, false, carry_out);
        result
    }

    /// RLCA/RRCA/RLA/RRA: same as the prefixed forms on A, but Z is always
    /// cleared.
    pub(super) fn alu_rotate_a(&mut self, op: ShiftOp) {
        self.regs.a = self.alu_shift(op, self.regs.a);
        self.set_flag(Flag::Z, false);
    }
}
