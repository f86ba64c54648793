//! Opcode tables.
//!
//! Both tables are total: every byte maps to an `Op` (base) or `CbOp`
//! (after the 0xCB prefix). Decoding happens once, when the tables are
//! built, so dispatch in `step` is a single index into a 256-entry array.

use super::regs::{Pair, R16, R8};

/// Escape byte selecting the extended table.
pub const PREFIX_CB: u8 = 0xCB;

/// Memory operand addressed by a register pair, with the HL post-inc/dec forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    BC,
    DE,
    HlInc,
    HlDec,
}

/// Accumulator ALU operations, in opcode encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Branch condition for JP/JR/CALL/RET cc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }
}

/// One entry of the base opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    /// No instruction exists at this opcode on hardware. Executes as a
    /// 4-cycle no-op.
    Undefined(u8),
    /// 0xCB: the next byte selects an entry of the extended table.
    Prefix,

    LdR8R8 { dst: R8, src: R8 },
    LdR8Imm(R8),
    LdR16Imm(R16),
    LdIndirectA(Indirect),
    LdAIndirect(Indirect),
    LdA16Sp,
    LdhA8A,
    LdhAA8,
    LdhCA,
    LdhAC,
    LdA16A,
    LdAA16,
    LdSpHl,
    LdHlSpImm,
    Push(Pair),
    Pop(Pair),

    Inc8(R8),
    Dec8(R8),
    Inc16(R16),
    Dec16(R16),
    AddHl(R16),
    AddSpImm,
    Alu(AluOp, R8),
    AluImm(AluOp),
    /// RLCA/RRCA/RLA/RRA: the accumulator forms of the CB rotates.
    RotateA(ShiftOp),
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jp,
    JpCond(Cond),
    JpHl,
    Jr,
    JrCond(Cond),
    Call,
    CallCond(Cond),
    Ret,
    RetCond(Cond),
    Reti,
    Rst(u16),
    Di,
    Ei,
}

/// Rotate/shift kinds of the extended table's first quarter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

/// One entry of the extended (0xCB-prefixed) table. Bit indices are 0–7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbOp {
    Shift(ShiftOp, R8),
    Bit(u8, R8),
    Res(u8, R8),
    Set(u8, R8),
}

const fn decode_base(opcode: u8) -> Op {
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = (opcode >> 4) & 0x03;

    match opcode {
        0x00 => Op::Nop,
        0x10 => Op::Stop,
        0x76 => Op::Halt,
        PREFIX_CB => Op::Prefix,
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
            Op::Undefined(opcode)
        }

        0x01 | 0x11 | 0x21 | 0x31 => Op::LdR16Imm(R16::from_bits(p)),
        0x02 | 0x12 | 0x22 | 0x32 => Op::LdIndirectA(indirect(p)),
        0x0A | 0x1A | 0x2A | 0x3A => Op::LdAIndirect(indirect(p)),
        0x03 | 0x13 | 0x23 | 0x33 => Op::Inc16(R16::from_bits(p)),
        0x0B | 0x1B | 0x2B | 0x3B => Op::Dec16(R16::from_bits(p)),
        0x09 | 0x19 | 0x29 | 0x39 => Op::AddHl(R16::from_bits(p)),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Op::Inc8(R8::from_bits(y)),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Op::Dec8(R8::from_bits(y)),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Op::LdR8Imm(R8::from_bits(y)),
        0x07 | 0x0F | 0x17 | 0x1F => Op::RotateA(ShiftOp::from_bits(y)),
        0x27 => Op::Daa,
        0x2F => Op::Cpl,
        0x37 => Op::Scf,
        0x3F => Op::Ccf,
        0x08 => Op::LdA16Sp,
        0x18 => Op::Jr,
        0x20 | 0x28 | 0x30 | 0x38 => Op::JrCond(Cond::from_bits(y)),

        0x40..=0x7F => Op::LdR8R8 {
            dst: R8::from_bits(y),
            src: R8::from_bits(z),
        },
        0x80..=0xBF => Op::Alu(AluOp::from_bits(y), R8::from_bits(z)),

        0xC0 | 0xC8 | 0xD0 | 0xD8 => Op::RetCond(Cond::from_bits(y)),
        0xC2 | 0xCA | 0xD2 | 0xDA => Op::JpCond(Cond::from_bits(y)),
        0xC4 | 0xCC | 0xD4 | 0xDC => Op::CallCond(Cond::from_bits(y)),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Op::Pop(stack_pair(p)),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Op::Push(stack_pair(p)),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => Op::AluImm(AluOp::from_bits(y)),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Op::Rst((opcode & 0x38) as u16),
        0xC3 => Op::Jp,
        0xC9 => Op::Ret,
        0xCD => Op::Call,
        0xD9 => Op::Reti,
        0xE0 => Op::LdhA8A,
        0xE2 => Op::LdhCA,
        0xE8 => Op::AddSpImm,
        0xE9 => Op::JpHl,
        0xEA => Op::LdA16A,
        0xF0 => Op::LdhAA8,
        0xF2 => Op::LdhAC,
        0xF3 => Op::Di,
        0xF8 => Op::LdHlSpImm,
        0xF9 => Op::LdSpHl,
        0xFA => Op::LdAA16,
        _ => Op::Ei, // 0xFB, the last remaining byte
    }
}

const fn indirect(p: u8) -> Indirect {
    match p {
        0 => Indirect::BC,
        1 => Indirect::DE,
        2 => Indirect::HlInc,
        _ => Indirect::HlDec,
    }
}

/// PUSH/POP use AF in the slot where other `rr` encodings use SP.
const fn stack_pair(p: u8) -> Pair {
    match p {
        0 => Pair::BC,
        1 => Pair::DE,
        2 => Pair::HL,
        _ => Pair::AF,
    }
}

const fn decode_cb(opcode: u8) -> CbOp {
    let y = (opcode >> 3) & 0x07;
    let target = R8::from_bits(opcode);
    match opcode >> 6 {
        0 => CbOp::Shift(ShiftOp::from_bits(y), target),
        1 => CbOp::Bit(y, target),
        2 => CbOp::Res(y, target),
        _ => CbOp::Set(y, target),
    }
}

const fn build_base_table() -> [Op; 256] {
    let mut table = [Op::Nop; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode_base(i as u8);
        i += 1;
    }
    table
}

const fn build_cb_table() -> [CbOp; 256] {
    let mut table = [CbOp::Shift(ShiftOp::Rlc, R8::B); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode_cb(i as u8);
        i += 1;
    }
    table
}

const fn build_cb_cycles() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let hl = (i & 0x07) == 6;
        let is_bit = (i >> 6) == 1;
        table[i] = match (hl, is_bit) {
            (false, _) => 8,
            (true, true) => 12,
            (true, false) => 16,
        };
        i += 1;
    }
    table
}

pub static BASE_OPS: [Op; 256] = build_base_table();
pub static CB_OPS: [CbOp; 256] = build_cb_table();

/// T-cycle cost of each base opcode. Conditional branches list the
/// not-taken cost; the taken path adds the extra reported by its body.
/// The 0xCB entry covers the prefix fetch only and is never charged:
/// prefixed instructions are costed entirely from `CB_CYCLES`.
#[rustfmt::skip]
pub static BASE_CYCLES: [u8; 256] = [
//  x0  x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
     8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 2x
     8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 3x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
     8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  4, 12, 24,  8, 16, // Cx
     8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // Dx
    12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // Ex
    12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // Fx
];

/// T-cycle cost of each extended opcode, including the prefix fetch.
pub static CB_CYCLES: [u8; 256] = build_cb_cycles();

/// Extra T-cycles charged when a conditional branch is taken.
pub const JR_TAKEN_EXTRA: u32 = 4;
pub const JP_TAKEN_EXTRA: u32 = 4;
pub const CALL_TAKEN_EXTRA: u32 = 12;
pub const RET_TAKEN_EXTRA: u32 = 12;
