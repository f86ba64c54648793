mod alu;
mod bus;
mod cb;
pub mod decode;
mod exec;
mod helpers;
mod init;
pub mod interrupts;
mod regs;
mod step;

pub use bus::{clear_bit, form_word, get_bit, set_bit, toggle_bit, Bus};
pub use interrupts::{Interrupt, InterruptFlags};
pub use regs::{Flag, Pair, Registers, R16, R8};

use crate::timer::Timer;

/// Game Boy CPU core.
///
/// Owns the register file, the execution-mode flags and the timer that
/// ticks in lockstep with it. Memory, including the interrupt and timer
/// registers, is reached through a `Bus` passed to each `step`.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    /// Total T-cycles executed since power-on. Never wraps in practice.
    pub cycles: u64,
    /// Set while the second byte of a 0xCB-prefixed instruction is being
    /// decoded and executed.
    extended: bool,
    /// EI was executed by the current instruction; IME turns on after the
    /// next one.
    ime_enable_pending: bool,
    /// Armed at the start of the instruction following EI. Cleared by DI.
    ime_enable_armed: bool,
    /// One bit per opcode byte, set once an undefined opcode has been
    /// reported.
    undefined_reported: [u64; 4],
    pub(crate) timer: Timer,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        get_bit(self.regs.f, flag as u8)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        self.regs.f = if value {
            set_bit(self.regs.f, bit)
        } else {
            clear_bit(self.regs.f, bit)
        };
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: Flag) {
        self.set_flag(flag, false);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// True while a prefixed instruction is being executed.
    pub fn extended_pending(&self) -> bool {
        self.extended
    }
}
