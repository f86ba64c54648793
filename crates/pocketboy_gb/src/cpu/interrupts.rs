//! Interrupt sources, the IE/IF register views and the CPU-side entry
//! sequence.

mod ime;
mod poll;
mod service;

use bitflags::bitflags;

use super::Bus;

/// Interrupt enable register.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag (request) register.
pub const IF_ADDR: u16 = 0xFF0F;

/// T-cycles charged for dispatching to an interrupt vector.
pub const INTERRUPT_ENTRY_CYCLES: u32 = 20;

bitflags! {
    /// Bit view over IE (0xFFFF) and IF (0xFF0F). Only the low five bits
    /// name interrupt lines; the upper bits are ignored.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// The five maskable interrupt lines, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    /// Highest priority first.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self.index())
    }

    /// Service routine address: 0x40, 0x48, 0x50, 0x58, 0x60.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }

    /// Highest-priority line set in `flags`, if any.
    pub fn highest(flags: InterruptFlags) -> Option<Interrupt> {
        Self::ALL.into_iter().find(|irq| flags.contains(irq.flag()))
    }
}

/// IE projected onto the interrupt lines.
#[inline]
pub fn enabled<B: Bus>(bus: &mut B) -> InterruptFlags {
    InterruptFlags::from_bits_truncate(bus.read8(IE_ADDR))
}

/// IF projected onto the interrupt lines.
#[inline]
pub fn requested<B: Bus>(bus: &mut B) -> InterruptFlags {
    InterruptFlags::from_bits_truncate(bus.read8(IF_ADDR))
}

/// Lines that are both requested and enabled.
#[inline]
pub fn pending<B: Bus>(bus: &mut B) -> InterruptFlags {
    enabled(bus) & requested(bus)
}

/// Raise the IF bit for `irq`. Upper IF bits are preserved.
pub fn request_interrupt<B: Bus>(bus: &mut B, irq: Interrupt) {
    let value = bus.read8(IF_ADDR) | irq.flag().bits();
    bus.store(IF_ADDR, value);
}

/// Drop the IF bit for `irq`.
pub fn acknowledge_interrupt<B: Bus>(bus: &mut B, irq: Interrupt) {
    let value = bus.read8(IF_ADDR) & !irq.flag().bits();
    bus.store(IF_ADDR, value);
}
