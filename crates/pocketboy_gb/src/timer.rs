//! Divider and programmable timer.
//!
//! The registers live in ordinary memory (DIV 0xFF04, TIMA 0xFF05,
//! TMA 0xFF06, TAC 0xFF07) so software can read and write them directly.
//! `Timer` only keeps the hidden sub-counters needed to turn elapsed
//! T-cycles into register updates, and writes its results back through
//! `Bus::store` so the CPU-facing write rules (DIV reset) do not apply.

use crate::cpu::interrupts::{request_interrupt, Interrupt};
use crate::cpu::Bus;

pub const DIV_ADDR: u16 = 0xFF04;
pub const TIMA_ADDR: u16 = 0xFF05;
pub const TMA_ADDR: u16 = 0xFF06;
pub const TAC_ADDR: u16 = 0xFF07;

/// T-cycles between DIV increments (16384 Hz at 4.194304 MHz).
pub const DIV_PERIOD: u32 = 256;

/// TAC bit 2.
const TAC_ENABLE: u8 = 0x04;

/// TIMA period in T-cycles for a TAC clock-select value.
///
/// - 00 → 4096 Hz (1024 cycles)
/// - 01 → 262144 Hz (16 cycles)
/// - 10 → 65536 Hz (64 cycles)
/// - 11 → 16384 Hz (256 cycles)
#[inline]
pub const fn tima_period(clock_select: u8) -> u32 {
    match clock_select & 0x03 {
        0b00 => 1024,
        0b01 => 16,
        0b10 => 64,
        _ => 256,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    /// Cycles accumulated towards the next DIV increment, below `DIV_PERIOD`.
    div_accumulator: u32,
    /// Cycles left until the next TIMA increment, in `1..=period`.
    countdown: u32,
    /// Clock select the countdown was loaded for.
    clock_select: u8,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            div_accumulator: 0,
            countdown: tima_period(0),
            clock_select: 0,
        }
    }

    /// Advance the divider and, when TAC enables it, the counter by
    /// `cycles` T-cycles.
    ///
    /// TIMA overflow reloads from TMA and raises the timer interrupt. A
    /// change of clock select restarts the countdown at the new period.
    /// Any `cycles` value is accepted; a large delta lands on the same
    /// register values as the equivalent run of small ones.
    pub fn advance<B: Bus>(&mut self, bus: &mut B, cycles: u32) {
        self.advance_divider(bus, cycles);

        let tac = bus.read8(TAC_ADDR);
        let select = tac & 0x03;
        if select != self.clock_select {
            self.clock_select = select;
            self.countdown = tima_period(select);
        }

        if tac & TAC_ENABLE == 0 {
            return;
        }

        if cycles < self.countdown {
            self.countdown -= cycles;
            return;
        }
        let period = tima_period(select);
        let past = cycles - self.countdown;
        self.countdown = period - past % period;
        self.tick_tima(bus, 1 + past / period);
    }

    fn advance_divider<B: Bus>(&mut self, bus: &mut B, cycles: u32) {
        let total = u64::from(self.div_accumulator) + u64::from(cycles);
        let period = u64::from(DIV_PERIOD);
        self.div_accumulator = (total % period) as u32;

        let increments = (total / period % 0x100) as u8;
        if increments != 0 {
            let div = bus.read8(DIV_ADDR).wrapping_add(increments);
            bus.store(DIV_ADDR, div);
        }
    }

    /// Apply `ticks` TIMA increments at once.
    fn tick_tima<B: Bus>(&mut self, bus: &mut B, ticks: u32) {
        let tima = u32::from(bus.read8(TIMA_ADDR));
        let to_overflow = 0x100 - tima;
        if ticks < to_overflow {
            bus.store(TIMA_ADDR, (tima + ticks) as u8);
            return;
        }

        // After the first overflow TIMA cycles through TMA..=0xFF.
        let tma = bus.read8(TMA_ADDR);
        let lap = 0x100 - u32::from(tma);
        let rest = (ticks - to_overflow) % lap;
        bus.store(TIMA_ADDR, (u32::from(tma) + rest) as u8);
        request_interrupt(bus, Interrupt::Timer);
        log::trace!("GB timer: TIMA overflow, reload 0x{tma:02X}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::interrupts::IF_ADDR;

    struct TestBus {
        memory: [u8; 0x10000],
    }

    impl Default for TestBus {
        fn default() -> Self {
            Self {
                memory: [0; 0x10000],
            }
        }
    }

    impl Bus for TestBus {
        fn read8(&mut self, addr: u16) -> u8 {
            self.memory[addr as usize]
        }

        fn write8(&mut self, addr: u16, value: u8) {
            self.memory[addr as usize] = value;
        }
    }

    #[test]
    fn div_increments_every_256_cycles() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();

        timer.advance(&mut bus, 255);
        assert_eq!(bus.memory[DIV_ADDR as usize], 0);
        timer.advance(&mut bus, 1);
        assert_eq!(bus.memory[DIV_ADDR as usize], 1);
        timer.advance(&mut bus, 512);
        assert_eq!(bus.memory[DIV_ADDR as usize], 3);
    }

    #[test]
    fn div_wraps_from_ff_to_00() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        bus.memory[DIV_ADDR as usize] = 0xFF;

        timer.advance(&mut bus, DIV_PERIOD);
        assert_eq!(bus.memory[DIV_ADDR as usize], 0x00);
    }

    #[test]
    fn tima_stays_put_when_disabled() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        bus.memory[TAC_ADDR as usize] = 0b001;

        timer.advance(&mut bus, 1024);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 0);
    }

    #[test]
    fn tima_counts_at_selected_rate() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        bus.memory[TAC_ADDR as usize] = 0b110;

        timer.advance(&mut bus, 63);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 0);
        timer.advance(&mut bus, 1);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 1);
        timer.advance(&mut bus, 64 * 3);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 4);
    }

    #[test]
    fn tima_overflow_reloads_and_requests_interrupt_once() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        bus.memory[TIMA_ADDR as usize] = 0xFF;
        bus.memory[TMA_ADDR as usize] = 0x42;
        bus.memory[TAC_ADDR as usize] = 0b101;

        timer.advance(&mut bus, 16);

        assert_eq!(bus.memory[TIMA_ADDR as usize], 0x42);
        assert_eq!(bus.memory[IF_ADDR as usize], 0x04);

        // The reload value counts up again rather than overflowing twice.
        bus.memory[IF_ADDR as usize] = 0;
        timer.advance(&mut bus, 16);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 0x43);
        assert_eq!(bus.memory[IF_ADDR as usize], 0);
    }

    #[test]
    fn clock_select_change_restarts_countdown() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        bus.memory[TAC_ADDR as usize] = 0b100;

        timer.advance(&mut bus, 1000);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 0);

        bus.memory[TAC_ADDR as usize] = 0b111;
        timer.advance(&mut bus, 255);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 0);
        timer.advance(&mut bus, 1);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 1);
    }

    #[test]
    fn huge_delta_does_not_overflow_counters() {
        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        bus.memory[TAC_ADDR as usize] = 0b111;

        // 0x80_0001 ticks of 256 cycles: 0x8000 full laps of TIMA plus one.
        timer.advance(&mut bus, 0x8000_0100);
        assert_eq!(bus.memory[TIMA_ADDR as usize], 1);
        assert_eq!(bus.memory[DIV_ADDR as usize], 1);
        assert_eq!(bus.memory[IF_ADDR as usize], 0x04);

        let mut timer = Timer::new();
        let mut bus = TestBus::default();
        timer.advance(&mut bus, 200);
        // 2^32 - 1 + 200 cycles is exactly 2^24 DIV increments, 199 left over.
        timer.advance(&mut bus, u32::MAX);
        assert_eq!(bus.memory[DIV_ADDR as usize], 0);
        timer.advance(&mut bus, 56);
        assert_eq!(bus.memory[DIV_ADDR as usize], 0);
        timer.advance(&mut bus, 1);
        assert_eq!(bus.memory[DIV_ADDR as usize], 1);
    }

    #[test]
    fn one_large_advance_matches_many_small_ones() {
        let mut bulk = Timer::new();
        let mut bulk_bus = TestBus::default();
        let mut stepped = Timer::new();
        let mut stepped_bus = TestBus::default();
        for bus in [&mut bulk_bus, &mut stepped_bus] {
            bus.memory[TIMA_ADDR as usize] = 0xE0;
            bus.memory[TMA_ADDR as usize] = 0xF0;
            bus.memory[TAC_ADDR as usize] = 0b101;
        }

        bulk.advance(&mut bulk_bus, 10_004);
        for _ in 0..10_004 / 4 {
            stepped.advance(&mut stepped_bus, 4);
        }

        assert_eq!(bulk, stepped);
        for addr in [DIV_ADDR, TIMA_ADDR, IF_ADDR] {
            assert_eq!(
                bulk_bus.memory[addr as usize],
                stepped_bus.memory[addr as usize],
                "register 0x{addr:04X}"
            );
        }
    }

    #[test]
    fn periods_match_tac_encoding() {
        assert_eq!(tima_period(0b00), 1024);
        assert_eq!(tima_period(0b01), 16);
        assert_eq!(tima_period(0b10), 64);
        assert_eq!(tima_period(0b11), 256);
    }
}
