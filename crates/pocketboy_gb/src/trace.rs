//! Optional per-step register trace.
//!
//! The session captures a `TraceEntry` before each instruction and hands it
//! to whatever `TraceSink` is attached. Nothing is recorded when no sink is
//! attached, and sinks never feed back into emulation state.

use std::fmt;
use std::io::Write;

use crate::cpu::Cpu;

/// Register snapshot taken before an instruction executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub cycles: u64,
}

impl TraceEntry {
    pub fn capture(cpu: &Cpu) -> Self {
        let r = &cpu.regs;
        Self {
            a: r.a,
            f: r.f,
            b: r.b,
            c: r.c,
            d: r.d,
            e: r.e,
            h: r.h,
            l: r.l,
            sp: r.sp,
            pc: r.pc,
            cycles: cpu.cycles,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A: {:02X} F: {:02X} B: {:02X} C: {:02X} D: {:02X} E: {:02X} H: {:02X} L: {:02X} SP: {:04X} PC: {:04X}",
            self.a, self.f, self.b, self.c, self.d, self.e, self.h, self.l, self.sp, self.pc,
        )
    }
}

pub trait TraceSink {
    fn record(&mut self, entry: &TraceEntry);

    /// Whether the sink still wants entries. A sink that returns `false`
    /// is dropped by the session.
    fn is_active(&self) -> bool {
        true
    }
}

/// Writes one formatted line per entry to any `Write`.
///
/// The first I/O error is logged and the sink goes inactive; tracing never
/// interrupts emulation.
pub struct WriterTraceSink<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> WriterTraceSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for WriterTraceSink<W> {
    fn record(&mut self, entry: &TraceEntry) {
        if self.failed {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{entry}") {
            log::warn!("trace sink write failed, detaching: {err}");
            self.failed = true;
        }
    }

    fn is_active(&self) -> bool {
        !self.failed
    }
}

/// Forwards entries to `log::trace!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn record(&mut self, entry: &TraceEntry) {
        log::trace!("{entry}");
    }
}
