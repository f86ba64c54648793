use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketboy_gb::{GameBoy, Registers, WriterTraceSink};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    #[builder(default = 60)]
    pub frames: u32,
    #[builder(default, setter(strip_option, into))]
    pub trace_path: Option<PathBuf>,
    #[builder(default = true)]
    pub print_serial: bool,
}

/// What the machine looked like when the run finished.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub title: String,
    pub frames: u32,
    pub cycles: u64,
    pub registers: Registers,
    pub serial: Vec<u8>,
}

pub fn run(config: &RunConfig) -> Result<RunReport> {
    let rom = std::fs::read(&config.rom_path)
        .with_context(|| format!("failed to read ROM '{}'", config.rom_path.display()))?;
    let mut gb = GameBoy::from_rom(&rom)?;

    if let Some(path) = &config.trace_path {
        let file = File::create(path)
            .with_context(|| format!("failed to create trace file '{}'", path.display()))?;
        gb.set_trace_sink(Box::new(WriterTraceSink::new(BufWriter::new(file))));
        log::info!("Tracing CPU state to '{}'", path.display());
    }

    for _ in 0..config.frames {
        gb.step_frame();
    }
    // Drop the sink so buffered trace lines reach the file.
    gb.clear_trace_sink();

    let title = gb.header().map(|h| h.title.clone()).unwrap_or_default();
    let report = RunReport {
        title,
        frames: config.frames,
        cycles: gb.cpu.cycles,
        registers: gb.cpu.regs,
        serial: gb.serial_output().to_vec(),
    };

    if config.print_serial && !report.serial.is_empty() {
        println!("{}", String::from_utf8_lossy(&report.serial));
    }

    Ok(report)
}
