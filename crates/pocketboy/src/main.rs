use pocketboy::RunConfig;

const USAGE: &str = "Usage: pocketboy <rom_path> [frames] [trace_path]";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path = args.next().unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let frames: u32 = match args.next() {
        Some(frames) => frames.parse().unwrap_or_else(|_| {
            eprintln!("Invalid frames '{frames}'; expected an integer.\n{USAGE}");
            std::process::exit(2);
        }),
        None => 60,
    };

    log::info!("Playing ROM path: '{}'", rom_path);

    let config = match args.next() {
        Some(trace_path) => RunConfig::builder()
            .rom_path(rom_path)
            .frames(frames)
            .trace_path(trace_path)
            .build(),
        None => RunConfig::builder().rom_path(rom_path).frames(frames).build(),
    };

    match pocketboy::run(&config) {
        Ok(report) => {
            let r = report.registers;
            println!(
                "'{}': {} frames, {} cycles, A={:02X} F={:02X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
                report.title,
                report.frames,
                report.cycles,
                r.a,
                r.f,
                r.bc(),
                r.de(),
                r.hl(),
                r.sp,
                r.pc,
            );
        }
        Err(err) => {
            eprintln!("pocketboy: {err:#}");
            std::process::exit(1);
        }
    }
}
