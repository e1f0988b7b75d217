//! Subaru EyeSight Frame Synthesis CLI
//!
//! Command-line driver for the subaru-can library. It loads DBC layouts and
//! a scenario (commands plus last observed stock payloads), then prints the
//! frames the builders emit over a range of ticks:
//! - Global or pre-global message sets
//! - Human-readable or JSON-lines output

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use subaru_can::{CanFrame, ChecksumAlgorithm, DbcPacker};

mod config;
mod stock;
mod synth;

use config::{Generation, Scenario};
use stock::StockSnapshots;

/// Subaru EyeSight frame synthesizer
#[derive(Parser, Debug)]
#[command(name = "subaru-can-cli")]
#[command(about = "Synthesize Subaru EyeSight CAN frames from a scenario", long_about = None)]
#[command(version)]
struct Args {
    /// Path to DBC file(s) (can be repeated)
    #[arg(long, value_name = "FILE")]
    dbc: Vec<PathBuf>,

    /// Path to scenario file (scenario.toml)
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Override the scenario's protocol generation
    #[arg(short, long, value_enum)]
    generation: Option<Generation>,

    /// Number of ticks to synthesize
    #[arg(short, long, default_value_t = 16)]
    ticks: u64,

    /// First tick index
    #[arg(long, default_value_t = 0)]
    start_tick: u64,

    /// Print one JSON object per frame
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// One emitted frame in JSON output
#[derive(Debug, Serialize)]
struct FrameRecord<'a> {
    tick: u64,
    message: &'a str,
    #[serde(flatten)]
    frame: &'a CanFrame,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Subaru CAN CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using synthesis library v{}", subaru_can::VERSION);

    if args.dbc.is_empty() {
        println!("Subaru CAN - No DBC specified");
        println!("\nQuick Start:");
        println!("  subaru-can-cli --dbc subaru_global_2017.dbc");
        println!("  subaru-can-cli --dbc global.dbc --scenario scenario.toml --ticks 32");
        println!("  subaru-can-cli --dbc subaru_outback_2015.dbc --generation preglobal");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let mut scenario = match &args.scenario {
        Some(path) => {
            log::info!("Loading scenario from: {:?}", path);
            config::load_scenario(path)?
        }
        None => Scenario::default(),
    };
    if let Some(generation) = args.generation {
        scenario.generation = generation;
    }

    let packer = build_packer(&args.dbc, scenario.generation)?;
    let stats = packer.database().stats();
    log::info!(
        "Signal database: {} messages, {} signals",
        stats.num_messages,
        stats.num_signals
    );

    let stock = StockSnapshots::decode(&packer, scenario.generation, &scenario.stock)?;

    run(&packer, &scenario, &stock, &args)
}

/// Load every DBC into a packer for the given generation
fn build_packer(paths: &[PathBuf], generation: Generation) -> Result<DbcPacker> {
    let mut packer = match generation {
        Generation::Global => DbcPacker::new().with_checksum(ChecksumAlgorithm::Subaru),
        Generation::Preglobal => DbcPacker::new(),
    };

    for path in paths {
        log::debug!("Loading DBC: {:?}", path);
        packer
            .add_dbc(path)
            .with_context(|| format!("Failed to load DBC: {:?}", path))?;
    }

    Ok(packer)
}

/// Synthesize and print every tick
fn run(packer: &DbcPacker, scenario: &Scenario, stock: &StockSnapshots, args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for tick in args.start_tick..args.start_tick.saturating_add(args.ticks) {
        let frames = synth::frames_for_tick(packer, tick, scenario, stock)
            .with_context(|| format!("Synthesis failed at tick {}", tick))?;

        for frame in &frames {
            let message = packer
                .database()
                .get_message(frame.address)
                .map_or("?", |m| m.name.as_str());

            if args.json {
                let record = FrameRecord { tick, message, frame };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            } else {
                writeln!(out, "{:>6}  {:<18} {}", tick, message, frame)?;
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
