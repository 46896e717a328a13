//! outbreak — command-line driver for the rust_epi simulator.
//!
//! Starts one run, prints an epoch summary every few ticks, and stops when
//! nobody is sick any more or the tick budget runs out.  With `--emit-json`
//! every population snapshot goes to stdout as a JSON line, ready to be piped
//! into a renderer; logs always go to stderr.

mod config;

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use ep_agent::HealthState;
use ep_sim::{EngineBuilder, EpochSummary, PopulationSnapshot, RunLimit};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{Args, DemoConfig};

const PRINT_EVERY_TICKS: u64 = 25;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = DemoConfig::load(&args)?;
    info!(
        width = cfg.world.width,
        height = cfg.world.height,
        seed = cfg.world.seed,
        tick_interval_ms = cfg.world.tick_interval_ms,
        sampling = ?cfg.world.heading_sampling,
        "configuration loaded"
    );

    let mut engine = EngineBuilder::from_world(cfg.world).build()?;

    // 1. Stop once the outbreak has burnt out.
    let stop = engine.stop_handle();
    engine.subscribe_summary(move |s: &EpochSummary| {
        if s.sick == 0 {
            info!(tick = s.tick.0, "no infections left");
            stop.stop();
        }
    });

    // 2. Progress on stderr, away from any JSON on stdout.
    engine.subscribe_summary(|s: &EpochSummary| {
        if s.tick.0 % PRINT_EVERY_TICKS == 0 {
            eprintln!("{s}");
        }
    });

    // 3. Optional snapshot stream.
    if args.emit_json {
        engine.subscribe_population(|p: &PopulationSnapshot| {
            let mut out = std::io::stdout().lock();
            let written = serde_json::to_writer(&mut out, p)
                .map_err(anyhow::Error::from)
                .and_then(|()| writeln!(out).map_err(anyhow::Error::from));
            if let Err(e) = written {
                error!(tick = p.tick.0, "snapshot not written: {e}");
            }
        });
    }

    // 4. Run.
    let outcome = engine.start(&cfg.params);
    info!(?outcome, params = ?engine.params(), "run prepared");

    let t0 = Instant::now();
    let report = engine.run(RunLimit::Ticks(args.ticks));
    let elapsed = t0.elapsed();
    engine.stop();

    // 5. Summary.
    eprintln!();
    eprintln!(
        "Run ended ({:?}) after {} ticks in {:.3} s",
        report.end,
        report.ticks_run,
        elapsed.as_secs_f64()
    );
    if let Some(last) = report.last_summary {
        eprintln!("Final epoch  {last}");
    }

    let Some(population) = engine.population() else {
        return Ok(());
    };
    eprintln!();
    eprintln!("{:<14} {:>6}", "State", "Count");
    eprintln!("{}", "-".repeat(21));
    for state in [
        HealthState::NonInfected,
        HealthState::Infected,
        HealthState::Immune,
        HealthState::Dead,
    ] {
        eprintln!("{:<14} {:>6}", state.to_string(), population.count(state));
    }

    // 6. First few humans.
    eprintln!();
    eprintln!("{:<8} {:<8} {:>8} {:>8} {:<14}", "Agent", "Cell", "X", "Y", "State");
    eprintln!("{}", "-".repeat(50));
    for (id, h) in population.agent_ids().zip(population.iter()).take(args.table_rows) {
        eprintln!(
            "{:<8} {:<8} {:>8.1} {:>8.1} {:<14}",
            id.0,
            h.cell.0,
            h.position.x,
            h.position.y,
            h.state.to_string(),
        );
    }

    Ok(())
}
