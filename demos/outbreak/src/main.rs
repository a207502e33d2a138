//! outbreak: run the contagion simulator from the command line.
//!
//! Bootstraps a random population (three quarters of it under lockdown by
//! default, one subject infected), steps the simulation, prints the infection
//! curve, and optionally writes CSV output and the final frame.

mod ascii;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cs_core::{SimConfig, Tick};
use cs_output::{CsvWriter, SimOutputObserver};
use cs_sim::{InfectionSeries, SimBuilder, SimObserver};
use cs_subject::{PopulationBuilder, Subject};

use ascii::AsciiCanvas;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "outbreak")]
#[command(about = "Simulate infection spreading through colliding subjects", long_about = None)]
struct Args {
    /// Number of subjects
    #[arg(short = 'n', long, default_value = "100")]
    subjects: usize,

    /// Seed for the starting population
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Arena width
    #[arg(long, default_value = "800")]
    width: u32,

    /// Arena height
    #[arg(long, default_value = "500")]
    height: u32,

    /// Subject radius
    #[arg(short, long, default_value = "5")]
    radius: u32,

    /// Share of subjects under lockdown (0.0 – 1.0)
    #[arg(short, long, default_value = "0.75")]
    lockdown: f64,

    /// Subjects infected at the start
    #[arg(short, long, default_value = "1")]
    infected: usize,

    /// Ticks to simulate
    #[arg(short, long, default_value = "1200")]
    ticks: u64,

    /// Tick interval in milliseconds (dt = interval / 10)
    #[arg(long, default_value = "15")]
    tick_ms: u64,

    /// Ticks between infection samples
    #[arg(long, default_value = "30")]
    report_every: u64,

    /// Ticks between population snapshots (0 = none)
    #[arg(long, default_value = "0")]
    snapshot_every: u64,

    /// Sleep tick_ms between ticks instead of stepping as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Write CSV output into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the final frame as ASCII art
    #[arg(long)]
    draw: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            arena_width:             self.width,
            arena_height:            self.height,
            tick_interval_ms:        self.tick_ms,
            report_interval_ticks:   self.report_every,
            snapshot_interval_ticks: self.snapshot_every,
            max_ticks:               Some(self.ticks),
            seed:                    self.seed,
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Keeps the infection curve and forwards everything to the CSV writer.
struct OutbreakObserver {
    series: InfectionSeries,
    output: Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for OutbreakObserver {
    fn on_infected_sample(&mut self, sample: u64, infected: usize) {
        self.series.on_infected_sample(sample, infected);
        if let Some(out) = &mut self.output {
            out.on_infected_sample(sample, infected);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, subjects: &[Subject]) {
        if let Some(out) = &mut self.output {
            out.on_snapshot(tick, subjects);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = args.config();

    // 1. Starting population.
    let subjects = PopulationBuilder::new(args.subjects, config.seed)
        .arena(config.arena_width, config.arena_height)
        .radius(args.radius)
        .lockdown_fraction(args.lockdown)
        .initially_infected(args.infected)
        .build();
    let infected_at_start = subjects.iter().filter(|s| s.is_infected()).count();
    info!(subjects = subjects.len(), infected = infected_at_start, "population ready");

    // 2. Simulation.
    let canvas = AsciiCanvas::new(80, 25, config.arena_width, config.arena_height);
    let mut sim = SimBuilder::new(config.clone(), canvas)
        .subjects(subjects)
        .build()
        .context("invalid simulation setup")?;

    // 3. Output.
    let output = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir).context("opening CSV output")?;
            Some(SimOutputObserver::new(writer, &config))
        }
        None => None,
    };
    let mut observer = OutbreakObserver { series: InfectionSeries::new(), output };

    // 4. Run.
    let started = Instant::now();
    if args.realtime {
        sim.run(&mut observer)?;
    } else {
        sim.run_ticks(args.ticks, &mut observer)?;
        observer.on_sim_end(sim.clock.current_tick);
    }
    let elapsed = started.elapsed();

    if let Some(err) = observer.output.as_mut().and_then(|o| o.take_error()) {
        warn!(error = %err, "output incomplete");
    }

    // 5. Report.
    println!();
    println!("sample  infected");
    for (sample, infected) in &observer.series.samples {
        println!("{sample:>6}  {infected:>8}");
    }
    println!();
    if let Some((sample, peak)) = observer.series.peak() {
        println!("Peak: {peak} infected at sample {sample}");
    }

    let immune = sim.subjects().iter().filter(|s| s.is_immune()).count();
    println!(
        "Final {}: {} infected, {} immune, {} susceptible  ({:.2?})",
        sim.clock.current_tick,
        sim.infected_count(),
        immune,
        sim.subjects().len() - sim.infected_count() - immune,
        elapsed,
    );

    if args.draw {
        println!();
        println!("{}", sim.canvas.render());
    }
    if let Some(dir) = &args.output {
        println!("Output written to {}", dir.display());
    }

    Ok(())
}
