//! village — compare parcel delivery policies on the village map.
//!
//! Draws `trials` random tasks (5 parcels from the Post Office by default),
//! runs every selected policy on each, and prints average turns per policy
//! against the first one.
//!
//! ```text
//! village --policies nearest-target,delivery-first,batching --trials 500 --seed 7
//! village --config run.json --show-run pickup-first -v
//! RUST_LOG=pd_sim=trace village --trials 1
//! ```

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use pd_behavior::{Policy, PolicyKind};
use pd_core::{LocationId, SimRng, Turn};
use pd_sim::{Comparator, RunObserver, RunSummary};
use pd_spatial::{BfsRouter, Route, Topology};
use pd_world::WorldState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{load_config, load_topology};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "village")]
#[command(about = "Compare parcel delivery policies on shared random tasks", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON run configuration file
    #[arg(short, long, env = "VILLAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Road list, one "A-B" per line (default: the built-in village)
    #[arg(long)]
    roads: Option<PathBuf>,

    /// Policies to compare, comma separated; the first is the baseline
    /// (default: all)
    #[arg(short, long, value_delimiter = ',')]
    policies: Vec<PolicyKind>,

    /// Number of shared random tasks
    #[arg(short, long)]
    trials: Option<u32>,

    /// Master RNG seed (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Parcels per task
    #[arg(long)]
    parcels: Option<usize>,

    /// Start location name
    #[arg(long)]
    start: Option<String>,

    /// Maximum turns per run
    #[arg(long)]
    turn_cap: Option<u32>,

    /// Print one extra run of this policy turn by turn
    #[arg(long)]
    show_run: Option<PolicyKind>,

    /// -v for debug, -vv for trace (RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ── Turn printer ──────────────────────────────────────────────────────────────

struct TurnPrinter<'a> {
    topology: &'a Topology,
    before:   Option<WorldState>,
}

impl TurnPrinter<'_> {
    fn name(&self, loc: LocationId) -> &str {
        self.topology.name(loc).unwrap_or("?")
    }
}

impl RunObserver for TurnPrinter<'_> {
    fn on_turn_start(&mut self, _turn: Turn, state: &WorldState) {
        self.before = Some(state.clone());
    }

    fn on_turn_end(&mut self, turn: Turn, direction: LocationId, state: &WorldState) {
        let stayed = self.before.take().is_some_and(|before| before == *state);
        let note = if stayed { "  (no road, stayed)" } else { "" };
        println!(
            "  {:>5}  → {:<14} {} parcel(s) left{note}",
            turn.next().to_string(),
            self.name(direction),
            state.parcel_count()
        );
    }

    fn on_run_end(&mut self, summary: &RunSummary, state: &WorldState) {
        let outcome = if summary.completed { "delivered everything" } else { "hit the turn cap" };
        println!("  {outcome} after {} turn(s); {}", summary.turns, state.display(self.topology));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 1. Configuration: file, then command-line overrides.
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(parcels) = cli.parcels {
        config.parcel_count = parcels;
    }
    if let Some(start) = cli.start {
        config.start = start;
    }
    if let Some(turn_cap) = cli.turn_cap {
        config.turn_cap = turn_cap;
    }
    config.validate()?;

    // 2. Topology and policies.
    let topology = load_topology(cli.roads.as_deref())?;
    info!(
        locations = topology.location_count(),
        roads = topology.edge_count() / 2,
        "topology loaded"
    );

    if topology.resolve(&config.start).is_err() {
        let known: Vec<&str> = topology.locations().filter_map(|l| topology.name(l)).collect();
        bail!("unknown start location {:?}; known locations: {}", config.start, known.join(", "));
    }

    // Explicitly requested policies must all build; the default set skips
    // those the topology cannot support.
    let boxed: Vec<Box<dyn Policy>> = if cli.policies.is_empty() {
        PolicyKind::available(&topology).into_iter().map(|(_, p)| p).collect()
    } else {
        cli.policies
            .iter()
            .map(|k| k.build(&topology).with_context(|| format!("building policy {k}")))
            .collect::<Result<_>>()?
    };
    let policies: Vec<&dyn Policy> = boxed.iter().map(|p| p.as_ref()).collect();

    // 3. Compare.
    let comparator = Comparator::from_config(&topology, &BfsRouter, &config)?;
    let mut rng = SimRng::from_seed_opt(config.seed);

    println!("=== village — parcel delivery policy comparison ===");
    println!(
        "Tasks: {} parcel(s) from {}  |  Trials: {}  |  Turn cap: {}  |  Seed: {}",
        config.parcel_count,
        config.start,
        config.trials,
        config.turn_cap,
        config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
    );
    println!();

    let t0 = Instant::now();
    let report = comparator.compare(&policies, config.trials, &mut rng)?;
    let elapsed = t0.elapsed();
    print!("{report}");
    println!("Comparison complete in {:.3} s", elapsed.as_secs_f64());

    // 4. Optional turn-by-turn run on a fresh task.
    if let Some(kind) = cli.show_run {
        let policy = kind.build(&topology)?;
        let mut run_rng = rng.child(u64::from(config.trials));
        let start = topology.resolve(&config.start)?;
        let task = WorldState::random(&topology, config.parcel_count, start, &mut run_rng)?;
        println!();
        println!("Sample run of {kind}: {}", task.display(&topology));
        let mut printer = TurnPrinter { topology: &topology, before: None };
        comparator
            .runner()
            .run(task, policy.as_ref(), Route::new(), &mut run_rng, &mut printer);
    }

    Ok(())
}
