use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gr_core::{
    MetricsSnapshot, ReasoningGraph, RewardParams, TraceEvent, apply_event, event_to_line,
    parse_event,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "gr", about = "Graph reasoning reward engine CLI")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded session trace and report the reward
    Replay {
        /// Trace file, one JSON event per line
        trace: PathBuf,

        /// TOML file with a reward-parameter group, applied before replay
        #[arg(long)]
        params: Option<PathBuf>,

        /// Print the reward after every event
        #[arg(long)]
        per_step: bool,

        /// Print the final metrics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic session, then score it or emit its trace
    Demo {
        /// Number of concept nodes
        #[arg(long, default_value_t = 12)]
        nodes: usize,

        /// Number of relation edges
        #[arg(long, default_value_t = 20)]
        edges: usize,

        /// Embedding dimension
        #[arg(long, default_value_t = 8)]
        dim: usize,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Emit the trace as JSON lines instead of scoring it
        #[arg(long)]
        emit: bool,

        /// Print the final metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            trace,
            params,
            per_step,
            json,
        } => cmd_replay(&trace, params.as_deref(), per_step, json),
        Commands::Demo {
            nodes,
            edges,
            dim,
            seed,
            emit,
            json,
        } => cmd_demo(nodes, edges, dim, seed, emit, json),
    }
}

fn load_params(path: &Path) -> Result<RewardParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).context("failed to parse reward parameters")
}

fn cmd_replay(trace: &Path, params: Option<&Path>, per_step: bool, json: bool) -> Result<()> {
    let mut graph = ReasoningGraph::new();

    if let Some(path) = params {
        graph.set_reward_params(load_params(path)?);
        tracing::info!("loaded reward parameters from {}", path.display());
    }

    let content = fs::read_to_string(trace)
        .with_context(|| format!("failed to read {}", trace.display()))?;

    let mut steps = 0usize;
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = parse_event(line)
            .with_context(|| format!("bad trace event at line {}", lineno + 1))?;
        tracing::debug!(line = lineno + 1, ?event, "applying event");
        apply_event(&mut graph, event);
        steps += 1;

        if per_step {
            println!("step {:>4}  reward {:+.6}", steps, graph.compute_reward());
        }
    }

    tracing::info!("replayed {steps} events");
    print_summary(&graph.snapshot(), json)
}

fn cmd_demo(
    nodes: usize,
    edges: usize,
    dim: usize,
    seed: u64,
    emit: bool,
    json: bool,
) -> Result<()> {
    let events = generate_session(nodes, edges, dim, seed);

    if emit {
        for event in &events {
            println!("{}", event_to_line(event)?);
        }
        return Ok(());
    }

    let mut graph = ReasoningGraph::new();
    for event in events {
        apply_event(&mut graph, event);
    }

    tracing::info!("scored synthetic session: {nodes} nodes, {edges} edges, seed {seed}");
    print_summary(&graph.snapshot(), json)
}

/// Synthetic reasoning session from a seeded RNG: random unit-cube
/// embeddings, then random relation edges over the node range.
fn generate_session(nodes: usize, edges: usize, dim: usize, seed: u64) -> Vec<TraceEvent> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut events = Vec::with_capacity(nodes + edges);

    for i in 0..nodes {
        let embedding: Vec<f64> = (0..dim).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect();
        events.push(TraceEvent::AddNode {
            content: format!("concept-{i}"),
            embedding,
        });
    }

    if nodes > 0 {
        for _ in 0..edges {
            events.push(TraceEvent::AddEdge {
                source: rng.random_range(0..nodes),
                target: rng.random_range(0..nodes),
                weight: 1.0,
            });
        }
    }

    events
}

fn print_summary(snapshot: &MetricsSnapshot, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(snapshot).context("failed to serialize metrics")?
        );
        return Ok(());
    }

    println!("nodes:        {}", snapshot.nodes);
    println!("edges:        {}", snapshot.edges);
    println!("S_structural: {:.6}", snapshot.structural_entropy);
    println!("S_semantic:   {:.6}", snapshot.semantic_entropy);
    println!("discovery:    {:+.6}", snapshot.discovery);
    println!("surprising:   {:.4}", snapshot.surprising_fraction);
    println!("reward:       {:+.6}", snapshot.reward);
    Ok(())
}
