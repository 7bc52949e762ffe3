//! ontosim CLI
//!
//! - `build`: component record (JSON) → knowledge graph (Turtle)
//! - `extract`: graph → constraint map (JSON)
//! - `sensors`: graph → sensor definitions (JSON)
//! - `simulate`: graph → synthetic telemetry (CSV)
//! - `run`: all of the above, through the on-disk graph

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod pipeline;
mod recorder;

use config::{Overrides, SimulationConfig};

#[derive(Parser)]
#[command(name = "ontosim")]
#[command(
    author,
    version,
    about = "Component knowledge graphs and constraint-driven synthetic telemetry"
)]
struct Cli {
    /// JSON file with simulation settings (flags override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the component graph from a record and write it as Turtle
    Build {
        /// Input record JSON (`{"data": {"terms": [...], "relations": [...]}}`)
        input: PathBuf,
        /// Output graph (`.ttl`)
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Extract the per-component constraint map from a graph
    Extract {
        /// Input graph (`.ttl` or `.nt`)
        graph: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        namespace: Option<String>,
    },

    /// List the sensors derived from a graph's constraints
    Sensors {
        graph: PathBuf,
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Generate synthetic readings for every derived sensor
    Simulate {
        graph: PathBuf,
        /// Output CSV
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        sim: SimArgs,
    },

    /// Full pipeline: record → graph file → constraints → readings
    Run {
        input: PathBuf,
        /// Where to write the intermediate graph
        #[arg(long)]
        graph: PathBuf,
        /// Output CSV
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        sim: SimArgs,
    },
}

#[derive(Args, Clone, Debug)]
struct SimArgs {
    #[arg(long)]
    namespace: Option<String>,
    /// Ticks per sensor (one minute apart)
    #[arg(long)]
    samples: Option<usize>,
    /// First timestamp, `YYYY-MM-DD HH:MM:SS`
    #[arg(long)]
    base_time: Option<String>,
    /// Seed for reproducible readings
    #[arg(long)]
    seed: Option<u64>,
}

impl From<SimArgs> for Overrides {
    fn from(args: SimArgs) -> Self {
        Overrides {
            namespace: args.namespace,
            samples: args.samples,
            base_time: args.base_time,
            seed: args.seed,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SimulationConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            input,
            out,
            namespace,
        } => {
            let config = config.apply(Overrides {
                namespace,
                ..Overrides::default()
            });
            let summary = pipeline::build_graph(&input, &out, &config.namespace)?;
            println!(
                "{} {} ({} triples)",
                "✓ Built".green(),
                out.display(),
                summary.triples
            );
        }
        Commands::Extract {
            graph,
            out,
            namespace,
        } => {
            let namespace = namespace.unwrap_or(config.namespace);
            let constraints = pipeline::load_constraints(&graph, &namespace)?;
            write_json(&constraints, out.as_deref())?;
        }
        Commands::Sensors { graph, namespace } => {
            let namespace = namespace.unwrap_or(config.namespace);
            let sensors = pipeline::load_sensors(&graph, &namespace)?;
            write_json(&sensors, None)?;
        }
        Commands::Simulate { graph, out, sim } => {
            let config = config.apply(sim.into());
            let summary = pipeline::simulate(&graph, &out, &config)?;
            print_simulation(&out, &summary);
        }
        Commands::Run {
            input,
            graph,
            out,
            sim,
        } => {
            let config = config.apply(sim.into());
            let built = pipeline::build_graph(&input, &graph, &config.namespace)?;
            println!(
                "{} {} ({} triples)",
                "✓ Built".green(),
                graph.display(),
                built.triples
            );
            let summary = pipeline::simulate(&graph, &out, &config)?;
            print_simulation(&out, &summary);
        }
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("{} {}", "✓ Wrote".green(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn print_simulation(out: &Path, summary: &pipeline::SimulationSummary) {
    println!(
        "{} {} ({} readings from {} sensors)",
        "✓ Recorded".green(),
        out.display(),
        summary.readings,
        summary.sensors
    );
}
