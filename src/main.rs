use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

use collatz::hailstone::{HailstoneConfig, HailstoneSequence, DEFAULT_MAX_TOTAL_STOPPING_TIME};
use collatz::{function, stopping, tree, Parameterisation};

#[derive(Parser, Debug)]
#[command(name = "collatz", about = "Generalised Collatz functions under (P, a, b)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Shared (P, a, b) flags; defaults give the classical map.
#[derive(Args, Debug)]
struct ParamArgs {
    /// Modulus P: n is divided by P when P divides n.
    #[arg(short = 'P', long = "modulus", default_value = "2", allow_hyphen_values = true)]
    p: BigInt,
    /// Multiplicand a, applied when P does not divide n.
    #[arg(short = 'a', long = "multiplicand", default_value = "3", allow_hyphen_values = true)]
    a: BigInt,
    /// Addend b, added after the multiplication.
    #[arg(short = 'b', long = "addend", default_value = "1", allow_hyphen_values = true)]
    b: BigInt,
}

impl ParamArgs {
    fn into_params(self) -> Parameterisation {
        Parameterisation {
            p: self.p,
            a: self.a,
            b: self.b,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply the map once.
    Step {
        /// Input value (any size, may be negative).
        #[arg(allow_hyphen_values = true)]
        value: BigInt,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// List the pre-images of a value.
    Reverse {
        /// Value to reverse.
        #[arg(allow_hyphen_values = true)]
        value: BigInt,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print the hailstone sequence and how it terminated.
    Hailstone {
        /// Initial value.
        #[arg(allow_hyphen_values = true)]
        value: BigInt,
        #[command(flatten)]
        params: ParamArgs,
        /// Iteration cap; values below 1 are treated as 1.
        #[arg(long, default_value_t = DEFAULT_MAX_TOTAL_STOPPING_TIME, allow_hyphen_values = true)]
        max_iterations: i64,
        /// Stop at the first value closer to zero instead of at 1.
        #[arg(long)]
        stopping_time: bool,
    },
    /// Print the stopping time (inf for cycles, -inf when the cap is hit).
    StoppingTime {
        /// Initial value.
        #[arg(allow_hyphen_values = true)]
        value: BigInt,
        #[command(flatten)]
        params: ParamArgs,
        /// Iteration cap; values below 1 are treated as 1.
        #[arg(long, default_value_t = DEFAULT_MAX_TOTAL_STOPPING_TIME, allow_hyphen_values = true)]
        max_iterations: i64,
        /// Count iterations to reach 1 instead.
        #[arg(long)]
        total: bool,
    },
    /// Print the reverse tree graph.
    Tree {
        /// Root value.
        #[arg(allow_hyphen_values = true)]
        value: BigInt,
        #[command(flatten)]
        params: ParamArgs,
        /// Maximum orbit distance (tree depth).
        #[arg(long, default_value_t = 3, allow_hyphen_values = true)]
        depth: i64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Step { value, params } => run_step(value, params.into_params())?,
        Commands::Reverse { value, params } => run_reverse(value, params.into_params())?,
        Commands::Hailstone {
            value,
            params,
            max_iterations,
            stopping_time,
        } => {
            let config = HailstoneConfig {
                params: params.into_params(),
                max_total_stopping_time: max_iterations,
                total_stopping_time: !stopping_time,
            };
            run_hailstone(value, config)?
        }
        Commands::StoppingTime {
            value,
            params,
            max_iterations,
            total,
        } => {
            let config = HailstoneConfig {
                params: params.into_params(),
                max_total_stopping_time: max_iterations,
                total_stopping_time: total,
            };
            run_stopping_time(value, config)?
        }
        Commands::Tree { value, params, depth } => run_tree(value, depth, params.into_params())?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_step(value: BigInt, params: Parameterisation) -> Result<()> {
    let next = function::step(&value, &params)
        .with_context(|| format!("step failed for {} under {}", value, params))?;
    println!("{}", next);
    Ok(())
}

fn run_reverse(value: BigInt, params: Parameterisation) -> Result<()> {
    let preimages = function::reverse_step(&value, &params)
        .with_context(|| format!("reverse step failed for {} under {}", value, params))?;
    let rendered: Vec<String> = preimages.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

fn run_hailstone(value: BigInt, config: HailstoneConfig) -> Result<()> {
    let hail = HailstoneSequence::compute(&value, &config)
        .with_context(|| format!("hailstone failed for {} under {}", value, config.params))?;
    let rendered: Vec<String> = hail.values().iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(", "));
    println!("{}\t{}", hail.terminal_condition(), hail.terminal_status());
    Ok(())
}

fn run_stopping_time(value: BigInt, config: HailstoneConfig) -> Result<()> {
    let time = stopping::stopping_time_with(&value, &config)
        .with_context(|| format!("stopping time failed for {} under {}", value, config.params))?;
    println!("{}", time);
    Ok(())
}

fn run_tree(value: BigInt, depth: i64, params: Parameterisation) -> Result<()> {
    let graph = tree::tree_graph(&value, depth, &params)
        .with_context(|| format!("tree graph failed for {} under {}", value, params))?;
    print!("{}", graph);
    Ok(())
}
