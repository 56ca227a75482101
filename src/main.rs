//! Swarm Sim entry point
//!
//! Reads puzzle input, runs one of the two solvers and prints its results.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use swarm_sim::input::{parse_generator_seeds, parse_particles};
use swarm_sim::sim::generate_cloud;
use swarm_sim::{Result, Settings, run_judge, run_swarm};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file overriding the defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of `Part N:` lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Particle swarm: closest to origin, then survivors after collisions
    Particles {
        /// Particle input file, one `p=<..>, v=<..>, a=<..>` per line
        #[arg(default_value = "input")]
        input: PathBuf,

        /// Ignore INPUT and simulate a random cloud of this many particles
        #[arg(long)]
        random: Option<usize>,

        /// Seed for `--random`
        #[arg(long)]
        seed: Option<u64>,

        /// Non-collision steps before the closest-to-origin query
        #[arg(long)]
        closest_steps: Option<u32>,

        /// Collision-aware steps before counting survivors
        #[arg(long)]
        collision_steps: Option<u32>,
    },
    /// Generator judge: matching low bits over many pairs
    Generators {
        /// Seed input file naming the start values of generators A and B
        #[arg(default_value = "input")]
        input: PathBuf,

        /// Number of pairs to compare
        #[arg(long)]
        pairs: Option<u64>,
    },
}

fn emit<T: Serialize>(json: bool, report: &T, lines: &[String]) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut settings = Settings::load_or_default(args.config.as_deref())?;

    match args.command {
        Command::Particles {
            input,
            random,
            seed,
            closest_steps,
            collision_steps,
        } => {
            if let Some(steps) = closest_steps {
                settings.closest_steps = steps;
            }
            if let Some(steps) = collision_steps {
                settings.collision_steps = steps;
            }
            if let Some(seed) = seed {
                settings.cloud.seed = seed;
            }

            let conditions = match random {
                Some(count) => generate_cloud(settings.cloud.seed, count, settings.cloud.spread),
                None => parse_particles(&fs::read_to_string(&input)?)?,
            };
            let report = run_swarm(conditions, &settings);
            emit(args.json, &report, &report.lines())
        }
        Command::Generators { input, pairs } => {
            if let Some(pairs) = pairs {
                settings.judge.pairs = pairs;
            }
            let seeds = parse_generator_seeds(&fs::read_to_string(&input)?)?;
            let report = run_judge(seeds, &settings.judge)?;
            emit(args.json, &report, &report.lines())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Swarm Sim starting...");

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{e}");
        return Err(e);
    }
    Ok(())
}
