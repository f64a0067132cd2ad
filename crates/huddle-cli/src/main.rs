//! CLI frontend for Huddle: roster checks, lucky draws, and random grouping.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "huddle",
    about = "Huddle: lucky draws and random groups for events",
    version,
    propagate_version = true
)]
struct Cli {
    /// TOML config file (default: ./huddle.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the roster comes from.
#[derive(Args, Debug, Clone)]
pub struct RosterSource {
    /// Roster file, one name per line; use '-' for stdin
    pub file: Option<PathBuf>,

    /// Keep whole lines instead of cutting each at the first comma
    #[arg(long)]
    pub plain: bool,

    /// Use the built-in sample roster instead of a file
    #[arg(long, conflicts_with = "file")]
    pub sample: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the normalized roster and flag repeated names
    Roster {
        #[command(flatten)]
        source: RosterSource,

        /// Drop repeated names, keeping the first occurrence
        #[arg(long)]
        dedupe: bool,
    },

    /// Draw lucky winners from the roster
    Draw {
        #[command(flatten)]
        source: RosterSource,

        /// Number of winners to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Let the same person win more than once
        #[arg(long)]
        allow_duplicates: bool,

        /// RNG seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,

        /// Show this many spinning names before each winner
        #[arg(long, default_value = "0")]
        spin: usize,
    },

    /// Split the roster into random groups
    Group {
        #[command(flatten)]
        source: RosterSource,

        /// People per group (clamped to 2..=roster size)
        #[arg(short, long)]
        size: Option<usize>,

        /// RNG seed for reproducible groups
        #[arg(long)]
        seed: Option<u64>,

        /// Write the groups as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the CSV to a dated file in the current directory
        #[arg(long, conflicts_with = "output")]
        export: bool,

        /// Ask the naming service for fun group names
        #[arg(long)]
        name_groups: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = config::load(cli.config.as_deref())
        .map_err(|e| e.to_string())
        .and_then(|cfg| {
            debug!(path = ?cli.config, "configuration loaded");
            match cli.command {
                Commands::Roster { source, dedupe } => commands::roster::run(&source, dedupe),
                Commands::Draw {
                    source,
                    count,
                    allow_duplicates,
                    seed,
                    spin,
                } => {
                    let mut draw = cfg.draw;
                    draw.allow_duplicates |= allow_duplicates;
                    if let Some(seed) = seed {
                        draw = draw.with_seed(seed);
                    }
                    commands::draw::run(&source, &draw, count, spin)
                }
                Commands::Group {
                    source,
                    size,
                    seed,
                    output,
                    export,
                    name_groups,
                } => {
                    let mut grouping = cfg.grouping_config();
                    if let Some(size) = size {
                        grouping = grouping.with_group_size(size);
                    }
                    if let Some(seed) = seed {
                        grouping = grouping.with_seed(seed);
                    }
                    let output = output.or_else(|| export.then(commands::group::dated_output));
                    commands::group::run(&source, grouping, output.as_deref(), name_groups)
                }
            }
        });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
