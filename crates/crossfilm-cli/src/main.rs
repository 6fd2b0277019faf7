use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crossfilm_cli::FilterArgs;

mod commands;

use commands::{cmd_apply, cmd_assets_extract, cmd_assets_list, cmd_batch, cmd_curves};

#[derive(Parser)]
#[command(name = "crossfilm")]
#[command(version, about = "Cross-processing film look for images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the cross-processing curve to one image
    Apply {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Print settings and debug messages
        #[arg(short, long)]
        verbose: bool,
    },

    /// Process many images with shared settings
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Print debug messages
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the lookup tables for a set of curve parameters
    Curves {
        /// Sigmoid midpoint
        #[arg(long, value_name = "FLOAT", default_value = "0.5", allow_negative_numbers = true)]
        midpoint: f64,

        /// Sigmoid steepness
        #[arg(long, value_name = "FLOAT", default_value = "10", allow_negative_numbers = true)]
        factor: f64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Inspect the embedded assets
    Assets {
        #[command(subcommand)]
        action: AssetsAction,
    },
}

#[derive(Subcommand)]
enum AssetsAction {
    /// List embedded assets
    List,

    /// Write embedded assets to a directory
    Extract {
        /// Destination directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Only extract this asset
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            input,
            out,
            filter,
            silent,
            verbose,
        } => cmd_apply(input, out, filter, silent, verbose),

        Commands::Batch {
            inputs,
            recursive,
            out,
            threads,
            filter,
            silent,
            verbose,
        } => cmd_batch(inputs, recursive, out, threads, filter, silent, verbose),

        Commands::Curves {
            midpoint,
            factor,
            json,
        } => cmd_curves(midpoint, factor, json),

        Commands::Assets { action } => match action {
            AssetsAction::List => cmd_assets_list(),
            AssetsAction::Extract { dir, name } => cmd_assets_extract(dir, name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
