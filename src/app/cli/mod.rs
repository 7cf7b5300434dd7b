//! CLI Adapter.

mod init;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gas-init")]
#[command(version)]
#[command(about = "Scaffold and configure Google Apps Script projects", long_about = None)]
struct Cli {
    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize or update a project: manifest, configs, dependencies, clasp
    #[clap(visible_alias = "i")]
    Init {
        /// Project directory (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Project title
        #[arg(short, long)]
        title: Option<String>,
        /// Answer yes to every confirmation and accept prompt defaults
        #[arg(short, long, conflicts_with = "no")]
        yes: bool,
        /// Answer no to every confirmation
        #[arg(short, long, conflicts_with = "yes")]
        no: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { dir, title, yes, no } => init::run_init(dir, title, yes, no),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins when set and no `-v` was given; default is warnings only.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
