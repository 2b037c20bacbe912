//! Libris CLI - Interactive menu over the in-memory library catalog

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libris_core::{seed, Catalog};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the log filter
const LOG_ENV: &str = "LIBRIS_LOG";

#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file of books to load into the catalog at startup
    #[arg(long, global = true, env = "LIBRIS_SEED")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive library menu (default)
    Menu,

    /// Print the catalog contents and exit
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "libris_cli=debug,libris_core=debug"
    } else {
        "libris_cli=info"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr; stdout belongs to the menu.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut catalog = match &cli.seed {
        Some(path) => seed::load_catalog(path)
            .with_context(|| format!("Failed to load seed file: {}", path.display()))?,
        None => Catalog::new(),
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu(&mut catalog),
        Commands::List { json } => commands::list(&catalog, json),
    }
}
