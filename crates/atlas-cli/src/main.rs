use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "atlas")]
#[command(about = "Atlas CLI - browse and administer a seeded profile directory", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip all simulated latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every profile in directory order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Filter profiles by search term and/or location
    Search {
        /// Matches name, description or interests
        #[arg(long)]
        term: Option<String>,
        /// Matches city, state or country
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show one profile and its map viewport
    Show {
        /// Profile id
        id: String,
    },
    /// Validate a JSON form payload without submitting it
    Validate {
        /// Path to a JSON file holding the form data
        file: PathBuf,
    },
    /// Run a scripted create, update and delete through the mutation pipeline
    Demo,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validation works on a file alone; skip config, tracing and seeding.
    if let Commands::Validate { file } = &cli.command {
        return commands::admin::validate_file(file);
    }

    let ctx = commands::utils::bootstrap(cli.config.as_deref(), cli.instant).await?;

    match cli.command {
        Commands::List { json } => commands::browse::list(&ctx, json).await?,
        Commands::Search {
            term,
            location,
            json,
        } => commands::browse::search(&ctx, term, location, json).await?,
        Commands::Show { id } => commands::browse::show(&ctx, &id).await?,
        Commands::Validate { file } => commands::admin::validate_file(&file)?,
        Commands::Demo => commands::admin::demo(&ctx).await?,
    }

    Ok(())
}
