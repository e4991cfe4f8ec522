//! CLI entry point for folio-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::{self, list::ListOptions, Collection};
use folio_rs::Site;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Build-time content pipeline for posts, projects and the RSS feed", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the RSS feed into the public directory
    #[command(alias = "g")]
    Generate,

    /// List posts, projects or tags
    List {
        /// Type of content to list (posts, projects, tags)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Show only the first N entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Keep posts carrying any of these tags
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Order posts newest first instead of by priority
        #[arg(long)]
        by_date: bool,
    },

    /// Print one post or project with its rendered content
    Show {
        /// Collection (posts, projects)
        collection: Collection,

        /// Entity id (file name without extension)
        id: String,
    },

    /// Print the static paths to pre-render, one per id and locale
    Paths {
        /// Collection (posts, projects)
        #[arg(default_value = "posts")]
        collection: Collection,
    },

    /// Remove the generated feed
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let site = Site::new(&base_dir)?;

    match cli.command {
        Commands::Generate => {
            tracing::info!("Generating feed...");
            let path = commands::generate::run(&site)?;
            println!("Generated {}", path.display());
        }

        Commands::List {
            r#type,
            limit,
            tags,
            by_date,
        } => {
            let options = ListOptions {
                limit,
                tags,
                by_date,
            };
            commands::list::run(&site, &r#type, &options)?;
        }

        Commands::Show { collection, id } => {
            commands::show::run(&site, collection, &id)?;
        }

        Commands::Paths { collection } => {
            commands::paths::run(&site, collection)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning generated feed...");
            commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
