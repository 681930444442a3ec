/// Cadence - music catalog and playback from the command line
use anyhow::Context;
use cadence_catalog::CatalogClient;
use cadence_cli::{
    commands::{
        chart,
        play::{self, PlayOptions},
        playlist, search,
    },
    AppConfig,
};
use cadence_core::CuratedCollection;
use cadence_storage::{FileStore, PlaylistLibrary};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Search, chart and play music from the Cadence catalog", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./cadence.toml when present)
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search songs and playlists
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
        /// Maximum number of songs
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a curated collection
    Chart {
        /// Collection key (omit to list the available ones)
        collection: Option<CuratedCollection>,
    },
    /// Manage saved playlists
    Playlist {
        #[command(subcommand)]
        action: PlaylistAction,
    },
    /// Play the top search result and continue through the results
    Play {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
        /// Number of tracks to play
        #[arg(short = 'n', long, default_value_t = 1)]
        tracks: usize,
        /// Shuffle the remaining results
        #[arg(short, long)]
        shuffle: bool,
    },
}

#[derive(Subcommand)]
enum PlaylistAction {
    /// List saved playlists
    List,
    /// Show the songs of a saved playlist
    Show { name: String },
    /// Delete a saved playlist
    Delete { name: String },
    /// Save a catalog playlist locally
    Import {
        /// Catalog playlist id
        id: String,
        /// Local name (defaults to the catalog name)
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cadence=info,cadence_cli=info,cadence_playback=info,cadence_catalog=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search { query, limit } => {
            let client = CatalogClient::new(config.catalog.clone())?;
            let limit = limit.unwrap_or(config.playback.search_limit);
            search::run(&client, &query.join(" "), limit).await?;
        }
        Commands::Chart { collection: None } => {
            chart::list_collections();
        }
        Commands::Chart {
            collection: Some(collection),
        } => {
            let client = CatalogClient::new(config.catalog.clone())?;
            chart::run(&client, collection).await?;
        }
        Commands::Playlist { action } => {
            let mut library = open_library(&config)?;
            match action {
                PlaylistAction::List => playlist::list(&library),
                PlaylistAction::Show { name } => playlist::show(&library, &name)?,
                PlaylistAction::Delete { name } => {
                    playlist::delete(&mut library, &name)?;
                }
                PlaylistAction::Import { id, name } => {
                    let client = CatalogClient::new(config.catalog.clone())?;
                    playlist::import(&client, &mut library, &id, name.as_deref()).await?;
                }
            }
        }
        Commands::Play {
            query,
            tracks,
            shuffle,
        } => {
            let client = CatalogClient::new(config.catalog.clone())?;
            let store = open_store(&config)?;
            let options = PlayOptions {
                query: query.join(" "),
                tracks,
                shuffle,
            };
            play::run(config.playback.clone(), Arc::new(client), Box::new(store), &options)
                .await?;
        }
    }

    Ok(())
}

fn open_store(config: &AppConfig) -> anyhow::Result<FileStore> {
    FileStore::open(&config.storage.data_dir).with_context(|| {
        format!(
            "Failed to open data directory {}",
            config.storage.data_dir.display()
        )
    })
}

fn open_library(config: &AppConfig) -> anyhow::Result<PlaylistLibrary> {
    Ok(PlaylistLibrary::open(Box::new(open_store(config)?)))
}
