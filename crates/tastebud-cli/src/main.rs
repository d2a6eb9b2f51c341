use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tastebud_core::config::AppConfig;
use tastebud_core::restaurant::PriceTier;
use tastebud_infrastructure::{ConfigService, TastebudPaths};

mod commands;

#[derive(Parser)]
#[command(name = "tastebud")]
#[command(about = "Tastebud - swipe your way to the next restaurant", long_about = None)]
struct Cli {
    /// Keep config and data under this directory instead of the platform default
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Swipe through restaurants matching the filters (interactive)
    Discover {
        /// Taste tag to match (repeatable); replaces the profile's tags
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Lowest price you want to pay
        #[arg(long)]
        min: Option<u32>,
        /// Highest price you want to pay
        #[arg(long)]
        max: Option<u32>,
        /// Free-text search over name, cuisine and tags
        #[arg(long)]
        query: Option<String>,
        /// Price tier ($, $$, $$$, $$$$), repeatable
        #[arg(long = "tier")]
        tiers: Vec<PriceTier>,
    },
    /// Set up your profile and first taste tags
    Onboard {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        /// Taste tag (at least three)
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },
    /// Show or edit your profile and preferences
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Add a restaurant to the catalog
    Add(commands::add::AddArgs),
    /// List the filtered restaurants and the three nearest
    Map,
    /// Print a maps link for a restaurant's address
    Directions { id: String },
    /// List every tag in the catalog
    Tags,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Update profile fields and preferences
    Set(commands::profile::ProfileArgs),
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.root {
        Some(root) => TastebudPaths::with_root(root),
        None => TastebudPaths::resolve()?,
    };
    let loaded = ConfigService::new(paths.clone()).try_get_config();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };
    init_tracing(&log_level);
    if let Err(e) = &loaded {
        tracing::warn!(
            "Failed to load {}, using defaults: {}",
            paths.config_file().display(),
            e
        );
    }
    tracing::debug!("Data directory: {}", paths.data_dir().display());

    match cli.command.unwrap_or(Commands::Discover {
        tags: Vec::new(),
        min: None,
        max: None,
        query: None,
        tiers: Vec::new(),
    }) {
        Commands::Discover {
            tags,
            min,
            max,
            query,
            tiers,
        } => {
            let filters = commands::discover::StartFilters {
                tags,
                min,
                max,
                query,
                tiers,
            };
            commands::discover::run(paths, filters).await?
        }
        Commands::Onboard {
            name,
            location,
            tags,
        } => commands::profile::onboard(paths, name, location, tags).await?,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(paths).await?,
            ProfileAction::Set(args) => commands::profile::set(paths, args).await?,
        },
        Commands::Add(args) => commands::add::run(paths, args).await?,
        Commands::Map => commands::catalog::map(paths).await?,
        Commands::Directions { id } => commands::catalog::directions(paths, &id).await?,
        Commands::Tags => commands::catalog::tags(paths).await?,
    }

    Ok(())
}
