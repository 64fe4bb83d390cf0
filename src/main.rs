//! `shopping-list-server`: runs the resource service, or fetches from one.
//!
//! # Usage
//!
//! ```text
//! shopping-list-server serve                                   # SQLite at ./shopping.db
//! shopping-list-server serve --memory --seed                   # in-memory, demo items
//! shopping-list-server serve --database-url sqlite:///data/list.db -l 0.0.0.0:5080
//! shopping-list-server -c shopping.toml serve                  # settings from a file
//! shopping-list-server fetch --base-url http://127.0.0.1:5080  # print the list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use shopping_list::clients::{HttpShoppingListClient, ShoppingListGateway};
use shopping_list::config::{AppConfig, ConfigOverrides};
use shopping_list::lifecycle::{setup_tracing, ShoppingListSystem};

#[derive(Parser)]
#[command(
    name = "shopping-list-server",
    version,
    about = "Shopping list resource service"
)]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve `GET /shopping-list` until Ctrl-C.
    Serve {
        /// Override the listen address (e.g. "0.0.0.0:5080").
        #[arg(short, long)]
        listen_addr: Option<String>,

        /// Store connection string.
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Keep items in memory instead of SQLite.
        #[arg(short, long)]
        memory: bool,

        /// Insert the demo items if the store is empty.
        #[arg(long)]
        seed: bool,
    },

    /// Fetch the list from a running service and print one title per line.
    Fetch {
        #[arg(long, default_value = "http://127.0.0.1:5080")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;

    setup_tracing(&config.log.level);

    match cli.command {
        Commands::Serve {
            listen_addr,
            database_url,
            memory,
            seed,
        } => {
            config.apply(ConfigOverrides {
                listen_addr,
                database_url,
                memory,
                seed,
            });
            serve(&config).await
        }
        Commands::Fetch { base_url } => fetch(&base_url).await,
    }
}

async fn serve(config: &AppConfig) -> Result<()> {
    let system = ShoppingListSystem::start(config)
        .await
        .context("failed to start shopping list service")?;
    info!(url = %system.base_url(), "Shopping list service ready");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    system.shutdown().await?;
    Ok(())
}

async fn fetch(base_url: &str) -> Result<()> {
    let gateway = HttpShoppingListClient::new(base_url)?;
    let items = gateway
        .fetch_shopping_list()
        .await
        .with_context(|| format!("failed to fetch shopping list from {base_url}"))?;

    for item in items {
        println!("{}", item.title);
    }
    Ok(())
}
