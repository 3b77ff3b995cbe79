//! Armory API Server
//!
//! Loads the Destiny 2 manifest once at startup and serves weapon search.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use armory::{Config, WeaponIndex};
use armory_server::{router, AppState};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "armory-server")]
#[command(about = "Weapon search API over the Destiny 2 manifest")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Load the manifest and start the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "8080")]
        port: u16,

        /// Bind address
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
        bind: String,

        /// Directory for cached manifest content
        #[arg(short, long, env = "CACHE_DIR")]
        cache_dir: Option<PathBuf>,

        /// Bungie API key
        #[arg(long, env = "BUNGIE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Manifest locale
        #[arg(short, long, env = "MANIFEST_LOCALE")]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            bind,
            cache_dir,
            api_key,
            locale,
        } => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                        "armory=info,armory_server=info,tower_http=debug".into()
                    }),
                )
                .with(tracing_subscriber::fmt::layer())
                .init();

            let config = Config::new(api_key, cache_dir, locale)?;
            tracing::info!(
                "Manifest locale {}, cache at {}",
                config.locale,
                config.cache_dir.display()
            );

            let index = Arc::new(WeaponIndex::new());
            let loading = Arc::clone(&index);
            let summary =
                tokio::task::spawn_blocking(move || armory::load_from_config(&config, &loading))
                    .await
                    .context("manifest load task panicked")??;
            tracing::info!(
                "Serving {} weapons (manifest {})",
                summary.weapon_count,
                summary.version
            );

            let app = router(Arc::new(AppState { index }));

            let bind_addr = format!("{}:{}", bind, port);
            tracing::info!("Starting server on {}", bind_addr);
            tracing::info!("OpenAPI spec available at /api/openapi.json");
            tracing::info!("Interactive docs at /api/scalar");

            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
