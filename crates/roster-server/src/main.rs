//! roster server binary.
//!
//! Reads `roster.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, seeds the configured departments, and serves the
//! JSON API under `/api`.

mod seed;
mod settings;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use roster_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Roster employee directory server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let seeded =
    seed::seed_departments(&store.departments(), &server_cfg.departments)
      .await
      .context("failed to seed departments")?;
  tracing::info!(seeded, "departments ready");

  let app = Router::new()
    .nest("/api", roster_api::api_router(Arc::new(store.directory())))
    .layer(TraceLayer::new_for_http());

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expand_tilde_leaves_plain_paths_alone() {
    assert_eq!(
      expand_tilde(Path::new("data/roster.db")),
      PathBuf::from("data/roster.db")
    );
    assert_eq!(
      expand_tilde(Path::new("/var/lib/roster.db")),
      PathBuf::from("/var/lib/roster.db")
    );
  }

  #[test]
  fn cli_defaults_to_roster_toml() {
    let cli = Cli::parse_from(["roster"]);
    assert_eq!(cli.config, PathBuf::from("roster.toml"));

    let cli = Cli::parse_from(["roster", "--config", "/etc/roster.toml"]);
    assert_eq!(cli.config, PathBuf::from("/etc/roster.toml"));
  }
}
