use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Runtime configuration, resolved once at startup and passed down
/// explicitly. Flags override the environment; the environment overrides
/// the defaults.
#[derive(Parser)]
#[command(name = "tasklist-server", about = "Single-user task list web app")]
struct Config {
    /// Path to the SQLite database file
    #[arg(long, env = "TASK_DB_PATH", default_value = "/data/tasks.db")]
    db_path: PathBuf,

    /// Host address to bind
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind
    #[arg(long, env = "APP_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db = tasklist_db::Db::open(&config.db_path)?;

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = TcpListener::bind(addr).await?;
    // Startup banner only; per-request access logs are deliberately absent.
    tracing::info!("task manager available at http://{addr}");

    tasklist_server::serve(listener, db).await
}
