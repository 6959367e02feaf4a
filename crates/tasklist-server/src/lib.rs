pub mod render;
mod routes;

use anyhow::Result;
use tasklist_db::Db;
use tokio::net::TcpListener;

pub use routes::build_router;

pub async fn serve(listener: TcpListener, db: Db) -> Result<()> {
    let app = build_router(db);
    axum::serve(listener, app).await?;
    Ok(())
}
