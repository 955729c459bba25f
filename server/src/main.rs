use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use task_server::TaskStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3005".to_string());
    let addr = format!("127.0.0.1:{port}");
    let store = TaskStore::open("tasks.db")?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    task_server::run(listener, store).await?;
    Ok(())
}
