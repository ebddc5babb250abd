use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cycle_tracker::{config::Config, store::Store, tracker::Tracker};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!("🗄️ Opening store at {}", config.database_url);
    let store = Store::connect(&config.database_url).await?;
    let app = cycle_tracker::app(Tracker::new(store));

    tracing::info!("🧠 Tracker running at {}", config.bind_address);

    axum::serve(
        tokio::net::TcpListener::bind(config.bind_address).await?,
        app.into_make_service(),
    )
    .await?;

    Ok(())
}
