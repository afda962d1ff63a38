//! orderit-store — process bootstrap
//!
//! Opens the store (migrations + initial users) and reports readiness. The
//! GUI shell attaches on top of the opened store; running this binary alone
//! verifies the database end to end.

use orderit_store::{Config, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderit_store=info".into()),
        )
        .init();

    let config = Config::from_env();
    let store = Store::open(&config).await?;

    // Readiness probe: a paged, sorted read through the full stack.
    let tables = store.dining_tables.list(0, 10, Some("name")).await?;
    tracing::info!(
        database_url = %config.database_url,
        dining_tables = tables.len(),
        "orderit store ready"
    );
    Ok(())
}
