//! Default seed script - populates the full demo workflow dataset
//!
//! Run with:
//! ```
//! cargo run -p demo-data --bin seed
//! ```
//!
//! Set `SEED` to reproduce a previous run, `DATABASE_URL` (or the `DB_*`
//! variables) to pick the target database.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::postgres::PgPoolOptions;

use demo_data::builders::DatasetBuilder;
use demo_data::config::DbConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DbConfig::from_env().url());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let seed = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    tracing::info!("Using seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);

    let dataset = DatasetBuilder::full_demo().build(&pool, &mut rng).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Organizations: {}", dataset.organizations.len());
    tracing::info!("  Users: {}", dataset.users.len());
    tracing::info!("  Catalog entries: {}", dataset.products.len());
    tracing::info!("  Assets: {}", dataset.assets.len());
    tracing::info!("  Service orders: {}", dataset.service_orders.len());
    tracing::info!("  Triage events: {}", dataset.triage_events.len());
    tracing::info!("  Compliance checks: {}", dataset.compliance_checks.len());
    tracing::info!("  Total rows: {}", dataset.total_rows());

    Ok(())
}
