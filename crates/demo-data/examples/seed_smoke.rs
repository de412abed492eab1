//! Example: Seed a small smoke-test dataset.
//!
//! This creates a handful of rows in every table, enough to click around the
//! workflow without waiting on the full demo dataset:
//! - 3 organizations with 8 staff members
//! - 4 catalog entries, 15 assets
//! - 40 service orders across all workflow stages
//!
//! Run with:
//! ```
//! cargo run -p demo-data --example seed_smoke
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::postgres::PgPoolOptions;

use demo_data::builders::DatasetBuilder;
use demo_data::config::DbConfig;
use demo_data::generators::WorkflowStage;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Connect to database
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DbConfig::from_env().url());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    // Fixed seed so repeated smoke runs produce identical data
    let mut rng = StdRng::seed_from_u64(42);

    let dataset = DatasetBuilder::smoke_test().build(&pool, &mut rng).await?;

    tracing::info!("Smoke dataset seeded successfully!");
    tracing::info!("  Organizations: {}", dataset.organizations.len());
    tracing::info!("  Users: {}", dataset.users.len());
    tracing::info!("  Assets: {}", dataset.assets.len());
    tracing::info!("  Service orders: {}", dataset.service_orders.len());

    // Print the stage spread
    tracing::info!("Orders per stage:");
    for stage in WorkflowStage::ALL {
        let count = dataset
            .service_orders
            .iter()
            .filter(|o| o.stage == stage)
            .count();
        tracing::info!("  {}: {}", stage.as_str(), count);
    }

    Ok(())
}
