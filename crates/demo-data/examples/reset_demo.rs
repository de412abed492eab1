//! Example: Wipe all seeded data and rebuild the full demo dataset.
//!
//! Deletes every row from the workflow tables (reverse foreign key order),
//! then reseeds the standard demo dataset from a fresh random seed.
//!
//! Run with:
//! ```
//! cargo run -p demo-data --example reset_demo
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::postgres::PgPoolOptions;

use demo_data::builders::DatasetBuilder;
use demo_data::config::DbConfig;
use demo_data::db::Seeder;
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

    let seeder = Seeder::new(pool.clone());
    seeder.clear_all().await?;

    let seed: u64 = rand::random();
    tracing::info!("Reseeding with seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let dataset = DatasetBuilder::full_demo().build(&pool, &mut rng).await?;

    tracing::info!("Demo dataset rebuilt: {} rows", dataset.total_rows());

    Ok(())
}
