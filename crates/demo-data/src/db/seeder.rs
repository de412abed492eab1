//! Database seeding utilities.

use sqlx::{PgConnection, PgPool};
use thiserror::Error;
use tracing::info;

use crate::builders::GeneratedDataset;
use crate::generators::{
    GeneratedAsset, GeneratedComplianceCheck, GeneratedOrganization, GeneratedProduct,
    GeneratedServiceOrder, GeneratedTriageEvent, GeneratedUser,
};

/// Tables in reverse dependency order, safe for deletion.
const CLEAR_ORDER: [&str; 7] = [
    "compliance_checks",
    "triage_events",
    "service_orders",
    "assets",
    "product_catalog",
    "users",
    "organizations",
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("Write to {table} failed: {source}")]
    Write {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Database seeder for inserting generated demo data.
///
/// All inserts for one dataset run inside a single transaction; if any write
/// fails the transaction rolls back and the database is left untouched.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 50,
        }
    }

    /// Sets how many rows are written between progress log lines.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Seeds a complete dataset atomically.
    ///
    /// Insertion follows foreign key order: organizations, users, products,
    /// assets, service orders, then triage events and compliance checks.
    pub async fn seed_dataset(&self, dataset: &GeneratedDataset) -> Result<(), SeedError> {
        info!("Seeding dataset ({} rows total)...", dataset.total_rows());

        let mut tx = self.pool.begin().await.map_err(SeedError::Connection)?;

        self.insert_organizations(&mut tx, &dataset.organizations)
            .await?;
        self.insert_users(&mut tx, &dataset.users).await?;
        self.insert_products(&mut tx, &dataset.products).await?;
        self.insert_assets(&mut tx, &dataset.assets).await?;
        self.insert_service_orders(&mut tx, &dataset.service_orders)
            .await?;
        self.insert_triage_events(&mut tx, &dataset.triage_events)
            .await?;
        self.insert_compliance_checks(&mut tx, &dataset.compliance_checks)
            .await?;

        tx.commit().await.map_err(SeedError::Connection)?;

        info!("Committed {} rows", dataset.total_rows());
        Ok(())
    }

    /// Inserts organizations.
    async fn insert_organizations(
        &self,
        conn: &mut PgConnection,
        organizations: &[GeneratedOrganization],
    ) -> Result<(), SeedError> {
        info!("Seeding {} organizations...", organizations.len());

        for org in organizations {
            sqlx::query(
                r#"
                INSERT INTO organizations (org_id, name, type, country_code)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(org.id)
            .bind(&org.name)
            .bind(org.org_type.as_str())
            .bind(&org.country_code)
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "organizations",
                source: e,
            })?;
        }

        info!("Seeded {} organizations", organizations.len());
        Ok(())
    }

    /// Inserts staff members.
    async fn insert_users(
        &self,
        conn: &mut PgConnection,
        users: &[GeneratedUser],
    ) -> Result<(), SeedError> {
        info!("Seeding {} users...", users.len());

        for user in users {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, username, role, home_branch_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user.id)
            .bind(&user.username)
            .bind(user.role.as_str())
            .bind(user.home_branch_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "users",
                source: e,
            })?;
        }

        info!("Seeded {} users", users.len());
        Ok(())
    }

    /// Inserts catalog entries.
    async fn insert_products(
        &self,
        conn: &mut PgConnection,
        products: &[GeneratedProduct],
    ) -> Result<(), SeedError> {
        info!("Seeding {} catalog entries...", products.len());

        for product in products {
            sqlx::query(
                r#"
                INSERT INTO product_catalog (model_id, device_name, risk_class)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(product.id)
            .bind(&product.device_name)
            .bind(product.risk_class.as_str())
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "product_catalog",
                source: e,
            })?;
        }

        info!("Seeded {} catalog entries", products.len());
        Ok(())
    }

    /// Inserts assets.
    async fn insert_assets(
        &self,
        conn: &mut PgConnection,
        assets: &[GeneratedAsset],
    ) -> Result<(), SeedError> {
        info!("Seeding {} assets...", assets.len());

        for asset in assets {
            sqlx::query(
                r#"
                INSERT INTO assets (asset_id, serial_number, model_id, owner_org_id, warranty_expiry)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(asset.id)
            .bind(&asset.serial_number)
            .bind(asset.model_id)
            .bind(asset.owner_org_id)
            .bind(asset.warranty_expiry)
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "assets",
                source: e,
            })?;
        }

        info!("Seeded {} assets", assets.len());
        Ok(())
    }

    /// Inserts service orders with progress reporting.
    async fn insert_service_orders(
        &self,
        conn: &mut PgConnection,
        orders: &[GeneratedServiceOrder],
    ) -> Result<(), SeedError> {
        info!("Seeding {} service orders...", orders.len());

        for (i, order) in orders.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO service_orders (so_id, asset_id, handling_branch_id, customer_org_id, current_stage)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.id)
            .bind(order.asset_id)
            .bind(order.handling_branch_id)
            .bind(order.customer_org_id)
            .bind(order.stage.as_str())
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "service_orders",
                source: e,
            })?;

            if (i + 1) % self.batch_size == 0 {
                info!("  Seeded {}/{} service orders", i + 1, orders.len());
            }
        }

        info!("Seeded {} service orders", orders.len());
        Ok(())
    }

    /// Inserts triage events.
    async fn insert_triage_events(
        &self,
        conn: &mut PgConnection,
        events: &[GeneratedTriageEvent],
    ) -> Result<(), SeedError> {
        info!("Seeding {} triage events...", events.len());

        for event in events {
            sqlx::query(
                r#"
                INSERT INTO triage_events (event_id, so_id, inspector_id, findings)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(event.id)
            .bind(event.service_order_id)
            .bind(event.inspector_id)
            .bind(&event.findings)
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "triage_events",
                source: e,
            })?;
        }

        info!("Seeded {} triage events", events.len());
        Ok(())
    }

    /// Inserts compliance checks.
    async fn insert_compliance_checks(
        &self,
        conn: &mut PgConnection,
        checks: &[GeneratedComplianceCheck],
    ) -> Result<(), SeedError> {
        info!("Seeding {} compliance checks...", checks.len());

        for check in checks {
            sqlx::query(
                r#"
                INSERT INTO compliance_checks (check_id, so_id, qa_manager_id, is_passed, electronic_signature_hash)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(check.id)
            .bind(check.service_order_id)
            .bind(check.qa_manager_id)
            .bind(check.passed)
            .bind(&check.signature_hash)
            .execute(&mut *conn)
            .await
            .map_err(|e| SeedError::Write {
                table: "compliance_checks",
                source: e,
            })?;
        }

        info!("Seeded {} compliance checks", checks.len());
        Ok(())
    }

    /// Clears all seeded demo data.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        for table in CLEAR_ORDER {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&self.pool)
                .await
                .map_err(|e| SeedError::Write { table, source: e })?;
        }

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
