//! Fluent builder for constructing complete demo datasets.

use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder};
use crate::generators::{
    asset::{AssetGenConfig, AssetGenerator, GeneratedAsset},
    organization::{GeneratedOrganization, OrganizationGenerator},
    product::{GeneratedProduct, ProductGenerator},
    service_order::{
        GeneratedComplianceCheck, GeneratedServiceOrder, GeneratedTriageEvent,
        ServiceOrderGenerator,
    },
    user::{GeneratedUser, UserGenConfig, UserGenerator},
};

/// Result of building a dataset: every generated row, grouped by table.
#[derive(Debug)]
pub struct GeneratedDataset {
    pub organizations: Vec<GeneratedOrganization>,
    pub users: Vec<GeneratedUser>,
    pub products: Vec<GeneratedProduct>,
    pub assets: Vec<GeneratedAsset>,
    pub service_orders: Vec<GeneratedServiceOrder>,
    pub triage_events: Vec<GeneratedTriageEvent>,
    pub compliance_checks: Vec<GeneratedComplianceCheck>,
}

impl GeneratedDataset {
    /// Total number of rows across all tables.
    pub fn total_rows(&self) -> usize {
        self.organizations.len()
            + self.users.len()
            + self.products.len()
            + self.assets.len()
            + self.service_orders.len()
            + self.triage_events.len()
            + self.compliance_checks.len()
    }
}

/// Builder for creating complete workflow datasets.
///
/// # Example
///
/// ```rust,ignore
/// let dataset = DatasetBuilder::full_demo()
///     .with_service_orders(500)
///     .build(&pool, &mut rng)
///     .await?;
/// ```
pub struct DatasetBuilder {
    counts: SeedConfig,
    user_config: UserGenConfig,
    asset_config: AssetGenConfig,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a new dataset builder with default settings.
    pub fn new() -> Self {
        Self {
            counts: SeedConfig::default(),
            user_config: UserGenConfig::default(),
            asset_config: AssetGenConfig::default(),
        }
    }

    /// Sets all entity counts at once.
    pub fn with_counts(mut self, counts: SeedConfig) -> Self {
        self.counts = counts;
        self
    }

    /// Sets the number of organizations to generate.
    pub fn with_organizations(mut self, count: usize) -> Self {
        self.counts.organization_count = count;
        self
    }

    /// Sets the number of staff members to generate.
    pub fn with_users(mut self, count: usize) -> Self {
        self.counts.user_count = count;
        self
    }

    /// Sets the number of catalog entries to generate.
    pub fn with_products(mut self, count: usize) -> Self {
        self.counts.product_count = count;
        self
    }

    /// Sets the number of assets to generate.
    pub fn with_assets(mut self, count: usize) -> Self {
        self.counts.asset_count = count;
        self
    }

    /// Sets the number of service orders to generate.
    pub fn with_service_orders(mut self, count: usize) -> Self {
        self.counts.service_order_count = count;
        self
    }

    /// Sets the staff generation configuration.
    pub fn with_user_config(mut self, config: UserGenConfig) -> Self {
        self.user_config = config;
        self
    }

    /// Sets the asset generation configuration.
    pub fn with_asset_config(mut self, config: AssetGenConfig) -> Self {
        self.asset_config = config;
        self
    }

    /// Builds the dataset in memory without touching the database.
    ///
    /// Generation runs in dependency order so every foreign reference points
    /// at an entity generated earlier in the same call. Triage events and
    /// compliance checks are derived from service order stages, one per
    /// qualifying order.
    pub fn build_data(&self, rng: &mut impl Rng) -> GeneratedDataset {
        let org_gen = OrganizationGenerator::new();
        let organizations = org_gen.generate_batch(self.counts.organization_count, rng);
        let org_ids: Vec<Uuid> = organizations.iter().map(|o| o.id).collect();

        let user_gen = UserGenerator::with_config(self.user_config.clone());
        let users = user_gen.generate_batch(self.counts.user_count, &org_ids, rng);
        let user_ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        let product_gen = ProductGenerator::new();
        let products = product_gen.generate_batch(self.counts.product_count, rng);
        let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();

        let asset_gen = AssetGenerator::with_config(self.asset_config.clone());
        let assets = asset_gen.generate_batch(self.counts.asset_count, &product_ids, &org_ids, rng);
        let asset_ids: Vec<Uuid> = assets.iter().map(|a| a.id).collect();

        // Handling branches and customers both draw from the full organization
        // pool; the dataset does not restrict orders to internal branches.
        let so_gen = ServiceOrderGenerator::new();
        let service_orders = so_gen.generate_batch(
            self.counts.service_order_count,
            &asset_ids,
            &org_ids,
            &org_ids,
            rng,
        );

        let triage_events = so_gen.generate_triage_events(&service_orders, &user_ids, rng);
        let compliance_checks = so_gen.generate_compliance_checks(&service_orders, &user_ids, rng);

        GeneratedDataset {
            organizations,
            users,
            products,
            assets,
            service_orders,
            triage_events,
            compliance_checks,
        }
    }

    /// Builds the dataset and seeds it into the database atomically.
    pub async fn build(
        self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<GeneratedDataset, SeedError> {
        let dataset = self.build_data(rng);

        let seeder = Seeder::new(pool.clone());
        seeder.seed_dataset(&dataset).await?;

        Ok(dataset)
    }
}

/// Preset datasets for common needs.
impl DatasetBuilder {
    /// The full demo dataset.
    ///
    /// - 10 organizations, 50 staff members
    /// - 20 catalog entries, 200 assets
    /// - 1,000 service orders spread across all workflow stages
    pub fn full_demo() -> Self {
        Self::new()
            .with_organizations(10)
            .with_users(50)
            .with_products(20)
            .with_assets(200)
            .with_service_orders(1000)
    }

    /// A small dataset for quick local runs and smoke tests.
    pub fn smoke_test() -> Self {
        Self::new()
            .with_organizations(3)
            .with_users(8)
            .with_products(4)
            .with_assets(15)
            .with_service_orders(40)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_build_data_counts() {
        let mut rng = rand::thread_rng();

        let dataset = DatasetBuilder::new()
            .with_organizations(4)
            .with_users(10)
            .with_products(5)
            .with_assets(20)
            .with_service_orders(50)
            .build_data(&mut rng);

        assert_eq!(dataset.organizations.len(), 4);
        assert_eq!(dataset.users.len(), 10);
        assert_eq!(dataset.products.len(), 5);
        assert_eq!(dataset.assets.len(), 20);
        assert_eq!(dataset.service_orders.len(), 50);
    }

    #[test]
    fn test_workflow_records_match_stages() {
        let mut rng = rand::thread_rng();

        let dataset = DatasetBuilder::smoke_test()
            .with_service_orders(200)
            .build_data(&mut rng);

        let past_intake = dataset
            .service_orders
            .iter()
            .filter(|o| o.stage.past_intake())
            .count();
        let signed_off = dataset
            .service_orders
            .iter()
            .filter(|o| o.stage.signed_off())
            .count();

        assert_eq!(dataset.triage_events.len(), past_intake);
        assert_eq!(dataset.compliance_checks.len(), signed_off);
        assert!(dataset.compliance_checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_referential_integrity() {
        let mut rng = rand::thread_rng();

        let dataset = DatasetBuilder::smoke_test().build_data(&mut rng);

        let org_ids: HashSet<Uuid> = dataset.organizations.iter().map(|o| o.id).collect();
        let user_ids: HashSet<Uuid> = dataset.users.iter().map(|u| u.id).collect();
        let product_ids: HashSet<Uuid> = dataset.products.iter().map(|p| p.id).collect();
        let asset_ids: HashSet<Uuid> = dataset.assets.iter().map(|a| a.id).collect();
        let order_ids: HashSet<Uuid> = dataset.service_orders.iter().map(|o| o.id).collect();

        for user in &dataset.users {
            assert!(org_ids.contains(&user.home_branch_id));
        }
        for asset in &dataset.assets {
            assert!(product_ids.contains(&asset.model_id));
            assert!(org_ids.contains(&asset.owner_org_id));
        }
        for order in &dataset.service_orders {
            assert!(asset_ids.contains(&order.asset_id));
            assert!(org_ids.contains(&order.handling_branch_id));
            assert!(org_ids.contains(&order.customer_org_id));
        }
        for event in &dataset.triage_events {
            assert!(order_ids.contains(&event.service_order_id));
            assert!(user_ids.contains(&event.inspector_id));
        }
        for check in &dataset.compliance_checks {
            assert!(order_ids.contains(&check.service_order_id));
            assert!(user_ids.contains(&check.qa_manager_id));
        }
    }

    #[test]
    fn test_total_rows() {
        let mut rng = rand::thread_rng();

        let dataset = DatasetBuilder::smoke_test().build_data(&mut rng);

        let expected = dataset.organizations.len()
            + dataset.users.len()
            + dataset.products.len()
            + dataset.assets.len()
            + dataset.service_orders.len()
            + dataset.triage_events.len()
            + dataset.compliance_checks.len();

        assert_eq!(dataset.total_rows(), expected);
    }

    #[test]
    fn test_seeded_rng_reproduces_dataset() {
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);

        let a = DatasetBuilder::smoke_test().build_data(&mut rng_a);
        let b = DatasetBuilder::smoke_test().build_data(&mut rng_b);

        let ids_a: Vec<Uuid> = a.service_orders.iter().map(|o| o.id).collect();
        let ids_b: Vec<Uuid> = b.service_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids_a, ids_b);

        let names_a: Vec<&str> = a.users.iter().map(|u| u.username.as_str()).collect();
        let names_b: Vec<&str> = b.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names_a, names_b);

        let hashes_a: Vec<&str> = a
            .compliance_checks
            .iter()
            .map(|c| c.signature_hash.as_str())
            .collect();
        let hashes_b: Vec<&str> = b
            .compliance_checks
            .iter()
            .map(|c| c.signature_hash.as_str())
            .collect();
        assert_eq!(hashes_a, hashes_b);
    }

    #[test]
    fn test_zero_organizations_empties_downstream() {
        let mut rng = rand::thread_rng();

        let dataset = DatasetBuilder::smoke_test()
            .with_organizations(0)
            .build_data(&mut rng);

        assert!(dataset.organizations.is_empty());
        assert!(dataset.users.is_empty());
        assert!(dataset.assets.is_empty());
        assert!(dataset.service_orders.is_empty());
        assert!(dataset.triage_events.is_empty());
        assert!(dataset.compliance_checks.is_empty());
    }

    #[test]
    fn test_preset_full_demo() {
        let builder = DatasetBuilder::full_demo();

        assert_eq!(builder.counts.organization_count, 10);
        assert_eq!(builder.counts.user_count, 50);
        assert_eq!(builder.counts.product_count, 20);
        assert_eq!(builder.counts.asset_count, 200);
        assert_eq!(builder.counts.service_order_count, 1000);
    }
}
