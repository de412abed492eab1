//! Field asset generation with serials and warranty dates.

use rand::Rng;
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use super::random_uuid;

/// Generated asset ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub id: Uuid,
    pub serial_number: String,
    pub model_id: Uuid,
    pub owner_org_id: Uuid,
    pub warranty_expiry: Date,
}

/// Configuration for asset generation.
#[derive(Debug, Clone)]
pub struct AssetGenConfig {
    /// How far into the future warranty expiry dates fall, in days.
    pub warranty_days_range: (i64, i64),
}

impl Default for AssetGenConfig {
    fn default() -> Self {
        Self {
            warranty_days_range: (1, 365),
        }
    }
}

/// Generates assets referencing the device catalog and owning organizations.
pub struct AssetGenerator {
    config: AssetGenConfig,
}

impl AssetGenerator {
    /// Creates a new asset generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AssetGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AssetGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single asset.
    pub fn generate(&self, model_ids: &[Uuid], org_ids: &[Uuid], rng: &mut impl Rng) -> GeneratedAsset {
        let id = random_uuid(rng);
        let serial_number = self.generate_serial(rng);
        let model_id = model_ids[rng.gen_range(0..model_ids.len())];
        let owner_org_id = org_ids[rng.gen_range(0..org_ids.len())];
        let warranty_expiry = self.generate_warranty_expiry(rng);

        GeneratedAsset {
            id,
            serial_number,
            model_id,
            owner_org_id,
            warranty_expiry,
        }
    }

    /// Generates multiple assets.
    pub fn generate_batch(
        &self,
        count: usize,
        model_ids: &[Uuid],
        org_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedAsset> {
        if model_ids.is_empty() || org_ids.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| self.generate(model_ids, org_ids, rng))
            .collect()
    }

    /// Generates a serial number: two uppercase letters, a dash, eight digits.
    fn generate_serial(&self, rng: &mut impl Rng) -> String {
        let prefix: String = (0..2).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
        let digits: String = (0..8).map(|_| rng.gen_range(b'0'..=b'9') as char).collect();

        format!("{prefix}-{digits}")
    }

    /// Generates a warranty expiry date in the configured future window.
    fn generate_warranty_expiry(&self, rng: &mut impl Rng) -> Date {
        let (min_days, max_days) = self.config.warranty_days_range;
        let days = rng.gen_range(min_days..=max_days);

        OffsetDateTime::now_utc().date() + Duration::days(days)
    }
}

impl Default for AssetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
