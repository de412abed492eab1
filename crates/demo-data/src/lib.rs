//! Demo data generation for repair-desk.
//!
//! This crate generates a synthetic device-repair dataset — organizations,
//! service staff, a device catalog, field assets, and service orders with
//! their triage and compliance records — and writes it to PostgreSQL in one
//! transaction, to support demos and integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let dataset = DatasetBuilder::full_demo()
//!     .with_service_orders(500)
//!     .build(&pool, &mut rng)
//!     .await?;
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DatasetBuilder, GeneratedDataset};
    pub use crate::config::{DbConfig, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        AssetGenerator, OrganizationGenerator, ProductGenerator, ServiceOrderGenerator,
        UserGenerator,
    };
    pub use crate::generators::{OrgType, RiskClass, UserRole, WorkflowStage};
}
