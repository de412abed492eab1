//! Database integration for seeding demo data.
//!
//! The [`Seeder`] inserts a generated dataset inside a single transaction,
//! so a partially seeded database is never left behind.

mod seeder;

pub use seeder::{SeedError, Seeder};
