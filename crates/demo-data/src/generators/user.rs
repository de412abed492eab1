//! Service staff generation with roles and home branches.

use fake::{Fake, faker::internet::en::Username};
use rand::Rng;
use uuid::Uuid;

use super::random_uuid;

/// Role a staff member plays in the service workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Technician,
    Manager,
    Qa,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Technician, UserRole::Manager, UserRole::Qa];

    /// Database representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Technician => "Technician",
            UserRole::Manager => "Manager",
            UserRole::Qa => "QA",
        }
    }
}

/// Generated staff member ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub home_branch_id: Uuid,
}

/// Configuration for staff generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Distribution of roles (technician, manager, QA).
    pub role_distribution: [f64; 3],
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            // Most of a service desk is technicians
            role_distribution: [0.6, 0.25, 0.15],
        }
    }
}

/// Generates service staff assigned to internal branches.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new staff generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single staff member homed at one of the given branches.
    pub fn generate(&self, branch_ids: &[Uuid], rng: &mut impl Rng) -> GeneratedUser {
        let id = random_uuid(rng);
        let username: String = Username().fake_with_rng(rng);
        let role = self.pick_role(rng);
        let home_branch_id = branch_ids[rng.gen_range(0..branch_ids.len())];

        GeneratedUser {
            id,
            username,
            role,
            home_branch_id,
        }
    }

    /// Generates multiple staff members.
    pub fn generate_batch(
        &self,
        count: usize,
        branch_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedUser> {
        if branch_ids.is_empty() {
            return Vec::new();
        }

        (0..count).map(|_| self.generate(branch_ids, rng)).collect()
    }

    /// Picks a role based on the configured distribution.
    fn pick_role(&self, rng: &mut impl Rng) -> UserRole {
        let roll: f64 = rng.r#gen();
        let mut cumulative = 0.0;

        for (i, &weight) in self.config.role_distribution.iter().enumerate() {
            cumulative += weight;
            if roll < cumulative {
                return UserRole::ALL[i];
            }
        }

        UserRole::Qa
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let branches: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();

        let user = user_gen.generate(&branches, &mut rng);

        assert!(!user.username.is_empty());
        assert!(branches.contains(&user.home_branch_id));
        assert!(UserRole::ALL.contains(&user.role));
    }

    #[test]
    fn test_generate_batch() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let branches: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();

        let users = user_gen.generate_batch(10, &branches, &mut rng);

        assert_eq!(users.len(), 10);

        // All UUIDs should be unique
        let ids: std::collections::HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_empty_branch_pool_yields_no_users() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        let users = user_gen.generate_batch(10, &[], &mut rng);

        assert!(users.is_empty());
    }

    #[test]
    fn test_role_distribution_respected() {
        let user_gen = UserGenerator::with_config(UserGenConfig {
            role_distribution: [1.0, 0.0, 0.0],
        });
        let mut rng = rand::thread_rng();
        let branches = vec![Uuid::new_v4()];

        let users = user_gen.generate_batch(50, &branches, &mut rng);

        assert!(users.iter().all(|u| u.role == UserRole::Technician));
    }

    #[test]
    fn test_role_database_values() {
        assert_eq!(UserRole::Technician.as_str(), "Technician");
        assert_eq!(UserRole::Manager.as_str(), "Manager");
        assert_eq!(UserRole::Qa.as_str(), "QA");
    }
}
