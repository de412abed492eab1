//! Organization generation (branches, distributors, customers).

use fake::{Fake, faker::address::en::CountryCode, faker::company::en::CompanyName};
use rand::Rng;
use uuid::Uuid;

use super::random_uuid;

/// Organization category matching the database string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgType {
    InternalBranch,
    Distributor,
    Customer,
}

impl OrgType {
    pub const ALL: [OrgType; 3] = [OrgType::InternalBranch, OrgType::Distributor, OrgType::Customer];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgType::InternalBranch => "Internal_Branch",
            OrgType::Distributor => "Distributor",
            OrgType::Customer => "Customer",
        }
    }
}

/// Generated organization data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedOrganization {
    pub id: Uuid,
    pub name: String,
    pub org_type: OrgType,
    pub country_code: String,
}

/// Generates organizations with realistic company names.
#[derive(Default)]
pub struct OrganizationGenerator;

impl OrganizationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single organization with a uniformly random type.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedOrganization {
        let name: String = CompanyName().fake_with_rng(rng);
        let country_code: String = CountryCode().fake_with_rng(rng);

        GeneratedOrganization {
            id: random_uuid(rng),
            name,
            org_type: OrgType::ALL[rng.gen_range(0..OrgType::ALL.len())],
            country_code,
        }
    }

    /// Generates multiple organizations.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedOrganization> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_organization() {
        let org_gen = OrganizationGenerator::new();
        let mut rng = rand::thread_rng();
        let org = org_gen.generate(&mut rng);

        assert!(!org.name.is_empty());
        assert!(!org.country_code.is_empty());
        assert!(OrgType::ALL.contains(&org.org_type));
    }

    #[test]
    fn test_generate_batch() {
        let org_gen = OrganizationGenerator::new();
        let mut rng = rand::thread_rng();
        let orgs = org_gen.generate_batch(10, &mut rng);

        assert_eq!(orgs.len(), 10);

        // All UUIDs should be unique
        let ids: std::collections::HashSet<_> = orgs.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_type_strings_match_database_values() {
        assert_eq!(OrgType::InternalBranch.as_str(), "Internal_Branch");
        assert_eq!(OrgType::Distributor.as_str(), "Distributor");
        assert_eq!(OrgType::Customer.as_str(), "Customer");
    }

    #[test]
    fn test_all_types_appear_over_many_samples() {
        let org_gen = OrganizationGenerator::new();
        let mut rng = rand::thread_rng();
        let orgs = org_gen.generate_batch(200, &mut rng);

        for org_type in OrgType::ALL {
            assert!(
                orgs.iter().any(|o| o.org_type == org_type),
                "Expected at least one {org_type:?} in 200 samples"
            );
        }
    }
}
