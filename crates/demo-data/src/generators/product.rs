//! Device catalog generation.

use fake::{Fake, faker::lorem::en::Word};
use rand::Rng;
use uuid::Uuid;

use super::random_uuid;

/// Product family every catalog entry belongs to.
const DEVICE_FAMILY: &str = "MedScanner";

/// Regulatory risk classification of a device model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskClass {
    ClassI,
    ClassII,
    ClassIII,
}

impl RiskClass {
    pub const ALL: [RiskClass; 3] = [RiskClass::ClassI, RiskClass::ClassII, RiskClass::ClassIII];

    /// Database representation of the risk class.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClass::ClassI => "Class I",
            RiskClass::ClassII => "Class II",
            RiskClass::ClassIII => "Class III",
        }
    }
}

/// Generated catalog entry ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProduct {
    pub id: Uuid,
    pub device_name: String,
    pub risk_class: RiskClass,
}

/// Generates device catalog entries.
#[derive(Default)]
pub struct ProductGenerator;

impl ProductGenerator {
    /// Creates a new catalog generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a single catalog entry.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedProduct {
        let id = random_uuid(rng);
        let model_word: String = Word().fake_with_rng(rng);
        let device_name = format!("{DEVICE_FAMILY} {}", model_word.to_uppercase());
        let risk_class = RiskClass::ALL[rng.gen_range(0..RiskClass::ALL.len())];

        GeneratedProduct {
            id,
            device_name,
            risk_class,
        }
    }

    /// Generates multiple catalog entries.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedProduct> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_product() {
        let product_gen = ProductGenerator::new();
        let mut rng = rand::thread_rng();

        let product = product_gen.generate(&mut rng);

        assert!(product.device_name.starts_with("MedScanner "));
        assert!(RiskClass::ALL.contains(&product.risk_class));
    }

    #[test]
    fn test_model_word_is_uppercased() {
        let product_gen = ProductGenerator::new();
        let mut rng = rand::thread_rng();

        let product = product_gen.generate(&mut rng);
        let model_word = product.device_name.trim_start_matches("MedScanner ");

        assert!(!model_word.is_empty());
        assert_eq!(model_word, model_word.to_uppercase());
    }

    #[test]
    fn test_generate_batch() {
        let product_gen = ProductGenerator::new();
        let mut rng = rand::thread_rng();

        let products = product_gen.generate_batch(20, &mut rng);

        assert_eq!(products.len(), 20);

        let ids: std::collections::HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_risk_class_database_values() {
        assert_eq!(RiskClass::ClassI.as_str(), "Class I");
        assert_eq!(RiskClass::ClassII.as_str(), "Class II");
        assert_eq!(RiskClass::ClassIII.as_str(), "Class III");
    }
}
