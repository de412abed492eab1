//! Service order generation with workflow stages, triage events, and
//! compliance checks.

use fake::{Fake, faker::lorem::en::Paragraph};
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::random_uuid;

/// Stage a service order currently sits in.
///
/// Stages are assigned uniformly at random; the dataset deliberately does not
/// model valid stage transitions, only a snapshot of orders spread across the
/// whole workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Intake,
    Triage,
    Repair,
    QaPending,
    ReadyToDispatch,
    Dispatched,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 6] = [
        WorkflowStage::Intake,
        WorkflowStage::Triage,
        WorkflowStage::Repair,
        WorkflowStage::QaPending,
        WorkflowStage::ReadyToDispatch,
        WorkflowStage::Dispatched,
    ];

    /// Database representation of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Intake => "Intake",
            WorkflowStage::Triage => "Triage",
            WorkflowStage::Repair => "Repair",
            WorkflowStage::QaPending => "QA_Pending",
            WorkflowStage::ReadyToDispatch => "Ready_to_Dispatch",
            WorkflowStage::Dispatched => "Dispatched",
        }
    }

    /// Whether the order has moved beyond intake and therefore has been triaged.
    pub fn past_intake(&self) -> bool {
        *self != WorkflowStage::Intake
    }

    /// Whether the order has passed QA sign-off and carries a compliance check.
    pub fn signed_off(&self) -> bool {
        matches!(
            self,
            WorkflowStage::ReadyToDispatch | WorkflowStage::Dispatched
        )
    }
}

/// Generated service order ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedServiceOrder {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub handling_branch_id: Uuid,
    pub customer_org_id: Uuid,
    pub stage: WorkflowStage,
}

/// Generated triage record for an order past intake.
#[derive(Debug, Clone)]
pub struct GeneratedTriageEvent {
    pub id: Uuid,
    pub service_order_id: Uuid,
    pub inspector_id: Uuid,
    pub findings: String,
}

/// Generated compliance check for a signed-off order.
#[derive(Debug, Clone)]
pub struct GeneratedComplianceCheck {
    pub id: Uuid,
    pub service_order_id: Uuid,
    pub qa_manager_id: Uuid,
    pub passed: bool,
    pub signature_hash: String,
}

/// Generates service orders and their stage-dependent workflow records.
#[derive(Default)]
pub struct ServiceOrderGenerator;

impl ServiceOrderGenerator {
    /// Creates a new service order generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a single service order.
    pub fn generate(
        &self,
        asset_ids: &[Uuid],
        branch_ids: &[Uuid],
        customer_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> GeneratedServiceOrder {
        let id = random_uuid(rng);
        let asset_id = asset_ids[rng.gen_range(0..asset_ids.len())];
        let handling_branch_id = branch_ids[rng.gen_range(0..branch_ids.len())];
        let customer_org_id = customer_ids[rng.gen_range(0..customer_ids.len())];
        let stage = WorkflowStage::ALL[rng.gen_range(0..WorkflowStage::ALL.len())];

        GeneratedServiceOrder {
            id,
            asset_id,
            handling_branch_id,
            customer_org_id,
            stage,
        }
    }

    /// Generates multiple service orders.
    pub fn generate_batch(
        &self,
        count: usize,
        asset_ids: &[Uuid],
        branch_ids: &[Uuid],
        customer_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedServiceOrder> {
        if asset_ids.is_empty() || branch_ids.is_empty() || customer_ids.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| self.generate(asset_ids, branch_ids, customer_ids, rng))
            .collect()
    }

    /// Generates exactly one triage event for every order past intake.
    pub fn generate_triage_events(
        &self,
        orders: &[GeneratedServiceOrder],
        inspector_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedTriageEvent> {
        if inspector_ids.is_empty() {
            return Vec::new();
        }

        orders
            .iter()
            .filter(|order| order.stage.past_intake())
            .map(|order| {
                let findings: String = Paragraph(1..3).fake_with_rng(rng);

                GeneratedTriageEvent {
                    id: random_uuid(rng),
                    service_order_id: order.id,
                    inspector_id: inspector_ids[rng.gen_range(0..inspector_ids.len())],
                    findings,
                }
            })
            .collect()
    }

    /// Generates exactly one passed compliance check for every signed-off order.
    pub fn generate_compliance_checks(
        &self,
        orders: &[GeneratedServiceOrder],
        qa_manager_ids: &[Uuid],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedComplianceCheck> {
        if qa_manager_ids.is_empty() {
            return Vec::new();
        }

        orders
            .iter()
            .filter(|order| order.stage.signed_off())
            .map(|order| {
                let qa_manager_id = qa_manager_ids[rng.gen_range(0..qa_manager_ids.len())];
                let signature_hash = signature_hash(order.id, qa_manager_id, rng.r#gen());

                GeneratedComplianceCheck {
                    id: random_uuid(rng),
                    service_order_id: order.id,
                    qa_manager_id,
                    passed: true,
                    signature_hash,
                }
            })
            .collect()
    }
}

/// Computes the electronic signature for a sign-off: a SHA-256 digest over the
/// order, the signer, and a per-check nonce, hex-encoded.
fn signature_hash(order_id: Uuid, signer_id: Uuid, nonce: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(order_id.as_bytes());
    hasher.update(signer_id.as_bytes());
    hasher.update(nonce.to_be_bytes());

    hex::encode(hasher.finalize())
}
