use crate::models::{PaymentId, ProjectId};

/// Hands out strictly increasing ids, one counter per collection.
///
/// Two calls in a row never return the same id, regardless of how quickly
/// they happen. Counters start at most at [`IdGenerator::MAX_ID`], which
/// leaves 2^63 fresh ids before a counter could wrap.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_project: u64,
    last_payment: u64,
}

impl IdGenerator {
    /// Largest id accepted from existing records.
    pub const MAX_ID: u64 = u64::MAX / 2;

    /// Start numbering after the largest ids already in use.
    pub fn after(last_project: Option<ProjectId>, last_payment: Option<PaymentId>) -> Self {
        Self {
            last_project: last_project.map_or(0, |id| id.0),
            last_payment: last_payment.map_or(0, |id| id.0),
        }
    }

    pub fn next_project(&mut self) -> ProjectId {
        self.last_project += 1;
        ProjectId(self.last_project)
    }

    pub fn next_payment(&mut self) -> PaymentId {
        self.last_payment += 1;
        PaymentId(self.last_payment)
    }
}
