use projtrack::{Ledger, NewProject, Payment, PaymentId, PaymentStatus, Project, ProjectId, ProjectStatus};
use time::{Date, macros::date};

pub const TEST_DUE: Date = date!(2025 - 01 - 01);

/// Creates a NewProject with the given name and earnings, due 2025-01-01.
pub fn make_new_project(name: &str, earnings: u64) -> NewProject {
    NewProject {
        name: name.to_string(),
        due_date: TEST_DUE,
        status: ProjectStatus::Active,
        earnings,
    }
}

/// A single active project "Project A" with its payment already collected.
pub fn single_paid_project() -> Ledger {
    let project = Project {
        id: ProjectId(1),
        name: "Project A".to_string(),
        due_date: date!(2024 - 10 - 15),
        status: ProjectStatus::Active,
        earnings: 20666,
        payment_id: Some(PaymentId(1)),
    };
    let payment = Payment {
        id: PaymentId(1),
        amount: 20666,
        status: PaymentStatus::Paid,
        project_id: Some(ProjectId(1)),
    };
    Ledger::from_parts(vec![project], vec![payment]).expect("unique ids")
}

/// Total computed straight from the collections, independent of the ledger.
pub fn expected_total(ledger: &Ledger) -> u128 {
    let projects: u128 = ledger.projects().iter().map(|p| u128::from(p.earnings)).sum();
    let paid: u128 = ledger
        .payments()
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .map(|p| u128::from(p.amount))
        .sum();
    projects + paid
}

pub fn assert_total_consistent(ledger: &Ledger) {
    assert_eq!(
        ledger.total_earnings(),
        expected_total(ledger),
        "total earnings drifted from projects + paid payments"
    );
}
