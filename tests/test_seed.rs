//! Integration tests for loading initial data from seed files.

mod common;

use std::io::Write;

use common::*;
use projtrack::core::{IdGenerator, LedgerError, SeedError};

fn write_seed(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp seed file");
    file.write_all(json.as_bytes())
        .expect("Failed to write seed file");
    file
}

#[test]
fn test_load_seed_file() -> anyhow::Result<()> {
    let file = write_seed(
        r#"{
            "projects": [
                { "id": 4, "name": "Audit", "due_date": "2025-03-31", "status": "completed", "earnings": 900, "payment_id": 10 }
            ],
            "payments": [
                { "id": 10, "amount": 900, "status": "paid", "project_id": 4 },
                { "id": 11, "amount": 40, "status": "unpaid" }
            ]
        }"#,
    );

    let mut ledger = Seed::load(file.path())?.into_ledger()?;
    assert_eq!(ledger.projects()[0].status, ProjectStatus::Completed);
    assert_eq!(ledger.payments()[1].project_id, None);
    assert_eq!(ledger.total_earnings(), 1800);

    // new ids continue after the seeded ones
    ledger.add_project(make_new_project("Next", 1));
    assert_eq!(ledger.projects()[1].id, ProjectId(5));
    assert_eq!(ledger.payments()[2].id, PaymentId(12));
    Ok(())
}

#[test]
fn test_missing_sections_default_to_empty() -> anyhow::Result<()> {
    let file = write_seed("{}");
    let ledger = Seed::load(file.path())?.into_ledger()?;
    assert!(ledger.projects().is_empty());
    assert!(ledger.payments().is_empty());
    Ok(())
}

#[test]
fn test_invalid_seed_is_reported() -> anyhow::Result<()> {
    let bad_date = write_seed(
        r#"{ "projects": [ { "id": 1, "name": "A", "due_date": "15/10/2024", "status": "active", "earnings": 1 } ] }"#,
    );
    assert!(matches!(Seed::load(bad_date.path()), Err(SeedError::Parse { .. })));

    let dir = tempfile::TempDir::new()?;
    let missing = dir.path().join("nope.json");
    assert!(matches!(Seed::load(&missing), Err(SeedError::Io { .. })));
    Ok(())
}

#[test]
fn test_duplicate_ids_are_rejected() -> anyhow::Result<()> {
    // 1. Write a seed that reuses payment id 2
    let file = write_seed(
        r#"{ "payments": [
            { "id": 2, "amount": 1, "status": "paid" },
            { "id": 2, "amount": 5, "status": "unpaid" }
        ] }"#,
    );
    // 2. Loading parses, building the ledger fails
    let result = Seed::load(file.path())?.into_ledger();
    assert!(matches!(
        result,
        Err(SeedError::Ledger(LedgerError::DuplicatePaymentId(PaymentId(2))))
    ));
    Ok(())
}

#[test]
fn test_demo_seed_round_trips_through_json() -> anyhow::Result<()> {
    let json = serde_json::to_string(&Seed::demo())?;
    assert!(json.contains(r#""due_date":"2024-10-15""#));
    let file = write_seed(&json);
    assert_eq!(Seed::load(file.path())?, Seed::demo());
    Ok(())
}

#[test]
fn test_ids_too_large_to_continue_are_rejected() -> anyhow::Result<()> {
    // 1. A payment id at u64::MAX leaves no room for the next payment
    let file = write_seed(
        r#"{ "payments": [ { "id": 18446744073709551615, "amount": 1, "status": "unpaid" } ] }"#,
    );
    let result = Seed::load(file.path())?.into_ledger();
    assert!(matches!(
        result,
        Err(SeedError::Ledger(LedgerError::PaymentIdOutOfRange(PaymentId(u64::MAX))))
    ));

    // 2. Same for projects
    let project = Project {
        id: ProjectId(u64::MAX),
        name: "Last".to_string(),
        due_date: TEST_DUE,
        status: ProjectStatus::Active,
        earnings: 1,
        payment_id: None,
    };
    assert_eq!(
        Ledger::from_parts(vec![project], vec![]).err(),
        Some(LedgerError::ProjectIdOutOfRange(ProjectId(u64::MAX)))
    );
    Ok(())
}

#[test]
fn test_largest_accepted_id_still_allows_adding() -> anyhow::Result<()> {
    // 1. Seed a payment at the highest accepted id
    let payment = Payment {
        id: PaymentId(IdGenerator::MAX_ID),
        amount: 1,
        status: PaymentStatus::Unpaid,
        project_id: None,
    };
    let mut ledger = Ledger::from_parts(vec![], vec![payment])?;

    // 2. Adding a project numbers its payment right after it
    ledger.add_project(make_new_project("Next", 5));
    assert_eq!(ledger.payments()[1].id, PaymentId(IdGenerator::MAX_ID + 1));
    Ok(())
}

#[test]
fn test_mismatched_links_are_rejected() -> anyhow::Result<()> {
    // 1. Project 1 claims payment 1, but payment 1 claims project 2
    let file = write_seed(
        r#"{
            "projects": [
                { "id": 1, "name": "A", "due_date": "2025-01-01", "status": "active", "earnings": 1, "payment_id": 1 },
                { "id": 2, "name": "B", "due_date": "2025-01-01", "status": "active", "earnings": 2, "payment_id": 2 }
            ],
            "payments": [
                { "id": 1, "amount": 1, "status": "unpaid", "project_id": 2 },
                { "id": 2, "amount": 2, "status": "unpaid", "project_id": 2 }
            ]
        }"#,
    );

    // 2. Building the ledger reports the first disagreeing pair
    let result = Seed::load(file.path())?.into_ledger();
    assert!(matches!(
        result,
        Err(SeedError::Ledger(LedgerError::MismatchedLink {
            project: ProjectId(1),
            payment: PaymentId(1),
        }))
    ));
    Ok(())
}

#[test]
fn test_links_to_absent_records_are_kept_detached() -> anyhow::Result<()> {
    // 1. Payment 5 points at a project that is not in the seed
    let file = write_seed(
        r#"{ "payments": [ { "id": 5, "amount": 10, "status": "paid", "project_id": 9 } ] }"#,
    );
    let ledger = Seed::load(file.path())?.into_ledger()?;

    // 2. It loads and resolves to no project
    let payment = ledger.payment(PaymentId(5)).unwrap();
    assert_eq!(payment.project_id, Some(ProjectId(9)));
    assert!(ledger.linked_project(payment).is_none());
    assert_eq!(ledger.total_earnings(), 10);
    Ok(())
}
