//! Reconciliation saga tests against the in-memory gateway.

mod support;

use std::sync::Arc;

use ledgerlink_core::{
    ReconcileFailure, ReconcileOutcome, ReconcileStage, ReconciliationService, TerminalState,
};
use ledgerlink_domain::{ImportOutcome, LedgerLinkError, NumericText, RemoteId, VoucherCriteria};
use rust_decimal::Decimal;
use support::gateway::{remote_voucher, GatewayCall, MockVoucherGateway};

fn old_rent() -> VoucherCriteria {
    VoucherCriteria {
        company_name: Some("RYUKS".into()),
        voucher_type: Some("Payment".into()),
        from_ledger: Some("Cash".into()),
        to_ledger: Some("Rent".into()),
        amount: Some(NumericText::from("70000")),
        ..VoucherCriteria::default()
    }
}

fn raise_to(amount: &str) -> VoucherCriteria {
    VoucherCriteria { amount: Some(NumericText::from(amount)), ..VoucherCriteria::default() }
}

fn seeded() -> MockVoucherGateway {
    MockVoucherGateway::new(vec![
        remote_voucher("rent-april", "Cash", "Rent", 70000, "20250401"),
        remote_voucher("salary-april", "Bank", "Salary", 50000, "20250401"),
    ])
}

fn service(gateway: &Arc<MockVoucherGateway>) -> ReconciliationService {
    ReconciliationService::new(Arc::clone(gateway) as Arc<dyn ledgerlink_core::VoucherGateway>)
}

#[tokio::test]
async fn update_replaces_voucher_without_restore() {
    let gateway = Arc::new(seeded());

    let outcome = service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap();

    let ReconcileOutcome::Updated { previous, current } = outcome else {
        panic!("expected an update outcome");
    };
    assert_eq!(previous.remote_id, Some(RemoteId::new("rent-april")));
    assert_eq!(current.amount, Decimal::new(75000, 0));
    assert_eq!(
        current.remote_id,
        Some(RemoteId::new("Cash_Rent_75000.00_Payment_20250401"))
    );
    assert_eq!(current.narration, None);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[1],
        GatewayCall::Delete {
            company: "RYUKS".into(),
            remote_id: RemoteId::new("rent-april"),
            voucher_type: "Payment".into(),
        }
    );
    assert_eq!(gateway.created().len(), 1);
}

#[tokio::test]
async fn moving_to_another_ledger_rebuilds_the_generated_narration() {
    let gateway = Arc::new(seeded());
    let patch =
        VoucherCriteria { to_ledger: Some("Electricity".into()), ..VoucherCriteria::default() };

    service(&gateway).update(&old_rent(), &patch).await.unwrap();

    let created = gateway.created();
    assert_eq!(created[0].to_ledger, "Electricity");
    assert_eq!(created[0].narration_or_default(), "Transfer from Cash to Electricity");
}

#[tokio::test]
async fn written_narration_survives_the_update() {
    let mut rent = remote_voucher("rent-april", "Cash", "Rent", 70000, "20250401");
    rent.narration = Some("April rent".into());
    let gateway = Arc::new(MockVoucherGateway::new(vec![rent]));

    service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap();

    assert_eq!(gateway.created()[0].narration.as_deref(), Some("April rent"));
}

#[tokio::test]
async fn rejected_create_restores_the_resolved_record() {
    let gateway = Arc::new(
        seeded().script_create(Ok(ImportOutcome { created: Some(0), ..ImportOutcome::default() })),
    );

    let failure = service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap_err();

    assert_eq!(failure.terminal_state(), TerminalState::FailedAfterRestore);
    let created = gateway.created();
    assert_eq!(created.len(), 2);
    let restored = &created[1];
    assert_eq!(restored.remote_id, Some(RemoteId::new("rent-april")));
    assert_eq!(restored.amount, Decimal::new(70000, 0));
    assert_eq!(restored.from_ledger, "Cash");
    assert_eq!(restored.to_ledger, "Rent");
    assert_eq!(restored.date, "20250401");
    assert!(gateway.vouchers().iter().any(|v| v.remote_id == Some(RemoteId::new("rent-april"))));
    assert!(matches!(LedgerLinkError::from(failure), LedgerLinkError::RolledBack(_)));
}

#[tokio::test]
async fn create_without_counters_counts_as_failure() {
    let gateway = Arc::new(seeded().script_create(Ok(ImportOutcome::default())));

    let failure = service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap_err();

    assert_eq!(failure.terminal_state(), TerminalState::FailedAfterRestore);
}

#[tokio::test]
async fn failed_restore_is_unrecoverable_and_carries_the_lost_voucher() {
    let gateway = Arc::new(
        seeded()
            .script_create(Err(LedgerLinkError::Connection("connection reset".into())))
            .script_create(Err(LedgerLinkError::Connection("timed out".into()))),
    );

    let failure = service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap_err();

    assert_eq!(failure.terminal_state(), TerminalState::FailedUnrecoverable);
    let lost = failure.lost_voucher().unwrap();
    assert_eq!(lost.remote_id, Some(RemoteId::new("rent-april")));
    assert_eq!(lost.amount, Decimal::new(70000, 0));
    // Restore is attempted exactly once.
    assert_eq!(gateway.created().len(), 2);
    assert!(matches!(LedgerLinkError::from(failure), LedgerLinkError::Unrecoverable(_)));
}

#[tokio::test]
async fn zero_deleted_stops_before_create() {
    let gateway = Arc::new(
        seeded().script_delete(Ok(ImportOutcome { deleted: Some(0), ..ImportOutcome::default() })),
    );

    let failure = service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap_err();

    let ReconcileFailure::BeforeMutation { stage, error } = failure else {
        panic!("expected a pre-mutation failure");
    };
    assert_eq!(stage, ReconcileStage::DeleteOld);
    assert!(error.to_string().contains("not found or undeletable"));
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn missing_deleted_counter_is_reported_as_unconfirmed() {
    let gateway = Arc::new(seeded().script_delete(Ok(ImportOutcome::default())));

    let failure = service(&gateway).update(&old_rent(), &raise_to("75000")).await.unwrap_err();

    let ReconcileFailure::BeforeMutation { stage, error } = failure else {
        panic!("expected a pre-mutation failure");
    };
    assert_eq!(stage, ReconcileStage::DeleteOld);
    assert!(error.to_string().contains("no DELETED counter"));
    assert!(!error.to_string().contains("not found or undeletable"));
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn invalid_patch_never_mutates() {
    let gateway = Arc::new(seeded());
    let patch = VoucherCriteria { date: Some("1st April".into()), ..VoucherCriteria::default() };

    let failure = service(&gateway).update(&old_rent(), &patch).await.unwrap_err();

    assert_eq!(failure.stage(), ReconcileStage::Resolve);
    assert_eq!(gateway.delete_count(), 0);
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn delete_with_no_match_issues_no_delete() {
    let gateway = Arc::new(seeded());
    let criteria = VoucherCriteria { to_ledger: Some("Electricity".into()), ..old_rent() };

    let failure = service(&gateway).remove(&criteria).await.unwrap_err();

    assert!(matches!(
        failure,
        ReconcileFailure::BeforeMutation {
            stage: ReconcileStage::Resolve,
            error: LedgerLinkError::NotFound(_)
        }
    ));
    assert_eq!(gateway.calls(), vec![GatewayCall::List { company: "RYUKS".into() }]);
}

#[tokio::test]
async fn ambiguous_delete_issues_no_delete() {
    let gateway = Arc::new(MockVoucherGateway::new(vec![
        remote_voucher("a", "Cash", "Rent", 100, "20250401"),
        remote_voucher("b", "Cash", "Rent", 100, "20250402"),
    ]));
    let criteria = VoucherCriteria {
        company_name: Some("RYUKS".into()),
        from_ledger: Some("Cash".into()),
        ..VoucherCriteria::default()
    };

    let failure = service(&gateway).remove(&criteria).await.unwrap_err();

    assert!(matches!(LedgerLinkError::from(failure), LedgerLinkError::AmbiguousMatch(_)));
    assert_eq!(gateway.delete_count(), 0);
}

#[tokio::test]
async fn delete_removes_the_single_match() {
    let gateway = Arc::new(seeded());

    let outcome = service(&gateway).remove(&old_rent()).await.unwrap();

    assert!(matches!(
        outcome,
        ReconcileOutcome::Deleted { ref previous } if previous.to_ledger == "Rent"
    ));
    assert_eq!(gateway.vouchers().len(), 1);
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn lookup_without_company_fails_before_any_call() {
    let gateway = Arc::new(seeded());
    let criteria = VoucherCriteria { company_name: None, ..old_rent() };

    let failure = service(&gateway).remove(&criteria).await.unwrap_err();

    assert_eq!(LedgerLinkError::from(failure), LedgerLinkError::missing_field("company_name"));
    assert!(gateway.calls().is_empty());
}

/// Concurrent updates of one voucher are not coordinated: both resolve the
/// same record, and only the delete that lands first wins.
#[tokio::test]
async fn concurrent_updates_both_pass_resolution() {
    let gateway = Arc::new(seeded().with_list_barrier(2));
    let service = Arc::new(service(&gateway));
    let old = old_rent();
    let first_patch = raise_to("75000");
    let second_patch = raise_to("80000");

    let (first, second) =
        tokio::join!(service.update(&old, &first_patch), service.update(&old, &second_patch));

    let lists = gateway.calls().iter().filter(|c| matches!(c, GatewayCall::List { .. })).count();
    assert_eq!(lists, 2);
    assert_eq!(gateway.delete_count(), 2);

    let (winner, loser) = match (first, second) {
        (Ok(outcome), Err(failure)) | (Err(failure), Ok(outcome)) => (outcome, failure),
        other => panic!("expected exactly one update to win, got {other:?}"),
    };
    assert!(matches!(winner, ReconcileOutcome::Updated { .. }));
    assert_eq!(loser.stage(), ReconcileStage::DeleteOld);
    assert_eq!(loser.terminal_state(), TerminalState::FailedBeforeMutation);
    assert_eq!(gateway.created().len(), 1);
}
