//! End-to-end transitions through the engine facade

use intake_cascade::SmartTrigger;
use intake_core::IntakeEngine;
use intake_model::{ProjectStatus, RoleKind, SmartValue};
use intake_roles::CaptureSource;
use intake_status::{AUTHORIZATION_ON_FILE, AWAITING_SIGNED_AUTHORIZATION, PRODUCTION_AUTHORIZED};
use intake_store::{load_order, BlobStore, MemoryStore};
use intake_test_utils::sample_directory;
use pretty_assertions::assert_eq;

#[test]
fn mold_cascade_through_confirm() {
    let mut engine = IntakeEngine::new(sample_directory());

    engine.update_smart(SmartTrigger::MoldMildew, SmartValue::Yes);
    assert_eq!(engine.order().load_list, vec!["Tyvek"]);
    assert_eq!(engine.order().handling_codes, vec!["PPE"]);
    assert_eq!(engine.order().order_types, vec!["Mold"]);
    assert_eq!(engine.notices().len(), 1);

    engine.update_smart(SmartTrigger::MoldMildew, SmartValue::No);
    let proposal = engine.pending_removal().expect("removal proposed");
    assert_eq!(proposal.candidates.len(), 3);

    let removed = engine.confirm_cascade_removal();
    assert_eq!(removed.len(), 3);
    assert!(engine.order().order_types.is_empty());
    assert!(engine.pending_removal().is_none());
}

#[test]
fn mold_cascade_through_cancel() {
    let mut engine = IntakeEngine::new(sample_directory());
    engine.update_smart(SmartTrigger::MoldMildew, SmartValue::Yes);

    let lists_before = (
        engine.order().load_list.clone(),
        engine.order().handling_codes.clone(),
        engine.order().order_types.clone(),
    );

    engine.update_smart(SmartTrigger::MoldMildew, SmartValue::No);
    engine.cancel_cascade_removal();

    assert_eq!(engine.order().load_list, lists_before.0);
    assert_eq!(engine.order().handling_codes, lists_before.1);
    assert_eq!(engine.order().order_types, lists_before.2);
    assert_eq!(engine.order().conditions.mold_mildew, SmartValue::No);
    assert!(engine.pending_removal().is_none());
}

#[test]
fn lights_survive_single_supplier_shutoff() {
    let mut engine = IntakeEngine::new(sample_directory());
    engine.update_smart(SmartTrigger::NoElectricity, SmartValue::Yes);
    engine.update_smart(SmartTrigger::BoardedUp, SmartValue::Yes);

    engine.update_smart(SmartTrigger::NoElectricity, SmartValue::No);
    assert!(engine.pending_removal().is_none());
    assert_eq!(engine.order().load_list, vec!["Lights"]);
}

#[test]
fn capture_merge_and_confirm() {
    let mut engine = IntakeEngine::new(sample_directory());

    let proposal = engine
        .capture_contact(CaptureSource::QuickAdd, "Allstate", "Alex Morgan")
        .unwrap()
        .expect("carrier should be eligible")
        .clone();
    assert!(proposal.offered.contains(&RoleKind::Insurance));

    let applied = engine.confirm_role_assignment(&[RoleKind::Insurance, RoleKind::BillTo]);
    assert_eq!(applied, vec![RoleKind::Insurance, RoleKind::BillTo]);
    // Both roles point at the same company; dedup keeps one entry, under
    // the last slot applied, and bill-to also fills the payer field.
    assert_eq!(engine.order().company_roles.len(), 1);
    let entry = &engine.order().company_roles[&RoleKind::BillTo];
    assert!(entry.has_contact("Alex Morgan"));
    assert_eq!(engine.order().bill_to_payer, "Allstate");
}

#[test]
fn capture_without_company_is_rejected() {
    let mut engine = IntakeEngine::new(sample_directory());
    let before = engine.order().clone();
    assert!(engine
        .capture_contact(CaptureSource::QuickAdd, "", "Alex Morgan")
        .is_err());
    assert_eq!(engine.order(), &before);
}

#[test]
fn status_flows_with_milestones_and_holds() {
    let mut engine = IntakeEngine::new(sample_directory());

    // The derived authorization blocker holds the job at yellow.
    engine.update_order(|_| {});
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Yellow);
    assert!(engine
        .order()
        .scope_bridge
        .pending_issues
        .contains(&AWAITING_SIGNED_AUTHORIZATION.to_string()));

    // Toggling the auto-managed blocker directly does nothing.
    assert!(!engine.clear_blocker(AWAITING_SIGNED_AUTHORIZATION));
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Yellow);

    engine.record_milestone(AUTHORIZATION_ON_FILE);
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Green);
    assert_eq!(engine.order().scope_bridge.status_reason, PRODUCTION_AUTHORIZED);

    engine.set_next_step("call adjuster about scope");
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Yellow);
    assert_eq!(engine.order().scope_bridge.status_reason, "");

    engine.set_next_step("");
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Green);
}

#[test]
fn manual_red_pin_survives_recompute() {
    let mut engine = IntakeEngine::new(sample_directory());
    engine.record_milestone(AUTHORIZATION_ON_FILE);
    engine.pin_red("stop work order");

    engine.update_order(|_| {});
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Red);
    assert_eq!(engine.order().scope_bridge.status_reason, "stop work order");

    engine.unpin_status();
    assert_eq!(engine.order().scope_bridge.project_status, ProjectStatus::Green);
}

#[test]
fn add_address_scenario() {
    let mut engine = IntakeEngine::new(sample_directory());
    engine.add_address();

    let order = engine.order();
    assert_eq!(order.addresses.len(), 2);
    let added = &order.addresses[1];
    assert!(added.placeholder_active());
    assert_eq!(added.street, "");
    assert_eq!(added.kind, "");
}

#[test]
fn save_then_reload_preserves_document() {
    let mut store = MemoryStore::new();
    let mut engine = IntakeEngine::new(sample_directory());
    engine.update_smart(SmartTrigger::MoldMildew, SmartValue::Yes);
    engine.update_order(|order| order.order_name = "Reid water loss".to_string());
    engine.record_milestone(AUTHORIZATION_ON_FILE);

    let report = engine.save_to(&mut store).unwrap();
    assert!(report.required_count > 0);
    assert!(store.read(intake_store::ORDER_KEY).is_some());

    let reloaded = load_order(&store);
    assert_eq!(reloaded.order_name, "Reid water loss");
    assert_eq!(reloaded.order_types, vec!["Mold"]);
    assert_eq!(reloaded.scope_bridge.project_status, ProjectStatus::Green);
}

#[test]
fn audit_reflects_live_edits() {
    let mut engine = IntakeEngine::new(sample_directory());
    let before = engine.audit();

    engine.update_order(|order| order.order_name = "Reid water loss".to_string());
    let after = engine.audit();

    assert_eq!(after.missing.len(), before.missing.len() - 1);
    assert!(after.percent >= before.percent);
}
