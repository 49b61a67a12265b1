//! Filter-layer tests: conjunctive criteria, case-insensitive search,
//! role-scoped primary filters, and the dashboard summary.

use std::sync::Arc;

use rust_decimal_macros::dec;

use requisition_core::{
    filter_requisitions, summarize,
    ids::CounterIdSequence,
    models::{Department, Requisition, RequisitionStatus, Role, TransitionAction, User},
    services::{NewRequisition, NewRequisitionItem, RequisitionService},
    PrimaryFilter, RequisitionFilter,
};

fn staff() -> User {
    User::new("Wanjiku Kamau", Role::InventoryStaff)
}

fn new_requisition(
    service: &RequisitionService,
    department: Department,
    supplier: &str,
) -> Requisition {
    service
        .create_requisition(
            NewRequisition {
                department,
                supplier_name: supplier.into(),
                items: vec![NewRequisitionItem {
                    name: "Stapler".into(),
                    quantity: 10,
                    unit_price: dec!(250),
                    description: None,
                }],
                notes: None,
            },
            &staff(),
        )
        .unwrap()
}

/// Four requisitions across departments; the IT one is approved, the HR one
/// is paid, the rest stay pending.
fn fixture() -> Vec<Requisition> {
    let service = RequisitionService::new(Arc::new(CounterIdSequence::default()));
    let admin = User::new("Grace Odhiambo", Role::Admin);
    let disbursements = User::new("Peter Mwangi", Role::Disbursements);

    let it = new_requisition(&service, Department::It, "Acme Supplies Ltd");
    let it = service.transition(&it, TransitionAction::Approve, &admin).unwrap();

    let hr = new_requisition(&service, Department::Hr, "Savanna Office Mart");
    let hr = service.transition(&hr, TransitionAction::Approve, &admin).unwrap();
    let hr = service
        .transition(&hr, TransitionAction::MarkPaid, &disbursements)
        .unwrap();

    let finance = new_requisition(&service, Department::Finance, "Umoja Traders");
    let legal = new_requisition(&service, Department::Legal, "Barita Stationers");

    vec![it, hr, finance, legal]
}

#[test]
fn empty_filter_returns_everything_in_order() {
    let all = fixture();
    let out = filter_requisitions(&all, &RequisitionFilter::default());
    assert_eq!(out, all);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let all = fixture();

    // Department match.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some("it".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].department, Department::It);

    // Supplier match.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some("SAVANNA".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].supplier_name, "Savanna Office Mart");

    // Requester match hits every fixture row.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some("wanjiku".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), all.len());

    // Id match.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some("req-0003".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "REQ-0003");
}

#[test]
fn criteria_are_conjunctive() {
    let all = fixture();

    // "IT" + Approved: only the approved IT requisition survives.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some("IT".into()),
            status: Some(RequisitionStatus::Approved),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, RequisitionStatus::Approved);
    assert_eq!(out[0].department, Department::It);

    // Same search with a status no IT requisition has.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some("IT".into()),
            status: Some(RequisitionStatus::Paid),
            ..Default::default()
        },
    );
    assert!(out.is_empty());

    // Department + status.
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            department: Some(Department::Hr),
            status: Some(RequisitionStatus::Paid),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].supplier_name, "Savanna Office Mart");
}

#[test]
fn blank_search_matches_everything() {
    let all = fixture();
    let out = filter_requisitions(
        &all,
        &RequisitionFilter {
            search: Some(String::new()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), all.len());
}

#[test]
fn primary_filter_defaults_per_role() {
    assert_eq!(
        PrimaryFilter::default_for(Role::Admin),
        PrimaryFilter::Status(RequisitionStatus::PendingApproval)
    );
    assert_eq!(
        PrimaryFilter::default_for(Role::Disbursements),
        PrimaryFilter::Status(RequisitionStatus::Approved)
    );
    assert_eq!(PrimaryFilter::default_for(Role::InventoryStaff), PrimaryFilter::All);

    let all = fixture();

    // An admin's default view is their approval queue.
    let out = filter_requisitions(&all, &RequisitionFilter::for_role(Role::Admin));
    assert_eq!(out.len(), 2);
    assert!(out
        .iter()
        .all(|requisition| requisition.status == RequisitionStatus::PendingApproval));

    // Disbursements land on the payment queue.
    let out = filter_requisitions(&all, &RequisitionFilter::for_role(Role::Disbursements));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].status, RequisitionStatus::Approved);

    // Inventory staff see everything.
    let out = filter_requisitions(&all, &RequisitionFilter::for_role(Role::InventoryStaff));
    assert_eq!(out.len(), all.len());
}

#[test]
fn summary_partitions_the_collection() {
    let all = fixture();
    let summary = summarize(&all);

    assert_eq!(summary.pending_approval, 2);
    assert_eq!(summary.approved, 1);
    assert_eq!(summary.paid, 1);
    assert_eq!(summary.awaiting_receipt, 0);
    assert_eq!(summary.completed, 0);
    assert_eq!(
        summary.pending_approval
            + summary.approved
            + summary.paid
            + summary.awaiting_receipt
            + summary.completed,
        all.len()
    );
    // Four requisitions at 10 x 250 each.
    assert_eq!(summary.total_value, dec!(10000));
}
