//! The requisition transition engine.
//!
//! Status moves strictly forward along
//! `Pending Approval -> Approved -> Paid -> Awaiting Receipt -> Completed`.
//! Each action is owned by one role and gated on one precondition status;
//! the table itself lives on [`TransitionAction`]. Every operation here is a
//! pure function from a snapshot to a new snapshot: a rejected transition
//! returns an error and the input is untouched.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::{
    errors::RequisitionError,
    models::{Requisition, Role, TransitionAction, User},
};

/// True iff `actor` may apply `action` to `requisition` right now. Exposes
/// the transition table to front ends without them re-encoding it.
pub fn can_perform(action: &TransitionAction, requisition: &Requisition, actor: &User) -> bool {
    actor.role == action.required_role() && requisition.status == action.precondition()
}

/// Applies `action` to `requisition`, returning the updated snapshot.
///
/// The role gate is checked before the status gate, so an actor who could
/// never perform the action sees `UnauthorizedTransition` regardless of the
/// requisition's status.
#[instrument(skip(requisition, actor), fields(requisition_id = %requisition.id, action = %action, actor = %actor.name))]
pub fn transition(
    requisition: &Requisition,
    action: TransitionAction,
    actor: &User,
) -> Result<Requisition, RequisitionError> {
    if actor.role != action.required_role() {
        warn!(role = %actor.role, "role not permitted to perform action");
        return Err(RequisitionError::unauthorized(actor.role, action.to_string()));
    }
    if requisition.status != action.precondition() {
        warn!(status = %requisition.status, "status precondition not met");
        return Err(RequisitionError::invalid_state(
            action.to_string(),
            requisition.status,
        ));
    }

    let old_status = requisition.status;
    let mut updated = requisition.clone();
    updated.status = action.result_status();

    match action {
        TransitionAction::Approve => {
            updated.approved_by = Some(actor.name.clone());
            updated.approved_date = Some(Utc::now().date_naive());
        }
        TransitionAction::MarkPaid => {
            updated.paid_by = Some(actor.name.clone());
            updated.paid_date = Some(Utc::now().date_naive());
        }
        TransitionAction::VerifyStock => {
            updated.stock_verified = true;
        }
        TransitionAction::UploadReceipt { receipt_url } => {
            updated.receipt_uploaded = true;
            updated.receipt_url = Some(receipt_url);
        }
    }

    info!(
        "requisition {} moved from '{}' to '{}'",
        updated.id, old_status, updated.status
    );

    Ok(updated)
}

/// Replaces the free-text notes. InventoryStaff only, allowed at any status,
/// never changes the status.
#[instrument(skip(requisition, notes, actor), fields(requisition_id = %requisition.id, actor = %actor.name))]
pub fn update_notes(
    requisition: &Requisition,
    notes: impl Into<String>,
    actor: &User,
) -> Result<Requisition, RequisitionError> {
    if actor.role != Role::InventoryStaff {
        warn!(role = %actor.role, "role not permitted to edit notes");
        return Err(RequisitionError::unauthorized(actor.role, "edit notes"));
    }

    let mut updated = requisition.clone();
    let notes = notes.into();
    updated.notes = if notes.is_empty() { None } else { Some(notes) };
    Ok(updated)
}
