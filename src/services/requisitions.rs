//! Requisition creation and the service facade the presentation layer calls.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use validator::{Validate, ValidationError};

use crate::{
    errors::RequisitionError,
    ids::{IdSequence, UuidIdSequence},
    models::{
        Department, Requisition, RequisitionItem, RequisitionStatus, Role, TransitionAction, User,
    },
    services::lifecycle,
};

/// Draft of a single requisition line. Validated before any entity is built,
/// so a partial or invalid item never reaches a `Requisition`.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct NewRequisitionItem {
    #[validate(length(min = 1, message = "item name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[validate(custom = "validate_unit_price")]
    pub unit_price: Decimal,
    pub description: Option<String>,
}

fn validate_unit_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.message = Some("unit price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Draft of a whole requisition. The department is typed, so an unknown
/// department is rejected at the presentation boundary (`Department:
/// FromStr`) before a draft ever exists.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct NewRequisition {
    pub department: Department,
    #[validate(length(min = 1, message = "supplier name is required"))]
    pub supplier_name: String,
    pub items: Vec<NewRequisitionItem>,
    pub notes: Option<String>,
}

/// Facade over creation, transitions, and notes editing. Holds only the
/// injected id sequence; all operations are synchronous functions from the
/// caller's snapshot to a new one.
#[derive(Clone)]
pub struct RequisitionService {
    ids: Arc<dyn IdSequence>,
}

impl Default for RequisitionService {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdSequence))
    }
}

impl RequisitionService {
    pub fn new(ids: Arc<dyn IdSequence>) -> Self {
        Self { ids }
    }

    /// Creates a requisition in `Pending Approval`. Only InventoryStaff may
    /// create; all input constraints are checked up front and no entity is
    /// produced on failure.
    #[instrument(skip(self, input), fields(actor = %actor.name, department = %input.department))]
    pub fn create_requisition(
        &self,
        input: NewRequisition,
        actor: &User,
    ) -> Result<Requisition, RequisitionError> {
        if actor.role != Role::InventoryStaff {
            return Err(RequisitionError::unauthorized(
                actor.role,
                "create a requisition",
            ));
        }

        input.validate().map_err(|e| {
            let err = RequisitionError::from(e);
            error!("{err}");
            err
        })?;
        if input.items.is_empty() {
            return Err(RequisitionError::validation(
                "items: at least one item is required",
            ));
        }
        for (index, item) in input.items.iter().enumerate() {
            item.validate().map_err(|e| {
                let err = RequisitionError::validation(format!("item {}: {e}", index + 1));
                error!("{err}");
                err
            })?;
        }

        let items: Vec<RequisitionItem> = input
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| RequisitionItem {
                id: format!("item-{}", index + 1),
                total_price: Decimal::from(item.quantity) * item.unit_price,
                name: item.name,
                quantity: item.quantity,
                unit_price: item.unit_price,
                description: item.description,
            })
            .collect();
        let total_amount = items.iter().map(|item| item.total_price).sum();

        let requisition = Requisition {
            id: self.ids.next_id(),
            department: input.department,
            supplier_name: input.supplier_name,
            requested_by: actor.name.clone(),
            request_date: Utc::now().date_naive(),
            total_amount,
            status: RequisitionStatus::PendingApproval,
            items,
            notes: input.notes.filter(|notes| !notes.is_empty()),
            stock_verified: false,
            receipt_uploaded: false,
            receipt_url: None,
            approved_by: None,
            approved_date: None,
            paid_by: None,
            paid_date: None,
        };

        info!(
            "requisition {} created for supplier '{}' ({} items, total {})",
            requisition.id,
            requisition.supplier_name,
            requisition.items.len(),
            requisition.total_amount
        );

        Ok(requisition)
    }

    /// See [`lifecycle::transition`].
    pub fn transition(
        &self,
        requisition: &Requisition,
        action: TransitionAction,
        actor: &User,
    ) -> Result<Requisition, RequisitionError> {
        lifecycle::transition(requisition, action, actor)
    }

    /// See [`lifecycle::can_perform`].
    pub fn can_perform(
        &self,
        action: &TransitionAction,
        requisition: &Requisition,
        actor: &User,
    ) -> bool {
        lifecycle::can_perform(action, requisition, actor)
    }

    /// See [`lifecycle::update_notes`].
    pub fn update_notes(
        &self,
        requisition: &Requisition,
        notes: impl Into<String>,
        actor: &User,
    ) -> Result<Requisition, RequisitionError> {
        lifecycle::update_notes(requisition, notes, actor)
    }
}
