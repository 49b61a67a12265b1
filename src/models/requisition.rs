use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::user::Role;

/// Lifecycle states in workflow order. `Ord` follows declaration order, so
/// "later in the workflow" compares greater.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
    Serialize, Deserialize,
)]
pub enum RequisitionStatus {
    #[strum(serialize = "Pending Approval")]
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    Approved,
    Paid,
    #[strum(serialize = "Awaiting Receipt")]
    #[serde(rename = "Awaiting Receipt")]
    AwaitingReceipt,
    Completed,
}

impl RequisitionStatus {
    /// The status one step further along the workflow, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::PendingApproval => Some(Self::Approved),
            Self::Approved => Some(Self::Paid),
            Self::Paid => Some(Self::AwaitingReceipt),
            Self::AwaitingReceipt => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Department {
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    Hr,
    Finance,
    #[strum(serialize = "IT")]
    #[serde(rename = "IT")]
    It,
    Operations,
    Marketing,
    Legal,
}

/// A single line on a requisition. Immutable once created; replaced wholesale
/// if the caller needs a different item list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionItem {
    /// Unique within the parent requisition.
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Always `quantity * unit_price`.
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A purchase requisition snapshot. Mutated only by replacing the whole value
/// through the service operations; audit fields are written once by the
/// transition that produces them and never cleared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: String,
    pub department: Department,
    pub supplier_name: String,
    pub requested_by: String,
    pub request_date: NaiveDate,
    /// Always the sum of item `total_price`.
    pub total_amount: Decimal,
    pub status: RequisitionStatus,
    pub items: Vec<RequisitionItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub stock_verified: bool,
    pub receipt_uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

/// A role-gated workflow action. The three table lookups below are the single
/// source of truth for which (role, status) pair may trigger which move; both
/// `transition` and `can_perform` consult them.
#[derive(Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum TransitionAction {
    Approve,
    #[strum(serialize = "Mark Paid")]
    MarkPaid,
    #[strum(serialize = "Verify Stock")]
    VerifyStock,
    #[strum(serialize = "Upload Receipt")]
    UploadReceipt { receipt_url: String },
}

impl TransitionAction {
    pub fn required_role(&self) -> Role {
        match self {
            Self::Approve => Role::Admin,
            Self::MarkPaid => Role::Disbursements,
            Self::VerifyStock | Self::UploadReceipt { .. } => Role::InventoryStaff,
        }
    }

    pub fn precondition(&self) -> RequisitionStatus {
        match self {
            Self::Approve => RequisitionStatus::PendingApproval,
            Self::MarkPaid => RequisitionStatus::Approved,
            Self::VerifyStock => RequisitionStatus::Paid,
            Self::UploadReceipt { .. } => RequisitionStatus::AwaitingReceipt,
        }
    }

    pub fn result_status(&self) -> RequisitionStatus {
        match self {
            Self::Approve => RequisitionStatus::Approved,
            Self::MarkPaid => RequisitionStatus::Paid,
            Self::VerifyStock => RequisitionStatus::AwaitingReceipt,
            Self::UploadReceipt { .. } => RequisitionStatus::Completed,
        }
    }
}
