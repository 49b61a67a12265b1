//! Read-side helpers: the conjunctive requisition filter and the dashboard
//! summary. Both operate on the caller-held collection and preserve its
//! order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Department, Requisition, RequisitionStatus, Role};

/// Role-scoped default view. Admins land on their approval queue and
/// Disbursements on the payment queue; InventoryStaff see everything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryFilter {
    All,
    Status(RequisitionStatus),
}

impl PrimaryFilter {
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::Status(RequisitionStatus::PendingApproval),
            Role::Disbursements => Self::Status(RequisitionStatus::Approved),
            Role::InventoryStaff => Self::All,
        }
    }

    fn matches(self, requisition: &Requisition) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => requisition.status == status,
        }
    }
}

impl Default for PrimaryFilter {
    fn default() -> Self {
        Self::All
    }
}

/// Filter criteria. All populated criteria must hold (AND); an empty search
/// term matches everything.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequisitionFilter {
    /// Case-insensitive substring match against id, supplier, requester, and
    /// department.
    pub search: Option<String>,
    pub status: Option<RequisitionStatus>,
    pub department: Option<Department>,
    pub primary: PrimaryFilter,
}

impl RequisitionFilter {
    /// The view a user of `role` starts from: no search, no explicit status
    /// or department, the role's default primary filter.
    pub fn for_role(role: Role) -> Self {
        Self {
            primary: PrimaryFilter::default_for(role),
            ..Self::default()
        }
    }

    fn matches(&self, requisition: &Requisition) -> bool {
        if let Some(term) = self.search.as_deref().filter(|term| !term.is_empty()) {
            let term = term.to_lowercase();
            let hit = requisition.id.to_lowercase().contains(&term)
                || requisition.supplier_name.to_lowercase().contains(&term)
                || requisition.requested_by.to_lowercase().contains(&term)
                || requisition.department.to_string().to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status {
            if requisition.status != status {
                return false;
            }
        }
        if let Some(department) = self.department {
            if requisition.department != department {
                return false;
            }
        }
        self.primary.matches(requisition)
    }
}

/// Returns the ordered subsequence of `requisitions` matching `filter`.
pub fn filter_requisitions(
    requisitions: &[Requisition],
    filter: &RequisitionFilter,
) -> Vec<Requisition> {
    requisitions
        .iter()
        .filter(|requisition| filter.matches(requisition))
        .cloned()
        .collect()
}

/// Per-status counts plus the total value across the whole collection, as
/// shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionSummary {
    pub pending_approval: usize,
    pub approved: usize,
    pub paid: usize,
    pub awaiting_receipt: usize,
    pub completed: usize,
    pub total_value: Decimal,
}

pub fn summarize(requisitions: &[Requisition]) -> RequisitionSummary {
    let mut summary = RequisitionSummary::default();
    for requisition in requisitions {
        match requisition.status {
            RequisitionStatus::PendingApproval => summary.pending_approval += 1,
            RequisitionStatus::Approved => summary.approved += 1,
            RequisitionStatus::Paid => summary.paid += 1,
            RequisitionStatus::AwaitingReceipt => summary.awaiting_receipt += 1,
            RequisitionStatus::Completed => summary.completed += 1,
        }
        summary.total_value += requisition.total_amount;
    }
    summary
}
