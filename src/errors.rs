use thiserror::Error;
use validator::ValidationErrors;

use crate::models::{RequisitionStatus, Role};

/// Errors surfaced by the lifecycle engine. Every variant is recoverable and
/// leaves the caller's entity untouched; there are no retries.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RequisitionError {
    /// Malformed creation input. The message names the offending field(s).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The actor's role does not permit the requested action.
    #[error("Unauthorized: role {role} may not {action}")]
    UnauthorizedTransition { role: Role, action: String },

    /// The requisition is not in the status the action requires.
    #[error("Invalid state: cannot {action} a requisition in status '{status}'")]
    InvalidState {
        action: String,
        status: RequisitionStatus,
    },
}

impl RequisitionError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(role: Role, action: impl Into<String>) -> Self {
        Self::UnauthorizedTransition {
            role,
            action: action.into(),
        }
    }

    pub fn invalid_state(action: impl Into<String>, status: RequisitionStatus) -> Self {
        Self::InvalidState {
            action: action.into(),
            status,
        }
    }
}

impl From<ValidationErrors> for RequisitionError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(format!("Invalid input: {errors}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = RequisitionError::unauthorized(Role::InventoryStaff, "Approve");
        assert_eq!(err.to_string(), "Unauthorized: role InventoryStaff may not Approve");

        let err =
            RequisitionError::invalid_state("Mark Paid", RequisitionStatus::PendingApproval);
        assert_eq!(
            err.to_string(),
            "Invalid state: cannot Mark Paid a requisition in status 'Pending Approval'"
        );
    }
}
