use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Actor roles recognized by the workflow. Each lifecycle action is owned by
/// exactly one role; see `TransitionAction::required_role`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Role {
    /// Approves pending requisitions.
    Admin,
    /// Records payment of approved requisitions.
    Disbursements,
    /// Creates requisitions, verifies stock, uploads receipts, edits notes.
    InventoryStaff,
}

/// The acting user, as supplied by the presentation layer. The engine trusts
/// the caller to have authenticated the user; it only enforces role gates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}
