pub mod requisition;
pub mod user;

pub use requisition::{
    Department, Requisition, RequisitionItem, RequisitionStatus, TransitionAction,
};
pub use user::{Role, User};
