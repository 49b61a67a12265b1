pub mod lifecycle;
pub mod requisitions;

pub use lifecycle::{can_perform, transition, update_notes};
pub use requisitions::{NewRequisition, NewRequisitionItem, RequisitionService};
