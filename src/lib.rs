//! Requisition Core
//!
//! Purchase-requisition lifecycle engine: entity model, role-gated status
//! transitions, creation validation, notes editing, and filtering. The crate
//! holds no storage and runs no I/O; a presentation layer owns the
//! requisition collection, calls into [`services::RequisitionService`], and
//! renders the snapshots it gets back.
//!
//! ```
//! use std::sync::Arc;
//! use requisition_core::{
//!     ids::CounterIdSequence,
//!     models::{Department, Role, TransitionAction, User},
//!     services::{NewRequisition, NewRequisitionItem, RequisitionService},
//! };
//!
//! let service = RequisitionService::new(Arc::new(CounterIdSequence::default()));
//! let staff = User::new("Wanjiku", Role::InventoryStaff);
//! let admin = User::new("Odhiambo", Role::Admin);
//!
//! let requisition = service
//!     .create_requisition(
//!         NewRequisition {
//!             department: Department::It,
//!             supplier_name: "Acme Supplies".into(),
//!             items: vec![NewRequisitionItem {
//!                 name: "Laptop".into(),
//!                 quantity: 2,
//!                 unit_price: "45000".parse().unwrap(),
//!                 description: None,
//!             }],
//!             notes: None,
//!         },
//!         &staff,
//!     )
//!     .unwrap();
//!
//! let approved = service
//!     .transition(&requisition, TransitionAction::Approve, &admin)
//!     .unwrap();
//! assert_eq!(approved.approved_by.as_deref(), Some("Odhiambo"));
//! ```
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod errors;
pub mod ids;
pub mod models;
pub mod queries;
pub mod services;

pub use errors::RequisitionError;
pub use models::{
    Department, Requisition, RequisitionItem, RequisitionStatus, Role, TransitionAction, User,
};
pub use queries::{filter_requisitions, summarize, PrimaryFilter, RequisitionFilter};
pub use services::{NewRequisition, NewRequisitionItem, RequisitionService};
