pub mod requisition_queries;

pub use requisition_queries::{
    filter_requisitions, summarize, PrimaryFilter, RequisitionFilter, RequisitionSummary,
};
