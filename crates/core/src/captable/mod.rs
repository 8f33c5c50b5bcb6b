//! Cap table module - derived ownership views from the transaction log.

mod captable_builder;
mod captable_model;

pub use captable_builder::{build_cap_table, group_cap_table};
pub use captable_model::{CapTable, CapTableGroup, CapTableRow};
