//! Transactions module - the share issuance ledger.

mod transactions_model;

pub use transactions_model::{NewTransaction, Transaction};
