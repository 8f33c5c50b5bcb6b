//! Shareholders module - domain models and role grouping.

mod shareholders_model;

pub use shareholders_model::{NewShareholder, RoleGroup, Shareholder, ShareholderRole};

#[cfg(test)]
mod shareholders_model_tests;
