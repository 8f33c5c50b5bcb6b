//! Core error types for the equity engine.
//!
//! The engine is handed fully-resolved snapshots and returns typed errors for
//! out-of-domain parameters or incoherent references. Legitimate empty states
//! (no rounds, no shares) are zeroed results, not errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the equity engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cap table calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Scenario rejected: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while folding the transaction log into a cap table.
///
/// A referential gap means the snapshot handed to the engine is incoherent:
/// every derived number would be wrong, so the fold fails instead of
/// dropping the offending transaction.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Transaction {transaction_id} references unknown round {round_id}")]
    RoundNotFound {
        transaction_id: String,
        round_id: String,
    },

    #[error("Transaction {transaction_id} references unknown shareholder {shareholder_id}")]
    ShareholderNotFound {
        transaction_id: String,
        shareholder_id: String,
    },

    #[error("Round {round_id} references unknown share class {share_class_id}")]
    ShareClassNotFound {
        round_id: String,
        share_class_id: String,
    },

    #[error("Cutoff round {0} does not exist")]
    CutoffRoundNotFound(String),

    #[error("Invalid transaction data: {0}")]
    InvalidTransaction(String),
}

/// Out-of-domain parameters for investment or exit scenarios.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Target ownership of {0}% leaves no shares for existing holders")]
    OwnershipOutOfRange(Decimal),

    #[error("Acquisition percentage {0} must be within 0-100")]
    AcquisitionPercentageOutOfRange(Decimal),

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Share count must not be negative, got {0}")]
    NegativeShareCount(Decimal),

    #[error("Post-money valuation must be positive, got {0}")]
    NonPositiveValuation(Decimal),
}

/// Validation errors for input records.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
