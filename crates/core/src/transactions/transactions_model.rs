//! Share issuance ledger models.
//!
//! A transaction is the only mutation primitive in the system. Cap tables,
//! round totals, and exit payouts are all views derived from this log; no
//! running balance is stored anywhere.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// A single share issuance within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub round_id: String,
    pub shareholder_id: String,
    pub investment_amount: Decimal,
    pub shares_issued: Decimal,
    /// Per-participant override of the round share class's preference multiplier
    pub preference_multiplier: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a share issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub round_id: String,
    pub shareholder_id: String,
    pub investment_amount: Decimal,
    pub shares_issued: Decimal,
    pub preference_multiplier: Option<Decimal>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.round_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "roundId".to_string(),
            )));
        }
        if self.shareholder_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "shareholderId".to_string(),
            )));
        }
        if self.investment_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Investment amount must not be negative, got {}",
                self.investment_amount
            ))));
        }
        if self.shares_issued <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Shares issued must be positive, got {}",
                self.shares_issued
            ))));
        }
        if let Some(multiplier) = self.preference_multiplier {
            if multiplier < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Preference multiplier must not be negative, got {}",
                    multiplier
                ))));
            }
        }
        Ok(())
    }

    /// Builds the domain model, minting an id when the caller did not supply one.
    pub fn build(self) -> Result<Transaction> {
        self.validate()?;
        Ok(Transaction {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            round_id: self.round_id,
            shareholder_id: self.shareholder_id,
            investment_amount: self.investment_amount,
            shares_issued: self.shares_issued,
            preference_multiplier: self.preference_multiplier,
            created_at: Utc::now().naive_utc(),
        })
    }
}
