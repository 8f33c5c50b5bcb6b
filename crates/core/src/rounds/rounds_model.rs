//! Financing round domain models.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a financing round.
///
/// The post-money valuation is derived (pre-money plus the round's total
/// investment) and never stored; see `round_summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub pre_money_valuation: Decimal,
    pub share_class_id: String,
    /// New option shares created in this round, diluting all existing holders
    pub option_pool_shares: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for adding a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub date: NaiveDate,
    pub pre_money_valuation: Decimal,
    pub share_class_id: String,
    pub option_pool_shares: Option<Decimal>,
}

impl NewRound {
    /// Validates the new round data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Round name cannot be empty".to_string(),
            )));
        }
        if self.share_class_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "shareClassId".to_string(),
            )));
        }
        if self.pre_money_valuation < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Pre-money valuation must not be negative, got {}",
                self.pre_money_valuation
            ))));
        }
        if let Some(pool) = self.option_pool_shares {
            if pool < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Option pool shares must not be negative, got {}",
                    pool
                ))));
            }
        }
        Ok(())
    }

    /// Builds the domain model, minting an id when the caller did not supply one.
    pub fn build(self) -> Result<Round> {
        self.validate()?;
        Ok(Round {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            date: self.date,
            pre_money_valuation: self.pre_money_valuation,
            share_class_id: self.share_class_id,
            option_pool_shares: self.option_pool_shares.unwrap_or(Decimal::ZERO),
            created_at: Utc::now().naive_utc(),
        })
    }
}
