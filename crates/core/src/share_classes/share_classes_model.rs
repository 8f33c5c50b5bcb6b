//! Share class domain models.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// Whether a class ranks ahead of common stock in a liquidity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareClassKind {
    #[default]
    Common,
    Preferred,
}

impl ShareClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareClassKind::Common => "COMMON",
            ShareClassKind::Preferred => "PREFERRED",
        }
    }
}

impl FromStr for ShareClassKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "COMMON" => Ok(ShareClassKind::Common),
            "PREFERRED" => Ok(ShareClassKind::Preferred),
            _ => Err(format!("Unknown share class kind: {}", s)),
        }
    }
}

/// Participation behavior of a preference.
///
/// A class declares its default here, but the policy actually applied to an
/// exit is selected per scenario call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipationKind {
    Participating,
    #[default]
    NonParticipating,
}

impl ParticipationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationKind::Participating => "participating",
            ParticipationKind::NonParticipating => "non-participating",
        }
    }
}

impl FromStr for ParticipationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "participating" => Ok(ParticipationKind::Participating),
            "non-participating" => Ok(ParticipationKind::NonParticipating),
            _ => Err(format!("Unknown participation kind: {}", s)),
        }
    }
}

/// Domain model representing a share class and its preference terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareClass {
    pub id: String,
    pub name: String,
    pub kind: ShareClassKind,
    /// Multiple of invested capital claimable ahead of common
    pub preference_multiplier: Decimal,
    pub participation: ParticipationKind,
    pub created_at: NaiveDateTime,
}

/// Input model for adding a share class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShareClass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub kind: ShareClassKind,
    /// Defaults to 1.0 when absent
    pub preference_multiplier: Option<Decimal>,
    pub participation: Option<ParticipationKind>,
}

impl NewShareClass {
    /// Validates the new share class data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Share class name cannot be empty".to_string(),
            )));
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
    pub fn build(self) -> Result<ShareClass> {
        self.validate()?;
        Ok(ShareClass {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            kind: self.kind,
            preference_multiplier: self.preference_multiplier.unwrap_or(dec!(1)),
            participation: self.participation.unwrap_or_default(),
            created_at: Utc::now().naive_utc(),
        })
    }
}
