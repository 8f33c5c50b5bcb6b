//! Shareholder domain models.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// Role of a shareholder on the cap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareholderRole {
    Founder,
    Investor,
    Employee,
    Advisor,
}

impl ShareholderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareholderRole::Founder => "FOUNDER",
            ShareholderRole::Investor => "INVESTOR",
            ShareholderRole::Employee => "EMPLOYEE",
            ShareholderRole::Advisor => "ADVISOR",
        }
    }

    /// Fixed mapping from role to presentation group.
    pub fn group(&self) -> RoleGroup {
        match self {
            ShareholderRole::Founder => RoleGroup::Founders,
            ShareholderRole::Investor => RoleGroup::Investors,
            ShareholderRole::Employee | ShareholderRole::Advisor => {
                RoleGroup::EmployeesAndAdvisors
            }
        }
    }
}

impl FromStr for ShareholderRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "FOUNDER" => Ok(ShareholderRole::Founder),
            "INVESTOR" => Ok(ShareholderRole::Investor),
            "EMPLOYEE" => Ok(ShareholderRole::Employee),
            "ADVISOR" => Ok(ShareholderRole::Advisor),
            _ => Err(format!("Unknown shareholder role: {}", s)),
        }
    }
}

/// Roll-up group for the grouped cap table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleGroup {
    Founders,
    Investors,
    EmployeesAndAdvisors,
}

impl RoleGroup {
    /// Stable ordering for grouped views.
    pub const ALL: [RoleGroup; 3] = [
        RoleGroup::Founders,
        RoleGroup::Investors,
        RoleGroup::EmployeesAndAdvisors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleGroup::Founders => "Founders",
            RoleGroup::Investors => "Investors",
            RoleGroup::EmployeesAndAdvisors => "Employees & Advisors",
        }
    }
}

/// Domain model representing a shareholder.
///
/// Renaming a shareholder never affects historical computations, which key
/// off `id` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shareholder {
    pub id: String,
    pub name: String,
    pub role: ShareholderRole,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for adding a shareholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShareholder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub role: ShareholderRole,
    pub email: Option<String>,
}

impl NewShareholder {
    /// Validates the new shareholder data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Shareholder name cannot be empty".to_string(),
            )));
        }
        if let Some(email) = &self.email {
            // Shape check only; the dashboard owns real address validation
            if !email.trim().is_empty() && !email.contains('@') {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Shareholder email '{}' is malformed",
                    email
                ))));
            }
        }
        Ok(())
    }

    /// Builds the domain model, minting an id when the caller did not supply one.
    pub fn build(self) -> Result<Shareholder> {
        self.validate()?;
        Ok(Shareholder {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            role: self.role,
            email: self.email.filter(|e| !e.trim().is_empty()),
            created_at: Utc::now().naive_utc(),
        })
    }
}
