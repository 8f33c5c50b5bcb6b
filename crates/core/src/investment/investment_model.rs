//! Investment scenario view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shareholders::ShareholderRole;

/// How the target raise is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentMode {
    /// Raise a fixed amount; ownership follows from the valuation
    Amount,
    /// Sell a fixed percentage; the amount follows from the valuation
    Percentage,
}

impl InvestmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentMode::Amount => "amount",
            InvestmentMode::Percentage => "percentage",
        }
    }
}

impl FromStr for InvestmentMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "amount" => Ok(InvestmentMode::Amount),
            "percentage" => Ok(InvestmentMode::Percentage),
            _ => Err(format!("Unknown investment mode: {}", s)),
        }
    }
}

/// Planned outcome of a prospective financing round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlan {
    pub new_shares: Decimal,
    pub investment_amount: Decimal,
    /// New investor's post-round ownership
    pub ownership_percentage: Decimal,
    pub total_shares_after_round: Decimal,
    pub share_price: Decimal,
    pub pre_money_valuation: Decimal,
}

/// Per-holder dilution caused by a planned issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DilutionRow {
    pub shareholder_id: String,
    pub shareholder_name: String,
    pub role: ShareholderRole,
    pub previous_ownership: Decimal,
    pub new_ownership: Decimal,
    /// previous minus new; never negative for a positive issuance
    pub dilution: Decimal,
}
