//! Derived cap table view models.
//!
//! These are recomputed from the transaction log on every query and never
//! cached across mutations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::share_classes::ShareClassKind;
use crate::shareholders::{RoleGroup, ShareholderRole};

/// One shareholder's position on the cap table as of the cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTableRow {
    pub shareholder_id: String,
    pub shareholder_name: String,
    pub role: ShareholderRole,
    pub shares: Decimal,
    /// shares / total shares outstanding x 100, unrounded
    pub ownership_percentage: Decimal,
    pub investment: Decimal,
    /// Label of the class of the holder's latest included transaction
    pub share_class: String,
    pub share_class_kind: ShareClassKind,
    /// Present only for holders with preferred shares; investment-weighted
    /// across their preferred transactions
    pub preference_multiplier: Option<Decimal>,
    /// investment / shares; zero when nothing was paid in
    pub price_per_share: Decimal,
}

impl CapTableRow {
    /// Ownership percentage rounded for display. Accumulation stays unrounded.
    pub fn display_ownership(&self) -> Decimal {
        self.ownership_percentage.round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// The full cap table at a cutoff point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTable {
    pub rows: Vec<CapTableRow>,
    pub total_shares: Decimal,
    pub total_investment: Decimal,
}

impl CapTable {
    /// The "no rounds yet" state. Valid, not an error.
    pub fn empty() -> Self {
        CapTable {
            rows: Vec::new(),
            total_shares: Decimal::ZERO,
            total_investment: Decimal::ZERO,
        }
    }
}

/// Role-group roll-up of cap table rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTableGroup {
    pub group: RoleGroup,
    pub label: String,
    pub shares: Decimal,
    pub ownership_percentage: Decimal,
    pub investment: Decimal,
    pub holder_count: usize,
}
