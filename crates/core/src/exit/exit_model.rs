//! Exit scenario view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// One shareholder's payout in a modeled exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitCalculationRow {
    pub shareholder_id: String,
    pub shareholder_name: String,
    pub ownership_percentage: Decimal,
    /// Present only for preferred holders
    pub preference_multiplier: Option<Decimal>,
    /// investment x multiplier, claimable ahead of common; zero for common
    pub preference_amount: Decimal,
    /// As-if-converted-to-common pro-rata payout, always reported
    pub conversion_value: Decimal,
    /// Payout under the selected preference policy
    pub final_value: Decimal,
}

impl ExitCalculationRow {
    /// Final payout rounded for display. Accumulation stays unrounded.
    pub fn display_final_value(&self) -> Decimal {
        self.final_value.round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}

/// Result of an exit waterfall computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitResult {
    pub exit_calculations: Vec<ExitCalculationRow>,
    /// acquisition amount x percentage sold
    pub total_exit_value: Decimal,
    /// Sum of final payouts. Under a participating policy this can exceed
    /// `total_exit_value`; both are reported and neither is corrected.
    pub total_payout: Decimal,
}
