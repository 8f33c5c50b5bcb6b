//! Liquidity-event waterfall.
//!
//! Participating preference is modeled as the preference plus a pro-rata
//! share of the *full* exit value; preference claims are not carved out of
//! the distributable pool before the pro-rata split. The summed payout can
//! therefore exceed the proceeds, which the result reports rather than
//! normalizes.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::captable::CapTableRow;
use crate::errors::{Result, ScenarioError};
use crate::share_classes::{ParticipationKind, ShareClassKind};

use super::{ExitCalculationRow, ExitResult};

/// Computes each shareholder's payout for an acquisition.
///
/// `acquisition_percentage` is the fraction of the company being sold, 0-100.
/// Non-participating preferred holders take the larger of their preference
/// and their as-converted value; participating holders take both. Common
/// holders always take their pro-rata share. An empty cap table is valid:
/// proceeds exist even with no recorded holders.
pub fn calculate_exit(
    rows: &[CapTableRow],
    acquisition_amount: Decimal,
    acquisition_percentage: Decimal,
    preference_type: ParticipationKind,
) -> Result<ExitResult> {
    if acquisition_amount < Decimal::ZERO {
        return Err(ScenarioError::NegativeAmount(acquisition_amount).into());
    }
    if acquisition_percentage < Decimal::ZERO || acquisition_percentage > dec!(100) {
        return Err(ScenarioError::AcquisitionPercentageOutOfRange(acquisition_percentage).into());
    }

    let total_exit_value = acquisition_amount * acquisition_percentage / dec!(100);
    debug!(
        "Exit waterfall over {} holders: {} of proceeds distributed {}",
        rows.len(),
        total_exit_value,
        preference_type.as_str()
    );

    let mut exit_calculations: Vec<ExitCalculationRow> = Vec::with_capacity(rows.len());
    let mut total_payout = Decimal::ZERO;

    for row in rows {
        let conversion_value = row.ownership_percentage / dec!(100) * total_exit_value;

        let (preference_amount, final_value) =
            match (row.share_class_kind, row.preference_multiplier) {
                (ShareClassKind::Preferred, Some(multiplier)) => {
                    let preference = row.investment * multiplier;
                    let final_value = match preference_type {
                        ParticipationKind::NonParticipating => preference.max(conversion_value),
                        ParticipationKind::Participating => preference + conversion_value,
                    };
                    (preference, final_value)
                }
                _ => (Decimal::ZERO, conversion_value),
            };

        total_payout += final_value;
        exit_calculations.push(ExitCalculationRow {
            shareholder_id: row.shareholder_id.clone(),
            shareholder_name: row.shareholder_name.clone(),
            ownership_percentage: row.ownership_percentage,
            preference_multiplier: row.preference_multiplier,
            preference_amount,
            conversion_value,
            final_value,
        });
    }

    Ok(ExitResult {
        exit_calculations,
        total_exit_value,
        total_payout,
    })
}
