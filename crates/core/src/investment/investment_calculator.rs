//! Investment scenario planning: new-share issuance and resulting dilution.

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::captable::CapTableRow;
use crate::errors::{Result, ScenarioError};

use super::{DilutionRow, InvestmentMode, InvestmentPlan};

/// Plans a new round from a target raise and a post-money valuation.
///
/// In `Amount` mode the investor's ownership follows from the valuation; in
/// `Percentage` mode the amount does. New shares solve
/// `newShares / (currentTotalShares + newShares) = ownership fraction`,
/// giving `newShares = p * S / (1 - p)`. A target at or above 100% has no
/// solution and is rejected.
pub fn plan_investment(
    current_total_shares: Decimal,
    mode: InvestmentMode,
    value: Decimal,
    post_money_valuation: Decimal,
) -> Result<InvestmentPlan> {
    if current_total_shares < Decimal::zero() {
        return Err(ScenarioError::NegativeShareCount(current_total_shares).into());
    }
    if value < Decimal::zero() {
        return Err(ScenarioError::NegativeAmount(value).into());
    }

    let (investment_amount, ownership_percentage) = match mode {
        InvestmentMode::Amount => {
            if post_money_valuation <= Decimal::zero() && !value.is_zero() {
                return Err(ScenarioError::NonPositiveValuation(post_money_valuation).into());
            }
            let ownership = if value.is_zero() {
                Decimal::zero()
            } else {
                value / post_money_valuation * dec!(100)
            };
            (value, ownership)
        }
        InvestmentMode::Percentage => {
            if post_money_valuation < Decimal::zero() {
                return Err(ScenarioError::NonPositiveValuation(post_money_valuation).into());
            }
            (value / dec!(100) * post_money_valuation, value)
        }
    };

    if ownership_percentage >= dec!(100) {
        return Err(ScenarioError::OwnershipOutOfRange(ownership_percentage).into());
    }

    debug!(
        "Planning {} round: {} for {}% of the company post-money",
        mode.as_str(),
        investment_amount,
        ownership_percentage
    );

    let ownership_fraction = ownership_percentage / dec!(100);
    let new_shares = if ownership_fraction.is_zero() {
        Decimal::zero()
    } else {
        ownership_fraction * current_total_shares / (dec!(1) - ownership_fraction)
    };
    let share_price = if new_shares.is_zero() {
        Decimal::zero()
    } else {
        investment_amount / new_shares
    };

    Ok(InvestmentPlan {
        new_shares,
        investment_amount,
        ownership_percentage,
        total_shares_after_round: current_total_shares + new_shares,
        share_price,
        pre_money_valuation: post_money_valuation - investment_amount,
    })
}

/// Recomputes each existing holder's ownership under the planned issuance.
///
/// Together with the plan's own `ownership_percentage`, the returned rows
/// account for 100% of the post-round company.
pub fn dilution_schedule(rows: &[CapTableRow], plan: &InvestmentPlan) -> Vec<DilutionRow> {
    rows.iter()
        .map(|row| {
            let new_ownership = if plan.total_shares_after_round.is_zero() {
                Decimal::zero()
            } else {
                row.shares / plan.total_shares_after_round * dec!(100)
            };
            DilutionRow {
                shareholder_id: row.shareholder_id.clone(),
                shareholder_name: row.shareholder_name.clone(),
                role: row.role,
                previous_ownership: row.ownership_percentage,
                new_ownership,
                dilution: row.ownership_percentage - new_ownership,
            }
        })
        .collect()
}
