//! Folds the transaction log into per-shareholder totals and ownership.
//!
//! The transaction log is the single source of truth: every total here is a
//! view derived on demand, and re-running the fold with identical inputs
//! produces bit-identical output.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{OPTION_POOL_CLASS_LABEL, OPTION_POOL_ID, OPTION_POOL_NAME};
use crate::errors::{CalculatorError, Result};
use crate::rounds::Round;
use crate::share_classes::{ShareClass, ShareClassKind};
use crate::shareholders::{RoleGroup, Shareholder, ShareholderRole};
use crate::transactions::Transaction;

use super::{CapTable, CapTableGroup, CapTableRow};

/// Running totals for one shareholder while folding the log.
#[derive(Default)]
struct HolderAccumulator {
    shares: Decimal,
    investment: Decimal,
    /// Investment placed into preferred classes
    preferred_investment: Decimal,
    /// Sum of investment x multiplier over preferred transactions
    weighted_multiplier: Decimal,
    /// Unweighted multiplier sum, fallback when preferred investment is zero
    multiplier_sum: Decimal,
    preferred_count: u32,
    /// (round date, round id, share class label) of the latest transaction
    latest_class: Option<(NaiveDate, String, String)>,
}

impl HolderAccumulator {
    fn apply(&mut self, tx: &Transaction, round: &Round, class: &ShareClass) {
        self.shares += tx.shares_issued;
        self.investment += tx.investment_amount;

        if class.kind == ShareClassKind::Preferred {
            let multiplier = tx
                .preference_multiplier
                .unwrap_or(class.preference_multiplier);
            self.preferred_investment += tx.investment_amount;
            self.weighted_multiplier += tx.investment_amount * multiplier;
            self.multiplier_sum += multiplier;
            self.preferred_count += 1;
        }

        let key = (round.date, round.id.clone(), class.name.clone());
        match &self.latest_class {
            Some((date, id, _)) if (*date, id.as_str()) >= (round.date, round.id.as_str()) => {}
            _ => self.latest_class = Some(key),
        }
    }

    /// Investment-weighted multiplier, so that investment x multiplier equals
    /// the exact sum of per-transaction preference claims.
    fn effective_multiplier(&self) -> Option<Decimal> {
        if self.preferred_count == 0 {
            return None;
        }
        if !self.preferred_investment.is_zero() {
            Some(self.weighted_multiplier / self.preferred_investment)
        } else {
            Some(self.multiplier_sum / Decimal::from(self.preferred_count))
        }
    }
}

/// Reconstructs the cap table from the transaction log, up to an optional
/// cutoff round.
///
/// Rounds dated on or before the cutoff round's date are included (no cutoff
/// means "current": everything). Option pool shares of included rounds land
/// in a synthetic "Option Pool" row unless a shareholder already owns that
/// id. A snapshot with no included shares returns the zeroed empty table.
pub fn build_cap_table(
    shareholders: &[Shareholder],
    share_classes: &[ShareClass],
    rounds: &[Round],
    transactions: &[Transaction],
    cutoff_round_id: Option<&str>,
) -> Result<CapTable> {
    debug!(
        "Building cap table from {} transactions across {} rounds (cutoff: {:?})",
        transactions.len(),
        rounds.len(),
        cutoff_round_id
    );

    let rounds_by_id: HashMap<&str, &Round> = rounds.iter().map(|r| (r.id.as_str(), r)).collect();
    let classes_by_id: HashMap<&str, &ShareClass> =
        share_classes.iter().map(|c| (c.id.as_str(), c)).collect();
    let shareholders_by_id: HashMap<&str, &Shareholder> =
        shareholders.iter().map(|s| (s.id.as_str(), s)).collect();

    let cutoff_date = match cutoff_round_id {
        Some(id) => Some(
            rounds_by_id
                .get(id)
                .ok_or_else(|| CalculatorError::CutoffRoundNotFound(id.to_string()))?
                .date,
        ),
        None => None,
    };
    let round_included =
        |round: &Round| cutoff_date.map_or(true, |cutoff| round.date <= cutoff);

    let mut holders: HashMap<String, HolderAccumulator> = HashMap::new();

    for tx in transactions {
        let round = rounds_by_id.get(tx.round_id.as_str()).ok_or_else(|| {
            CalculatorError::RoundNotFound {
                transaction_id: tx.id.clone(),
                round_id: tx.round_id.clone(),
            }
        })?;
        if !shareholders_by_id.contains_key(tx.shareholder_id.as_str()) {
            return Err(CalculatorError::ShareholderNotFound {
                transaction_id: tx.id.clone(),
                shareholder_id: tx.shareholder_id.clone(),
            }
            .into());
        }
        if !round_included(round) {
            continue;
        }

        if tx.shares_issued <= Decimal::ZERO {
            return Err(CalculatorError::InvalidTransaction(format!(
                "Transaction {} issues {} shares; share counts must be positive",
                tx.id, tx.shares_issued
            ))
            .into());
        }
        if tx.investment_amount < Decimal::ZERO {
            return Err(CalculatorError::InvalidTransaction(format!(
                "Transaction {} has negative investment {}",
                tx.id, tx.investment_amount
            ))
            .into());
        }

        let class = classes_by_id
            .get(round.share_class_id.as_str())
            .ok_or_else(|| CalculatorError::ShareClassNotFound {
                round_id: round.id.clone(),
                share_class_id: round.share_class_id.clone(),
            })?;

        holders
            .entry(tx.shareholder_id.clone())
            .or_default()
            .apply(tx, round, class);
    }

    // Option pool shares dilute everyone equally; they accrue to the synthetic
    // pool bucket unless a real shareholder already holds that id.
    for round in rounds.iter().filter(|r| round_included(r)) {
        if round.option_pool_shares > Decimal::ZERO {
            holders
                .entry(OPTION_POOL_ID.to_string())
                .or_default()
                .shares += round.option_pool_shares;
        }
    }

    let total_shares: Decimal = holders.values().map(|acc| acc.shares).sum();
    let total_investment: Decimal = holders.values().map(|acc| acc.investment).sum();

    if total_shares.is_zero() {
        return Ok(CapTable::empty());
    }

    let mut rows: Vec<CapTableRow> = Vec::with_capacity(holders.len());
    for (holder_id, acc) in holders {
        if acc.shares.is_zero() {
            warn!("Holder {} has zero shares at cutoff; row excluded", holder_id);
            continue;
        }

        let (name, role) = match shareholders_by_id.get(holder_id.as_str()) {
            Some(shareholder) => (shareholder.name.clone(), shareholder.role),
            // Only the synthetic pool bucket can be absent from the registry;
            // unknown ids already failed the fold above.
            None => (OPTION_POOL_NAME.to_string(), ShareholderRole::Employee),
        };

        let (share_class, share_class_kind) = match &acc.latest_class {
            Some((_, _, class_name)) => {
                let kind = if acc.preferred_count > 0 {
                    ShareClassKind::Preferred
                } else {
                    ShareClassKind::Common
                };
                (class_name.clone(), kind)
            }
            None => (OPTION_POOL_CLASS_LABEL.to_string(), ShareClassKind::Common),
        };

        let price_per_share = if acc.investment.is_zero() {
            Decimal::ZERO
        } else {
            acc.investment / acc.shares
        };

        rows.push(CapTableRow {
            shareholder_id: holder_id,
            shareholder_name: name,
            role,
            ownership_percentage: acc.shares / total_shares * dec!(100),
            shares: acc.shares,
            investment: acc.investment,
            share_class,
            share_class_kind,
            preference_multiplier: acc.effective_multiplier(),
            price_per_share,
        });
    }

    rows.sort_by(|a, b| {
        b.shares
            .cmp(&a.shares)
            .then_with(|| a.shareholder_id.cmp(&b.shareholder_id))
    });

    Ok(CapTable {
        rows,
        total_shares,
        total_investment,
    })
}

/// Rolls cap table rows up into the fixed role groups.
///
/// Group percentages are sums of row percentages, so the grouped view totals
/// exactly what the individual view does.
pub fn group_cap_table(cap_table: &CapTable) -> Vec<CapTableGroup> {
    let mut totals: HashMap<RoleGroup, CapTableGroup> = HashMap::new();

    for row in &cap_table.rows {
        let group = row.role.group();
        let entry = totals.entry(group).or_insert_with(|| CapTableGroup {
            group,
            label: group.label().to_string(),
            shares: Decimal::ZERO,
            ownership_percentage: Decimal::ZERO,
            investment: Decimal::ZERO,
            holder_count: 0,
        });
        entry.shares += row.shares;
        entry.ownership_percentage += row.ownership_percentage;
        entry.investment += row.investment;
        entry.holder_count += 1;
    }

    RoleGroup::ALL
        .iter()
        .filter_map(|group| totals.remove(group))
        .collect()
}
