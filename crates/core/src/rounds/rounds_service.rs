//! Round aggregation over the transaction log.
//!
//! Deleting a round is only valid once all of its transactions are gone; the
//! engine never cascades. Persistence collaborators check `has_transactions`
//! before issuing the delete.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rounds::Round;
use crate::transactions::Transaction;

/// Aggregated view of a single financing round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round_id: String,
    pub round_name: String,
    pub date: NaiveDate,
    pub total_investment: Decimal,
    /// Pre-money valuation plus the round's total investment
    pub post_money_valuation: Decimal,
    /// Distinct shareholder ids, sorted
    pub participants: Vec<String>,
    pub participant_count: usize,
}

/// Computes investment totals and the derived post-money valuation for one round.
pub fn round_summary(round: &Round, transactions: &[Transaction]) -> RoundSummary {
    let mut total_investment = Decimal::ZERO;
    let mut participants: Vec<String> = Vec::new();

    for tx in transactions.iter().filter(|t| t.round_id == round.id) {
        total_investment += tx.investment_amount;
        if !participants.contains(&tx.shareholder_id) {
            participants.push(tx.shareholder_id.clone());
        }
    }
    participants.sort();

    RoundSummary {
        round_id: round.id.clone(),
        round_name: round.name.clone(),
        date: round.date,
        total_investment,
        post_money_valuation: round.pre_money_valuation + total_investment,
        participant_count: participants.len(),
        participants,
    }
}

/// Summaries for the full round history, ordered by date then id.
pub fn round_summaries(rounds: &[Round], transactions: &[Transaction]) -> Vec<RoundSummary> {
    debug!("Aggregating {} rounds", rounds.len());
    let mut summaries: Vec<RoundSummary> = rounds
        .iter()
        .map(|round| round_summary(round, transactions))
        .collect();
    summaries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.round_id.cmp(&b.round_id)));
    summaries
}

/// True when the round still owns transactions and must not be deleted yet.
pub fn has_transactions(round_id: &str, transactions: &[Transaction]) -> bool {
    transactions.iter().any(|t| t.round_id == round_id)
}
