//! Rounds module - financing round models and aggregation.

mod rounds_model;
mod rounds_service;

pub use rounds_model::{NewRound, Round};
pub use rounds_service::{has_transactions, round_summaries, round_summary, RoundSummary};
