//! EquityDesk Core - cap table reconstruction and liquidity modeling.
//!
//! This crate contains the ownership computation engine for EquityDesk.
//! It is storage- and transport-agnostic: callers hand it fully-resolved
//! snapshots of shareholders, share classes, rounds, and transactions,
//! and every derived view is recomputed synchronously from those inputs.

pub mod captable;
pub mod constants;
pub mod errors;
pub mod exit;
pub mod investment;
pub mod rounds;
pub mod share_classes;
pub mod shareholders;
pub mod transactions;

// Re-export the computed views and their builders
pub use captable::*;
pub use exit::*;
pub use investment::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
