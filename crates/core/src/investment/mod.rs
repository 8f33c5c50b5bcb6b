//! Investment module - raise planning and dilution.

mod investment_calculator;
mod investment_model;

pub use investment_calculator::{dilution_schedule, plan_investment};
pub use investment_model::{DilutionRow, InvestmentMode, InvestmentPlan};

#[cfg(test)]
mod investment_calculator_tests;
