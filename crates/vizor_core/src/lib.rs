//! Household cash-flow projection engine
//!
//! This crate turns a declarative [`Scenario`](model::Scenario) into a
//! year-by-year ledger of income, expenses, net cash flow and retirement
//! account balances. It supports:
//! - Salaries and recurring expenses with percent or flat annual increases
//! - One-time income and expenses
//! - Fixed-rate mortgages and car loans
//! - Retirement accounts with contribution and distribution schedules
//! - Social security benefits with a cost-of-living adjustment
//!
//! The calculation is a pure function of its input: no I/O, no shared
//! state, and the same scenario always produces the same output.
//!
//! ```ignore
//! use vizor_core::calculate;
//!
//! let output = calculate(&scenario);
//! for year in &output.years {
//!     println!("{}: {:.2}", year.year, year.cash_on_hand);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod calculator;
pub mod compare;
pub mod error;
pub mod evaluate;
pub mod increase;
pub mod retirement;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::calculate;
pub use compare::{calculate_all, compare};
pub use error::ScenarioError;
