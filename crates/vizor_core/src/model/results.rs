//! Projection results
//!
//! Output types produced by the calculator. Field names serialize in
//! camelCase so the documents match what the presentation layer reads.

use serde::{Deserialize, Serialize};

use super::ids::ModelId;

#[cfg(feature = "ts")]
use ts_rs::TS;

/// One model's monetary contribution in one year.
///
/// `amount` is never negative; whether it is income or expense is decided by
/// which list of [`YearData`] it lands in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub model_id: ModelId,
    pub description: String,
    pub amount: f64,
}

/// Where a line item lands in the yearly ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashFlowKind {
    Income,
    Expense,
}

/// A line item tagged with its direction
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlow {
    pub kind: CashFlowKind,
    pub item: LineItem,
}

impl CashFlow {
    pub fn income(item: LineItem) -> Self {
        Self {
            kind: CashFlowKind::Income,
            item,
        }
    }

    pub fn expense(item: LineItem) -> Self {
        Self {
            kind: CashFlowKind::Expense,
            item,
        }
    }
}

/// One simulated year of a retirement account.
///
/// `ending_balance = starting_balance + contributions - distributions + growth`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AccountBalanceYear {
    pub model_id: ModelId,
    pub description: String,
    pub year: i32,
    pub starting_balance: f64,
    pub contributions: f64,
    pub distributions: f64,
    /// Distributions net of the schedule's tax rate
    pub distribution_income: f64,
    pub growth: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    pub year: i32,
    pub incomes: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub yearly_net: f64,
    /// Running sum of `yearly_net` since the first projected year
    pub cumulative_net: f64,
    /// Starting cash balance plus `cumulative_net`
    pub cash_on_hand: f64,
}

/// Complete output of one scenario projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutput {
    pub scenario_name: String,
    pub years: Vec<YearData>,
    /// Balance records for every enabled account, projected years only
    pub account_balances: Vec<AccountBalanceYear>,
}

impl CalculationOutput {
    pub fn year(&self, year: i32) -> Option<&YearData> {
        let first = self.years.first()?.year;
        let offset = usize::try_from(i64::from(year) - i64::from(first)).ok()?;
        self.years.get(offset)
    }

    /// Balance records of a single account, in year order
    pub fn account_history<'a>(
        &'a self,
        model_id: &'a ModelId,
    ) -> impl Iterator<Item = &'a AccountBalanceYear> + 'a {
        self.account_balances
            .iter()
            .filter(move |record| &record.model_id == model_id)
    }
}

/// A year paired with an amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct YearAmount {
    pub year: i32,
    pub amount: f64,
}

/// Headline figures for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub scenario_name: String,
    pub final_cumulative_net: Option<f64>,
    pub final_cash_on_hand: Option<f64>,
    /// Final cash on hand expressed in first-year currency
    pub final_real_cash_on_hand: Option<f64>,
    pub lowest_cash_on_hand: Option<YearAmount>,
    /// First year whose cash on hand is negative
    pub first_shortfall_year: Option<i32>,
    /// Sum of every account's ending balance in the last projected year
    pub final_retirement_balance: Option<f64>,
    pub yearly_cash_on_hand: Vec<YearAmount>,
}

/// One year of a cross-scenario overlay series.
///
/// `values[i]` belongs to the i-th compared scenario and is `None` when that
/// scenario does not project the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct OverlayRow {
    pub year: i32,
    pub values: Vec<Option<f64>>,
}

/// Several projections side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub outputs: Vec<CalculationOutput>,
    pub cumulative_net: Vec<OverlayRow>,
    pub cash_on_hand: Vec<OverlayRow>,
}

impl Comparison {
    pub fn scenario_names(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().map(|o| o.scenario_name.as_str())
    }
}
