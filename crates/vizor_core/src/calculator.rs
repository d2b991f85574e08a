//! Scenario aggregation
//!
//! Walks the scenario window one year at a time, collecting line items from
//! every enabled model and folding them into yearly totals. Years must be
//! visited in ascending order: cumulative net and account balances both
//! carry state forward.

use crate::evaluate::evaluate_model;
use crate::model::{
    AccountBalanceYear, CalculationOutput, CashFlow, CashFlowKind, LineItem, Model, Scenario,
    YearData,
};
use crate::retirement::{AccountProjection, simulate_account};

/// Sum of line item amounts. Folding from `0.0` keeps an empty list at
/// positive zero; `Iterator::sum` on floats starts from `-0.0`.
fn total(items: &[LineItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.amount)
}

/// Project a scenario into a year-by-year ledger.
///
/// No validation is performed. An inverted window produces an empty ledger
/// and degenerate inputs propagate as degenerate numbers; see
/// [`Scenario::validate`] for an opt-in check.
pub fn calculate(scenario: &Scenario) -> CalculationOutput {
    let config = &scenario.config;
    let (start_year, end_year) = (config.start_year, config.end_year);

    let accounts: Vec<AccountProjection> = scenario
        .retirement_accounts()
        .map(|account| simulate_account(account, start_year, end_year))
        .collect();

    let stateless: Vec<&Model> = scenario
        .enabled_models()
        .filter(|m| !matches!(m, Model::RetirementAccount(_)))
        .collect();

    let mut years = Vec::with_capacity(config.year_count());
    let mut account_balances: Vec<AccountBalanceYear> =
        Vec::with_capacity(config.year_count() * accounts.len());
    let mut cumulative_net = 0.0;

    for year in start_year..=end_year {
        let mut incomes: Vec<LineItem> = Vec::new();
        let mut expenses: Vec<LineItem> = Vec::new();

        for model in &stateless {
            if let Some(CashFlow { kind, item }) = evaluate_model(model, year) {
                match kind {
                    CashFlowKind::Income => incomes.push(item),
                    CashFlowKind::Expense => expenses.push(item),
                }
            }
        }

        for projection in &accounts {
            let Some(result) = projection.year(year) else {
                continue;
            };
            if let Some(item) = &result.income {
                incomes.push(item.clone());
            }
            if let Some(item) = &result.expense {
                expenses.push(item.clone());
            }
            account_balances.push(result.balance.clone());
        }

        let total_income = total(&incomes);
        let total_expenses = total(&expenses);
        let yearly_net = total_income - total_expenses;
        cumulative_net += yearly_net;

        years.push(YearData {
            year,
            incomes,
            expenses,
            total_income,
            total_expenses,
            yearly_net,
            cumulative_net,
            cash_on_hand: config.starting_cash_balance + cumulative_net,
        });
    }

    tracing::debug!(
        scenario = %scenario.name,
        years = years.len(),
        models = stateless.len() + accounts.len(),
        "calculated scenario"
    );

    CalculationOutput {
        scenario_name: scenario.name.clone(),
        years,
        account_balances,
    }
}
