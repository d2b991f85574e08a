//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `recurring` - Salaries, recurring/one-time items, social security
//! - `loans` - Mortgage and car loan payments
//! - `retirement` - Account simulation, capping, roll-forward
//! - `aggregation` - Yearly totals, cumulative net, cash on hand
//! - `comparison` - Multi-scenario overlays and summaries
//! - `validation` - Opt-in scenario checks
//! - `documents` - JSON shape expected by the storage and presentation layers

mod comparison;
mod documents;
mod validation;

use crate::model::{
    IncreaseType, LoanModel, Model, ModelId, RetirementAccountModel, SalaryModel, Scenario,
    ScenarioConfig, Schedule,
};

const EPSILON: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

fn scenario(start_year: i32, end_year: i32, models: Vec<Model>) -> Scenario {
    Scenario {
        name: "test".to_string(),
        description: String::new(),
        config: ScenarioConfig {
            start_year,
            end_year,
            cpi_rate: 3.0,
            starting_cash_balance: 0.0,
        },
        based_on: None,
        models,
    }
}

fn salary(id: &str, amount: f64, start_year: i32, end_year: i32) -> SalaryModel {
    SalaryModel {
        id: ModelId::new(id),
        enabled: true,
        description: format!("Salary {id}"),
        amount,
        start_year,
        end_year,
        increase_type: IncreaseType::Percent,
        increase_rate: 0.0,
    }
}

fn loan(id: &str, loan_amount: f64, interest_rate: f64, term_years: i32, start_year: i32) -> LoanModel {
    LoanModel {
        id: ModelId::new(id),
        enabled: true,
        description: format!("Loan {id}"),
        loan_amount,
        interest_rate,
        term_years,
        start_year,
    }
}

fn flat_schedule(amount: f64, start_year: i32, end_year: i32) -> Schedule {
    Schedule {
        amount,
        start_year,
        end_year,
        increase_type: IncreaseType::Flat,
        increase_rate: 0.0,
        tax_rate: 0.0,
    }
}

fn account(id: &str, current_balance: f64, balance_as_of_year: i32, growth_rate: f64) -> RetirementAccountModel {
    RetirementAccountModel {
        id: ModelId::new(id),
        enabled: true,
        description: format!("Account {id}"),
        current_balance,
        balance_as_of_year,
        growth_rate,
        contributions: None,
        distributions: None,
    }
}
