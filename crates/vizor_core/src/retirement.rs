//! Sequential retirement account simulation
//!
//! Unlike the stateless evaluators, an account's year depends on the balance
//! carried out of the previous year. Each account is simulated once up front:
//! a balance stated for an earlier year is rolled forward through the gap
//! before the projection window opens, then every window year is recorded.
//! The calculator reads those years back by index.
//!
//! Per year, in order:
//! 1. contribution from the contribution schedule (zero outside its window)
//! 2. distribution from the distribution schedule, capped at the funds
//!    available before growth (`balance + contribution`, floored at zero)
//! 3. growth on the balance left after both flows
//!
//! There is no early exit on depletion; an emptied account keeps producing
//! capped (zero) distributions while its schedules stay active.

use crate::increase::apply_increase;
use crate::model::{AccountBalanceYear, LineItem, RetirementAccountModel, Schedule};

/// One simulated year of an account plus the cash-flow lines it produces
#[derive(Debug, Clone, PartialEq)]
pub struct RetirementYear {
    /// Post-tax distribution income, present only when something was distributed
    pub income: Option<LineItem>,
    /// Contribution outflow, present only when something was contributed
    pub expense: Option<LineItem>,
    pub balance: AccountBalanceYear,
}

/// Every projected year of a single account, densely indexed from `first_year`
#[derive(Debug, Clone, PartialEq)]
pub struct AccountProjection {
    first_year: i32,
    years: Vec<RetirementYear>,
}

impl AccountProjection {
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Result for `year`, or `None` outside the simulated range
    pub fn year(&self, year: i32) -> Option<&RetirementYear> {
        let offset = usize::try_from(i64::from(year) - i64::from(self.first_year)).ok()?;
        self.years.get(offset)
    }

    pub fn years(&self) -> &[RetirementYear] {
        &self.years
    }

    /// Balance carried out of the last simulated year
    pub fn final_balance(&self) -> Option<f64> {
        self.years.last().map(|y| y.balance.ending_balance)
    }
}

/// Amount a schedule calls for in `year`, zero when absent or out of window
fn scheduled_amount(schedule: Option<&Schedule>, year: i32) -> f64 {
    match schedule {
        Some(s) if s.covers(year) => apply_increase(
            s.amount,
            s.increase_type,
            s.increase_rate,
            year.saturating_sub(s.start_year),
        ),
        _ => 0.0,
    }
}

/// Money moving through an account in one year
struct Flows {
    contribution: f64,
    distribution: f64,
    growth: f64,
    ending_balance: f64,
}

fn flows(model: &RetirementAccountModel, year: i32, starting_balance: f64) -> Flows {
    let contribution = scheduled_amount(model.contributions.as_ref(), year);

    let mut distribution = scheduled_amount(model.distributions.as_ref(), year);
    let available = starting_balance + contribution;
    if distribution > available {
        distribution = available.max(0.0);
    }

    let after_flows = starting_balance + contribution - distribution;
    let growth = after_flows * (model.growth_rate / 100.0);

    Flows {
        contribution,
        distribution,
        growth,
        ending_balance: after_flows + growth,
    }
}

fn simulate_year(model: &RetirementAccountModel, year: i32, starting_balance: f64) -> RetirementYear {
    let Flows {
        contribution,
        distribution,
        growth,
        ending_balance,
    } = flows(model, year, starting_balance);

    let tax_rate = model
        .distributions
        .as_ref()
        .map(|s| s.tax_rate)
        .unwrap_or(0.0);
    let distribution_income = distribution * (1.0 - tax_rate / 100.0);

    let line = |amount: f64| LineItem {
        model_id: model.id.clone(),
        description: model.description.clone(),
        amount,
    };

    RetirementYear {
        income: (distribution > 0.0).then(|| line(distribution_income)),
        expense: (contribution > 0.0).then(|| line(contribution)),
        balance: AccountBalanceYear {
            model_id: model.id.clone(),
            description: model.description.clone(),
            year,
            starting_balance,
            contributions: contribution,
            distributions: distribution,
            distribution_income,
            growth,
            ending_balance,
        },
    }
}

/// Simulate an account through the scenario window.
///
/// A balance stated for a year before `scenario_start_year` is first rolled
/// forward to the window; those years feed the opening balance but are not
/// kept. A balance stated for a later year opens the window as is.
pub fn simulate_account(
    model: &RetirementAccountModel,
    scenario_start_year: i32,
    scenario_end_year: i32,
) -> AccountProjection {
    let mut balance = model.current_balance;
    for year in model.balance_as_of_year..scenario_start_year {
        balance = flows(model, year, balance).ending_balance;
    }

    if model.balance_as_of_year < scenario_start_year {
        tracing::trace!(
            account = %model.id,
            from = model.balance_as_of_year,
            to = scenario_start_year,
            "rolled account balance forward"
        );
    }

    let span = i64::from(scenario_end_year) - i64::from(scenario_start_year) + 1;
    let mut years = Vec::with_capacity(usize::try_from(span).unwrap_or(0));
    for year in scenario_start_year..=scenario_end_year {
        let result = simulate_year(model, year, balance);
        balance = result.balance.ending_balance;
        years.push(result);
    }

    AccountProjection {
        first_year: scenario_start_year,
        years,
    }
}
