//! Headline figures derived from a finished projection

use crate::model::{CalculationOutput, ScenarioSummary, YearAmount};

impl CalculationOutput {
    /// Summarize the projection.
    ///
    /// `cpi_rate` (percent) deflates the final cash on hand back to the
    /// first projected year. Every optional figure is `None` for an empty
    /// projection.
    pub fn summary(&self, cpi_rate: f64) -> ScenarioSummary {
        let yearly_cash_on_hand: Vec<YearAmount> = self
            .years
            .iter()
            .map(|y| YearAmount {
                year: y.year,
                amount: y.cash_on_hand,
            })
            .collect();

        let last = self.years.last();

        let final_real_cash_on_hand = last.map(|y| {
            let elapsed = (self.years.len() - 1) as i32;
            let inflation_factor = (1.0 + cpi_rate / 100.0).powi(elapsed);
            if inflation_factor > 0.0 {
                y.cash_on_hand / inflation_factor
            } else {
                y.cash_on_hand
            }
        });

        let lowest_cash_on_hand = yearly_cash_on_hand
            .iter()
            .copied()
            .reduce(|low, y| if y.amount < low.amount { y } else { low });

        let first_shortfall_year = yearly_cash_on_hand
            .iter()
            .find(|y| y.amount < 0.0)
            .map(|y| y.year);

        let final_retirement_balance = last.map(|y| {
            self.account_balances
                .iter()
                .filter(|record| record.year == y.year)
                .fold(0.0, |acc, record| acc + record.ending_balance)
        });

        ScenarioSummary {
            scenario_name: self.scenario_name.clone(),
            final_cumulative_net: last.map(|y| y.cumulative_net),
            final_cash_on_hand: last.map(|y| y.cash_on_hand),
            final_real_cash_on_hand,
            lowest_cash_on_hand,
            first_shortfall_year,
            final_retirement_balance,
            yearly_cash_on_hand,
        }
    }
}
