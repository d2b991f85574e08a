//! Side-by-side projection of several scenarios
//!
//! Scenarios are independent, so with the `parallel` feature they are
//! calculated on the rayon pool. Output order always matches input order.

use crate::calculator::calculate;
use crate::model::{CalculationOutput, Comparison, OverlayRow, Scenario, YearData};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calculate every scenario in the batch
pub fn calculate_all(scenarios: &[Scenario]) -> Vec<CalculationOutput> {
    #[cfg(feature = "parallel")]
    {
        scenarios.par_iter().map(calculate).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        scenarios.iter().map(calculate).collect()
    }
}

/// Calculate every scenario and align their yearly series on a shared axis
pub fn compare(scenarios: &[Scenario]) -> Comparison {
    let outputs = calculate_all(scenarios);

    let cumulative_net = overlay(&outputs, |y| y.cumulative_net);
    let cash_on_hand = overlay(&outputs, |y| y.cash_on_hand);

    tracing::debug!(
        scenarios = outputs.len(),
        years = cash_on_hand.len(),
        "compared scenarios"
    );

    Comparison {
        outputs,
        cumulative_net,
        cash_on_hand,
    }
}

/// Build one row per year across the union of all projected windows
fn overlay(outputs: &[CalculationOutput], value: impl Fn(&YearData) -> f64) -> Vec<OverlayRow> {
    let bounds = outputs
        .iter()
        .filter_map(|o| Some((o.years.first()?.year, o.years.last()?.year)))
        .reduce(|(lo, hi), (first, last)| (lo.min(first), hi.max(last)));

    let Some((min_year, max_year)) = bounds else {
        return Vec::new();
    };

    (min_year..=max_year)
        .map(|year| OverlayRow {
            year,
            values: outputs
                .iter()
                .map(|o| o.year(year).map(&value))
                .collect(),
        })
        .collect()
}
