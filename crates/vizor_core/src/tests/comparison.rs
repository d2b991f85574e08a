//! Tests for multi-scenario comparison and summaries

use super::{account, assert_close, flat_schedule, salary, scenario};
use crate::model::{Model, ModelId, OneTimeExpenseModel, YearAmount};
use crate::{calculate, calculate_all, compare};

fn named(name: &str, start_year: i32, end_year: i32, pay: f64) -> crate::model::Scenario {
    let mut s = scenario(
        start_year,
        end_year,
        vec![Model::Salary(salary("pay", pay, start_year, end_year))],
    );
    s.name = name.to_string();
    s
}

#[test]
fn test_outputs_keep_input_order() {
    let scenarios: Vec<_> = (0..8)
        .map(|i| named(&format!("s{i}"), 2025, 2030, 10_000.0 * (i + 1) as f64))
        .collect();

    let outputs = calculate_all(&scenarios);
    let names: Vec<&str> = outputs.iter().map(|o| o.scenario_name.as_str()).collect();
    assert_eq!(names, vec!["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"]);

    for (scenario, output) in scenarios.iter().zip(&outputs) {
        assert_eq!(output, &calculate(scenario));
    }
}

#[test]
fn test_overlay_spans_union_of_windows() {
    let comparison = compare(&[
        named("early", 2025, 2027, 1_000.0),
        named("late", 2026, 2029, 2_000.0),
    ]);

    let names: Vec<&str> = comparison.scenario_names().collect();
    assert_eq!(names, vec!["early", "late"]);

    let years: Vec<i32> = comparison.cumulative_net.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2025, 2026, 2027, 2028, 2029]);

    let first = &comparison.cumulative_net[0];
    assert_eq!(first.values, vec![Some(1_000.0), None]);

    let overlap = &comparison.cumulative_net[2];
    assert_eq!(overlap.values, vec![Some(3_000.0), Some(4_000.0)]);

    let last = &comparison.cash_on_hand[4];
    assert_eq!(last.values, vec![None, Some(8_000.0)]);
}

#[test]
fn test_overlay_of_nothing_is_empty() {
    let comparison = compare(&[]);
    assert!(comparison.outputs.is_empty());
    assert!(comparison.cumulative_net.is_empty());

    let comparison = compare(&[named("inverted", 2030, 2020, 1.0)]);
    assert_eq!(comparison.outputs.len(), 1);
    assert!(comparison.cash_on_hand.is_empty());
}

#[test]
fn test_summary_figures() {
    let mut s = scenario(
        2025,
        2027,
        vec![
            Model::Salary(salary("pay", 10_000.0, 2025, 2027)),
            Model::OneTimeExpense(OneTimeExpenseModel {
                id: ModelId::new("car"),
                enabled: true,
                description: "Car".to_string(),
                amount: 25_000.0,
                year: 2026,
            }),
        ],
    );
    s.config.starting_cash_balance = 2_000.0;
    let output = calculate(&s);
    let summary = output.summary(0.0);

    // Cash: 12,000 -> -3,000 -> 7,000
    assert_eq!(summary.final_cumulative_net, Some(5_000.0));
    assert_eq!(summary.final_cash_on_hand, Some(7_000.0));
    assert_eq!(summary.final_real_cash_on_hand, Some(7_000.0));
    assert_eq!(
        summary.lowest_cash_on_hand,
        Some(YearAmount {
            year: 2026,
            amount: -3_000.0
        })
    );
    assert_eq!(summary.first_shortfall_year, Some(2026));
    assert_eq!(summary.final_retirement_balance, Some(0.0));
    assert!(summary.final_retirement_balance.unwrap().is_sign_positive());
    assert_eq!(summary.yearly_cash_on_hand.len(), 3);
}

#[test]
fn test_summary_deflates_final_cash() {
    let output = calculate(&named("real", 2025, 2027, 10_000.0));
    let summary = output.summary(5.0);

    assert_close(summary.final_real_cash_on_hand.unwrap(), 30_000.0 / 1.05_f64.powi(2));
    assert_eq!(summary.first_shortfall_year, None);
}

#[test]
fn test_summary_sums_final_account_balances() {
    let mut a = account("a", 1_000.0, 2025, 0.0);
    a.contributions = Some(flat_schedule(100.0, 2025, 2026));
    let b = account("b", 5_000.0, 2025, 0.0);

    let output = calculate(&scenario(
        2025,
        2026,
        vec![Model::RetirementAccount(a), Model::RetirementAccount(b)],
    ));

    assert_eq!(output.summary(3.0).final_retirement_balance, Some(6_200.0));
}

#[test]
fn test_summary_of_empty_projection() {
    let output = calculate(&named("empty", 2030, 2020, 1.0));
    let summary = output.summary(3.0);

    assert_eq!(summary.scenario_name, "empty");
    assert_eq!(summary.final_cash_on_hand, None);
    assert_eq!(summary.final_real_cash_on_hand, None);
    assert_eq!(summary.lowest_cash_on_hand, None);
    assert_eq!(summary.final_retirement_balance, None);
    assert!(summary.yearly_cash_on_hand.is_empty());
}
