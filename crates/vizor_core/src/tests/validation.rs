//! Tests for opt-in scenario validation

use super::{account, flat_schedule, loan, salary, scenario};
use crate::calculate;
use crate::error::ScenarioError;
use crate::model::{Model, ModelId};

#[test]
fn test_well_formed_scenario_passes() {
    let mut ira = account("ira", 10_000.0, 2024, 6.0);
    ira.contributions = Some(flat_schedule(1_000.0, 2025, 2030));

    let s = scenario(
        2025,
        2030,
        vec![
            Model::Salary(salary("pay", 50_000.0, 2025, 2030)),
            Model::Mortgage(loan("home", 250_000.0, 6.0, 30, 2025)),
            Model::RetirementAccount(ira),
        ],
    );
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn test_inverted_scenario_window() {
    let s = scenario(2030, 2025, vec![]);
    assert_eq!(
        s.validate(),
        Err(ScenarioError::InvertedWindow {
            start_year: 2030,
            end_year: 2025
        })
    );
}

#[test]
fn test_inverted_schedule_window() {
    let mut ira = account("ira", 10_000.0, 2025, 6.0);
    ira.distributions = Some(flat_schedule(1_000.0, 2040, 2035));

    let err = scenario(2025, 2030, vec![Model::RetirementAccount(ira)])
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::InvertedModelWindow {
            field: "distributions",
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "model ira: distributions ends in 2035, before it starts in 2040"
    );
}

#[test]
fn test_zero_term_loan() {
    let s = scenario(2025, 2030, vec![Model::CarLoan(loan("car", 10_000.0, 4.0, 0, 2025))]);
    assert_eq!(
        s.validate(),
        Err(ScenarioError::NonPositiveTerm {
            model_id: ModelId::new("car"),
            term_years: 0
        })
    );
    // Still calculable: a zero-year term is never active
    assert!(calculate(&s).years.iter().all(|y| y.expenses.is_empty()));
}

#[test]
fn test_non_finite_amount() {
    let s = scenario(
        2025,
        2030,
        vec![Model::Salary(salary("pay", f64::NAN, 2025, 2030))],
    );
    assert_eq!(
        s.validate(),
        Err(ScenarioError::NonFinite {
            model_id: Some(ModelId::new("pay")),
            field: "amount"
        })
    );
}

#[test]
fn test_duplicate_ids_including_disabled() {
    let mut second = salary("pay", 1.0, 2025, 2030);
    second.enabled = false;

    let s = scenario(
        2025,
        2030,
        vec![
            Model::Salary(salary("pay", 1.0, 2025, 2030)),
            Model::Salary(second),
        ],
    );
    assert_eq!(
        s.validate(),
        Err(ScenarioError::DuplicateModelId(ModelId::new("pay")))
    );
}
