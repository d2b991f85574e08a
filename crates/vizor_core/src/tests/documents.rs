//! Tests for the JSON document shape shared with storage and presentation

use serde_json::json;

use crate::calculate;
use crate::model::{IncreaseType, Model, Scenario};

fn stored_scenario() -> serde_json::Value {
    json!({
        "name": "baseline",
        "description": "Current plan",
        "config": {
            "startYear": 2025,
            "endYear": 2027,
            "cpiRate": 3.0,
            "startingCashBalance": 5000
        },
        "basedOn": null,
        "models": [
            {
                "id": "sal-1",
                "type": "salary",
                "enabled": true,
                "description": "Salary",
                "amount": 90000,
                "startYear": 2025,
                "endYear": 2040,
                "increaseType": "percent",
                "increaseRate": 3
            },
            {
                "id": "trip",
                "type": "onetime_expense",
                "enabled": true,
                "description": "Trip",
                "amount": 6000,
                "year": 2026
            },
            {
                "id": "car",
                "type": "car_loan",
                "enabled": false,
                "description": "Car",
                "loanAmount": 30000,
                "interestRate": 5,
                "termYears": 5,
                "startYear": 2025
            },
            {
                "id": "ira",
                "type": "retirement_account",
                "enabled": true,
                "description": "IRA",
                "currentBalance": 20000,
                "balanceAsOfYear": 2025,
                "growthRate": 6,
                "contributions": {
                    "amount": 6500,
                    "startYear": 2025,
                    "endYear": 2030,
                    "increaseType": "flat",
                    "increaseRate": 0,
                    "taxRate": 0
                },
                "distributions": null
            }
        ]
    })
}

#[test]
fn test_reads_stored_scenario() {
    let scenario: Scenario = serde_json::from_value(stored_scenario()).unwrap();

    assert_eq!(scenario.name, "baseline");
    assert_eq!(scenario.config.starting_cash_balance, 5_000.0);
    assert_eq!(scenario.based_on, None);
    assert_eq!(scenario.models.len(), 4);

    let kinds: Vec<&str> = scenario.models.iter().map(Model::kind).collect();
    assert_eq!(
        kinds,
        vec!["salary", "onetime_expense", "car_loan", "retirement_account"]
    );
    match &scenario.models[0] {
        Model::Salary(s) => assert_eq!(s.increase_type, IncreaseType::Percent),
        other => panic!("expected salary, got {other:?}"),
    }
    assert!(!scenario.models[2].enabled());
}

#[test]
fn test_writes_presentation_shape() {
    let scenario: Scenario = serde_json::from_value(stored_scenario()).unwrap();
    let output = serde_json::to_value(calculate(&scenario)).unwrap();

    assert_eq!(output["scenarioName"], "baseline");
    assert_eq!(output["years"].as_array().unwrap().len(), 3);

    let first = &output["years"][0];
    for key in [
        "year",
        "incomes",
        "expenses",
        "totalIncome",
        "totalExpenses",
        "yearlyNet",
        "cumulativeNet",
        "cashOnHand",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
    assert_eq!(first["incomes"][0]["modelId"], "sal-1");

    let record = &output["accountBalances"][0];
    for key in [
        "modelId",
        "description",
        "year",
        "startingBalance",
        "contributions",
        "distributions",
        "distributionIncome",
        "growth",
        "endingBalance",
    ] {
        assert!(record.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_model_tag_is_written_back() {
    let scenario: Scenario = serde_json::from_value(stored_scenario()).unwrap();
    let written = serde_json::to_value(&scenario).unwrap();

    assert_eq!(written["models"][1]["type"], "onetime_expense");
    assert_eq!(written["models"][2]["loanAmount"], 30000.0);
    assert!(written["basedOn"].is_null());
}

#[test]
fn test_duplicate_records_origin() {
    let scenario: Scenario = serde_json::from_value(stored_scenario()).unwrap();

    let copy = scenario.duplicate(None);
    assert_eq!(copy.name, "baseline-copy");
    assert_eq!(copy.based_on.as_deref(), Some("baseline"));
    assert_eq!(copy.models, scenario.models);

    let renamed = scenario.duplicate(Some("aggressive"));
    assert_eq!(renamed.name, "aggressive");
}
