//! Scenario definition
//!
//! A `Scenario` is the complete input to a projection. Every field is
//! required here; filling in values that older documents omit is the job of
//! whatever loads the scenario, so the engine never has to guess.

use serde::{Deserialize, Serialize};

use super::models::{Model, RetirementAccountModel};

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Projection window and global assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// First projected year, inclusive
    pub start_year: i32,
    /// Last projected year, inclusive
    pub end_year: i32,
    /// Inflation reference rate in percent
    pub cpi_rate: f64,
    /// Liquid cash held before the first projected year
    pub starting_cash_balance: f64,
}

impl ScenarioConfig {
    /// Number of projected years; zero when the window is inverted
    pub fn year_count(&self) -> usize {
        let span = i64::from(self.end_year) - i64::from(self.start_year) + 1;
        usize::try_from(span).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub config: ScenarioConfig,
    /// Name of the scenario this one was duplicated from
    pub based_on: Option<String>,
    pub models: Vec<Model>,
}

impl Scenario {
    pub fn enabled_models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter().filter(|m| m.enabled())
    }

    /// Enabled retirement accounts in scenario order
    pub fn retirement_accounts(&self) -> impl Iterator<Item = &RetirementAccountModel> {
        self.enabled_models().filter_map(|m| match m {
            Model::RetirementAccount(account) => Some(account),
            _ => None,
        })
    }

    /// Copy this scenario under a new name, remembering where it came from
    pub fn duplicate(&self, new_name: Option<&str>) -> Scenario {
        let name = new_name
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}-copy", self.name));

        Scenario {
            name,
            based_on: Some(self.name.clone()),
            ..self.clone()
        }
    }
}
