use std::collections::HashSet;
use std::fmt;

use crate::model::{Model, ModelId, Scenario, Schedule};

/// Problems `Scenario::validate` can report.
///
/// The calculator never returns these. A scenario that fails validation can
/// still be calculated; it just yields empty or non-finite figures.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// Scenario end year precedes its start year
    InvertedWindow { start_year: i32, end_year: i32 },
    /// A model's or schedule's end year precedes its start year
    InvertedModelWindow {
        model_id: ModelId,
        field: &'static str,
        start_year: i32,
        end_year: i32,
    },
    /// Loan with a term of zero or fewer years
    NonPositiveTerm { model_id: ModelId, term_years: i32 },
    /// A numeric field is NaN or infinite
    NonFinite {
        model_id: Option<ModelId>,
        field: &'static str,
    },
    DuplicateModelId(ModelId),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::InvertedWindow {
                start_year,
                end_year,
            } => write!(
                f,
                "scenario ends in {end_year}, before it starts in {start_year}"
            ),
            ScenarioError::InvertedModelWindow {
                model_id,
                field,
                start_year,
                end_year,
            } => write!(
                f,
                "model {model_id}: {field} ends in {end_year}, before it starts in {start_year}"
            ),
            ScenarioError::NonPositiveTerm {
                model_id,
                term_years,
            } => write!(f, "model {model_id}: loan term of {term_years} years"),
            ScenarioError::NonFinite {
                model_id: Some(id),
                field,
            } => write!(f, "model {id}: {field} is not a finite number"),
            ScenarioError::NonFinite {
                model_id: None,
                field,
            } => write!(f, "scenario {field} is not a finite number"),
            ScenarioError::DuplicateModelId(id) => write!(f, "model id {id} is used more than once"),
        }
    }
}

impl std::error::Error for ScenarioError {}

pub type Result<T> = std::result::Result<T, ScenarioError>;

fn finite(model_id: Option<&ModelId>, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::NonFinite {
            model_id: model_id.cloned(),
            field,
        })
    }
}

fn window(model_id: &ModelId, field: &'static str, start_year: i32, end_year: i32) -> Result<()> {
    if end_year < start_year {
        return Err(ScenarioError::InvertedModelWindow {
            model_id: model_id.clone(),
            field,
            start_year,
            end_year,
        });
    }
    Ok(())
}

fn validate_schedule(model_id: &ModelId, field: &'static str, schedule: &Schedule) -> Result<()> {
    window(model_id, field, schedule.start_year, schedule.end_year)?;
    finite(Some(model_id), "schedule amount", schedule.amount)?;
    finite(Some(model_id), "schedule increase rate", schedule.increase_rate)?;
    finite(Some(model_id), "schedule tax rate", schedule.tax_rate)
}

fn validate_model(model: &Model) -> Result<()> {
    let id = Some(model.id());
    match model {
        Model::Salary(m) => {
            window(&m.id, "salary", m.start_year, m.end_year)?;
            finite(id, "amount", m.amount)?;
            finite(id, "increase rate", m.increase_rate)
        }
        Model::RecurringExpense(m) => {
            window(&m.id, "expense", m.start_year, m.end_year)?;
            finite(id, "amount", m.amount)?;
            finite(id, "increase rate", m.increase_rate)
        }
        Model::OneTimeExpense(m) => finite(id, "amount", m.amount),
        Model::OneTimeIncome(m) => finite(id, "amount", m.amount),
        Model::Mortgage(m) | Model::CarLoan(m) => {
            if m.term_years <= 0 {
                return Err(ScenarioError::NonPositiveTerm {
                    model_id: m.id.clone(),
                    term_years: m.term_years,
                });
            }
            finite(id, "loan amount", m.loan_amount)?;
            finite(id, "interest rate", m.interest_rate)
        }
        Model::RetirementAccount(m) => {
            finite(id, "current balance", m.current_balance)?;
            finite(id, "growth rate", m.growth_rate)?;
            if let Some(s) = &m.contributions {
                validate_schedule(&m.id, "contributions", s)?;
            }
            if let Some(s) = &m.distributions {
                validate_schedule(&m.id, "distributions", s)?;
            }
            Ok(())
        }
        Model::SocialSecurity(m) => {
            window(&m.id, "benefit", m.start_year, m.end_year)?;
            finite(id, "annual benefit", m.annual_benefit)?;
            finite(id, "increase rate", m.increase_rate)
        }
    }
}

impl Scenario {
    /// Check the scenario for inputs that would make the projection
    /// meaningless, reporting the first problem found.
    ///
    /// Disabled models are checked as well since they can be re-enabled
    /// without another load.
    pub fn validate(&self) -> Result<()> {
        let config = &self.config;
        if config.end_year < config.start_year {
            return Err(ScenarioError::InvertedWindow {
                start_year: config.start_year,
                end_year: config.end_year,
            });
        }
        finite(None, "CPI rate", config.cpi_rate)?;
        finite(None, "starting cash balance", config.starting_cash_balance)?;

        let mut seen = HashSet::new();
        for model in &self.models {
            validate_model(model)?;
            if !seen.insert(model.id()) {
                return Err(ScenarioError::DuplicateModelId(model.id().clone()));
            }
        }
        Ok(())
    }
}
