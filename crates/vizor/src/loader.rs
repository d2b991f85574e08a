//! Scenario documents on disk
//!
//! Stored scenarios predate some of the engine's required fields, so they
//! are read into lenient document types first and then converted. This is
//! the one place optional values get their defaults:
//! - `config.startingCashBalance` becomes 0
//! - `config.cpiRate` comes from [`PlanningDefaults`]
//! - a schedule's `taxRate` becomes 0
//! - `description` and `basedOn` become empty/absent
//!
//! Files ending in `.yaml`/`.yml` are YAML, `.json` is JSON.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vizor_core::model::{
    CalculationOutput, IncreaseType, LoanModel, Model, ModelId, OneTimeExpenseModel,
    OneTimeIncomeModel, RecurringExpenseModel, RetirementAccountModel, SalaryModel, Scenario,
    ScenarioConfig, Schedule, SocialSecurityModel,
};

use crate::config::PlanningDefaults;

#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Parse(String),
    Serialize(String),
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LoadError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            LoadError::UnsupportedFormat(path) => {
                write!(f, "Unsupported file type: {}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml" | "yml") => Ok(DocumentFormat::Yaml),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn parse<T: serde::de::DeserializeOwned>(self, content: &str) -> Result<T, LoadError> {
        match self {
            DocumentFormat::Json => serde_json::from_str(content)
                .map_err(|e| LoadError::Parse(format!("Failed to parse JSON: {}", e))),
            DocumentFormat::Yaml => serde_saphyr::from_str(content)
                .map_err(|e| LoadError::Parse(format!("Failed to parse YAML: {}", e))),
        }
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String, LoadError> {
        match self {
            DocumentFormat::Json => serde_json::to_string_pretty(value)
                .map_err(|e| LoadError::Serialize(format!("Failed to write JSON: {}", e))),
            DocumentFormat::Yaml => serde_saphyr::to_string(value)
                .map_err(|e| LoadError::Serialize(format!("Failed to write YAML: {}", e))),
        }
    }
}

// ============================================================================
// Lenient document types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    start_year: i32,
    end_year: i32,
    #[serde(default)]
    cpi_rate: Option<f64>,
    #[serde(default)]
    starting_cash_balance: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleDocument {
    amount: f64,
    start_year: i32,
    end_year: i32,
    increase_type: IncreaseType,
    increase_rate: f64,
    #[serde(default)]
    tax_rate: Option<f64>,
}

impl From<ScheduleDocument> for Schedule {
    fn from(doc: ScheduleDocument) -> Self {
        Schedule {
            amount: doc.amount,
            start_year: doc.start_year,
            end_year: doc.end_year,
            increase_type: doc.increase_type,
            increase_rate: doc.increase_rate,
            tax_rate: doc.tax_rate.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetirementAccountDocument {
    id: ModelId,
    enabled: bool,
    description: String,
    current_balance: f64,
    balance_as_of_year: i32,
    growth_rate: f64,
    #[serde(default)]
    contributions: Option<ScheduleDocument>,
    #[serde(default)]
    distributions: Option<ScheduleDocument>,
}

/// Only retirement accounts carry optional fields; every other kind is read
/// straight into the engine's type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
enum ModelDocument {
    #[serde(rename = "salary")]
    Salary(SalaryModel),
    #[serde(rename = "recurring_expense")]
    RecurringExpense(RecurringExpenseModel),
    #[serde(rename = "onetime_expense")]
    OneTimeExpense(OneTimeExpenseModel),
    #[serde(rename = "onetime_income")]
    OneTimeIncome(OneTimeIncomeModel),
    #[serde(rename = "mortgage")]
    Mortgage(LoanModel),
    #[serde(rename = "car_loan")]
    CarLoan(LoanModel),
    #[serde(rename = "retirement_account")]
    RetirementAccount(RetirementAccountDocument),
    #[serde(rename = "social_security")]
    SocialSecurity(SocialSecurityModel),
}

impl From<ModelDocument> for Model {
    fn from(doc: ModelDocument) -> Self {
        match doc {
            ModelDocument::Salary(m) => Model::Salary(m),
            ModelDocument::RecurringExpense(m) => Model::RecurringExpense(m),
            ModelDocument::OneTimeExpense(m) => Model::OneTimeExpense(m),
            ModelDocument::OneTimeIncome(m) => Model::OneTimeIncome(m),
            ModelDocument::Mortgage(m) => Model::Mortgage(m),
            ModelDocument::CarLoan(m) => Model::CarLoan(m),
            ModelDocument::SocialSecurity(m) => Model::SocialSecurity(m),
            ModelDocument::RetirementAccount(doc) => {
                Model::RetirementAccount(RetirementAccountModel {
                    id: doc.id,
                    enabled: doc.enabled,
                    description: doc.description,
                    current_balance: doc.current_balance,
                    balance_as_of_year: doc.balance_as_of_year,
                    growth_rate: doc.growth_rate,
                    contributions: doc.contributions.map(Schedule::from),
                    distributions: doc.distributions.map(Schedule::from),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioDocument {
    name: String,
    #[serde(default)]
    description: String,
    config: ConfigDocument,
    #[serde(default)]
    based_on: Option<String>,
    #[serde(default)]
    models: Vec<ModelDocument>,
}

impl ScenarioDocument {
    fn into_scenario(self, defaults: &PlanningDefaults) -> Scenario {
        Scenario {
            name: self.name,
            description: self.description,
            config: ScenarioConfig {
                start_year: self.config.start_year,
                end_year: self.config.end_year,
                cpi_rate: self.config.cpi_rate.unwrap_or(defaults.cpi_rate),
                starting_cash_balance: self.config.starting_cash_balance.unwrap_or(0.0),
            },
            based_on: self.based_on,
            models: self.models.into_iter().map(Model::from).collect(),
        }
    }
}

// ============================================================================
// Reading and writing
// ============================================================================

/// Parse a scenario document held in memory
pub fn parse_scenario(
    content: &str,
    format: DocumentFormat,
    defaults: &PlanningDefaults,
) -> Result<Scenario, LoadError> {
    let document: ScenarioDocument = format.parse(content)?;
    Ok(document.into_scenario(defaults))
}

/// Read a scenario file, choosing the format from its extension
pub fn load_scenario(path: &Path, defaults: &PlanningDefaults) -> Result<Scenario, LoadError> {
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        LoadError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let scenario = parse_scenario(&content, format, defaults)?;
    tracing::info!(
        path = %path.display(),
        scenario = %scenario.name,
        models = scenario.models.len(),
        "Loaded scenario"
    );
    Ok(scenario)
}

/// A scenario together with its projection, as handed to the presentation
/// layer and persisted next to the scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponse<'a> {
    pub scenario: &'a Scenario,
    pub calculated: &'a CalculationOutput,
}

/// Write any serializable value to `path` in the format its extension names
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), LoadError> {
    let format = DocumentFormat::from_path(path)?;
    let content = format.render(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| LoadError::Io(format!("Failed to create {}: {}", parent.display(), e)))?;
    }
    fs::write(path, content)
        .map_err(|e| LoadError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "Wrote document");
    Ok(())
}
