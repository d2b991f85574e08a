//! Financial model definitions
//!
//! A scenario is a list of models. Each model describes one instrument
//! (an income stream, an expense, a loan, or an account) and carries only
//! the fields its kind needs. Recurring windows are inclusive on both ends
//! except for loans, whose term is a half-open range starting at `start_year`.

use serde::{Deserialize, Serialize};

use super::ids::ModelId;

#[cfg(feature = "ts")]
use ts_rs::TS;

/// How a recurring amount grows from one year to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum IncreaseType {
    /// Compounding growth, `rate` is a percentage
    Percent,
    /// Linear growth, `rate` is a currency amount added each year
    Flat,
}

/// Recurring income such as wages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SalaryModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    pub amount: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub increase_type: IncreaseType,
    pub increase_rate: f64,
}

/// Recurring expense such as utilities or insurance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpenseModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    pub amount: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub increase_type: IncreaseType,
    pub increase_rate: f64,
}

/// A single expense landing in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct OneTimeExpenseModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    pub amount: f64,
    pub year: i32,
}

/// A single income event landing in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct OneTimeIncomeModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    pub amount: f64,
    pub year: i32,
}

/// Fixed-rate amortizing loan parameters, shared by mortgages and car loans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LoanModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    /// Principal borrowed
    pub loan_amount: f64,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    pub term_years: i32,
    pub start_year: i32,
}

impl LoanModel {
    /// First year with no payment due
    pub fn payoff_year(&self) -> i32 {
        self.start_year.saturating_add(self.term_years)
    }

    pub fn is_active(&self, year: i32) -> bool {
        year >= self.start_year && year < self.payoff_year()
    }
}

/// A bounded, growing stream of contributions to or distributions from
/// a retirement account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub amount: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub increase_type: IncreaseType,
    pub increase_rate: f64,
    /// Percentage withheld from distributions. Ignored for contributions.
    pub tax_rate: f64,
}

impl Schedule {
    pub fn covers(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RetirementAccountModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    pub current_balance: f64,
    /// Year whose opening balance `current_balance` describes
    pub balance_as_of_year: i32,
    /// Annual growth in percent, applied after the year's flows
    pub growth_rate: f64,
    pub contributions: Option<Schedule>,
    pub distributions: Option<Schedule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SocialSecurityModel {
    pub id: ModelId,
    pub enabled: bool,
    pub description: String,
    pub annual_benefit: f64,
    pub start_year: i32,
    pub end_year: i32,
    /// Cost-of-living adjustment in percent; always compounding
    pub increase_rate: f64,
}

/// One typed financial instrument within a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(tag = "type")]
pub enum Model {
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
    RetirementAccount(RetirementAccountModel),
    #[serde(rename = "social_security")]
    SocialSecurity(SocialSecurityModel),
}

impl Model {
    pub fn id(&self) -> &ModelId {
        match self {
            Model::Salary(m) => &m.id,
            Model::RecurringExpense(m) => &m.id,
            Model::OneTimeExpense(m) => &m.id,
            Model::OneTimeIncome(m) => &m.id,
            Model::Mortgage(m) | Model::CarLoan(m) => &m.id,
            Model::RetirementAccount(m) => &m.id,
            Model::SocialSecurity(m) => &m.id,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            Model::Salary(m) => m.enabled,
            Model::RecurringExpense(m) => m.enabled,
            Model::OneTimeExpense(m) => m.enabled,
            Model::OneTimeIncome(m) => m.enabled,
            Model::Mortgage(m) | Model::CarLoan(m) => m.enabled,
            Model::RetirementAccount(m) => m.enabled,
            Model::SocialSecurity(m) => m.enabled,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Model::Salary(m) => &m.description,
            Model::RecurringExpense(m) => &m.description,
            Model::OneTimeExpense(m) => &m.description,
            Model::OneTimeIncome(m) => &m.description,
            Model::Mortgage(m) | Model::CarLoan(m) => &m.description,
            Model::RetirementAccount(m) => &m.description,
            Model::SocialSecurity(m) => &m.description,
        }
    }

    /// Short tag matching the serialized `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            Model::Salary(_) => "salary",
            Model::RecurringExpense(_) => "recurring_expense",
            Model::OneTimeExpense(_) => "onetime_expense",
            Model::OneTimeIncome(_) => "onetime_income",
            Model::Mortgage(_) => "mortgage",
            Model::CarLoan(_) => "car_loan",
            Model::RetirementAccount(_) => "retirement_account",
            Model::SocialSecurity(_) => "social_security",
        }
    }
}
