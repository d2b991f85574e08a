mod ids;
mod models;
mod results;
mod scenario;

pub use ids::ModelId;
pub use models::{
    IncreaseType, LoanModel, Model, OneTimeExpenseModel, OneTimeIncomeModel,
    RecurringExpenseModel, RetirementAccountModel, SalaryModel, Schedule, SocialSecurityModel,
};
pub use results::{
    AccountBalanceYear, CalculationOutput, CashFlow, CashFlowKind, Comparison, LineItem,
    OverlayRow, ScenarioSummary, YearAmount, YearData,
};
pub use scenario::{Scenario, ScenarioConfig};
