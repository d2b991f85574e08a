//! Stateless per-year model evaluation
//!
//! Each evaluator maps `(model, year)` to the line item the model
//! contributes that year, or `None` when the model is inactive. Evaluators
//! share no state, so they can be called for any year in any order.
//!
//! Retirement accounts depend on the previous year's balance and are handled
//! by [`crate::retirement`] instead.

use crate::increase::apply_increase;
use crate::model::{
    CashFlow, LineItem, LoanModel, Model, ModelId, OneTimeExpenseModel, OneTimeIncomeModel,
    RecurringExpenseModel, SalaryModel, SocialSecurityModel,
};

fn line_item(id: &ModelId, description: &str, amount: f64) -> LineItem {
    LineItem {
        model_id: id.clone(),
        description: description.to_string(),
        amount,
    }
}

#[inline]
fn within(year: i32, start: i32, end: i32) -> bool {
    year >= start && year <= end
}

pub fn evaluate_salary(model: &SalaryModel, year: i32) -> Option<LineItem> {
    if !within(year, model.start_year, model.end_year) {
        return None;
    }
    let amount = apply_increase(
        model.amount,
        model.increase_type,
        model.increase_rate,
        year.saturating_sub(model.start_year),
    );
    Some(line_item(&model.id, &model.description, amount))
}

pub fn evaluate_recurring_expense(model: &RecurringExpenseModel, year: i32) -> Option<LineItem> {
    if !within(year, model.start_year, model.end_year) {
        return None;
    }
    let amount = apply_increase(
        model.amount,
        model.increase_type,
        model.increase_rate,
        year.saturating_sub(model.start_year),
    );
    Some(line_item(&model.id, &model.description, amount))
}

pub fn evaluate_one_time_expense(model: &OneTimeExpenseModel, year: i32) -> Option<LineItem> {
    (year == model.year).then(|| line_item(&model.id, &model.description, model.amount))
}

pub fn evaluate_one_time_income(model: &OneTimeIncomeModel, year: i32) -> Option<LineItem> {
    (year == model.year).then(|| line_item(&model.id, &model.description, model.amount))
}

/// Mortgage and car loan payments. The term is half-open: a loan of N years
/// starting in Y pays in Y..Y+N.
pub fn evaluate_loan(model: &LoanModel, year: i32) -> Option<LineItem> {
    if !model.is_active(year) {
        return None;
    }
    Some(line_item(
        &model.id,
        &model.description,
        model.annual_payment(),
    ))
}

/// Benefits always compound by the cost-of-living rate; there is no flat mode.
pub fn evaluate_social_security(model: &SocialSecurityModel, year: i32) -> Option<LineItem> {
    if !within(year, model.start_year, model.end_year) {
        return None;
    }
    let years_elapsed = year.saturating_sub(model.start_year);
    let amount = model.annual_benefit * (1.0 + model.increase_rate / 100.0).powi(years_elapsed);
    Some(line_item(&model.id, &model.description, amount))
}

/// Dispatch a stateless model and classify its line item.
///
/// Returns `None` for inactive years and for retirement accounts, which
/// need sequential simulation.
pub fn evaluate_model(model: &Model, year: i32) -> Option<CashFlow> {
    match model {
        Model::Salary(m) => evaluate_salary(m, year).map(CashFlow::income),
        Model::RecurringExpense(m) => evaluate_recurring_expense(m, year).map(CashFlow::expense),
        Model::OneTimeExpense(m) => evaluate_one_time_expense(m, year).map(CashFlow::expense),
        Model::OneTimeIncome(m) => evaluate_one_time_income(m, year).map(CashFlow::income),
        Model::Mortgage(m) | Model::CarLoan(m) => evaluate_loan(m, year).map(CashFlow::expense),
        Model::SocialSecurity(m) => evaluate_social_security(m, year).map(CashFlow::income),
        Model::RetirementAccount(_) => None,
    }
}
