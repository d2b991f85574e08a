//! Fixed-rate loan amortization

use crate::model::LoanModel;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Standard fixed-rate monthly payment.
///
/// `i` is the monthly rate and `n` the number of monthly payments:
/// `principal * i(1+i)^n / ((1+i)^n - 1)`. A zero rate has no interest to
/// amortize, so the principal is split evenly across the payments instead.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: i32) -> f64 {
    let payments = term_years as f64 * MONTHS_PER_YEAR;
    if annual_rate_pct == 0.0 {
        return principal / payments;
    }

    let i = annual_rate_pct / 100.0 / MONTHS_PER_YEAR;
    let growth = (1.0 + i).powf(payments);
    principal * (i * growth) / (growth - 1.0)
}

/// Total paid over one year of the loan
pub fn annual_payment(principal: f64, annual_rate_pct: f64, term_years: i32) -> f64 {
    monthly_payment(principal, annual_rate_pct, term_years) * MONTHS_PER_YEAR
}

impl LoanModel {
    /// Constant yearly payment for every year of the term
    pub fn annual_payment(&self) -> f64 {
        annual_payment(self.loan_amount, self.interest_rate, self.term_years)
    }
}
