//! Year-over-year growth of recurring amounts

use crate::model::IncreaseType;

/// Grow `base` by `years_elapsed` years of `rate`.
///
/// Percent rates compound: `base * (1 + rate/100)^years`. Flat rates add
/// `rate` once per year. The anchor year returns `base` untouched so the
/// first payment is exact. Negative rates model a decline.
#[inline]
pub fn apply_increase(base: f64, kind: IncreaseType, rate: f64, years_elapsed: i32) -> f64 {
    if years_elapsed == 0 {
        return base;
    }
    match kind {
        IncreaseType::Percent => base * (1.0 + rate / 100.0).powi(years_elapsed),
        IncreaseType::Flat => base + rate * years_elapsed as f64,
    }
}
