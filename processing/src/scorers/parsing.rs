//! Field parsers for receipt scoring.
//!
//! Every parser reports failure through [`FieldError`]; the rules decide to
//! fall back to zero and keep scoring.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid amount: {0}")]
    Amount(#[from] ParseFloatError),

    #[error("amount is not finite")]
    NonFinite,

    #[error("missing {0} component")]
    MissingComponent(&'static str),

    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),
}

/// Parses a monetary amount such as `"9.00"`.
pub fn parse_amount(raw: &str) -> Result<f64, FieldError> {
    let amount: f64 = raw.parse()?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(FieldError::NonFinite)
    }
}

/// Day of month from `YYYY-MM-DD`: the third `-`-separated component.
pub fn purchase_day(date: &str) -> Result<i64, FieldError> {
    let day = date
        .split('-')
        .nth(2)
        .ok_or(FieldError::MissingComponent("day"))?;
    Ok(day.parse()?)
}

/// Hour from `HH:MM`: the first `:`-separated component.
pub fn purchase_hour(time: &str) -> Result<i64, FieldError> {
    clock_component(time, 0, "hour")
}

/// Minute from `HH:MM`: the second `:`-separated component.
pub fn purchase_minute(time: &str) -> Result<i64, FieldError> {
    clock_component(time, 1, "minute")
}

fn clock_component(time: &str, index: usize, name: &'static str) -> Result<i64, FieldError> {
    let component = time
        .split(':')
        .nth(index)
        .ok_or(FieldError::MissingComponent(name))?;
    Ok(component.parse()?)
}
