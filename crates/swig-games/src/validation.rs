//! Input checks shared by the service operations. Each returns
//! `SwigError::InvalidInput` naming the offending field.

use swig_core::models::{Category, DrinkLevel, IntoxicationLevel};
use swig_core::{SwigError, SwigResult};

pub fn require_non_empty(field: &str, value: &str) -> SwigResult<()> {
    if value.trim().is_empty() {
        return Err(SwigError::invalid(field, "is required"));
    }
    Ok(())
}

pub fn require_level(level: IntoxicationLevel) -> SwigResult<()> {
    if !level.is_valid() {
        return Err(SwigError::invalid(
            "intoxication_level",
            format!("must be at least {}, got {level}", IntoxicationLevel::MIN),
        ));
    }
    Ok(())
}

pub fn parse_category(value: &str) -> SwigResult<Category> {
    value.parse()
}

pub fn parse_drink(value: i32) -> SwigResult<DrinkLevel> {
    DrinkLevel::try_from(value)
}

pub fn require_weight(weight: f64) -> SwigResult<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(SwigError::invalid("weight", format!("must be positive, got {weight}")));
    }
    Ok(())
}
