//! Drink escalation.

use swig_core::models::{DrinkDisplay, DrinkLevel};

/// `min(base_drink + intoxication_level, Shot)`.
///
/// No lower clamp: callers pass non-negative values. The sum saturates
/// instead of overflowing, so the function is total over `i32`.
pub fn calculate_effective_drink(base_drink: i32, intoxication_level: i32) -> i32 {
    base_drink
        .saturating_add(intoxication_level)
        .min(DrinkLevel::MAX)
}

/// Name and icon for a drink level. Anything that is not exactly one of the
/// four canonical levels shows as a Sip.
pub fn drink_display(level: i32) -> DrinkDisplay {
    DrinkLevel::from_value(level)
        .unwrap_or(DrinkLevel::Sip)
        .display()
}
