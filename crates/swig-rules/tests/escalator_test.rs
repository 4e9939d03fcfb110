use proptest::prelude::*;
use swig_core::models::DrinkLevel;
use swig_rules::{calculate_effective_drink, drink_display};

#[test]
fn adds_intoxication_to_base() {
    assert_eq!(calculate_effective_drink(DrinkLevel::Sip.value(), 2), DrinkLevel::Pull.value());
}

#[test]
fn caps_at_shot() {
    assert_eq!(calculate_effective_drink(DrinkLevel::Pull.value(), 3), DrinkLevel::Shot.value());
}

#[test]
fn zero_intoxication_is_identity() {
    assert_eq!(calculate_effective_drink(DrinkLevel::Gulp.value(), 0), DrinkLevel::Gulp.value());
}

#[test]
fn negative_inputs_are_not_clamped_below() {
    assert_eq!(calculate_effective_drink(0, -1), -1);
}

#[test]
fn huge_inputs_saturate_instead_of_overflowing() {
    assert_eq!(calculate_effective_drink(i32::MAX, i32::MAX), 3);
}

#[test]
fn display_for_canonical_levels() {
    assert_eq!(drink_display(0).name, "Sip");
    assert_eq!(drink_display(1).name, "Gulp");
    assert_eq!(drink_display(2).name, "Pull");
    assert_eq!(drink_display(3).name, "Shot");
    assert_eq!(drink_display(0).icon, "🥤");
    assert_eq!(drink_display(2).icon, "🍺");
    assert_eq!(drink_display(3).icon, "🥃");
}

#[test]
fn display_falls_back_to_sip() {
    let sip = drink_display(0);
    assert_eq!(drink_display(999), sip);
    assert_eq!(drink_display(4), sip);
    assert_eq!(drink_display(-1), sip);
}

proptest! {
    #[test]
    fn never_exceeds_shot(base in -10i32..10, level in -10i32..100) {
        prop_assert!(calculate_effective_drink(base, level) <= DrinkLevel::MAX);
    }

    #[test]
    fn never_below_base_for_non_negative_levels(base in 0i32..=3, level in 0i32..100) {
        prop_assert!(calculate_effective_drink(base, level) >= base);
    }

    #[test]
    fn pure_function(base in 0i32..=3, level in 0i32..10) {
        prop_assert_eq!(
            calculate_effective_drink(base, level),
            calculate_effective_drink(base, level)
        );
    }
}
