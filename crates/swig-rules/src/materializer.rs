//! Binding templates to a subject and an intoxication level.

use serde::{Deserialize, Serialize};
use swig_core::constants::{DEFAULT_SUBJECT_NAME, HOST_PLACEHOLDER};
use swig_core::models::{Category, DrinkLevel, IntoxicationLevel};

use crate::catalog::RuleTemplate;
use crate::escalator::calculate_effective_drink;

/// Who the rules are about, and how hard they hit.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializeContext {
    pub subject: String,
    pub intoxication: IntoxicationLevel,
}

impl MaterializeContext {
    pub fn new(subject: impl Into<String>, intoxication: IntoxicationLevel) -> Self {
        Self {
            subject: subject.into(),
            intoxication,
        }
    }
}

impl Default for MaterializeContext {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT_NAME, IntoxicationLevel::default())
    }
}

/// A rule ready to persist. `order` is attached by whoever persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializedRule {
    pub text: String,
    pub category: Category,
    pub weight: f64,
    pub base_drink: DrinkLevel,
    pub effective_drink: i32,
    pub is_custom: bool,
}

/// Effective drink for a 1-based intoxication level.
pub fn escalate(base_drink: DrinkLevel, intoxication: IntoxicationLevel) -> i32 {
    calculate_effective_drink(base_drink.value(), intoxication.escalation_offset())
}

/// Substitute the subject into `template` and escalate its drink.
pub fn materialize(template: &RuleTemplate, ctx: &MaterializeContext) -> MaterializedRule {
    MaterializedRule {
        text: template.text.replace(HOST_PLACEHOLDER, &ctx.subject),
        category: template.category,
        weight: template.weight,
        base_drink: template.base_drink,
        effective_drink: escalate(template.base_drink, ctx.intoxication),
        is_custom: template.is_custom,
    }
}

pub fn materialize_all(
    templates: &[&RuleTemplate],
    ctx: &MaterializeContext,
) -> Vec<MaterializedRule> {
    templates.iter().map(|t| materialize(t, ctx)).collect()
}

/// A user-authored rule. Text is kept verbatim; escalation matches generated
/// rules.
pub fn materialize_custom(
    text: &str,
    category: Category,
    base_drink: DrinkLevel,
    weight: f64,
    intoxication: IntoxicationLevel,
) -> MaterializedRule {
    MaterializedRule {
        text: text.to_string(),
        category,
        weight,
        base_drink,
        effective_drink: escalate(base_drink, intoxication),
        is_custom: true,
    }
}
