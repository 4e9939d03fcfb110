//! Built-in rule templates.

use std::collections::BTreeMap;

use serde::Serialize;
use swig_core::constants::HOST_PLACEHOLDER;
use swig_core::models::Category::{Camera, Equipment, Film, General, Location, Technique};
use swig_core::models::DrinkLevel::{Gulp, Pull, Sip};
use swig_core::models::{Category, DrinkLevel};

/// Minimum templates every category must carry.
pub const MIN_TEMPLATES_PER_CATEGORY: usize = 2;

/// An immutable rule template. `text` contains `{host}` where the subject's
/// name goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTemplate {
    pub text: &'static str,
    pub category: Category,
    /// Relative selection likelihood. Weights need not sum to 1.
    pub weight: f64,
    pub base_drink: DrinkLevel,
    pub is_custom: bool,
}

impl RuleTemplate {
    const fn new(
        text: &'static str,
        category: Category,
        weight: f64,
        base_drink: DrinkLevel,
    ) -> Self {
        Self {
            text,
            category,
            weight,
            base_drink,
            is_custom: false,
        }
    }
}

/// Problems found by [`validate_catalog`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("template {index} has weight {weight}, expected a positive number")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("template {index} has no {placeholder} placeholder")]
    MissingPlaceholder {
        index: usize,
        placeholder: &'static str,
    },

    #[error("category {category} has {count} templates, need at least {min}")]
    ThinCategory {
        category: Category,
        count: usize,
        min: usize,
    },
}

/// The built-in catalog.
pub static CATALOG: [RuleTemplate; 16] = [
    // Camera
    RuleTemplate::new("Every time {host} mentions a specific camera model", Camera, 0.8, Sip),
    RuleTemplate::new("When {host} shows the camera's viewfinder", Camera, 0.6, Sip),
    RuleTemplate::new("If {host} adjusts camera settings on screen", Camera, 0.7, Gulp),
    // Film
    RuleTemplate::new("Every time {host} mentions film stock", Film, 0.9, Sip),
    RuleTemplate::new("When {host} shows film being loaded", Film, 0.5, Gulp),
    RuleTemplate::new("If {host} discusses film development", Film, 0.6, Pull),
    // Technique
    RuleTemplate::new("When {host} explains a photography technique", Technique, 0.7, Sip),
    RuleTemplate::new("If {host} demonstrates manual focus", Technique, 0.5, Gulp),
    RuleTemplate::new("When {host} talks about composition", Technique, 0.6, Sip),
    // Location
    RuleTemplate::new("Every time {host} mentions a location", Location, 0.8, Sip),
    RuleTemplate::new("When {host} shows outdoor shooting", Location, 0.6, Gulp),
    // Equipment
    RuleTemplate::new("When {host} mentions any photography equipment", Equipment, 0.7, Sip),
    RuleTemplate::new("If {host} shows a tripod", Equipment, 0.4, Gulp),
    // General
    RuleTemplate::new("Every time {host} says 'film photography'", General, 0.9, Sip),
    RuleTemplate::new("When {host} shows the final photo", General, 0.8, Pull),
    RuleTemplate::new("If {host} mentions the cost of anything", General, 0.6, Gulp),
];

/// The built-in catalog as a slice.
pub fn catalog() -> &'static [RuleTemplate] {
    &CATALOG
}

/// Check that every template has a usable weight and placeholder, and that
/// every category is represented at least [`MIN_TEMPLATES_PER_CATEGORY`] times.
pub fn validate_catalog(templates: &[RuleTemplate]) -> Result<(), CatalogError> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();

    for (index, template) in templates.iter().enumerate() {
        if !template.weight.is_finite() || template.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                index,
                weight: template.weight,
            });
        }
        if !template.text.contains(HOST_PLACEHOLDER) {
            return Err(CatalogError::MissingPlaceholder {
                index,
                placeholder: HOST_PLACEHOLDER,
            });
        }
        *counts.entry(template.category).or_default() += 1;
    }

    if let Some((category, count)) = counts
        .into_iter()
        .find(|(_, count)| *count < MIN_TEMPLATES_PER_CATEGORY)
    {
        return Err(CatalogError::ThinCategory {
            category,
            count,
            min: MIN_TEMPLATES_PER_CATEGORY,
        });
    }
    Ok(())
}
