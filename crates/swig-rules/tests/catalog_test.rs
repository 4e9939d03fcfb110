use std::collections::BTreeMap;

use swig_core::models::{Category, DrinkLevel};
use swig_rules::catalog::MIN_TEMPLATES_PER_CATEGORY;
use swig_rules::{catalog, validate_catalog, CatalogError, RuleTemplate};

#[test]
fn builtin_catalog_validates() {
    assert_eq!(validate_catalog(catalog()), Ok(()));
}

#[test]
fn builtin_catalog_covers_every_category_twice() {
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for template in catalog() {
        *counts.entry(template.category).or_default() += 1;
    }
    for category in Category::ALL {
        assert!(
            counts.get(&category).copied().unwrap_or(0) >= MIN_TEMPLATES_PER_CATEGORY,
            "{category} is under-represented"
        );
    }
    assert_eq!(catalog().len(), 16);
}

#[test]
fn builtin_templates_are_never_custom() {
    assert!(catalog().iter().all(|t| !t.is_custom));
}

#[test]
fn builtin_templates_are_unique() {
    let mut texts: Vec<_> = catalog().iter().map(|t| t.text).collect();
    texts.sort_unstable();
    texts.dedup();
    assert_eq!(texts.len(), catalog().len());
}

fn template(text: &'static str, category: Category, weight: f64) -> RuleTemplate {
    RuleTemplate {
        text,
        category,
        weight,
        base_drink: DrinkLevel::Sip,
        is_custom: false,
    }
}

fn full_coverage() -> Vec<RuleTemplate> {
    Category::ALL
        .iter()
        .flat_map(|c| {
            [
                template("When {host} blinks", *c, 0.5),
                template("When {host} smiles", *c, 0.5),
            ]
        })
        .collect()
}

#[test]
fn zero_weight_is_rejected() {
    let mut templates = full_coverage();
    templates[3].weight = 0.0;
    assert_eq!(
        validate_catalog(&templates),
        Err(CatalogError::InvalidWeight {
            index: 3,
            weight: 0.0
        })
    );
}

#[test]
fn nan_weight_is_rejected() {
    let mut templates = full_coverage();
    templates[0].weight = f64::NAN;
    assert!(matches!(
        validate_catalog(&templates),
        Err(CatalogError::InvalidWeight { index: 0, .. })
    ));
}

#[test]
fn missing_placeholder_is_rejected() {
    let mut templates = full_coverage();
    templates[5].text = "Whenever anyone sneezes";
    assert!(matches!(
        validate_catalog(&templates),
        Err(CatalogError::MissingPlaceholder { index: 5, .. })
    ));
}

#[test]
fn thin_category_is_rejected() {
    let templates: Vec<_> = full_coverage()
        .into_iter()
        .filter(|t| !(t.category == Category::Location && t.text.contains("smiles")))
        .collect();
    assert_eq!(
        validate_catalog(&templates),
        Err(CatalogError::ThinCategory {
            category: Category::Location,
            count: 1,
            min: 2
        })
    );
}
