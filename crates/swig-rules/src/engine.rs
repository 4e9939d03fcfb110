use rand::Rng;
use swig_core::config::RulesConfig;
use swig_core::models::IntoxicationLevel;

use crate::catalog::{self, CatalogError, RuleTemplate};
use crate::materializer::{self, MaterializeContext, MaterializedRule};
use crate::selector;

/// Rule engine: catalog + selection + materialization behind one handle.
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    catalog: &'static [RuleTemplate],
    config: RulesConfig,
}

impl RuleEngine {
    /// Engine over the built-in catalog.
    pub fn new(config: RulesConfig) -> Self {
        Self {
            catalog: catalog::catalog(),
            config,
        }
    }

    /// Engine over a caller-supplied catalog, validated first.
    pub fn with_catalog(
        templates: &'static [RuleTemplate],
        config: RulesConfig,
    ) -> Result<Self, CatalogError> {
        catalog::validate_catalog(templates)?;
        Ok(Self {
            catalog: templates,
            config,
        })
    }

    pub fn catalog(&self) -> &'static [RuleTemplate] {
        self.catalog
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Select up to `max_rules` templates. The intoxication level does not
    /// influence selection; it is recorded for tracing only.
    pub fn select_rules<R: Rng + ?Sized>(
        &self,
        intoxication: IntoxicationLevel,
        max_rules: usize,
        rng: &mut R,
    ) -> Vec<&'static RuleTemplate> {
        let _span =
            tracing::debug_span!("select_rules", intoxication = intoxication.value()).entered();
        selector::select_rules(self.catalog, max_rules, rng)
    }

    /// Materialization context for the configured subject name.
    pub fn context(&self, intoxication: IntoxicationLevel) -> MaterializeContext {
        MaterializeContext::new(self.config.subject_name.clone(), intoxication)
    }

    /// Select and materialize `count` rules, or the configured default count.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        intoxication: IntoxicationLevel,
        count: Option<usize>,
        rng: &mut R,
    ) -> Vec<MaterializedRule> {
        let count = count.unwrap_or(self.config.default_rule_count);
        let selected = self.select_rules(intoxication, count, rng);
        materializer::materialize_all(&selected, &self.context(intoxication))
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}
