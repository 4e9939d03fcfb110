use serde::{Deserialize, Serialize};

use super::defaults;

/// Rule generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules generated when the caller does not ask for a specific count.
    pub default_rule_count: usize,
    /// Substituted for `{host}` in template text.
    pub subject_name: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            default_rule_count: defaults::DEFAULT_RULE_COUNT,
            subject_name: defaults::DEFAULT_SUBJECT_NAME.to_string(),
        }
    }
}
