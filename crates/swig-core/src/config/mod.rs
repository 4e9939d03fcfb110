//! Configuration system for swig.
//! TOML-based, layered: env > project file > compiled defaults.

pub mod defaults;
pub mod games_config;
pub mod observability_config;
pub mod rules_config;
pub mod storage_config;
pub mod swig_config;

pub use games_config::GamesConfig;
pub use observability_config::ObservabilityConfig;
pub use rules_config::RulesConfig;
pub use storage_config::StorageConfig;
pub use swig_config::SwigConfig;
