/// Placeholder token in rule template text, replaced with the subject name.
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Subject name used when nothing better is known about the video's host.
pub const DEFAULT_SUBJECT_NAME: &str = "the host";

/// Default number of rules requested per generation.
pub const DEFAULT_RULE_COUNT: usize = 5;

/// Smallest number of categories the selector draws from.
pub const MIN_SELECTED_CATEGORIES: usize = 2;

/// Largest number of categories the selector draws from.
pub const MAX_SELECTED_CATEGORIES: usize = 3;

/// Distinct categories after which weighted sampling hands over to uniform fill.
pub const DIVERSITY_THRESHOLD: usize = 2;

/// Suffix appended to the video title when a game has no explicit title.
pub const DEFAULT_GAME_TITLE_SUFFIX: &str = "Drinking Game";
