use crate::errors::SwigResult;
use crate::models::{Game, Rule};

/// Persistence for games and their rules.
///
/// `order` is caller-managed: implementations store what they are given,
/// except where a method says it renumbers.
pub trait GameStorage: Send + Sync {
    // --- Games ---
    /// Insert a game and its initial rules atomically.
    fn create_game(&self, game: &Game, rules: &[Rule]) -> SwigResult<()>;
    fn get_game(&self, id: &str) -> SwigResult<Option<Game>>;
    fn count_games(&self) -> SwigResult<usize>;

    // --- Rules ---
    /// All rules of a game, ordered by `order`.
    fn list_rules(&self, game_id: &str) -> SwigResult<Vec<Rule>>;
    fn get_rule(&self, game_id: &str, rule_id: &str) -> SwigResult<Option<Rule>>;
    fn insert_rule(&self, rule: &Rule) -> SwigResult<()>;
    /// Errors with `RuleNotFound` when no row matches.
    fn update_rule(&self, rule: &Rule) -> SwigResult<()>;
    /// Returns whether a row was deleted.
    fn delete_rule(&self, game_id: &str, rule_id: &str) -> SwigResult<bool>;
    /// Delete a rule, then renumber the game to 1..=n, in one transaction.
    /// Returns whether a row was deleted. Renumbering runs either way.
    fn remove_rule(&self, game_id: &str, rule_id: &str) -> SwigResult<bool>;

    // --- Ordering ---
    /// Delete every non-custom rule, insert `rules`, then renumber the game so
    /// custom rules come first (relative order kept) followed by `rules`.
    fn replace_generated_rules(&self, game_id: &str, rules: &[Rule]) -> SwigResult<Vec<Rule>>;
    /// Rewrite `order` to 1..=n, keeping relative order.
    fn renumber_rules(&self, game_id: &str) -> SwigResult<()>;
}
