//! GameService: ties the rule engine to a `GameStorage` backend.
//!
//! Every operation that touches an existing game first checks that it is
//! available (active and not past `expires_at`) at the caller-supplied `now`.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use swig_core::config::GamesConfig;
use swig_core::constants::DEFAULT_GAME_TITLE_SUFFIX;
use swig_core::models::{Game, GameWithRules, Rule};
use swig_core::traits::GameStorage;
use swig_core::errors::ConfigError;
use swig_core::{SwigConfig, SwigError, SwigResult};
use swig_rules::materializer::{self, MaterializedRule};
use swig_rules::RuleEngine;

use crate::requests::{CreateGameRequest, CustomRuleRequest, GenerateRulesRequest};
use crate::validation;

/// The game service.
pub struct GameService<S: GameStorage> {
    storage: S,
    engine: RuleEngine,
    config: GamesConfig,
}

impl<S: GameStorage> GameService<S> {
    pub fn new(storage: S, engine: RuleEngine, config: GamesConfig) -> Self {
        Self {
            storage,
            engine,
            config,
        }
    }

    /// Service over the built-in catalog, configured from `config`.
    pub fn from_config(storage: S, config: &SwigConfig) -> Self {
        Self::new(
            storage,
            RuleEngine::new(config.rules.clone()),
            config.games.clone(),
        )
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Preview rules for a video. Nothing is persisted.
    pub fn generate_rules<R: Rng + ?Sized>(
        &self,
        request: &GenerateRulesRequest,
        rng: &mut R,
    ) -> SwigResult<Vec<MaterializedRule>> {
        validation::require_non_empty("video_id", &request.video_id)?;
        validation::require_non_empty("video_title", &request.video_title)?;
        validation::require_level(request.intoxication_level)?;
        if request.number_of_rules == 0 {
            return Err(SwigError::invalid("number_of_rules", "must be greater than 0"));
        }

        let rules = self.engine.generate(
            request.intoxication_level,
            Some(request.number_of_rules),
            rng,
        );
        debug!(
            video_id = %request.video_id,
            requested = request.number_of_rules,
            generated = rules.len(),
            "rules previewed"
        );
        Ok(rules)
    }

    /// Create a game from a set of rules. Rule text is stored as given;
    /// effective drinks are recomputed at the game's level.
    pub fn create_game(
        &self,
        request: &CreateGameRequest,
        now: DateTime<Utc>,
    ) -> SwigResult<GameWithRules> {
        validation::require_non_empty("video_id", &request.video_id)?;
        validation::require_non_empty("video_title", &request.video_title)?;
        validation::require_level(request.intoxication_level)?;

        let game_id = Uuid::new_v4().to_string();
        let mut rules = Vec::with_capacity(request.rules.len());
        for (index, input) in request.rules.iter().enumerate() {
            validation::require_non_empty("text", &input.text)?;
            let category = validation::parse_category(&input.category)?;
            let base_drink = validation::parse_drink(input.base_drink)?;
            let weight = input.weight.unwrap_or(self.config.custom_rule_weight);
            validation::require_weight(weight)?;

            let materialized = MaterializedRule {
                text: input.text.clone(),
                category,
                weight,
                base_drink,
                effective_drink: materializer::escalate(base_drink, request.intoxication_level),
                is_custom: input.is_custom,
            };
            rules.push(to_rule(materialized, &game_id, index as u32 + 1, now));
        }

        let title = match request.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("{} {DEFAULT_GAME_TITLE_SUFFIX}", request.video_title),
        };
        let game = Game {
            id: game_id,
            title,
            video_id: request.video_id.clone(),
            video_title: request.video_title.clone(),
            video_thumbnail: request.video_thumbnail.clone(),
            intoxication_level: request.intoxication_level,
            created_at: now,
            expires_at: self.expiry_from(now)?,
            is_active: true,
        };

        self.storage.create_game(&game, &rules)?;
        info!(game_id = %game.id, rules = rules.len(), "game created");
        Ok(GameWithRules { game, rules })
    }

    /// A game and its rules, if it is still available.
    pub fn get_game(&self, game_id: &str, now: DateTime<Utc>) -> SwigResult<GameWithRules> {
        let game = self.available_game(game_id, now)?;
        let rules = self.storage.list_rules(game_id)?;
        Ok(GameWithRules { game, rules })
    }

    /// Replace every generated rule with `reroll_count` fresh ones. Custom
    /// rules survive and keep their place at the top.
    pub fn reroll_all<R: Rng + ?Sized>(
        &self,
        game_id: &str,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> SwigResult<Vec<Rule>> {
        let game = self.available_game(game_id, now)?;
        let fresh: Vec<Rule> = self
            .engine
            .generate(game.intoxication_level, Some(self.config.reroll_count), rng)
            .into_iter()
            .map(|m| to_rule(m, game_id, 0, now))
            .collect();

        let rules = self.storage.replace_generated_rules(game_id, &fresh)?;
        info!(game_id, generated = fresh.len(), total = rules.len(), "rules re-rolled");
        Ok(rules)
    }

    /// Swap one generated rule's content for a freshly selected template.
    /// The rule keeps its id and position.
    pub fn reroll_rule<R: Rng + ?Sized>(
        &self,
        game_id: &str,
        rule_id: &str,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> SwigResult<Rule> {
        validation::require_non_empty("rule_id", rule_id)?;
        let game = self.available_game(game_id, now)?;

        let mut rule = match self.storage.get_rule(game_id, rule_id)? {
            Some(rule) if !rule.is_custom => rule,
            _ => {
                return Err(SwigError::RuleNotFound {
                    id: rule_id.to_string(),
                })
            }
        };

        let replacement = self
            .engine
            .generate(game.intoxication_level, Some(1), rng)
            .into_iter()
            .next()
            .ok_or_else(|| SwigError::GenerationFailed {
                reason: "selector returned no templates".to_string(),
            })?;

        rule.text = replacement.text;
        rule.category = replacement.category;
        rule.weight = replacement.weight;
        rule.base_drink = replacement.base_drink;
        rule.effective_drink = replacement.effective_drink;
        self.storage.update_rule(&rule)?;

        debug!(game_id, rule_id, "rule re-rolled");
        Ok(rule)
    }

    /// Append a user-authored rule at the end of the game.
    pub fn add_custom_rule(
        &self,
        game_id: &str,
        request: &CustomRuleRequest,
        now: DateTime<Utc>,
    ) -> SwigResult<Rule> {
        validation::require_non_empty("text", &request.text)?;
        let category = validation::parse_category(&request.category)?;
        let base_drink = validation::parse_drink(request.base_drink)?;
        let game = self.available_game(game_id, now)?;

        let order = self.storage.list_rules(game_id)?.len() as u32 + 1;
        let materialized = materializer::materialize_custom(
            &request.text,
            category,
            base_drink,
            self.config.custom_rule_weight,
            game.intoxication_level,
        );
        let rule = to_rule(materialized, game_id, order, now);
        self.storage.insert_rule(&rule)?;

        info!(game_id, rule_id = %rule.id, order, "custom rule added");
        Ok(rule)
    }

    /// Delete a rule and close the gap it leaves. Deleting a rule that is
    /// already gone is not an error.
    pub fn delete_rule(&self, game_id: &str, rule_id: &str, now: DateTime<Utc>) -> SwigResult<()> {
        validation::require_non_empty("rule_id", rule_id)?;
        self.available_game(game_id, now)?;

        let deleted = self.storage.remove_rule(game_id, rule_id)?;
        debug!(game_id, rule_id, deleted, "rule deleted");
        Ok(())
    }

    /// `now + expiry_days`, or a config error when that leaves chrono's range.
    fn expiry_from(&self, now: DateTime<Utc>) -> SwigResult<DateTime<Utc>> {
        Duration::try_days(self.config.expiry_days)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                SwigError::Config(ConfigError::ValidationFailed {
                    field: "games.expiry_days".into(),
                    message: format!(
                        "{} days overflows the expiry timestamp",
                        self.config.expiry_days
                    ),
                })
            })
    }

    fn available_game(&self, game_id: &str, now: DateTime<Utc>) -> SwigResult<Game> {
        validation::require_non_empty("game_id", game_id)?;
        match self.storage.get_game(game_id)? {
            Some(game) if game.is_available(now) => Ok(game),
            _ => Err(SwigError::GameNotFound {
                id: game_id.to_string(),
            }),
        }
    }
}

/// Attach identity and position to a materialized rule.
fn to_rule(rule: MaterializedRule, game_id: &str, order: u32, now: DateTime<Utc>) -> Rule {
    Rule {
        id: Uuid::new_v4().to_string(),
        game_id: game_id.to_string(),
        text: rule.text,
        category: rule.category,
        weight: rule.weight,
        base_drink: rule.base_drink,
        effective_drink: rule.effective_drink,
        is_custom: rule.is_custom,
        order,
        created_at: now,
    }
}
