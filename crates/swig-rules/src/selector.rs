//! Category-diverse weighted selection.
//!
//! ```text
//! categories = shuffle(ALL)[..clamp(max_rules / 2, 2, 3)]
//! pool       = catalog ∩ categories
//! weighted draw without replacement until 2 categories are represented
//! uniform draw without replacement for whatever slots remain
//! ```

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use swig_core::constants::{DIVERSITY_THRESHOLD, MAX_SELECTED_CATEGORIES, MIN_SELECTED_CATEGORIES};
use swig_core::models::Category;

use crate::catalog::RuleTemplate;

/// Pick up to `max_rules` distinct templates from `catalog`.
///
/// The result has `min(max_rules, pool)` entries, where `pool` is the number
/// of templates in the randomly chosen categories. Never fails; an empty or
/// short result is a normal outcome.
pub fn select_rules<'a, R: Rng + ?Sized>(
    catalog: &'a [RuleTemplate],
    max_rules: usize,
    rng: &mut R,
) -> Vec<&'a RuleTemplate> {
    let categories = choose_categories(max_rules, rng);
    let pool: Vec<&RuleTemplate> = catalog
        .iter()
        .filter(|t| categories.contains(&t.category))
        .collect();

    let selected = draw(pool, max_rules, rng);

    tracing::debug!(
        categories = ?categories,
        requested = max_rules,
        selected = selected.len(),
        "rules selected"
    );
    selected
}

/// Weighted draws without replacement until two categories are represented,
/// then uniform draws for the remaining slots.
fn draw<'a, R: Rng + ?Sized>(
    mut pool: Vec<&'a RuleTemplate>,
    max_rules: usize,
    rng: &mut R,
) -> Vec<&'a RuleTemplate> {
    let mut selected = Vec::with_capacity(max_rules.min(pool.len()));
    let mut used_categories = HashSet::new();

    while selected.len() < max_rules && !pool.is_empty() {
        let index = weighted_index(&pool, rng);
        let template = pool.remove(index);
        used_categories.insert(template.category);
        selected.push(template);

        if used_categories.len() >= DIVERSITY_THRESHOLD {
            break;
        }
    }

    while selected.len() < max_rules && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        selected.push(pool.remove(index));
    }
    selected
}

/// Shuffle all categories and keep a prefix of `clamp(max_rules / 2, 2, 3)`.
fn choose_categories<R: Rng + ?Sized>(max_rules: usize, rng: &mut R) -> Vec<Category> {
    let count = (max_rules / 2).clamp(MIN_SELECTED_CATEGORIES, MAX_SELECTED_CATEGORIES);
    let mut categories = Category::ALL.to_vec();
    categories.shuffle(rng);
    categories.truncate(count);
    categories
}

/// Roulette-wheel pick over `pool`. Falls back to the last candidate when
/// rounding leaves the running value positive after the final subtraction.
fn weighted_index<R: Rng + ?Sized>(pool: &[&RuleTemplate], rng: &mut R) -> usize {
    let total: f64 = pool.iter().map(|t| t.weight).sum();
    let mut remaining = rng.gen::<f64>() * total;

    for (index, template) in pool.iter().enumerate() {
        remaining -= template.weight;
        if remaining <= 0.0 {
            return index;
        }
    }
    pool.len() - 1
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::RngCore;
    use swig_core::models::DrinkLevel;

    use super::*;

    /// Replays a fixed list of `u64` outputs, cycling when it runs out.
    struct ScriptedRng {
        values: Vec<u64>,
        calls: usize,
    }

    impl ScriptedRng {
        fn new(values: &[u64]) -> Self {
            Self {
                values: values.to_vec(),
                calls: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.calls % self.values.len()];
            self.calls += 1;
            value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn template(category: Category, weight: f64) -> RuleTemplate {
        RuleTemplate {
            text: "When {host} waves",
            category,
            weight,
            base_drink: DrinkLevel::Sip,
            is_custom: false,
        }
    }

    #[test]
    fn zero_draw_picks_first_candidate() {
        let a = template(Category::Film, 0.5);
        let b = template(Category::Camera, 0.5);
        let pool = vec![&a, &b];
        let mut rng = StepRng::new(0, 0);
        assert_eq!(weighted_index(&pool, &mut rng), 0);
    }

    #[test]
    fn draw_near_one_picks_last_candidate() {
        let a = template(Category::Film, 0.3);
        let b = template(Category::Camera, 0.3);
        let c = template(Category::General, 0.3);
        let pool = vec![&a, &b, &c];
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(weighted_index(&pool, &mut rng), 2);
    }

    #[test]
    fn heavy_candidate_absorbs_most_of_the_wheel() {
        let light = template(Category::Film, 0.1);
        let heavy = template(Category::Camera, 9.9);
        let pool = vec![&light, &heavy];
        // Draw of 0.5 lands well past the light candidate's 1% slice.
        let mut rng = StepRng::new(1 << 63, 0);
        assert_eq!(weighted_index(&pool, &mut rng), 1);
    }

    #[test]
    fn category_count_is_clamped_between_two_and_three() {
        let mut rng = StepRng::new(7, 13);
        assert_eq!(choose_categories(0, &mut rng).len(), 2);
        assert_eq!(choose_categories(1, &mut rng).len(), 2);
        assert_eq!(choose_categories(5, &mut rng).len(), 2);
        assert_eq!(choose_categories(6, &mut rng).len(), 3);
        assert_eq!(choose_categories(100, &mut rng).len(), 3);
    }

    #[test]
    fn chosen_categories_are_distinct() {
        let mut rng = StepRng::new(3, 11);
        let chosen = choose_categories(6, &mut rng);
        let unique: HashSet<_> = chosen.iter().collect();
        assert_eq!(unique.len(), chosen.len());
    }

    #[test]
    fn second_category_ends_weighted_phase_and_rest_is_uniform() {
        let f1 = template(Category::Film, 1.0);
        let c1 = template(Category::Camera, 1.0);
        let f2 = template(Category::Film, 1.0);
        let heavy = template(Category::Film, 100.0);
        let pool = vec![&f1, &c1, &f2, &heavy];

        // Two zero draws take F1 then C1 off the front of the wheel. The
        // third value is 0.125 as a float, which a weighted pick would land
        // on `heavy`; as a uniform index over [f2, heavy] it is 0.
        let mut rng = ScriptedRng::new(&[0, 0, 1 << 61]);
        let selected = draw(pool, 3, &mut rng);

        assert_eq!(selected.len(), 3);
        assert!(std::ptr::eq(selected[0], &f1));
        assert!(std::ptr::eq(selected[1], &c1));
        assert!(std::ptr::eq(selected[2], &f2));
        assert_eq!(rng.calls, 3);
    }

    #[test]
    fn single_category_pool_stays_weighted_throughout() {
        let light = template(Category::Film, 1.0);
        let heavy = template(Category::Film, 100.0);
        let other = template(Category::Film, 1.0);
        let pool = vec![&light, &heavy, &other];

        // 0.125 of the wheel: index 1 under weighting, index 0 under a
        // uniform pick over three candidates.
        let mut rng = ScriptedRng::new(&[1 << 61]);
        let selected = draw(pool, 1, &mut rng);

        assert_eq!(selected.len(), 1);
        assert!(std::ptr::eq(selected[0], &heavy));
        assert_eq!(rng.calls, 1);
    }

    #[test]
    fn draw_stops_at_pool_size() {
        let a = template(Category::Film, 1.0);
        let b = template(Category::Film, 1.0);
        let mut rng = StepRng::new(0, 1);
        let selected = draw(vec![&a, &b], 10, &mut rng);
        assert_eq!(selected.len(), 2);
    }
}
