use std::time::{Duration, Instant};

use dietplan_recipe::{Macros, NutritionTargets, Recipe, compute_nutrition};
use dietplan_shared::mealplan::MealSlot;
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use crate::plan::{MealPlan, PlanOutcome, PlannedMeal, relative_deviation};
use crate::refine::{ideal_calories, refine_servings, slot_calories};

pub const DEFAULT_TRIALS: u32 = 300;

/// Weight of the per-slot balance term in the score.
pub fn balance_weight() -> Decimal {
    Decimal::new(3, 1)
}

/// A best candidate further than this from the target is discarded.
pub fn max_deviation() -> Decimal {
    Decimal::new(25, 2)
}

/// `(total - target)^2 + 0.3 * sum((slot - ideal)^2)`
///
/// Saturates at `Decimal::MAX` when the terms overflow.
pub fn score(calories: [Decimal; 3], target: Decimal) -> Decimal {
    checked_score(calories, target).unwrap_or(Decimal::MAX)
}

fn checked_score(calories: [Decimal; 3], target: Decimal) -> Option<Decimal> {
    let square = |d: Decimal| d.checked_mul(d);

    let total = calories
        .iter()
        .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(*c))?;

    let balance = calories
        .iter()
        .zip(ideal_calories(target).iter())
        .try_fold(Decimal::ZERO, |acc, (actual, ideal)| {
            acc.checked_add(square(actual.checked_sub(*ideal)?)?)
        })?;

    square(total.checked_sub(target)?)?
        .checked_add(balance_weight().checked_mul(balance)?)
}

struct Candidate<'a> {
    recipe: &'a Recipe,
    per_serving: Macros,
}

#[derive(Clone, Copy)]
struct Trial<'c, 'a> {
    picks: [&'c Candidate<'a>; 3],
    servings: [u32; 3],
}

impl Trial<'_, '_> {
    fn meal(&self, slot: MealSlot) -> Macros {
        let i = slot.index();
        self.picks[i].per_serving * Decimal::from(self.servings[i])
    }

    fn totals(&self) -> Macros {
        MealSlot::ALL.iter().map(|slot| self.meal(*slot)).sum()
    }

    fn calories(&self) -> [Decimal; 3] {
        slot_calories(self.picks.map(|c| c.per_serving.calories), self.servings)
    }
}

/// Randomized local search over breakfast/lunch/dinner triples.
#[derive(Debug, Clone)]
pub struct Planner {
    pub trials: u32,
    /// Wall-clock cap; once reached, the remaining trials are skipped.
    pub time_limit: Option<Duration>,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            time_limit: None,
        }
    }
}

impl Planner {
    pub fn new(trials: u32) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn plan<'a, R: Rng + ?Sized>(
        &self,
        recipes: impl IntoIterator<Item = &'a Recipe>,
        target_calories: u32,
        targets: &NutritionTargets,
        rng: &mut R,
    ) -> dietplan_shared::Result<PlanOutcome> {
        if target_calories == 0 {
            dietplan_shared::user!("target calories must be greater than 0");
        }

        let mut buckets: [Vec<Candidate<'a>>; 3] = Default::default();
        for recipe in recipes {
            let Ok(slot) = MealSlot::try_from(recipe.meal_type) else {
                continue;
            };

            let per_serving = compute_nutrition(recipe).per_serving();
            if per_serving.calories <= Decimal::ZERO {
                continue;
            }

            buckets[slot.index()].push(Candidate {
                recipe,
                per_serving,
            });
        }

        let missing = MealSlot::ALL
            .into_iter()
            .filter(|slot| buckets[slot.index()].is_empty())
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            tracing::debug!(?missing, "meal plan search skipped, empty slots");
            return Ok(PlanOutcome::InfeasibleCatalog { missing });
        }

        tracing::debug!(
            breakfasts = buckets[0].len(),
            lunches = buckets[1].len(),
            dinners = buckets[2].len(),
            target_calories,
            "meal plan search started"
        );

        let target = Decimal::from(target_calories);
        let started = Instant::now();
        let mut best: Option<(Decimal, Trial<'_, 'a>)> = None;
        let mut discarded = 0u32;
        let mut attempted = 0u32;

        for _ in 0..self.trials {
            if self.time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                tracing::warn!(
                    attempted,
                    trials = self.trials,
                    "meal plan search hit its time limit"
                );
                break;
            }

            attempted += 1;

            let (Some(breakfast), Some(lunch), Some(dinner)) = (
                buckets[0].choose(rng),
                buckets[1].choose(rng),
                buckets[2].choose(rng),
            ) else {
                continue;
            };

            let picks = [breakfast, lunch, dinner];
            let servings = refine_servings(picks.map(|c| c.per_serving.calories), target);
            let trial = Trial { picks, servings };

            if !targets.accepts(&trial.totals()) {
                discarded += 1;
                tracing::trace!(
                    breakfast = breakfast.recipe.id,
                    lunch = lunch.recipe.id,
                    dinner = dinner.recipe.id,
                    "trial rejected by nutrition targets"
                );
                continue;
            }

            let trial_score = score(trial.calories(), target);
            if best.as_ref().is_none_or(|(s, _)| trial_score < *s) {
                best = Some((trial_score, trial));
            }
        }

        tracing::debug!(attempted, discarded, "meal plan search finished");

        let Some((best_score, trial)) = best else {
            return Ok(PlanOutcome::NoValidCombination);
        };

        let totals = trial.totals();
        let deviation = relative_deviation(totals.calories, target_calories);
        if deviation > max_deviation() {
            tracing::info!(%deviation, "best meal plan discarded, too far from target");
            return Ok(PlanOutcome::ExcessiveDeviation { deviation });
        }

        let meals = MealSlot::ALL.map(|slot| PlannedMeal {
            slot,
            recipe: trial.picks[slot.index()].recipe.clone(),
            servings: trial.servings[slot.index()],
            nutrition: trial.meal(slot),
        });

        tracing::info!(
            calories = %totals.calories,
            score = %best_score,
            "meal plan found"
        );

        Ok(PlanOutcome::Found(MealPlan {
            target_calories,
            meals,
            totals,
            score: best_score,
        }))
    }
}

/// Runs the default 300-trial search and keeps only the plan.
///
/// Infeasible catalogs, unsatisfiable targets and off-target results all yield
/// `Ok(None)`; only malformed input is an error.
pub fn find_best_meal_plan<'a, R: Rng + ?Sized>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    target_calories: u32,
    targets: &NutritionTargets,
    rng: &mut R,
) -> dietplan_shared::Result<Option<MealPlan>> {
    Planner::default()
        .plan(recipes, target_calories, targets, rng)
        .map(PlanOutcome::into_plan)
}
