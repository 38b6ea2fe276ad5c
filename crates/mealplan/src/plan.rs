use std::fmt;

use dietplan_recipe::{Macros, Recipe};
use dietplan_shared::mealplan::MealSlot;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub recipe: Recipe,
    pub servings: u32,
    /// Per-serving nutrition multiplied by `servings`.
    pub nutrition: Macros,
}

/// Breakfast, lunch and dinner for one day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MealPlan {
    pub target_calories: u32,
    pub meals: [PlannedMeal; 3],
    pub totals: Macros,
    /// Weighted squared deviation from the calorie targets, lower is better.
    pub score: Decimal,
}

impl MealPlan {
    pub fn meal(&self, slot: MealSlot) -> &PlannedMeal {
        &self.meals[slot.index()]
    }

    pub fn breakfast(&self) -> &PlannedMeal {
        self.meal(MealSlot::Breakfast)
    }

    pub fn lunch(&self) -> &PlannedMeal {
        self.meal(MealSlot::Lunch)
    }

    pub fn dinner(&self) -> &PlannedMeal {
        self.meal(MealSlot::Dinner)
    }

    /// Relative distance between planned and target calories.
    pub fn deviation(&self) -> Decimal {
        relative_deviation(self.totals.calories, self.target_calories)
    }
}

pub(crate) fn relative_deviation(calories: Decimal, target_calories: u32) -> Decimal {
    let target = Decimal::from(target_calories);
    (calories - target).abs() / target
}

/// Result of one search. Only `Found` carries a plan; the other variants say
/// why none could be built.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    Found(MealPlan),
    /// At least one slot has no recipe with positive calories.
    InfeasibleCatalog { missing: Vec<MealSlot> },
    /// Every trial broke a macro threshold.
    NoValidCombination,
    /// The best candidate stayed too far from the calorie target.
    ExcessiveDeviation { deviation: Decimal },
}

impl PlanOutcome {
    pub fn plan(&self) -> Option<&MealPlan> {
        match self {
            PlanOutcome::Found(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_plan(self) -> Option<MealPlan> {
        match self {
            PlanOutcome::Found(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }
}

impl fmt::Display for PlanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanOutcome::Found(plan) => write!(
                f,
                "plan found with {} kcal for a {} kcal target",
                plan.totals.calories, plan.target_calories
            ),
            PlanOutcome::InfeasibleCatalog { missing } => {
                let slots = missing
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "no recipes available for {slots}")
            }
            PlanOutcome::NoValidCombination => {
                write!(f, "no combination meets the diet's nutrition targets")
            }
            PlanOutcome::ExcessiveDeviation { deviation } => write!(
                f,
                "best combination misses the calorie target by {}%",
                (deviation * Decimal::ONE_HUNDRED).round_dp(1)
            ),
        }
    }
}
