use std::iter::Sum;
use std::ops::{Add, Div, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::types::Recipe;

/// Fractional digits kept on every reported nutrition value.
pub const NUTRITION_SCALE: u32 = 2;

/// Rounds half to even, the same rule used for diet thresholds.
pub fn round_nutrition(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(NUTRITION_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Calories and macro-nutrient masses of some quantity of food.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Macros {
    pub calories: Decimal,
    pub proteins: Decimal,
    pub fats: Decimal,
    pub carbs: Decimal,
}

impl Macros {
    pub fn rounded(self) -> Self {
        Self {
            calories: round_nutrition(self.calories),
            proteins: round_nutrition(self.proteins),
            fats: round_nutrition(self.fats),
            carbs: round_nutrition(self.carbs),
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Self) -> Self::Output {
        Macros {
            calories: self.calories + rhs.calories,
            proteins: self.proteins + rhs.proteins,
            fats: self.fats + rhs.fats,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl Mul<Decimal> for Macros {
    type Output = Macros;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Macros {
            calories: self.calories * rhs,
            proteins: self.proteins * rhs,
            fats: self.fats * rhs,
            carbs: self.carbs * rhs,
        }
    }
}

impl Div<Decimal> for Macros {
    type Output = Macros;

    fn div(self, rhs: Decimal) -> Self::Output {
        Macros {
            calories: self.calories / rhs,
            proteins: self.proteins / rhs,
            fats: self.fats / rhs,
            carbs: self.carbs / rhs,
        }
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::default(), Add::add)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NutritionProfile {
    pub total_calories: Decimal,
    pub calories_per_serving: Decimal,
    pub proteins_per_serving: Decimal,
    pub fats_per_serving: Decimal,
    pub carbs_per_serving: Decimal,
}

impl NutritionProfile {
    pub fn per_serving(&self) -> Macros {
        Macros {
            calories: self.calories_per_serving,
            proteins: self.proteins_per_serving,
            fats: self.fats_per_serving,
            carbs: self.carbs_per_serving,
        }
    }
}

/// Sums every ingredient line of the recipe and splits the total into servings.
///
/// A recipe with zero servings reports zero for every per-serving value.
pub fn compute_nutrition(recipe: &Recipe) -> NutritionProfile {
    let total: Macros = recipe.ingredients.iter().map(|line| line.macros()).sum();

    let per_serving = match recipe.servings {
        0 => Macros::default(),
        servings => (total / Decimal::from(servings)).rounded(),
    };

    NutritionProfile {
        total_calories: round_nutrition(total.calories),
        calories_per_serving: per_serving.calories,
        proteins_per_serving: per_serving.proteins,
        fats_per_serving: per_serving.fats,
        carbs_per_serving: per_serving.carbs,
    }
}
