use dietplan_shared::recipe::{CarbConstraint, MealType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::nutrition::{Macros, NutritionProfile, compute_nutrition};

/// Largest per-100g value or diet coefficient a catalog may carry, five
/// integer digits and two decimals.
pub fn max_reference_value() -> Decimal {
    Decimal::new(9_999_999, 2)
}

fn out_of_range(values: &[Decimal]) -> bool {
    values
        .iter()
        .any(|v| v.is_sign_negative() || *v > max_reference_value())
}

/// Reference nutrition values, all per 100 grams.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub calories: Decimal,
    pub proteins: Decimal,
    pub fats: Decimal,
    pub carbs: Decimal,
}

impl Ingredient {
    pub fn per_100g(&self) -> Macros {
        Macros {
            calories: self.calories,
            proteins: self.proteins,
            fats: self.fats,
            carbs: self.carbs,
        }
    }

    pub(crate) fn has_value_out_of_range(&self) -> bool {
        out_of_range(&[self.calories, self.proteins, self.fats, self.carbs])
    }
}

/// An ingredient as used by one recipe.
///
/// `weight_grams` drives the nutrition math; `amount`/`unit` are only what the
/// reader sees ("1 piece" may weigh 50g).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,
    pub weight_grams: u32,
    pub amount: Option<String>,
    pub unit: Option<String>,
}

impl RecipeIngredient {
    /// Contribution of this line to the recipe totals.
    pub fn macros(&self) -> Macros {
        self.ingredient.per_100g() * (Decimal::from(self.weight_grams) / Decimal::ONE_HUNDRED)
    }

    pub fn display_amount(&self) -> String {
        match (self.amount.as_deref(), self.unit.as_deref()) {
            (Some(amount), Some(unit)) => format!("{amount} {unit}"),
            (Some(amount), None) => amount.to_owned(),
            (None, Some(unit)) => unit.to_owned(),
            (None, None) => format!("{} g", self.weight_grams),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub meal_type: MealType,
    pub ingredients: Vec<RecipeIngredient>,
    pub diets: Vec<String>,
    /// Placeholder entries (single ingredient stand-ins) are hidden from listings.
    pub is_real: bool,
    pub image: Option<String>,
}

impl Recipe {
    pub fn nutrition(&self) -> NutritionProfile {
        compute_nutrition(self)
    }

    pub fn suits(&self, diet: &str) -> bool {
        self.diets.iter().any(|d| d == diet)
    }
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diet {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1))]
    pub default_calories: u32,
    /// Grams of protein per 1000 kcal.
    pub proteins_per_1000: Decimal,
    /// Grams of fat per 1000 kcal.
    pub fats_per_1000: Decimal,
    /// Grams of carbohydrate per 1000 kcal.
    pub carbs_per_1000: Decimal,
    #[serde(default)]
    pub carbs_constraint: CarbConstraint,
}

impl Diet {
    pub(crate) fn has_value_out_of_range(&self) -> bool {
        out_of_range(&[
            self.proteins_per_1000,
            self.fats_per_1000,
            self.carbs_per_1000,
        ])
    }
}
