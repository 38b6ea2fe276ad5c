#![allow(dead_code)]

use dietplan_recipe::{
    CarbConstraint, Ingredient, MealType, NutritionTargets, Recipe, RecipeIngredient,
};
use rust_decimal::Decimal;

/// A one-serving recipe made of 100g of a single ingredient, so the
/// ingredient's per-100g values are exactly the per-serving values.
pub fn recipe(
    id: u32,
    meal_type: MealType,
    calories: i64,
    proteins: i64,
    fats: i64,
    carbs: i64,
) -> Recipe {
    Recipe {
        id,
        name: format!("recipe {id}"),
        description: "my description".to_owned(),
        instructions: String::new(),
        cooking_time: 20,
        servings: 1,
        meal_type,
        ingredients: vec![RecipeIngredient {
            ingredient: Ingredient {
                name: format!("ingredient {id}"),
                calories: Decimal::new(calories, 0),
                proteins: Decimal::new(proteins, 0),
                fats: Decimal::new(fats, 0),
                carbs: Decimal::new(carbs, 0),
            },
            weight_grams: 100,
            amount: None,
            unit: None,
        }],
        diets: vec!["Balanced".to_owned()],
        is_real: true,
        image: None,
    }
}

pub fn targets(
    proteins: i64,
    fats: i64,
    carbs: i64,
    carb_constraint: CarbConstraint,
) -> NutritionTargets {
    NutritionTargets {
        min_proteins: Decimal::new(proteins, 0),
        min_fats: Decimal::new(fats, 0),
        carbs_threshold: Decimal::new(carbs, 0),
        carb_constraint,
    }
}

pub fn relaxed() -> NutritionTargets {
    targets(0, 0, 0, CarbConstraint::AtLeast)
}

/// Breakfast 300 kcal, lunch 500 kcal, dinner 400 kcal, all rich in protein and fat.
pub fn simple_day() -> Vec<Recipe> {
    vec![
        recipe(1, MealType::Breakfast, 300, 40, 30, 20),
        recipe(2, MealType::Lunch, 500, 60, 40, 50),
        recipe(3, MealType::Dinner, 400, 50, 35, 30),
    ]
}

/// Several recipes per slot with varied calories and macros.
pub fn varied_day() -> Vec<Recipe> {
    let mut recipes = vec![];
    let mut id = 0;
    for (meal_type, base) in [
        (MealType::Breakfast, 250),
        (MealType::Lunch, 450),
        (MealType::Dinner, 380),
    ] {
        for step in 0..6 {
            id += 1;
            recipes.push(recipe(
                id,
                meal_type,
                base + step * 40,
                10 + step * 6,
                8 + step * 3,
                20 + step * 10,
            ));
        }
    }

    recipes.push(recipe(100, MealType::Snack, 200, 90, 90, 0));

    recipes
}
