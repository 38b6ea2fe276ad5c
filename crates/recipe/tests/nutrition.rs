use dietplan_recipe::{
    Catalog, Ingredient, Macros, MealType, Recipe, RecipeIngredient, compute_nutrition,
};
use rust_decimal::Decimal;

mod helpers;

fn ingredient(name: &str, calories: Decimal) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        calories,
        proteins: calories / Decimal::TEN,
        fats: calories / Decimal::ONE_HUNDRED,
        carbs: Decimal::new(7, 1),
    }
}

fn recipe(servings: u32, lines: Vec<(Ingredient, u32)>) -> Recipe {
    Recipe {
        id: 7,
        name: "Stew".to_owned(),
        description: String::new(),
        instructions: String::new(),
        cooking_time: 60,
        servings,
        meal_type: MealType::Dinner,
        ingredients: lines
            .into_iter()
            .map(|(ingredient, weight_grams)| RecipeIngredient {
                ingredient,
                weight_grams,
                amount: None,
                unit: None,
            })
            .collect(),
        diets: vec![],
        is_real: true,
        image: None,
    }
}

fn stew_lines() -> Vec<(Ingredient, u32)> {
    vec![
        (ingredient("Beef", Decimal::new(25013, 2)), 333),
        (ingredient("Carrot", Decimal::new(4107, 2)), 17),
        (ingredient("Potato", Decimal::new(7701, 2)), 251),
        (ingredient("Onion", Decimal::new(3999, 2)), 3),
    ]
}

#[test]
fn test_total_calories_is_the_exact_sum_of_lines() {
    let stew = recipe(3, stew_lines());

    let expected = stew_lines()
        .iter()
        .map(|(i, w)| i.calories * Decimal::from(*w) / Decimal::ONE_HUNDRED)
        .sum::<Decimal>();

    let profile = compute_nutrition(&stew);
    assert!((profile.total_calories - expected).abs() <= Decimal::new(1, 2));
}

#[test]
fn test_line_order_does_not_change_the_result() {
    let forward = compute_nutrition(&recipe(3, stew_lines()));

    let mut reversed_lines = stew_lines();
    reversed_lines.reverse();
    let reversed = compute_nutrition(&recipe(3, reversed_lines));

    assert_eq!(forward, reversed);
}

#[test]
fn test_scaling_weights_scales_totals() {
    let base = compute_nutrition(&recipe(2, stew_lines()));

    let tripled = stew_lines()
        .into_iter()
        .map(|(i, w)| (i, w * 3))
        .collect::<Vec<_>>();
    let scaled = compute_nutrition(&recipe(2, tripled.clone()));

    assert!(
        (scaled.total_calories - base.total_calories * Decimal::from(3u32)).abs()
            <= Decimal::new(3, 2)
    );

    // Same portion size when the yield grows with the weights.
    let same_portion = compute_nutrition(&recipe(6, tripled));
    assert_eq!(same_portion.per_serving(), base.per_serving());
}

#[test]
fn test_zero_servings_never_divides() {
    for lines in [vec![], stew_lines()] {
        let profile = compute_nutrition(&recipe(0, lines));
        assert_eq!(profile.per_serving(), Macros::default());
    }
}

#[test]
fn test_sample_catalog_nutrition() -> anyhow::Result<()> {
    let catalog = Catalog::from_json(&helpers::sample_catalog().to_string())?;

    let eggs = catalog.recipe(1)?.nutrition();
    assert_eq!(eggs.total_calories, Decimal::new(310, 0));
    assert_eq!(eggs.calories_per_serving, Decimal::new(155, 0));
    assert_eq!(eggs.proteins_per_serving, Decimal::new(13, 0));
    assert_eq!(eggs.carbs_per_serving, Decimal::new(11, 1));

    let lunch = catalog.recipe(3)?.nutrition();
    // 300g chicken (495 kcal) + 250g rice (325 kcal), two servings
    assert_eq!(lunch.total_calories, Decimal::new(820, 0));
    assert_eq!(lunch.calories_per_serving, Decimal::new(410, 0));
    assert_eq!(lunch.proteins_per_serving, Decimal::new(4988, 2));

    Ok(())
}
