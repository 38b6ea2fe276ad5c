use clap::Args;
use dietplan_recipe::{Catalog, MealType, RecipeFilter};

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// BREAKFAST, LUNCH, DINNER or SNACK
    #[arg(long)]
    pub meal_type: Option<MealType>,

    #[arg(long)]
    pub diet: Option<String>,

    /// Matches recipe names and descriptions
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum cooking time in minutes
    #[arg(long)]
    pub max_time: Option<u32>,
}

impl From<&ListArgs> for RecipeFilter {
    fn from(value: &ListArgs) -> Self {
        RecipeFilter {
            meal_type: value.meal_type,
            diet: value.diet.to_owned(),
            search: value.search.to_owned(),
            max_cooking_time: value.max_time,
        }
    }
}

pub fn list(catalog: &Catalog, args: &ListArgs) -> String {
    let recipes = catalog.list(&args.into());

    if recipes.is_empty() {
        return "No recipes found.".to_owned();
    }

    recipes
        .iter()
        .map(|r| {
            format!(
                "{:>4}  {:<28} {:<10} {:>4} min",
                r.id,
                r.name,
                r.meal_type.to_string(),
                r.cooking_time
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show(catalog: &Catalog, id: u32) -> anyhow::Result<String> {
    let recipe = catalog.recipe(id)?;
    let nutrition = recipe.nutrition();

    let mut lines = vec![
        recipe.name.to_owned(),
        format!(
            "{} | {} min | {} servings",
            recipe.meal_type, recipe.cooking_time, recipe.servings
        ),
    ];

    if !recipe.diets.is_empty() {
        lines.push(format!("Diets: {}", recipe.diets.join(", ")));
    }

    if !recipe.description.is_empty() {
        lines.push(String::new());
        lines.push(recipe.description.to_owned());
    }

    lines.push(String::new());
    lines.push("Ingredients:".to_owned());
    for line in recipe.ingredients.iter() {
        lines.push(format!("  - {}: {}", line.ingredient.name, line.display_amount()));
    }

    lines.push(String::new());
    lines.push(format!("Total: {} kcal", nutrition.total_calories));
    lines.push(format!(
        "Per serving: {} kcal, proteins {} g, fats {} g, carbs {} g",
        nutrition.calories_per_serving,
        nutrition.proteins_per_serving,
        nutrition.fats_per_serving,
        nutrition.carbs_per_serving
    ));

    if !recipe.instructions.is_empty() {
        lines.push(String::new());
        lines.push(recipe.instructions.to_owned());
    }

    Ok(lines.join("\n"))
}

pub fn diets(catalog: &Catalog) -> String {
    catalog
        .diets()
        .iter()
        .map(|d| {
            format!(
                "{:<16} {:>5} kcal  carbs {}",
                d.name,
                d.default_calories,
                d.carbs_constraint.as_ref()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
