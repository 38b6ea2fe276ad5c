use clap::Args;
use dietplan_mealplan::{MealPlan, PlanOutcome};
use dietplan_recipe::{Catalog, Macros};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::json;

use crate::config::PlannerConfig;

#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Diet whose recipes and coefficients drive the plan
    #[arg(long)]
    pub diet: String,

    /// Daily calorie target (defaults to the diet's own)
    #[arg(long)]
    pub calories: Option<u32>,

    /// Seed for a reproducible plan (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[tracing::instrument(skip(planner, catalog))]
pub fn run(planner: &PlannerConfig, catalog: &Catalog, args: &PlanArgs) -> anyhow::Result<String> {
    let diet = catalog.diet(&args.diet)?;
    let target_calories = args.calories.unwrap_or(diet.default_calories);
    let targets = diet.targets(target_calories)?;

    let mut rng = match args.seed.or(planner.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let outcome = planner.planner().plan(
        catalog.recipes_for_diet(&diet.name),
        target_calories,
        &targets,
        &mut rng,
    )?;

    if !outcome.is_found() {
        tracing::info!(diet = %diet.name, target_calories, reason = %outcome, "no meal plan");
    }

    if args.json {
        let body = json!({
            "diet": diet.name,
            "target_calories": target_calories,
            "targets": targets,
            "plan": outcome.plan(),
            "reason": (!outcome.is_found()).then(|| outcome.to_string()),
        });

        return Ok(serde_json::to_string_pretty(&body)?);
    }

    Ok(match &outcome {
        PlanOutcome::Found(plan) => render(&diet.name, plan),
        _ => format!("Could not build a meal plan: {outcome}."),
    })
}

fn macros_line(macros: &Macros) -> String {
    format!(
        "{:>8} kcal  P {:>7}  F {:>7}  C {:>7}",
        macros.calories.round_dp(2).to_string(),
        macros.proteins.round_dp(2).to_string(),
        macros.fats.round_dp(2).to_string(),
        macros.carbs.round_dp(2).to_string()
    )
}

pub fn render(diet: &str, plan: &MealPlan) -> String {
    let mut lines = vec![format!("{diet}, {} kcal target", plan.target_calories)];

    for meal in plan.meals.iter() {
        lines.push(format!(
            "{:<10} {:<28} x{}  {}",
            meal.slot.to_string(),
            meal.recipe.name,
            meal.servings,
            macros_line(&meal.nutrition)
        ));
    }

    lines.push(format!("{:<10} {:<28}     {}", "total", "", macros_line(&plan.totals)));

    lines.join("\n")
}
