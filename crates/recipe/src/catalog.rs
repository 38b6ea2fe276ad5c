use std::collections::{HashMap, HashSet};
use std::path::Path;

use dietplan_shared::recipe::MealType;
use serde::Deserialize;
use validator::Validate;

use crate::types::{Diet, Ingredient, Recipe, RecipeIngredient, max_reference_value};

/// On-disk layout of a catalog. Lines reference ingredients by name and
/// recipes reference diets by name.
#[derive(Validate, Deserialize, Default)]
pub struct CatalogFile {
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[validate(nested)]
    #[serde(default)]
    pub diets: Vec<Diet>,
    #[validate(nested)]
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}

#[derive(Validate, Deserialize, Clone)]
pub struct RecipeEntry {
    pub id: u32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[validate(range(min = 1))]
    pub cooking_time: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub meal_type: MealType,
    #[serde(default)]
    pub ingredients: Vec<IngredientLineEntry>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default = "default_is_real")]
    pub is_real: bool,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct IngredientLineEntry {
    pub ingredient: String,
    pub weight_grams: u32,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

fn default_servings() -> u32 {
    1
}

fn default_is_real() -> bool {
    true
}

#[derive(Debug, Default, Clone)]
pub struct RecipeFilter {
    pub meal_type: Option<MealType>,
    pub diet: Option<String>,
    /// Case-insensitive match against name and description.
    pub search: Option<String>,
    pub max_cooking_time: Option<u32>,
}

impl RecipeFilter {
    fn matches(&self, recipe: &Recipe) -> bool {
        if self.meal_type.is_some_and(|t| t != recipe.meal_type) {
            return false;
        }

        if self.diet.as_deref().is_some_and(|d| !recipe.suits(d)) {
            return false;
        }

        if self.max_cooking_time.is_some_and(|m| recipe.cooking_time > m) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                recipe.name.to_lowercase().contains(&q)
                    || recipe.description.to_lowercase().contains(&q)
            }
            _ => true,
        }
    }
}

/// Read-only recipe catalog with every reference resolved.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    diets: Vec<Diet>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> dietplan_shared::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            ingredients = catalog.ingredients.len(),
            diets = catalog.diets.len(),
            recipes = catalog.recipes.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json(content: &str) -> dietplan_shared::Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;

        Self::try_from(file)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn diets(&self) -> &[Diet] {
        &self.diets
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn diet(&self, name: &str) -> dietplan_shared::Result<&Diet> {
        match self.diets.iter().find(|d| d.name.eq_ignore_ascii_case(name)) {
            Some(diet) => Ok(diet),
            None => dietplan_shared::not_found!("diet '{}'", name),
        }
    }

    pub fn recipe(&self, id: u32) -> dietplan_shared::Result<&Recipe> {
        match self.recipes.iter().find(|r| r.id == id) {
            Some(recipe) => Ok(recipe),
            None => dietplan_shared::not_found!("recipe {}", id),
        }
    }

    /// Every recipe tagged with the diet, placeholders included.
    pub fn recipes_for_diet(&self, diet: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.suits(diet)).collect()
    }

    /// Browsing listing: real recipes only, ordered by name.
    pub fn list(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        let mut recipes = self
            .recipes
            .iter()
            .filter(|r| r.is_real && filter.matches(r))
            .collect::<Vec<_>>();

        recipes.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        recipes
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = dietplan_shared::Error;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        file.validate()?;

        let mut ingredients = HashMap::new();
        for ingredient in file.ingredients.iter() {
            if ingredient.has_value_out_of_range() {
                dietplan_shared::user!(
                    "ingredient '{}' has a nutrition value outside 0..={}",
                    ingredient.name,
                    max_reference_value()
                );
            }

            if ingredients
                .insert(ingredient.name.as_str(), ingredient)
                .is_some()
            {
                dietplan_shared::user!("duplicate ingredient '{}'", ingredient.name);
            }
        }

        let mut diet_names = HashSet::new();
        for diet in file.diets.iter() {
            if diet.has_value_out_of_range() {
                dietplan_shared::user!(
                    "diet '{}' has a coefficient outside 0..={}",
                    diet.name,
                    max_reference_value()
                );
            }

            if !diet_names.insert(diet.name.as_str()) {
                dietplan_shared::user!("duplicate diet '{}'", diet.name);
            }
        }

        let mut recipe_ids = HashSet::new();
        let mut recipes = Vec::with_capacity(file.recipes.len());
        for entry in file.recipes.iter() {
            if !recipe_ids.insert(entry.id) {
                dietplan_shared::user!("duplicate recipe id {}", entry.id);
            }

            let mut lines = Vec::with_capacity(entry.ingredients.len());
            let mut used = HashSet::new();
            for line in entry.ingredients.iter() {
                let Some(ingredient) = ingredients.get(line.ingredient.as_str()) else {
                    dietplan_shared::user!(
                        "recipe '{}' uses unknown ingredient '{}'",
                        entry.name,
                        line.ingredient
                    );
                };

                if !used.insert(line.ingredient.as_str()) {
                    dietplan_shared::user!(
                        "recipe '{}' lists ingredient '{}' more than once",
                        entry.name,
                        line.ingredient
                    );
                }

                lines.push(RecipeIngredient {
                    ingredient: (*ingredient).clone(),
                    weight_grams: line.weight_grams,
                    amount: line.amount.clone(),
                    unit: line.unit.clone(),
                });
            }

            if let Some(diet) = entry
                .diets
                .iter()
                .find(|d| !diet_names.contains(d.as_str()))
            {
                dietplan_shared::user!(
                    "recipe '{}' references unknown diet '{}'",
                    entry.name,
                    diet
                );
            }

            recipes.push(Recipe {
                id: entry.id,
                name: entry.name.to_owned(),
                description: entry.description.to_owned(),
                instructions: entry.instructions.to_owned(),
                cooking_time: entry.cooking_time,
                servings: entry.servings,
                meal_type: entry.meal_type,
                ingredients: lines,
                diets: entry.diets.to_vec(),
                is_real: entry.is_real,
                image: entry.image.to_owned(),
            });
        }

        Ok(Catalog {
            ingredients: file.ingredients,
            diets: file.diets,
            recipes,
        })
    }
}
