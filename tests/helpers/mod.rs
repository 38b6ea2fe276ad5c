#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{Value, json};
use temp_dir::TempDir;

/// One recipe per slot at 300/500/400 kcal, so every trial picks the same
/// triple and lands exactly on 1200 kcal.
pub fn catalog_json() -> Value {
    json!({
        "ingredients": [
            { "name": "Breakfast mix", "calories": 300, "proteins": 20, "fats": 10, "carbs": 40 },
            { "name": "Lunch mix", "calories": 500, "proteins": 30, "fats": 20, "carbs": 50 },
            { "name": "Dinner mix", "calories": 400, "proteins": 25, "fats": 15, "carbs": 30 }
        ],
        "diets": [
            {
                "name": "Simple",
                "default_calories": 1200,
                "proteins_per_1000": 40,
                "fats_per_1000": 30,
                "carbs_per_1000": 80,
                "carbs_constraint": "AT_LEAST"
            },
            {
                "name": "Strict",
                "default_calories": 1200,
                "proteins_per_1000": 100,
                "fats_per_1000": 30,
                "carbs_per_1000": 80,
                "carbs_constraint": "AT_LEAST"
            }
        ],
        "recipes": [
            {
                "id": 1,
                "name": "Breakfast plate",
                "description": "Morning classic",
                "cooking_time": 10,
                "meal_type": "BREAKFAST",
                "ingredients": [{ "ingredient": "Breakfast mix", "weight_grams": 100 }],
                "diets": ["Simple", "Strict"]
            },
            {
                "id": 2,
                "name": "Lunch plate",
                "description": "Midday classic",
                "cooking_time": 20,
                "meal_type": "LUNCH",
                "ingredients": [{ "ingredient": "Lunch mix", "weight_grams": 100 }],
                "diets": ["Simple", "Strict"]
            },
            {
                "id": 3,
                "name": "Dinner plate",
                "description": "Evening classic",
                "cooking_time": 45,
                "meal_type": "DINNER",
                "ingredients": [
                    {
                        "ingredient": "Dinner mix",
                        "weight_grams": 100,
                        "amount": "1",
                        "unit": "bowl"
                    }
                ],
                "diets": ["Simple", "Strict"]
            }
        ]
    })
}

/// Writes `content` into a fresh temp dir; keep the dir alive while the
/// file is used.
pub fn write_temp(name: &str, content: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.child(name);
    std::fs::write(&path, content)?;

    Ok((dir, path))
}
