use serde_json::{Value, json};

pub fn sample_catalog() -> Value {
    json!({
        "ingredients": [
            { "name": "Egg", "calories": 155, "proteins": 13, "fats": 11, "carbs": "1.1" },
            { "name": "Oats", "calories": 389, "proteins": "16.9", "fats": "6.9", "carbs": "66.3" },
            { "name": "Chicken", "calories": 165, "proteins": 31, "fats": "3.6", "carbs": 0 },
            { "name": "Rice", "calories": 130, "proteins": "2.7", "fats": "0.3", "carbs": 28 },
            { "name": "Salmon", "calories": 208, "proteins": 20, "fats": 13, "carbs": 0 },
            { "name": "Apple", "calories": 52, "proteins": "0.3", "fats": "0.2", "carbs": 14 }
        ],
        "diets": [
            {
                "name": "Balanced",
                "default_calories": 2000,
                "proteins_per_1000": 40,
                "fats_per_1000": 30,
                "carbs_per_1000": 100,
                "carbs_constraint": "AT_LEAST"
            },
            {
                "name": "Keto",
                "description": "Very low carbohydrate",
                "default_calories": 1800,
                "proteins_per_1000": 50,
                "fats_per_1000": 75,
                "carbs_per_1000": 15,
                "carbs_constraint": "AT_MOST"
            }
        ],
        "recipes": [
            {
                "id": 1,
                "name": "Scrambled eggs",
                "description": "Soft eggs",
                "cooking_time": 10,
                "servings": 2,
                "meal_type": "BREAKFAST",
                "ingredients": [
                    { "ingredient": "Egg", "weight_grams": 200, "amount": "4", "unit": "pieces" }
                ],
                "diets": ["Balanced", "Keto"]
            },
            {
                "id": 2,
                "name": "Porridge",
                "description": "Oats cooked slowly",
                "cooking_time": 15,
                "meal_type": "BREAKFAST",
                "ingredients": [
                    { "ingredient": "Oats", "weight_grams": 80 },
                    { "ingredient": "Apple", "weight_grams": 100, "amount": "1", "unit": "piece" }
                ],
                "diets": ["Balanced"]
            },
            {
                "id": 3,
                "name": "Chicken and rice",
                "description": "Lunch box classic",
                "cooking_time": 40,
                "servings": 2,
                "meal_type": "LUNCH",
                "ingredients": [
                    { "ingredient": "Chicken", "weight_grams": 300 },
                    { "ingredient": "Rice", "weight_grams": 250 }
                ],
                "diets": ["Balanced"]
            },
            {
                "id": 4,
                "name": "Baked salmon",
                "description": "Oven salmon fillet",
                "cooking_time": 25,
                "meal_type": "DINNER",
                "ingredients": [
                    { "ingredient": "Salmon", "weight_grams": 200 }
                ],
                "diets": ["Balanced", "Keto"]
            },
            {
                "id": 5,
                "name": "Apple",
                "cooking_time": 1,
                "meal_type": "SNACK",
                "ingredients": [
                    { "ingredient": "Apple", "weight_grams": 150 }
                ],
                "diets": ["Balanced"],
                "is_real": false
            }
        ]
    })
}
