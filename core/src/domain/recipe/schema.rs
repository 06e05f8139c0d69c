use serde_json::json;

use crate::domain::recipe::prompt::MAX_RECIPES;

/// Returns the JSON schema for recipe recommendation LLM responses
pub fn get_recipe_recommendation_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "maxItems": MAX_RECIPES,
        "items": {
            "type": "object",
            "properties": {
                "recipe_name": { "type": "string" },
                "description": { "type": "string" },
                "ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "instructions": { "type": "string" },
                "substitutions_and_tips": { "type": "string" }
            },
            "required": [
                "recipe_name", "description", "ingredients",
                "instructions", "substitutions_and_tips"
            ]
        }
    })
}
