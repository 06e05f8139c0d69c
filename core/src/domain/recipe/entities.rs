use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shape the model is asked to produce for each recipe.
///
/// Replies are not validated against this type; it documents the expected
/// layout and backs the Gemini response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRecommendation {
    #[schema(example = "Black Bean Rice Bowl")]
    pub recipe_name: String,
    pub description: String,
    /// Ingredients taken from the caller's list carry a ` (Provided)` suffix
    #[schema(example = json!(["Rice (Provided)", "Black beans (Provided)", "Lime"]))]
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub substitutions_and_tips: String,
}
