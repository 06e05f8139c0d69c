use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendRecipesRequest {
    #[serde(default)]
    #[schema(example = json!(["vegan"]))]
    pub dietary_restrictions: Option<Vec<String>>,

    #[serde(default)]
    #[schema(example = json!(["rice", "beans"]))]
    pub available_ingredients: Option<Vec<String>>,
}
