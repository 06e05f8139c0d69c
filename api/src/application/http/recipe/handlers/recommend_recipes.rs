use axum::extract::State;
use recipe_wizard_core::domain::recipe::{
    entities::RecipeRecommendation,
    ports::{LLMClient, RecipeService},
    value_objects::RecommendRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::RecommendRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendRecipesResponse {
    /// JSON produced by the model, passed through without field checks
    #[schema(value_type = Vec<RecipeRecommendation>)]
    pub recommendations: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recipes",
    summary = "Recommend recipes",
    description = "Asks the LLM for up to 5 recipes matching the dietary restrictions and available ingredients",
    responses(
        (status = 200, body = RecommendRecipesResponse),
        (status = 422, body = ErrorResponse, description = "Malformed or invalid request body"),
        (status = 500, body = ErrorResponse, description = "LLM call failed or returned invalid JSON")
    ),
    request_body = RecommendRecipesRequest
)]
pub async fn recommend_recipes<LLM>(
    State(state): State<AppState<LLM>>,
    ValidateJson(payload): ValidateJson<RecommendRecipesRequest>,
) -> Result<Response<RecommendRecipesResponse>, ApiError>
where
    LLM: LLMClient + 'static,
{
    let recommendations = state
        .service
        .recommend_recipes(RecommendRecipesInput {
            dietary_restrictions: payload.dietary_restrictions,
            available_ingredients: payload.available_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendRecipesResponse { recommendations }))
}
