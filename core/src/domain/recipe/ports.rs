use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, recipe::value_objects::RecommendRecipesInput,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe recommendation business logic
pub trait RecipeService: Send + Sync {
    /// Returns whatever JSON the model produced for the rendered prompt.
    fn recommend_recipes(
        &self,
        input: RecommendRecipesInput,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
