use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        parser::parse_model_output,
        ports::{LLMClient, RecipeService},
        prompt::build_recommendation_prompt,
        value_objects::RecommendRecipesInput,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn recommend_recipes(
        &self,
        input: RecommendRecipesInput,
    ) -> Result<serde_json::Value, CoreError> {
        // 1. Build prompt
        let prompt = build_recommendation_prompt(&input);

        // 2. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_text(prompt)
            .await
            .inspect_err(|e| tracing::error!("Recipe recommendation failed: {}", e))?;

        // 3. Parse response
        let recommendations = parse_model_output(&raw_response)?;

        tracing::debug!(
            count = recommendations.as_array().map(Vec::len),
            "Recipe recommendations generated"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;
    use serde_json::json;

    use super::*;
    use crate::domain::recipe::{entities::RecipeRecommendation, ports::MockLLMClient};

    fn service_replying(reply: &'static str) -> Service<MockLLMClient> {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(reply.to_string()) }));
        Service::new(llm)
    }

    #[tokio::test]
    async fn test_prompt_sent_to_llm_contains_inputs() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .with(function(|prompt: &String| {
                prompt.contains("Dietary Restrictions: vegan")
                    && prompt.contains("Available Ingredients: rice, beans")
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok("[]".to_string()) }));

        let service = Service::new(llm);
        let result = service
            .recommend_recipes(RecommendRecipesInput {
                dietary_restrictions: Some(vec!["vegan".to_string()]),
                available_ingredients: Some(vec!["rice".to_string(), "beans".to_string()]),
            })
            .await
            .unwrap();

        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_unconstrained_prompt_sent_to_llm() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .with(function(|prompt: &String| {
                prompt.contains("Dietary Restrictions: None")
                    && prompt.contains("Available Ingredients: None")
            }))
            .times(1)
            .returning(|_| Box::pin(async { Ok("[]".to_string()) }));

        let service = Service::new(llm);
        let result = service
            .recommend_recipes(RecommendRecipesInput::default())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fenced_reply_is_unwrapped() {
        let service = service_replying("```json\n[{\"recipe_name\":\"X\"}]\n```");

        let result = service
            .recommend_recipes(RecommendRecipesInput::default())
            .await
            .unwrap();

        assert_eq!(result, json!([{ "recipe_name": "X" }]));
    }

    #[tokio::test]
    async fn test_full_recipe_reply_round_trips_to_entities() {
        let service = service_replying(
            r#"[{
                "recipe_name": "Rice and Beans",
                "description": "Simple and filling",
                "ingredients": ["Rice (Provided)", "Beans (Provided)", "Onion"],
                "instructions": "Cook rice. Warm beans. Combine.",
                "substitutions_and_tips": "Use lentils instead of beans."
            }]"#,
        );

        let result = service
            .recommend_recipes(RecommendRecipesInput::default())
            .await
            .unwrap();
        let recipes: Vec<RecipeRecommendation> = serde_json::from_value(result).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].recipe_name, "Rice and Beans");
        assert_eq!(recipes[0].ingredients[0], "Rice (Provided)");
    }

    #[tokio::test]
    async fn test_invalid_reply_is_rejected() {
        let service = service_replying("not json");

        let result = service
            .recommend_recipes(RecommendRecipesInput::default())
            .await;

        assert_eq!(result, Err(CoreError::InvalidModelOutput));
    }

    #[tokio::test]
    async fn test_llm_error_is_propagated() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "quota exceeded".to_string(),
                ))
            })
        });

        let service = Service::new(llm);
        let result = service
            .recommend_recipes(RecommendRecipesInput::default())
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError(
                "quota exceeded".to_string()
            ))
        );
    }
}
