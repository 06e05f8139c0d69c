use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, REDACTED, entities::app_errors::CoreError},
    recipe::{ports::LLMClient, schema::get_recipe_recommendation_schema},
};

#[derive(Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    json_mode: bool,
    client: Client,
}

impl fmt::Debug for GeminiLLMClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiLLMClient")
            .field("api_key", &REDACTED)
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("json_mode", &self.json_mode)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: crate::domain::common::DEFAULT_GEMINI_BASE_URL.to_string(),
            json_mode: false,
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        )
    }

    fn build_request(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: self.json_mode.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: get_recipe_recommendation_schema(),
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the URL, which holds the key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        extract_text(gemini_response)
    }
}

impl TryFrom<LLMConfig> for GeminiLLMClient {
    type Error = CoreError;

    fn try_from(config: LLMConfig) -> Result<Self, Self::Error> {
        if config.gemini_api_key.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "GOOGLE_API_KEY environment variable not set".to_string(),
            ));
        }

        if config.gemini_model.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "Gemini model name must not be empty".to_string(),
            ));
        }

        Ok(GeminiLLMClient::new(config.gemini_api_key, config.gemini_model)
            .with_base_url(config.gemini_base_url)
            .with_json_mode(config.json_mode))
    }
}

/// Join the text parts of the first candidate.
fn extract_text(response: GeminiResponse) -> Result<String, CoreError> {
    if response.candidates.is_empty()
        && let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason)
    {
        tracing::error!("Gemini blocked the prompt: {}", reason);
        return Err(CoreError::ExternalServiceError(format!(
            "Prompt blocked by LLM: {}",
            reason
        )));
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(CoreError::ExternalServiceError(
            "No response from LLM".to_string(),
        ));
    }

    Ok(text)
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        tracing::debug!(model = %self.model_name, "Calling Gemini");

        let request = self.build_request(prompt);

        self.call_gemini_api(request).await
    }
}
