use std::sync::Arc;

use recipe_wizard_core::{
    domain::{common::services::Service, recipe::ports::LLMClient},
    infrastructure::llm::GeminiLLMClient,
};

use crate::args::Args;

pub struct AppState<LLM = GeminiLLMClient>
where
    LLM: LLMClient,
{
    pub args: Arc<Args>,
    pub service: Service<LLM>,
}

impl<LLM> AppState<LLM>
where
    LLM: LLMClient,
{
    pub fn new(args: Arc<Args>, service: Service<LLM>) -> Self {
        Self { args, service }
    }
}

impl<LLM> Clone for AppState<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            args: Arc::clone(&self.args),
            service: self.service.clone(),
        }
    }
}
