use crate::{
    domain::common::{RecipeWizardConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type RecipeWizardService = Service<GeminiLLMClient>;

pub fn create_service(config: RecipeWizardConfig) -> Result<RecipeWizardService, CoreError> {
    let llm_client = GeminiLLMClient::try_from(config.llm)?;

    Ok(Service::new(llm_client))
}

impl RecipeWizardService {
    pub fn llm_model(&self) -> &str {
        self.llm_client.model_name()
    }
}
