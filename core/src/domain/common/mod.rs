use std::fmt;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Printed in place of credentials by `Debug` impls
pub const REDACTED: &str = "[redacted]";

#[derive(Clone, Debug)]
pub struct RecipeWizardConfig {
    pub llm: LLMConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Ask Gemini for `application/json` output constrained by the recipe schema
    pub json_mode: bool,
}

impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field("gemini_api_key", &REDACTED)
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_debug_hides_api_key() {
        let config = LLMConfig {
            gemini_api_key: "secret-key".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            json_mode: false,
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains(REDACTED));
    }
}
