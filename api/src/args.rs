use std::fmt;

use clap::{Args as ClapArgs, Parser};
use recipe_wizard_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, REDACTED, RecipeWizardConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-wizard-api", version, about = "Recipe Wizard API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma-separated list of origins allowed by CORS, `*` for any
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Constrain Gemini to JSON output matching the recipe schema
    #[arg(long, env = "GEMINI_JSON_MODE")]
    pub gemini_json_mode: bool,
}

impl fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmArgs")
            .field("google_api_key", &REDACTED)
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_json_mode", &self.gemini_json_mode)
            .finish()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl From<Args> for RecipeWizardConfig {
    fn from(args: Args) -> Self {
        RecipeWizardConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.google_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                json_mode: args.llm.gemini_json_mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args =
            Args::try_parse_from(["recipe-wizard-api", "--google-api-key", "key"]).unwrap();

        assert_eq!(args.server.port, 8000);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.llm.gemini_model, "gemini-2.0-flash");
        assert!(!args.llm.gemini_json_mode);
    }

    #[test]
    fn test_allowed_origins_are_split() {
        let args = Args::try_parse_from([
            "recipe-wizard-api",
            "--google-api-key",
            "key",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from([
            "recipe-wizard-api",
            "--google-api-key",
            "key",
            "--gemini-model",
            "gemini-1.5-pro",
            "--gemini-json-mode",
        ])
        .unwrap();

        let config = RecipeWizardConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "key");
        assert_eq!(config.llm.gemini_model, "gemini-1.5-pro");
        assert!(config.llm.json_mode);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let args =
            Args::try_parse_from(["recipe-wizard-api", "--google-api-key", "secret-key"]).unwrap();

        let debug = format!("{:?}", args);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("gemini-2.0-flash"));
    }
}
