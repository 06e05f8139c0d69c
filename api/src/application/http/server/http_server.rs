use std::sync::Arc;

use crate::application::http::health::health_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method};
use recipe_wizard_core::{
    application::create_service,
    domain::{common::RecipeWizardConfig, recipe::ports::LLMClient},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = RecipeWizardConfig::from(args.as_ref().clone());
    let service = create_service(config).context("failed to configure the LLM client")?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    // Credentials cannot be combined with a wildcard origin or wildcard headers
    if allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(cors.allow_origin(Any).allow_headers(Any));
    }

    let allowed_origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin: {origin}"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(cors
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

///  Returns the [`Router`] of this application.
pub fn router<LLM>(state: AppState<LLM>) -> Result<Router, anyhow::Error>
where
    LLM: LLMClient + 'static,
{
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path))
        .fallback(not_found)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_accepts_listed_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://recipes.example.com".to_string(),
        ];

        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_cors_accepts_wildcard() {
        assert!(cors_layer(&["*".to_string()]).is_ok());
    }

    #[test]
    fn test_cors_rejects_invalid_origin() {
        assert!(cors_layer(&["http://bad\norigin".to_string()]).is_err());
    }
}
