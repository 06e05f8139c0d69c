use crate::application::http::{health::HealthApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Wizard API",
        description = "Personalized recipe recommendations from dietary restrictions and available ingredients"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
