#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendRecipesInput {
    pub dietary_restrictions: Option<Vec<String>>,
    pub available_ingredients: Option<Vec<String>>,
}
